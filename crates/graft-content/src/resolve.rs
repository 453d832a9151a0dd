//! Assembling the processed document view.

use graft_marker::{Directive, Target};
use graft_parse::Document;
use similar::TextDiff;

use crate::error::Result;
use crate::render::{apply_indentation, apply_presentation};
use crate::select::select_lines;
use crate::source::ContentSource;

/// Resolve every directive in a scanned document and return the processed
/// view: the purged lines with each directive's imported payload spliced in
/// right after its begin marker line.
pub fn resolve(document: &Document, source: &dyn ContentSource) -> Result<Vec<String>> {
    let mut processed = Vec::with_capacity(document.purged.len());

    for (index, line) in document.purged.iter().enumerate() {
        processed.push(line.clone());
        if let Some(directive) = document.directives.get(&(index + 1)) {
            processed.extend(resolve_directive(directive, source)?);
        }
    }

    Ok(processed)
}

/// Resolve one directive: fetch the target, select lines, apply indentation
/// and presentation.
pub fn resolve_directive(
    directive: &Directive,
    source: &dyn ContentSource,
) -> Result<Vec<String>> {
    tracing::debug!(marker = %directive.name, target = ?directive.target, "resolving directive");

    let content = source.fetch(&directive.target)?;
    let target_name = match &directive.target {
        Target::Path(path) => path.clone(),
        Target::Url(url) => url.path().to_string(),
    };
    let target_lines: Vec<String> = content.lines().map(str::to_string).collect();

    let mut payload = select_lines(&target_name, &target_lines, &directive.selection)?;
    if let Some(indentation) = &directive.indentation {
        payload = apply_indentation(payload, indentation);
    }
    payload = apply_presentation(payload, directive.style.as_ref(), directive.wrap.as_ref());

    Ok(payload)
}

/// Processed view as text, newline-terminated.
pub fn to_text(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

/// Unified line diff between the original document text and the processed
/// text, for preview output.
pub fn diff_text(original: &str, processed: &str) -> String {
    TextDiff::from_lines(original, processed)
        .unified_diff()
        .context_radius(3)
        .header("original", "processed")
        .to_string()
}
