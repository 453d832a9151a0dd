//! Scanned document views

use std::collections::BTreeMap;

use graft_marker::Directive;

/// Everything derived from one scanned input document: the original lines,
/// the purged lines (imported payload removed, marker lines retained), and
/// the insertion-line → directive map used to splice imported content back
/// in. Owned by the caller; scanning never mutates external state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Name the document was scanned under; selects the syntax variant.
    pub file_name: String,
    /// Input lines, unmodified, in order.
    pub original: Vec<String>,
    /// Original lines minus everything enclosed by a marker pair.
    pub purged: Vec<String>,
    /// Directives keyed by the purged-view line after which their imported
    /// content belongs. Keys never collide within one document.
    pub directives: BTreeMap<usize, Directive>,
    /// Set when the skip sentinel appears anywhere in the document. Advises
    /// writers not to rewrite the file in place; scanning is unaffected.
    pub skip_update: bool,
}

impl Document {
    /// The original view as text, newline-terminated.
    pub fn original_text(&self) -> String {
        join_lines(&self.original)
    }

    /// The purged view as text, newline-terminated.
    pub fn purged_text(&self) -> String {
        join_lines(&self.purged)
    }
}

fn join_lines(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}
