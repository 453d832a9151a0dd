//! Selecting lines from a target document.

use graft_marker::Selection;
use graft_parse::Syntax;

use crate::error::{Error, Result};

/// Pick the selected lines out of a target document's lines.
///
/// `target_name` is the name the target was imported under; it selects the
/// comment syntax when the selection references an export region.
pub fn select_lines(
    target_name: &str,
    target_lines: &[String],
    selection: &Selection,
) -> Result<Vec<String>> {
    match selection {
        Selection::Lines(numbers) => Ok(numbers
            .iter()
            .filter(|&&number| number >= 1)
            .filter_map(|&number| target_lines.get(number - 1).cloned())
            .collect()),
        Selection::Range { from, to } => {
            let from = (*from).max(1);
            let to = to.unwrap_or(target_lines.len()).min(target_lines.len());
            if from > to {
                return Ok(Vec::new());
            }
            Ok(target_lines[from - 1..to].to_vec())
        }
        Selection::Export(region) => extract_export(target_name, target_lines, region),
    }
}

/// Extract the lines of a named export region, excluding the region's own
/// begin/end marker lines.
pub fn extract_export(
    target_name: &str,
    target_lines: &[String],
    region: &str,
) -> Result<Vec<String>> {
    let syntax = Syntax::for_file(target_name).ok_or_else(|| {
        graft_parse::Error::UnsupportedFormat {
            extension: std::path::Path::new(target_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or_default()
                .to_string(),
        }
    })?;
    let pattern = syntax.export_pattern();

    let mut lines = Vec::new();
    let mut inside = false;
    let mut found = false;

    for line in target_lines {
        if let Some(caps) = pattern.captures(line) {
            if &caps["export_name"] == region {
                inside = &caps["export_keyword"] == "begin";
                found = true;
                continue;
            }
        }
        if inside {
            lines.push(line.clone());
        }
    }

    if !found {
        return Err(Error::ExportNotFound {
            region: region.to_string(),
            file: target_name.to_string(),
        });
    }

    Ok(lines)
}
