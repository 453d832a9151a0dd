//! Indentation and presentation of imported lines.

use graft_marker::{Indentation, Style, Wrap};

/// Apply an indentation policy to imported lines. Blank lines stay blank
/// rather than picking up trailing whitespace.
pub fn apply_indentation(lines: Vec<String>, indentation: &Indentation) -> Vec<String> {
    match indentation {
        Indentation::Keep => lines,
        Indentation::Absolute(width) => reindent(lines, *width, true),
        Indentation::Extra(width) => reindent(lines, *width, false),
        Indentation::Align { marker_indentation } => reindent(lines, *marker_indentation, false),
    }
}

fn reindent(lines: Vec<String>, width: usize, replace: bool) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            if line.trim().is_empty() {
                return String::new();
            }
            let rest = if replace { line.trim_start() } else { &line };
            format!("{}{}", " ".repeat(width), rest)
        })
        .collect()
}

/// Apply the presentation facets: blockquote style and fenced-block
/// wrapping. Wrapping surrounds the payload after any quoting.
pub fn apply_presentation(
    lines: Vec<String>,
    style: Option<&Style>,
    wrap: Option<&Wrap>,
) -> Vec<String> {
    let mut lines = match style {
        Some(Style::Quote) => lines
            .into_iter()
            .map(|line| {
                if line.is_empty() {
                    ">".to_string()
                } else {
                    format!("> {line}")
                }
            })
            .collect(),
        None => lines,
    };

    if let Some(wrap) = wrap {
        let fence_open = match &wrap.lang {
            Some(lang) => format!("```{lang}"),
            None => "```".to_string(),
        };
        lines.insert(0, fence_open);
        lines.push("```".to_string());
    }

    lines
}
