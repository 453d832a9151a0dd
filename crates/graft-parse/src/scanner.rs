//! Line-oriented marker scanning.

use std::collections::BTreeMap;
use std::path::Path;

use graft_marker::{Directive, RawMarker};

use crate::document::Document;
use crate::error::{Error, Result};
use crate::syntax::Syntax;

/// Scan a document for marker pairs.
///
/// Walks the input once, line by line, building the original and purged
/// views and accumulating one [`RawMarker`] per marker name. After the walk,
/// every accumulator is validated and parsed into a [`Directive`];
/// per-directive failures are collected across the whole document and
/// returned together, while structural failures (unsupported suffix, empty
/// input, a marker name paired twice) abort immediately.
///
/// The file name is used only to select the marker syntax variant.
pub fn scan(file_name: &str, source: &str) -> Result<Document> {
    let Some(syntax) = Syntax::for_file(file_name) else {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        return Err(Error::UnsupportedFormat {
            extension: extension.to_string(),
        });
    };
    if source.is_empty() {
        return Err(Error::NoInput);
    }

    tracing::debug!(file = %file_name, syntax = ?syntax, "scanning document");

    let mut original: Vec<String> = Vec::new();
    let mut purged: Vec<String> = Vec::new();
    let mut skip_update = false;

    // Accumulators in first-seen order, so aggregated errors come out
    // deterministically.
    let mut raw_markers: Vec<RawMarker> = Vec::new();
    // Name of the marker pair currently open. Only one level of foreign
    // nesting is ever deferred, so a single owner field is enough.
    let mut nested_under: Option<String> = None;

    for line in source.lines() {
        original.push(line.to_string());

        if line.contains(syntax.skip_sentinel()) {
            tracing::debug!(file = %file_name, "skip sentinel found, in-place update disabled");
            skip_update = true;
        }

        let Some(caps) = syntax.marker_pattern().captures(line) else {
            // Lines inside an open pair are previously imported payload and
            // drop out of the purged view.
            if nested_under.is_none() {
                purged.push(line.to_string());
            }
            continue;
        };

        let name = caps["marker_name"].to_string();

        // A marker belonging to some other name inside an open pair is left
        // for that target document's own scan.
        if let Some(owner) = &nested_under {
            if *owner != name {
                tracing::debug!(marker = %name, owner = %owner, "deferring nested marker");
                continue;
            }
        }

        // Marker lines themselves always stay in the purged view.
        purged.push(line.to_string());

        let index = match raw_markers.iter().position(|raw| raw.name == name) {
            Some(index) => {
                if raw_markers[index].begin_found && raw_markers[index].end_found {
                    return Err(Error::DuplicatedMarker { name });
                }
                index
            }
            None => {
                raw_markers.push(RawMarker::new(&name));
                raw_markers.len() - 1
            }
        };
        let raw = &mut raw_markers[index];

        if &caps["marker_keyword"] == "begin" {
            nested_under = Some(name);
            raw.begin_found = true;
            raw.insert_at = purged.len();
        } else {
            nested_under = None;
            raw.end_found = true;
            // End lines carry no option clause worth recording.
            continue;
        }

        if let Some(options) = caps.name("marker_options") {
            raw.record_options(options.as_str());
        }
        raw.record_indentation(&caps["marker_indent"]);
    }

    let mut directives = BTreeMap::new();
    let mut errors = Vec::new();
    for raw in &raw_markers {
        match Directive::from_raw(raw) {
            Ok(directive) => {
                directives.insert(directive.insert_at, directive);
            }
            Err(err) => {
                tracing::warn!(marker = %raw.name, error = %err, "failed to build directive");
                errors.push(err);
            }
        }
    }
    if !errors.is_empty() {
        return Err(Error::Parse(errors));
    }

    Ok(Document {
        file_name: file_name.to_string(),
        original,
        purged,
        directives,
        skip_update,
    })
}
