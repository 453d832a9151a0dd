//! Raw marker accumulation

use crate::error::{Error, Result};

/// Marker data exactly as observed in a document, before any option
/// parsing. A `RawMarker` is filled in incrementally as the scanner meets
/// the begin and end lines of a pair, so any field may still be missing;
/// [`validate`](RawMarker::validate) checks structural completeness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMarker {
    /// Pairing key shared by the begin and end lines.
    pub name: String,
    /// Whether a begin line was seen for this name.
    pub begin_found: bool,
    /// Whether an end line was seen for this name.
    pub end_found: bool,
    /// Line position in the purged view where imported content goes,
    /// immediately after the begin marker line.
    pub insert_at: usize,
    /// Raw option clause from the begin line.
    pub options: String,
    /// Whitespace preceding the begin marker token on its line.
    pub preceding_indentation: String,
}

impl RawMarker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Record the option clause captured on a marker line. An empty capture
    /// never overwrites a previously recorded value, so an end line cannot
    /// reset what the begin line carried.
    pub fn record_options(&mut self, options: &str) {
        if !options.is_empty() {
            self.options = options.to_string();
        }
    }

    /// Record the whitespace preceding the marker token. Same overwrite
    /// guard as [`record_options`](RawMarker::record_options).
    pub fn record_indentation(&mut self, indentation: &str) {
        if !indentation.is_empty() {
            self.preceding_indentation = indentation.to_string();
        }
    }

    /// Check that the marker has a name and a complete begin/end pair.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingName);
        }

        if !self.begin_found || !self.end_found {
            return Err(Error::NoMatchingMarker {
                name: self.name.clone(),
            });
        }

        Ok(())
    }
}
