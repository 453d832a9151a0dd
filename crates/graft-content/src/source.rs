//! Content sources.
//!
//! Fetching target content sits behind the [`ContentSource`] trait so the
//! resolution logic stays independent of where bytes come from. The bundled
//! [`FsSource`] reads local files relative to the host document's
//! directory; URL targets are validated at parse time but refused here.

use std::fs;
use std::path::{Path, PathBuf};

use graft_marker::Target;

use crate::error::{Error, Result};

/// Supplies the content of an import target.
pub trait ContentSource {
    /// Fetch the full content of a target document.
    fn fetch(&self, target: &Target) -> Result<String>;
}

/// Filesystem-backed content source. Path targets are resolved relative to
/// a base directory, normally the directory of the host document.
#[derive(Debug, Clone)]
pub struct FsSource {
    base: PathBuf,
}

impl FsSource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Source rooted at the directory containing the given document.
    pub fn for_document(file_name: &str) -> Self {
        let base = Path::new(file_name)
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self { base }
    }
}

impl ContentSource for FsSource {
    fn fetch(&self, target: &Target) -> Result<String> {
        match target {
            Target::Path(path) => {
                let full = self.base.join(path);
                tracing::debug!(path = %full.display(), "reading import target");
                fs::read_to_string(&full).map_err(|source| Error::io(full, source))
            }
            Target::Url(url) => Err(Error::UnsupportedTarget {
                target: url.to_string(),
            }),
        }
    }
}
