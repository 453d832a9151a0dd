//! Content resolution and rendering for Graft.
//!
//! Takes a scanned [`graft_parse::Document`] and produces the processed
//! view: target content is fetched through a [`ContentSource`], sliced
//! according to each directive's selection, indented and presented per its
//! facets, and spliced in after the directive's begin marker line.
//!
//! Resolution is shallow on purpose: a marker pair found inside imported
//! payload belongs to the target document and is handled when that document
//! is processed, not here.

pub mod error;
pub mod render;
pub mod resolve;
pub mod select;
pub mod source;

pub use error::{Error, Result};
pub use resolve::{diff_text, resolve, resolve_directive, to_text};
pub use select::{extract_export, select_lines};
pub use source::{ContentSource, FsSource};
