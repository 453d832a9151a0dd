//! Marker scanning and document views for Graft.
//!
//! [`scan`] walks a document line by line, discovers marker begin/end
//! pairs, and produces a [`Document`] holding three aligned views: the
//! original lines, the purged lines (previously imported payload removed,
//! marker lines retained), and a map from insertion line to the parsed
//! [`graft_marker::Directive`] describing what belongs there.

pub mod document;
pub mod error;
pub mod scanner;
pub mod syntax;

pub use document::Document;
pub use error::{Error, Result};
pub use scanner::scan;
pub use syntax::Syntax;
