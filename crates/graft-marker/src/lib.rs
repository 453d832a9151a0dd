//! Directive data model and option parsing for Graft.
//!
//! A marker is a begin/end pair of comment lines inside a host document. This crate holds the data observed for one marker name
//! ([`RawMarker`]), validates that the pair is complete, and parses the
//! begin line's option clause into a typed import specification
//! ([`Directive`]): where to import from, which lines or region to take,
//! and how to indent and present the result.
//!
//! Scanning host documents for marker lines lives in `graft-parse`;
//! fetching target content and splicing it in lives in `graft-content`.

pub mod directive;
pub mod error;
pub mod options;
pub mod raw;

pub use directive::{Directive, Indentation, Selection, Style, Target, Wrap};
pub use error::{Error, Result};
pub use raw::RawMarker;
