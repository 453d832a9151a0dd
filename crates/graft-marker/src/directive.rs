//! Validated import directives

use url::Url;

/// A fully parsed import directive, tied to one begin/end marker pair in a
/// host document. The directive describes what to import and how to present
/// it; it does not hold the target content itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Pairing key of the marker pair this directive came from.
    pub name: String,
    /// Line position in the purged view where imported content is spliced.
    pub insert_at: usize,
    /// Where to import from.
    pub target: Target,
    /// Which part of the target to import.
    pub selection: Selection,
    /// Optional indentation policy applied to the imported lines.
    pub indentation: Option<Indentation>,
    /// Optional presentation style.
    pub style: Option<Style>,
    /// Optional fenced-block wrapping with a language tag.
    pub wrap: Option<Wrap>,
}

/// Import target: a local file or a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Relative or absolute path to a local file.
    Path(String),
    /// URL to retrieve the file from.
    Url(Url),
}

/// Which lines of the target to import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Explicit 1-based line numbers, in the order given. Duplicates are
    /// allowed; tilde ranges in a comma list are expanded eagerly.
    Lines(Vec<usize>),
    /// A line range. `to` of `None` means end of target, resolved by the
    /// consumer once the target length is known.
    Range { from: usize, to: Option<usize> },
    /// A named export region inside the target document.
    Export(String),
}

/// Indentation policy for imported lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indentation {
    /// Replace leading whitespace with exactly this many spaces.
    Absolute(usize),
    /// Add this many spaces on top of the source indentation.
    Extra(usize),
    /// Align to the column of the begin marker. The column is captured at
    /// parse time and not reevaluated later.
    Align { marker_indentation: usize },
    /// Preserve the source indentation verbatim.
    Keep,
}

/// Presentation style for imported content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Style {
    /// Wrap the imported content as a blockquote.
    Quote,
}

/// Fenced code block wrapping, with an optional language tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wrap {
    pub lang: Option<String>,
}
