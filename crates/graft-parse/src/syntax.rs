//! Marker line grammar.
//!
//! Two comment syntax variants carry the same grammar: one for prose
//! documents (HTML comments) and one for data documents (`#` comments).
//! A marker line holds a keyword (`begin`/`end`), a name used as the
//! pairing key, and, on begin lines, an option clause:
//!
//! ```text
//! <!-- graft: intro / begin from: ./other.md#1~3 -->
//! <!-- graft: intro / end -->
//! ```
//!
//! ```yaml
//! # graft: values-block / begin from: ./other.yaml#[region] indent: align
//! # graft: values-block / end
//! ```
//!
//! A separate single-line sentinel (`graft: skip-update` in the variant's
//! comment form) disables in-place rewriting for the whole document without
//! affecting scanning. Export regions inside target documents use a third
//! pattern, distinct from the import grammar so exporting documents scan
//! cleanly.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static MARKDOWN_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<marker_indent>[ \t]*)<!-- graft: (?P<marker_name>\S+) / (?P<marker_keyword>begin|end)(?: (?P<marker_options>.*))? -->\s*$",
    )
    .expect("invalid markdown marker pattern")
});

static YAML_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<marker_indent>[ \t]*(?:- +)?)# graft: (?P<marker_name>\S+) / (?P<marker_keyword>begin|end)(?: (?P<marker_options>.*))?$",
    )
    .expect("invalid yaml marker pattern")
});

static MARKDOWN_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[ \t]*<!-- graft: export (?P<export_name>\S+) / (?P<export_keyword>begin|end) -->\s*$",
    )
    .expect("invalid markdown export pattern")
});

static YAML_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*# graft: export (?P<export_name>\S+) / (?P<export_keyword>begin|end)\s*$")
        .expect("invalid yaml export pattern")
});

/// Comment syntax variant, selected by file suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Markdown,
    Yaml,
}

impl Syntax {
    /// Select the variant for a file name, by suffix. Returns `None` for
    /// unsupported suffixes.
    pub fn for_file(file_name: &str) -> Option<Syntax> {
        match Path::new(file_name).extension().and_then(|ext| ext.to_str()) {
            Some("md") => Some(Syntax::Markdown),
            Some("yaml") | Some("yml") => Some(Syntax::Yaml),
            _ => None,
        }
    }

    /// Pattern matching a begin/end marker line in this variant.
    pub fn marker_pattern(&self) -> &'static Regex {
        match self {
            Syntax::Markdown => &MARKDOWN_MARKER,
            Syntax::Yaml => &YAML_MARKER,
        }
    }

    /// Pattern matching an export region begin/end line in this variant.
    pub fn export_pattern(&self) -> &'static Regex {
        match self {
            Syntax::Markdown => &MARKDOWN_EXPORT,
            Syntax::Yaml => &YAML_EXPORT,
        }
    }

    /// Substring whose presence on any line disables in-place rewriting.
    pub fn skip_sentinel(&self) -> &'static str {
        match self {
            Syntax::Markdown => "<!-- graft: skip-update -->",
            Syntax::Yaml => "# graft: skip-update",
        }
    }
}
