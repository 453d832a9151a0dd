//! Option clause parsing.
//!
//! The option clause of a begin marker is a small directive language:
//!
//! ```text
//! from: <target>[#<detail>] [indent: <mode> [<n>]] [style: <mode> [<tag>]] [wrap: <tag>]
//! ```
//!
//! Each clause is matched by its own named-capture pattern, independently of
//! the others. A clause that is absent altogether is simply skipped; only the
//! `from:` target clause is required. A clause that matches partially, with a
//! required field missing or malformed, is an error.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::directive::{Directive, Indentation, Selection, Style, Target, Wrap};
use crate::error::{Error, Result};
use crate::raw::RawMarker;

/// Matches the required `from:` clause: target path or URL, with an optional
/// `#detail` selection suffix.
static TARGET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"from:\s+(?P<target_path>[^\s#]+)(?:#(?P<target_detail>\S+))?")
        .expect("invalid target pattern")
});

/// Matches a bracketed export-marker name anywhere in the selection detail.
static EXPORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?P<export_name>\S+)\]").expect("invalid export pattern"));

/// Matches the optional `indent:` clause.
static INDENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"indent:\s+(?P<indent_mode>absolute|extra|align|keep)(?:\s+(?P<indent_length>\S+))?")
        .expect("invalid indent pattern")
});

/// Matches the optional `style:` clause.
static STYLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"style:\s+(?P<style_mode>quote|verbatim)(?:\s+(?P<style_lang>\S+))?")
        .expect("invalid style pattern")
});

/// Matches the optional, independent `wrap:` clause.
static WRAP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"wrap:\s+(?P<wrap_lang>\S+)").expect("invalid wrap pattern"));

impl Directive {
    /// Build a directive from an accumulated raw marker.
    ///
    /// Validates the raw marker structurally, then runs the option clause
    /// through the target, selection, indentation, and style/wrap resolvers.
    /// Pure: resolving the same raw marker twice yields identical values.
    pub fn from_raw(raw: &RawMarker) -> Result<Self> {
        raw.validate()?;

        let (target, detail) = resolve_target(raw)?;
        let selection = match detail {
            Some(detail) => resolve_selection(&raw.name, &detail)?,
            None => return Err(Error::syntax(&raw.name, "import selection is missing")),
        };
        let indentation = resolve_indentation(raw)?;
        let (style, mut wrap) = resolve_style(raw)?;
        if let Some(explicit) = resolve_wrap(raw) {
            wrap = Some(explicit);
        }

        Ok(Directive {
            name: raw.name.clone(),
            insert_at: raw.insert_at,
            target,
            selection,
            indentation,
            style,
            wrap,
        })
    }
}

/// Resolve the required `from:` clause into a target and the raw selection
/// detail, if one was given.
fn resolve_target(raw: &RawMarker) -> Result<(Target, Option<String>)> {
    let caps = TARGET_PATTERN
        .captures(&raw.options)
        .ok_or_else(|| Error::syntax(&raw.name, "import target option is missing"))?;

    let path = &caps["target_path"];
    let detail = caps.name("target_detail").map(|m| m.as_str().to_string());

    let target = if path.starts_with("http://") || path.starts_with("https://") {
        Target::Url(Url::parse(path)?)
    } else if path.ends_with('/') || Path::new(path).file_name().is_none() {
        return Err(Error::InvalidPath {
            reason: "directory cannot be imported".to_string(),
        });
    } else {
        Target::Path(path.to_string())
    };

    Ok((target, detail))
}

/// Resolve the selection detail, trying sub-forms in precedence order:
/// bracketed export name, comma list, single tilde range, single line number.
fn resolve_selection(name: &str, detail: &str) -> Result<Selection> {
    if let Some(caps) = EXPORT_PATTERN.captures(detail) {
        return Ok(Selection::Export(caps["export_name"].to_string()));
    }

    if detail.contains(',') {
        let mut lines = Vec::new();
        for token in detail.split(',') {
            if let Some((lower, upper)) = parse_range_token(token) {
                lines.extend(lower..=upper);
                continue;
            }
            // A token that is neither a number nor a range is skipped, so the
            // rest of the list still gets processed.
            if let Ok(line) = token.parse::<usize>() {
                lines.push(line);
            }
        }
        return Ok(Selection::Lines(lines));
    }

    if detail.contains('~') {
        return resolve_range(name, detail);
    }

    match detail.parse::<usize>() {
        Ok(line) => Ok(Selection::Lines(vec![line])),
        Err(err) => Err(Error::syntax(name, format!("invalid line number: {err}"))),
    }
}

/// Parse a `lower~upper` token from a comma list. Returns `None` for
/// anything that is not a well-formed closed range.
fn parse_range_token(token: &str) -> Option<(usize, usize)> {
    let (lower, upper) = token.split_once('~')?;
    if upper.contains('~') {
        return None;
    }
    Some((lower.parse().ok()?, upper.parse().ok()?))
}

/// Resolve a single tilde range. An empty lower bound defaults to line 1; an
/// empty upper bound means end of target.
fn resolve_range(name: &str, input: &str) -> Result<Selection> {
    let parts: Vec<&str> = input.split('~').collect();
    if parts.len() > 2 {
        return Err(Error::syntax(name, "tilde cannot be used more than once"));
    }

    let from = match parts[0] {
        "" => 1,
        lower => lower.parse::<usize>().map_err(|err| {
            Error::syntax(name, format!("invalid lower bound in line range: {err}"))
        })?,
    };
    let to = match parts[1] {
        "" => None,
        upper => Some(upper.parse::<usize>().map_err(|err| {
            Error::syntax(name, format!("invalid upper bound in line range: {err}"))
        })?),
    };

    Ok(Selection::Range { from, to })
}

/// Resolve the optional `indent:` clause.
fn resolve_indentation(raw: &RawMarker) -> Result<Option<Indentation>> {
    let Some(caps) = INDENT_PATTERN.captures(&raw.options) else {
        return Ok(None);
    };

    match &caps["indent_mode"] {
        "align" => {
            // The marker column is captured here, at parse time; any length
            // suffix is ignored for this mode.
            Ok(Some(Indentation::Align {
                marker_indentation: raw.preceding_indentation.len(),
            }))
        }
        "keep" => Ok(Some(Indentation::Keep)),
        mode @ ("absolute" | "extra") => {
            let length = caps.name("indent_length").ok_or_else(|| {
                Error::syntax(&raw.name, format!("indent mode '{mode}' requires a length"))
            })?;
            let length: usize = length.as_str().parse().map_err(|err| {
                Error::syntax(&raw.name, format!("invalid indentation length: {err}"))
            })?;
            Ok(Some(match mode {
                "absolute" => Indentation::Absolute(length),
                _ => Indentation::Extra(length),
            }))
        }
        // The pattern only admits the four modes above.
        _ => Err(Error::syntax(&raw.name, "unsupported indentation mode")),
    }
}

/// Resolve the optional `style:` clause.
fn resolve_style(raw: &RawMarker) -> Result<(Option<Style>, Option<Wrap>)> {
    let Some(caps) = STYLE_PATTERN.captures(&raw.options) else {
        return Ok((None, None));
    };

    match &caps["style_mode"] {
        // Quoting never uses a language hint; any trailing token is ignored.
        "quote" => Ok((Some(Style::Quote), None)),
        "verbatim" => {
            let lang = caps.name("style_lang").map(|m| m.as_str().to_string());
            Ok((None, Some(Wrap { lang })))
        }
        _ => Err(Error::syntax(&raw.name, "unsupported style")),
    }
}

/// Resolve the optional `wrap:` clause. Takes precedence over a wrap facet
/// set by `style: verbatim`.
fn resolve_wrap(raw: &RawMarker) -> Option<Wrap> {
    let caps = WRAP_PATTERN.captures(&raw.options)?;
    Some(Wrap {
        lang: Some(caps["wrap_lang"].to_string()),
    })
}
