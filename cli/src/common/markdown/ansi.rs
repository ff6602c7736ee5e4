//! # TtyMD Style-Marker Stripping
//!
//! File: cli/src/common/markdown/ansi.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/ttymd
//!
//! ## Overview
//!
//! This module implements the lowest layer of the conversion engine: rewriting
//! every substring delimited by a terminal style's combined open/close escape
//! sequences into the same substring delimited by a Markdown marker pair.
//!
//! ## Architecture
//!
//! A style is an ordered sequence of `MarkerPair` layers, outermost first.
//! The combined open marker is the concatenation of each layer's open
//! fragment in order; the combined close marker is the concatenation of each
//! layer's close fragment in *reverse* order, because the innermost layer
//! closes first in real terminal output. Both combined markers are escaped
//! for literal use and joined around a non-greedy single-line capture, so
//! the shortest span between an open and the next close is replaced, adjacent
//! independently-styled segments are never merged, and a styled span broken
//! across lines is left untouched.
//!
//! Matching is a single global pass per style. Unmatched or partial markers
//! simply produce no replacement; there is no error condition at conversion
//! time. If either combined marker is empty the operation is a deliberate
//! no-op, never a zero-width match at every position.
//!
use crate::common::style::{MarkerPair, MdPair};
use crate::core::error::{Result, TtymdError};
use regex::Regex;

/// Builds the combined open and close markers for a style's layer sequence.
///
/// Opens concatenate in layer order; closes concatenate in reverse layer
/// order (innermost closes first).
pub(crate) fn combined_markers(layers: &[MarkerPair]) -> (String, String) {
    let open: String = layers.iter().map(|layer| layer.open.as_str()).collect();
    let close: String = layers
        .iter()
        .rev()
        .map(|layer| layer.close.as_str())
        .collect();
    (open, close)
}

/// Compiles the match pattern for a style's layer sequence.
///
/// Returns `Ok(None)` when either combined marker is empty: an empty marker
/// cannot delimit a span, so stripping degrades to a pass-through instead of
/// matching zero-width at every position.
///
/// The non-greedy capture does not cross newlines: a styled span broken
/// across lines is left untouched, never merged into one Markdown span.
pub(crate) fn style_pattern(
    layers: &[MarkerPair],
) -> std::result::Result<Option<Regex>, regex::Error> {
    let (open, close) = combined_markers(layers);
    if open.is_empty() || close.is_empty() {
        return Ok(None);
    }
    let pattern = format!(
        "{}(.*?){}",
        regex::escape(&open),
        regex::escape(&close)
    );
    Regex::new(&pattern).map(Some)
}

/// Applies a compiled style pattern, rewrapping each captured span in the
/// Markdown marker pair.
pub(crate) fn apply_pattern(re: &Regex, text: &str, md: &MdPair) -> String {
    re.replace_all(text, |caps: &regex::Captures<'_>| {
        format!("{}{}{}", md.open, &caps[1], md.close)
    })
    .into_owned()
}

/// Converts every span delimited by `layers`' combined markers into the same
/// span delimited by `md` instead, removing the terminal markers.
///
/// This is the generic entry point for callers holding an arbitrary marker
/// sequence. The orchestrating `MarkdownConverter` compiles its three style
/// patterns once at construction instead of per call.
pub fn strip_marker_pair(text: &str, layers: &[MarkerPair], md: &MdPair) -> Result<String> {
    let pattern = style_pattern(layers).map_err(|source| TtymdError::StylePattern {
        name: "<ad hoc>".to_string(),
        source,
    })?;
    Ok(match pattern {
        Some(re) => apply_pattern(&re, text, md),
        None => text.to_string(),
    })
}
