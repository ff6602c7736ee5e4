//! # TtyMD Angle-Bracket Escaping
//!
//! File: cli/src/common/markdown/html.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/ttymd
//!
//! ## Overview
//!
//! This module escapes raw `<token>` constructs (angle brackets wrapping one
//! non-whitespace run, the shape of CLI placeholder arguments like `<path>`)
//! into the HTML-entity form `&lt;token&gt;` so they render literally in
//! Markdown instead of being swallowed as HTML tags.
//!
//! Constructs inside an inline code span are exempt: `` `<path>` `` must stay
//! verbatim because backticks already protect it. A position is inside a code
//! span when an odd number of backticks precede it, i.e. the text before it
//! cannot be decomposed into non-backtick runs and complete backtick pairs.
//!
//! ## Architecture
//!
//! The `regex` crate has no lookbehind, so the code-span check is a single
//! forward scan: candidate `<token>` matches are visited left to right while
//! a running backtick count classifies each match by the parity of backticks
//! preceding it. Escaped output never contains backticks or bare angle
//! brackets, so offsets on the original input stay valid and the whole pass
//! is linear. Applying the pass twice is idempotent outside code spans:
//! `&lt;token&gt;` no longer contains a bare `<token>` form and cannot be
//! re-escaped.
//!
use once_cell::sync::Lazy;
use regex::Regex;

/// Angle brackets wrapping a single non-whitespace run.
static ANGLE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(\S+)>").expect("angle-token pattern is valid"));

/// Escapes `<token>` constructs outside inline code spans as HTML entities.
///
/// Total over any input; text without matches passes through unchanged.
pub fn escape_angle_brackets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut backticks = 0;
    for mat in ANGLE_TOKEN.find_iter(text) {
        let before = &text[last..mat.start()];
        backticks += before.matches('`').count();
        out.push_str(before);

        if backticks % 2 == 0 {
            // Even parity: every preceding backtick is paired off, so this
            // construct sits outside any code span.
            out.push_str("&lt;");
            out.push_str(&text[mat.start() + 1..mat.end() - 1]);
            out.push_str("&gt;");
        } else {
            out.push_str(mat.as_str());
        }

        // The token itself may contain backticks; they count toward the
        // parity of everything after this match.
        backticks += mat.as_str().matches('`').count();
        last = mat.end();
    }
    out.push_str(&text[last..]);
    out
}
