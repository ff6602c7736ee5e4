//! # TtyMD URL Linkification
//!
//! File: cli/src/common/markdown/links.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/ttymd
//!
//! ## Overview
//!
//! This module rewrites plain-text link material into Markdown-safe form:
//!
//! 1. Bare HTTP/HTTPS URLs become `[url](url)` links. The URL character set
//!    excludes whitespace, `*`, `)`, and backticks so a URL mentioned inside
//!    prose, a Markdown link target, or a code span terminates where the
//!    surrounding syntax begins.
//! 2. Footnote-style bracketed integers (`[42]`) become `\[42\]` so Markdown
//!    does not read them as reference links. Bracket content that is not
//!    purely digits is left untouched; ordinary `[text](target)` link syntax
//!    survives unescaped.
//!
//! The URL pass runs first. Both passes are single global substitutions over
//! the whole input with no backtracking between them, so a URL that itself
//! contains a `[digits]` segment is not processed twice.
//!
use once_cell::sync::Lazy;
use regex::Regex;

/// Bare HTTP/HTTPS URL, optionally with userinfo, path, query, and fragment
/// characters drawn from a safe set.
static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"((?:http|https)://(?:\w+:?\w*@)?[^\s*)`]+(?:/|/[\w#!:.?+=&%@!\-/])?)")
        .expect("URL pattern is valid")
});

/// Footnote-style bracketed integer, e.g. `[42]`.
static FOOTNOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(\d+)\]").expect("footnote pattern is valid"));

/// Rewraps bare URLs as Markdown links and escapes numeric footnote brackets.
///
/// Total over any input; text without matches passes through unchanged.
pub fn linkify(text: &str) -> String {
    let linked = URL.replace_all(text, "[${1}](${1})");
    FOOTNOTE.replace_all(&linked, r"\[${1}\]").into_owned()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_url_round_trip() {
        assert_eq!(
            linkify("https://ttymd.dev"),
            "[https://ttymd.dev](https://ttymd.dev)"
        );
        assert_eq!(
            linkify("http://example.com/a/b?x=1#frag"),
            "[http://example.com/a/b?x=1#frag](http://example.com/a/b?x=1#frag)"
        );
    }

    #[test]
    fn test_url_with_userinfo() {
        assert_eq!(
            linkify("https://user:pw@host.dev/path"),
            "[https://user:pw@host.dev/path](https://user:pw@host.dev/path)"
        );
    }

    #[test]
    fn test_url_in_prose() {
        assert_eq!(
            linkify("see https://docs.dev/guide for details"),
            "see [https://docs.dev/guide](https://docs.dev/guide) for details"
        );
    }

    #[test]
    fn test_url_stops_at_closing_paren() {
        // ')' is excluded from the URL character set, so a parenthesized
        // mention keeps its closing paren outside the link.
        assert_eq!(
            linkify("(https://a.dev)"),
            "([https://a.dev](https://a.dev))"
        );
    }

    #[test]
    fn test_url_stops_at_backtick_and_whitespace() {
        assert_eq!(
            linkify("`https://a.dev` next"),
            "`[https://a.dev](https://a.dev)` next"
        );
        assert_eq!(
            linkify("https://a.dev https://b.dev"),
            "[https://a.dev](https://a.dev) [https://b.dev](https://b.dev)"
        );
    }

    #[test]
    fn test_numeric_footnote_brackets_escaped() {
        assert_eq!(linkify("[42]"), "\\[42\\]");
        assert_eq!(linkify("see [1] and [2]"), "see \\[1\\] and \\[2\\]");
    }

    #[test]
    fn test_non_numeric_brackets_untouched() {
        assert_eq!(linkify("[abc]"), "[abc]");
        assert_eq!(linkify("[4a2]"), "[4a2]");
        assert_eq!(linkify("[a](b)"), "[a](b)");
    }

    #[test]
    fn test_no_scheme_no_match() {
        assert_eq!(linkify("www.example.com"), "www.example.com");
        assert_eq!(linkify("ftp://example.com"), "ftp://example.com");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(linkify(""), "");
    }
}
