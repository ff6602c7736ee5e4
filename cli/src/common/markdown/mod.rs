//! # TtyMD Markdown Conversion Engine (`common::markdown`)
//!
//! File: cli/src/common/markdown/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/ttymd
//!
//! ## Overview
//!
//! This module is the conversion core of TtyMD: pure text-to-text transforms
//! that turn captured terminal output into Markdown-safe text. It aggregates
//! the three independent passes and provides the `MarkdownConverter`
//! orchestrator that applies the named terminal styles in their required
//! order.
//!
//! ## Architecture
//!
//! - **`ansi`**: strips one style's combined open/close markers, rewrapping
//!   each span in a Markdown marker pair.
//! - **`links`**: rewraps bare URLs as Markdown links and escapes numeric
//!   footnote brackets.
//! - **`html`**: escapes `<token>` constructs outside inline code spans.
//! - **`MarkdownConverter`** (this file): resolves the three named styles
//!   from an injected `StyleTable` once at construction, compiles their
//!   patterns, and applies them per call in a fixed order.
//!
//! The style order is load-bearing. The `input` style converts first, so any
//! `accent` or `strong` markers nested inside an input-styled span are still
//! present when the input pass runs and are only removed by their own later
//! passes. Converting the three styles simultaneously would change observable
//! output for nested spans.
//!
//! Every operation here is a synchronous, side-effect-free string transform.
//! A constructed converter is immutable and safe to share across threads.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::markdown::{self, MarkdownConverter};
//! use crate::common::style::AnsiPalette;
//!
//! let palette = AnsiPalette::default();
//! let converter = MarkdownConverter::new(&palette)?;
//!
//! let md = converter.convert(captured_output);
//! let md = markdown::linkify(&markdown::escape_angle_brackets(&md));
//! ```
//!
use crate::common::style::{MdPair, StyleTable, STYLE_ACCENT, STYLE_INPUT, STYLE_STRONG};
use crate::core::error::{Result, TtymdError};
use regex::Regex;
use tracing::trace;

/// Strips one style's markers into Markdown markers.
pub mod ansi;
/// Escapes angle-bracket tokens outside inline code spans.
pub mod html;
/// Rewraps URLs and escapes footnote brackets.
pub mod links;

pub use ansi::strip_marker_pair;
pub use html::escape_angle_brackets;
pub use links::linkify;

/// One precompiled style pass: the match pattern (absent for styles whose
/// combined markers are empty) and the Markdown pair substituted in.
#[derive(Debug)]
struct StylePass {
    name: &'static str,
    pattern: Option<Regex>,
    md: MdPair,
}

/// Converts the three named terminal styles to Markdown, nesting-safe.
///
/// Construction resolves each style's marker sequence from the injected
/// `StyleTable` and compiles its pattern; a missing style is reported here,
/// not at conversion time. `convert` itself is total and immutable.
#[derive(Debug)]
pub struct MarkdownConverter {
    passes: Vec<StylePass>,
}

/// The Markdown targets for the three named styles. Defaults match the
/// documented conversion: `input` to backticks, `accent` stripped invisibly,
/// `strong` to bold markers.
#[derive(Debug, Clone)]
pub struct StyleTargets {
    pub input: MdPair,
    pub accent: MdPair,
    pub strong: MdPair,
}

impl Default for StyleTargets {
    fn default() -> Self {
        StyleTargets {
            input: MdPair::backticks(),
            accent: MdPair::none(),
            strong: MdPair::bold(),
        }
    }
}

impl MarkdownConverter {
    /// Builds a converter with the default Markdown targets.
    pub fn new(table: &dyn StyleTable) -> Result<Self> {
        Self::with_targets(table, StyleTargets::default())
    }

    /// Builds a converter with explicit Markdown targets (e.g. from user
    /// configuration rendering `strong` as `__`).
    ///
    /// The table must supply marker sequences for all three named styles.
    pub fn with_targets(table: &dyn StyleTable, targets: StyleTargets) -> Result<Self> {
        // Fixed conversion order: input, then accent, then strong.
        let order = [
            (STYLE_INPUT, targets.input),
            (STYLE_ACCENT, targets.accent),
            (STYLE_STRONG, targets.strong),
        ];
        let mut passes = Vec::with_capacity(order.len());
        for (name, md) in order {
            let layers = table.get(name).ok_or_else(|| TtymdError::UnknownStyle {
                name: name.to_string(),
            })?;
            let pattern = ansi::style_pattern(layers).map_err(|source| {
                TtymdError::StylePattern {
                    name: name.to_string(),
                    source,
                }
            })?;
            passes.push(StylePass { name, pattern, md });
        }
        Ok(MarkdownConverter { passes })
    }

    /// Applies the three style passes in order, returning Markdown-safe text.
    pub fn convert(&self, text: &str) -> String {
        let mut converted = text.to_string();
        for pass in &self.passes {
            if let Some(re) = &pass.pattern {
                let next = ansi::apply_pattern(re, &converted, &pass.md);
                if next != converted {
                    trace!("Style '{}' pass rewrote styled spans", pass.name);
                }
                converted = next;
            }
        }
        converted
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::style::{AnsiPalette, MarkerPair};
    use std::collections::HashMap;

    const GREEN: &str = "\u{1b}[32m";
    const YELLOW: &str = "\u{1b}[33m";
    const FG_CLOSE: &str = "\u{1b}[39m";
    const BOLD: &str = "\u{1b}[1m";
    const BOLD_CLOSE: &str = "\u{1b}[22m";

    fn converter() -> MarkdownConverter {
        MarkdownConverter::new(&AnsiPalette::default()).expect("default palette is complete")
    }

    #[test]
    fn test_each_named_style_converts() {
        let c = converter();
        assert_eq!(
            c.convert(&format!("run {GREEN}npm install{FG_CLOSE} first")),
            "run `npm install` first"
        );
        assert_eq!(
            c.convert(&format!("{YELLOW}deprecated{FG_CLOSE} flag")),
            "deprecated flag"
        );
        assert_eq!(
            c.convert(&format!("a {BOLD}very{BOLD_CLOSE} good idea")),
            "a **very** good idea"
        );
    }

    #[test]
    fn test_nested_strong_inside_input() {
        // The input pass runs first: it captures the span with the strong
        // markers still embedded, and the strong pass rewrites them later.
        let c = converter();
        let text = format!("{GREEN}use {BOLD}x{BOLD_CLOSE} here{FG_CLOSE}");
        assert_eq!(c.convert(&text), "`use **x** here`");
    }

    #[test]
    fn test_nested_accent_inside_input() {
        let c = converter();
        let text = format!("{GREEN}{YELLOW}warn{FG_CLOSE} path{FG_CLOSE}");
        // The input pass matches the *shortest* span, ending at the accent's
        // own close code; the accent pass then strips the yellow open marker
        // together with the trailing close. Single-pass-per-style, non-greedy.
        assert_eq!(c.convert(&text), "`warn` path");
    }

    #[test]
    fn test_multiple_spans_per_style() {
        let c = converter();
        let text = format!("{GREEN}a{FG_CLOSE} and {GREEN}b{FG_CLOSE}");
        assert_eq!(c.convert(&text), "`a` and `b`");
    }

    #[test]
    fn test_unstyled_text_passes_through() {
        let c = converter();
        assert_eq!(c.convert("plain text"), "plain text");
        assert_eq!(c.convert(""), "");
    }

    #[test]
    fn test_missing_style_fails_at_construction() {
        let mut styles = HashMap::new();
        styles.insert(
            STYLE_INPUT.to_string(),
            vec![MarkerPair::new(GREEN, FG_CLOSE)],
        );
        // No accent or strong styles supplied.
        let table = AnsiPalette::from_styles(styles);
        let err = MarkdownConverter::new(&table).unwrap_err();
        assert!(err.to_string().contains("not found in style table"));
    }

    #[test]
    fn test_custom_targets() {
        let targets = StyleTargets {
            strong: MdPair::new("__", "__"),
            ..StyleTargets::default()
        };
        let c = MarkdownConverter::with_targets(&AnsiPalette::default(), targets).unwrap();
        assert_eq!(
            c.convert(&format!("{BOLD}loud{BOLD_CLOSE}")),
            "__loud__"
        );
    }

    #[test]
    fn test_multi_layer_style_requires_full_combined_markers() {
        let mut styles = HashMap::new();
        styles.insert(
            STYLE_INPUT.to_string(),
            vec![
                MarkerPair::new(BOLD, BOLD_CLOSE),
                MarkerPair::new(GREEN, FG_CLOSE),
            ],
        );
        styles.insert(
            STYLE_ACCENT.to_string(),
            vec![MarkerPair::new(YELLOW, FG_CLOSE)],
        );
        styles.insert(
            STYLE_STRONG.to_string(),
            vec![MarkerPair::new(BOLD, BOLD_CLOSE)],
        );
        let table = AnsiPalette::from_styles(styles);
        let c = MarkdownConverter::new(&table).unwrap();

        // Full combined markers (closes reversed) convert to backticks.
        let text = format!("{BOLD}{GREEN}cmd{FG_CLOSE}{BOLD_CLOSE}");
        assert_eq!(c.convert(&text), "`cmd`");

        // The bold fragment alone still belongs to the strong pass.
        let text = format!("{BOLD}loud{BOLD_CLOSE}");
        assert_eq!(c.convert(&text), "**loud**");
    }
}
