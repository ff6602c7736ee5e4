//! # TtyMD Style Table (`common::style`)
//!
//! File: cli/src/common/style/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/ttymd
//!
//! ## Overview
//!
//! This module defines the data model for terminal styles: the literal
//! open/close escape-sequence fragments a terminal emits to begin and end a
//! visual style, and the named table that binds style labels to those
//! fragments. The conversion engine in `common::markdown` only ever reads
//! this data; it never emits styling itself.
//!
//! ## Architecture
//!
//! - `MarkerPair`: one nesting layer of a style (e.g. the open/close codes
//!   for "green foreground"). A style is an ordered sequence of layers,
//!   outermost first, because terminals compose styles by stacking layers
//!   (e.g. bold-then-color).
//! - `MdPair`: the Markdown open/close markers a style is rewritten to.
//! - `StyleTable`: a read-only lookup trait. The converter resolves the
//!   named styles it needs once at construction, so alternative tables
//!   (a different color scheme, a test double) can be injected without
//!   touching the conversion code.
//! - `AnsiPalette`: the default `StyleTable`, carrying the standard SGR
//!   sequences for the three named styles the converter processes.
//!
//! ## Examples
//!
//! ```rust
//! use crate::common::style::{AnsiPalette, StyleTable, STYLE_INPUT};
//!
//! let palette = AnsiPalette::default();
//! let layers = palette.get(STYLE_INPUT).expect("default palette has 'input'");
//! assert_eq!(layers[0].open, "\u{1b}[32m");
//! ```
//!
use std::collections::HashMap;

// --- Named styles processed by the converter ---

/// Inline-code-like style (command arguments, file names). Green by default.
pub const STYLE_INPUT: &str = "input";
/// Warning/accent style. Yellow by default; stripped without replacement.
pub const STYLE_ACCENT: &str = "accent";
/// Strong emphasis style. Bold by default.
pub const STYLE_STRONG: &str = "strong";

// --- Standard SGR fragments (chalk-compatible open/close codes) ---

const SGR_GREEN_OPEN: &str = "\u{1b}[32m";
const SGR_YELLOW_OPEN: &str = "\u{1b}[33m";
const SGR_FG_CLOSE: &str = "\u{1b}[39m";
const SGR_BOLD_OPEN: &str = "\u{1b}[1m";
const SGR_BOLD_CLOSE: &str = "\u{1b}[22m";

/// One nesting layer of a terminal style: the literal text fragments emitted
/// to open and close that layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    pub open: String,
    pub close: String,
}

impl MarkerPair {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        MarkerPair {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// The Markdown open/close markers substituted for a style. Both sides may be
/// empty, meaning "strip the style without adding visible formatting".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MdPair {
    pub open: String,
    pub close: String,
}

impl MdPair {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        MdPair {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Inline-code markers (single backticks).
    pub fn backticks() -> Self {
        MdPair::new("`", "`")
    }

    /// Bold markers (double asterisks).
    pub fn bold() -> Self {
        MdPair::new("**", "**")
    }

    /// Empty markers: the style is removed with no replacement.
    pub fn none() -> Self {
        MdPair::default()
    }
}

/// Read-only lookup from a style name to its ordered marker-pair sequence
/// (outermost layer first).
///
/// The converter treats a present, possibly multi-layer sequence as the
/// source of truth for how that style appears in raw terminal output. A
/// `None` return is the caller's failure to supply a required style, not a
/// conversion-time condition; `MarkdownConverter::new` reports it as an
/// error during construction.
pub trait StyleTable {
    fn get(&self, name: &str) -> Option<&[MarkerPair]>;
}

/// The default style table: standard SGR escape sequences for the three
/// named styles, matching what common terminal-styling libraries emit.
#[derive(Debug, Clone)]
pub struct AnsiPalette {
    styles: HashMap<String, Vec<MarkerPair>>,
}

impl AnsiPalette {
    /// Builds a palette from an explicit name → marker-sequence mapping.
    pub fn from_styles(styles: HashMap<String, Vec<MarkerPair>>) -> Self {
        AnsiPalette { styles }
    }

    /// Style names known to this palette, sorted for stable display.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for AnsiPalette {
    fn default() -> Self {
        let mut styles = HashMap::new();
        styles.insert(
            STYLE_INPUT.to_string(),
            vec![MarkerPair::new(SGR_GREEN_OPEN, SGR_FG_CLOSE)],
        );
        styles.insert(
            STYLE_ACCENT.to_string(),
            vec![MarkerPair::new(SGR_YELLOW_OPEN, SGR_FG_CLOSE)],
        );
        styles.insert(
            STYLE_STRONG.to_string(),
            vec![MarkerPair::new(SGR_BOLD_OPEN, SGR_BOLD_CLOSE)],
        );
        AnsiPalette { styles }
    }
}

impl StyleTable for AnsiPalette {
    fn get(&self, name: &str) -> Option<&[MarkerPair]> {
        self.styles.get(name).map(Vec::as_slice)
    }
}
