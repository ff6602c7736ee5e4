//! # TtyMD Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/ttymd
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for the
//! shared modules used throughout the TtyMD CLI application. It aggregates
//! the conversion engine and the terminal-style data model it reads.
//!
//! By centralizing these under the `common::` namespace, TtyMD keeps a clear
//! separation between command-specific logic (`commands::`), core
//! infrastructure (`core::`), and the reusable conversion machinery.
//!
//! ## Architecture
//!
//! - **`markdown`**: The conversion engine. Pure text-to-text transforms:
//!   style-marker stripping, URL linkification, and angle-bracket escaping,
//!   plus the `MarkdownConverter` orchestrator.
//! - **`style`**: The terminal-style data model: marker pairs, the
//!   `StyleTable` lookup trait, and the default `AnsiPalette`.
//!
//! ## Usage
//!
//! Command handlers import specific functionality directly from the required
//! submodule within `common`.
//!
//! ```rust
//! use crate::common::markdown::{self, MarkdownConverter};
//! use crate::common::style::AnsiPalette;
//!
//! let palette = AnsiPalette::default();
//! let converter = MarkdownConverter::new(&palette)?;
//! let safe = markdown::escape_angle_brackets(&converter.convert(raw));
//! ```
//!

/// The Markdown conversion engine (style stripping, linkification, escaping).
pub mod markdown;
/// Terminal-style data model and the default ANSI palette.
pub mod style;
