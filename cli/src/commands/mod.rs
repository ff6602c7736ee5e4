//! # TtyMD Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/ttymd
//!
//! ## Overview
//!
//! This module aggregates all top-level commands that comprise the TtyMD CLI.
//! It serves as the central point for importing and re-exporting command
//! modules to make them accessible to the main application entry point
//! (`main.rs`).
//!
//! ## Architecture
//!
//! The commands follow a hierarchical structure:
//! - Top-level modules represent commands (e.g., `convert`, `styles`)
//! - Implementation details live in submodules of the command that owns them
//! - All modules are made public for access from `main.rs`
//!
//! ## Commands
//!
//! - `convert`: Converts captured terminal output to Markdown-safe text.
//! - `styles`: Lists the named style table and the configured Markdown targets.
//!
//! Each command defines its own arguments structure and handler function
//! to process those arguments and implement the command's functionality.
//!

/// Command converting captured terminal output to Markdown. Includes the pass pipeline.
pub mod convert;
/// Command listing the named styles and their Markdown targets.
pub mod styles;
