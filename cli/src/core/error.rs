//! # TtyMD Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/ttymd
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the TtyMD application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `TtymdError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover various domains:
//! - Configuration errors
//! - Style-table lookup failures
//! - Style-pattern compilation errors
//! - Filesystem errors
//! - Command argument errors
//!
//! Note that the conversion passes themselves (`strip_marker_pair`, `linkify`,
//! `escape_angle_brackets`) are total over string input and never produce an
//! error; fallibility is confined to converter construction (resolving named
//! styles and compiling their patterns) and the I/O boundary of the commands.
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if table.get(name).is_none() {
//!     return Err(TtymdError::UnknownStyle { name: name.to_string() })?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
//! The error system provides detailed error messages to the user and
//! includes context information for debugging.
//!
use thiserror::Error;

/// Custom error type for the TtyMD application.
#[derive(Error, Debug)]
pub enum TtymdError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Style '{name}' not found in style table.")]
    UnknownStyle { name: String },

    #[error("Failed to compile pattern for style '{name}': {source}")]
    StylePattern { name: String, source: regex::Error },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = TtymdError::Config("Missing setting 'markdown.input'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'markdown.input'"
        );

        let unknown_style = TtymdError::UnknownStyle {
            name: "accent".into(),
        };
        assert_eq!(
            unknown_style.to_string(),
            "Style 'accent' not found in style table."
        );

        let fs_err = TtymdError::FileSystem("Output path is a directory".to_string());
        assert_eq!(
            fs_err.to_string(),
            "Filesystem error: Output path is a directory"
        );
    }
}
