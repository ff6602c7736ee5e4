//! # TtyMD Conversion Pipeline
//!
//! File: cli/src/commands/convert/pipeline.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/ttymd
//!
//! ## Overview
//!
//! This module composes the three independent conversion passes into the
//! pipeline run by `ttymd convert`. Data flows one direction:
//!
//! 1. Style conversion: named terminal styles become Markdown markers.
//! 2. URL linkification and footnote-bracket escaping.
//! 3. Angle-bracket escaping outside inline code spans.
//!
//! Style conversion must come first: the later passes rely on backtick code
//! spans that the style pass introduces (a `<path>` placeholder styled as
//! input becomes `` `<path>` `` and is then exempt from entity escaping).
//! The linkification and escaping passes are independent of each other.
//!
//! Each pass can be disabled individually, by configuration or by a CLI
//! flag. A disabled pass is skipped entirely; the remaining passes still run
//! in order.
//!
use crate::common::markdown::{self, MarkdownConverter};
use tracing::debug;

/// Which of the independent passes run. All enabled by default; CLI flags
/// override the configured values.
#[derive(Debug, Clone, Copy)]
pub struct PassToggles {
    pub styles: bool,
    pub links: bool,
    pub html_entities: bool,
}

impl Default for PassToggles {
    fn default() -> Self {
        PassToggles {
            styles: true,
            links: true,
            html_entities: true,
        }
    }
}

/// Runs the enabled passes over `text`, returning Markdown-safe output.
pub fn run(text: &str, converter: &MarkdownConverter, passes: &PassToggles) -> String {
    debug!("Running conversion pipeline with passes: {:?}", passes);

    let mut converted = if passes.styles {
        converter.convert(text)
    } else {
        text.to_string()
    };
    if passes.links {
        converted = markdown::linkify(&converted);
    }
    if passes.html_entities {
        converted = markdown::escape_angle_brackets(&converted);
    }
    converted
}
