//! # TtyMD Styles Command
//!
//! File: cli/src/commands/styles/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/ttymd
//!
//! ## Overview
//!
//! This module implements the `ttymd styles` command: an informational
//! listing of the named style table the converter reads. For each style it
//! shows the ordered terminal marker layers (with escape characters rendered
//! visibly) and the Markdown marker pair the style converts to, as resolved
//! from the current configuration.
//!
//! ## Examples
//!
//! ```bash
//! # Show all named styles
//! ttymd styles
//!
//! # Show a single style
//! ttymd styles --name strong
//! ```
//!
use crate::common::markdown;
use crate::common::style::{AnsiPalette, MdPair, StyleTable, STYLE_ACCENT, STYLE_INPUT, STYLE_STRONG};
use crate::core::config;
use crate::core::error::{Result, TtymdError};
use clap::Parser;
use tracing::info;

/// # Styles Command Arguments (`StylesArgs`)
///
/// Defines the command-line arguments accepted by the `ttymd styles`
/// command, parsed using `clap`.
#[derive(Parser, Debug)]
pub struct StylesArgs {
    /// Show only the style with this name.
    #[arg(long)]
    pub name: Option<String>,
}

/// # Handle Styles Command (`handle_styles`)
///
/// The main entry point function for the `ttymd styles` command. Prints the
/// style table to stdout. Fails if `--name` refers to a style the table does
/// not know.
///
/// ## Arguments
///
/// * `args`: The parsed `StylesArgs` struct.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` on success, or an `Err` for an unknown style
///   name or a configuration problem.
pub async fn handle_styles(args: StylesArgs) -> Result<()> {
    info!("Handling styles command with args: {:?}", args);

    let cfg = config::load_config()?;
    let palette = AnsiPalette::default();

    let names: Vec<&str> = match args.name.as_deref() {
        Some(name) => {
            if palette.get(name).is_none() {
                return Err(TtymdError::UnknownStyle {
                    name: name.to_string(),
                })?;
            }
            vec![name]
        }
        None => palette.names(),
    };

    for name in names {
        print_style(&palette, &cfg, name)?;
    }
    Ok(())
}

/// Prints one style's marker layers, its Markdown target, and a sample
/// rendering of a styled span through the generic stripper.
fn print_style(palette: &AnsiPalette, cfg: &config::Config, name: &str) -> Result<()> {
    let layers = match palette.get(name) {
        Some(layers) => layers,
        None => return Ok(()), // names come from the palette itself
    };
    println!("{}:", name);
    for (index, layer) in layers.iter().enumerate() {
        println!(
            "  layer {}: open={:?} close={:?}",
            index + 1,
            layer.open,
            layer.close
        );
    }
    let target = match name {
        STYLE_INPUT => &cfg.markdown.input,
        STYLE_ACCENT => &cfg.markdown.accent,
        STYLE_STRONG => &cfg.markdown.strong,
        // The configuration only carries targets for the three named styles;
        // anything else has no target to report.
        other => {
            return Err(TtymdError::UnknownStyle {
                name: other.to_string(),
            })?;
        }
    };
    if target.open.is_empty() && target.close.is_empty() {
        println!("  markdown: (stripped, no visible marker)");
    } else {
        println!("  markdown: {:?} ... {:?}", target.open, target.close);
    }

    // Show what a styled span actually converts to under this table entry.
    let open: String = layers.iter().map(|layer| layer.open.as_str()).collect();
    let close: String = layers.iter().rev().map(|layer| layer.close.as_str()).collect();
    let sample = format!("{}example{}", open, close);
    let rendered = markdown::strip_marker_pair(
        &sample,
        layers,
        &MdPair::new(target.open.clone(), target.close.clone()),
    )?;
    println!("  example: {:?} -> {:?}", sample, rendered);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    /// Test that `clap` correctly parses `ttymd styles`.
    #[test]
    fn test_parses_styles_defaults() {
        let args = StylesArgs::try_parse_from(["styles"]).expect("bare styles should parse");
        assert!(args.name.is_none());
    }

    /// Test that `clap` correctly parses the `--name` filter.
    #[test]
    fn test_parses_styles_name_filter() {
        let args = StylesArgs::try_parse_from(["styles", "--name", "strong"]).unwrap();
        assert_eq!(args.name.as_deref(), Some("strong"));
    }

    /// Test that a palette entry outside the three named styles has no
    /// Markdown target and is reported instead of borrowing another style's.
    #[test]
    fn test_print_style_rejects_unlisted_name() {
        use crate::common::style::MarkerPair;
        use std::collections::HashMap;

        let mut styles = HashMap::new();
        styles.insert(
            "sparkle".to_string(),
            vec![MarkerPair::new("\u{1b}[35m", "\u{1b}[39m")],
        );
        let palette = AnsiPalette::from_styles(styles);
        let cfg = config::Config::default();
        let err = print_style(&palette, &cfg, "sparkle").unwrap_err();
        assert!(err.to_string().contains("not found in style table"));
    }

    #[tokio::test]
    async fn test_unknown_style_name_errors() {
        let args = StylesArgs::try_parse_from(["styles", "--name", "sparkle"]).unwrap();
        let err = handle_styles(args).await.unwrap_err();
        assert!(err.to_string().contains("not found in style table"));
    }
}
