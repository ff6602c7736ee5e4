//! # TtyMD Convert Command
//!
//! File: cli/src/commands/convert/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/ttymd
//!
//! ## Overview
//!
//! This module implements the `ttymd convert` command: it reads captured
//! terminal output from a file or stdin, runs the conversion pipeline, and
//! writes Markdown-safe text to stdout or a file.
//!
//! ## Architecture
//!
//! The module is organized into two components:
//! - this file: argument definitions, I/O, and handler orchestration
//! - `pipeline.rs`: composition of the conversion passes
//!
//! The handler resolves effective pass toggles by overlaying CLI flags on
//! the loaded configuration, builds a `MarkdownConverter` from the default
//! ANSI palette and the configured Markdown targets, and delegates the text
//! transformation to the pipeline.
//!
//! ## Examples
//!
//! Usage examples:
//!
//! ```bash
//! # Convert captured help output to Markdown on stdout
//! mytool --help | ttymd convert
//!
//! # Convert a capture file into a docs page
//! ttymd convert capture.txt -o docs/help.md
//!
//! # Keep raw angle brackets (the target renderer is not HTML-based)
//! ttymd convert --no-html-escape capture.txt
//! ```
//!
use crate::common::markdown::MarkdownConverter;
use crate::common::style::{AnsiPalette, MdPair};
use crate::core::config::{self, Config};
use crate::core::error::{Result, TtymdError};
use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, info};

/// Composition of the conversion passes.
pub mod pipeline;

/// # Convert Command Arguments (`ConvertArgs`)
///
/// Defines the command-line arguments accepted by the `ttymd convert`
/// command, parsed using `clap`. Flags only ever *disable* passes; enabling
/// is the default and may also come from configuration.
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Input file containing captured terminal output.
    /// Reads stdin when omitted or when given as `-`.
    pub file: Option<String>,

    /// Write the converted Markdown to this file instead of stdout.
    /// Supports `~` expansion.
    #[arg(long, short)]
    pub output: Option<String>,

    /// Skip converting the named terminal styles to Markdown markers.
    #[arg(long)]
    pub no_styles: bool,

    /// Skip URL linkification and footnote-bracket escaping.
    #[arg(long)]
    pub no_links: bool,

    /// Skip escaping `<token>` constructs as HTML entities.
    #[arg(long)]
    pub no_html_escape: bool,
}

/// # Handle Convert Command (`handle_convert`)
///
/// The main entry point function for the `ttymd convert` command.
///
/// It performs the following steps:
/// 1. Loads the merged configuration and overlays the CLI pass flags.
/// 2. Reads the input text (file or stdin).
/// 3. Builds the style converter from the ANSI palette and the configured
///    Markdown targets.
/// 4. Runs the pipeline and writes the result (stdout or `--output` file).
///
/// ## Arguments
///
/// * `args`: The parsed `ConvertArgs` struct.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` on success, or an `Err` if configuration
///   loading, converter construction, or I/O fails.
pub async fn handle_convert(args: ConvertArgs) -> Result<()> {
    info!("Handling convert command with args: {:?}", args);

    let cfg = config::load_config()?;
    let passes = effective_passes(&args, &cfg);

    let input = read_input(args.file.as_deref()).await?;
    debug!("Read {} bytes of input", input.len());

    let palette = AnsiPalette::default();
    let converter = MarkdownConverter::with_targets(&palette, style_targets(&cfg))?;

    let converted = pipeline::run(&input, &converter, &passes);

    write_output(args.output.as_deref(), &converted).await?;
    Ok(())
}

/// Overlays the CLI disable-flags on the configured pass toggles.
fn effective_passes(args: &ConvertArgs, cfg: &Config) -> pipeline::PassToggles {
    pipeline::PassToggles {
        styles: cfg.convert.styles && !args.no_styles,
        links: cfg.convert.links && !args.no_links,
        html_entities: cfg.convert.html_entities && !args.no_html_escape,
    }
}

/// Maps the configured Markdown marker pairs onto the converter's targets.
fn style_targets(cfg: &Config) -> crate::common::markdown::StyleTargets {
    crate::common::markdown::StyleTargets {
        input: MdPair::new(cfg.markdown.input.open.clone(), cfg.markdown.input.close.clone()),
        accent: MdPair::new(
            cfg.markdown.accent.open.clone(),
            cfg.markdown.accent.close.clone(),
        ),
        strong: MdPair::new(
            cfg.markdown.strong.open.clone(),
            cfg.markdown.strong.close.clone(),
        ),
    }
}

/// Reads the input text from the given file path, or from stdin when the
/// path is absent or `-`.
async fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) if path != "-" => {
            let expanded = shellexpand::tilde(path).into_owned();
            tokio::fs::read_to_string(&expanded)
                .await
                .with_context(|| format!("Failed to read input file: {}", expanded))
        }
        _ => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}

/// Writes the converted text to the given file path, or to stdout when no
/// path is set. Output written to a file is reported at the INFO level.
async fn write_output(output: Option<&str>, converted: &str) -> Result<()> {
    match output {
        Some(path) => {
            let expanded = shellexpand::tilde(path).into_owned();
            if tokio::fs::metadata(&expanded)
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false)
            {
                return Err(TtymdError::FileSystem(format!(
                    "Output path is a directory: {}",
                    expanded
                )))?;
            }
            tokio::fs::write(&expanded, converted)
                .await
                .with_context(|| format!("Failed to write output file: {}", expanded))?;
            info!("Wrote converted Markdown to {}", expanded);
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(converted.as_bytes())
                .await
                .context("Failed to write to stdout")?;
            stdout.flush().await.context("Failed to flush stdout")?;
        }
    }
    Ok(())
}
