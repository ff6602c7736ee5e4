//! # TtyMD Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/ttymd
//!
//! ## Overview
//!
//! This module implements the configuration system for TtyMD, handling loading,
//! merging, validation, and access to configuration data. It supports a multi-level
//! configuration approach that combines defaults, user settings, and project-specific
//! overrides.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from multiple sources in order of precedence
//! - Configuration is validated for correctness before use
//! - Structured data models ensure type safety
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.ttymd.toml` in current directory or ancestors
//! 2. User-specific `~/.config/ttymd/config.toml`
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [convert]
//! links = true
//! html_entities = true
//! styles = true
//!
//! # Render the 'strong' style with underscores instead of asterisks.
//! [markdown.strong]
//! open = "__"
//! close = "__"
//! ```
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config()?;
//!
//! // Access pass toggles
//! let links_enabled = cfg.convert.links;
//!
//! // Access the Markdown target for the 'input' style
//! let input_md = &cfg.markdown.input;
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::core::error::{Result, TtymdError};
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub markdown: MarkdownTargets,
}

/// Toggles for the independent conversion passes (`ttymd convert`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Convert the named terminal styles to Markdown markers.
    #[serde(default = "default_pass_enabled")]
    pub styles: bool,
    /// Rewrap bare URLs as Markdown links and escape numeric footnote brackets.
    #[serde(default = "default_pass_enabled")]
    pub links: bool,
    /// Escape `<token>` constructs outside inline code spans as HTML entities.
    #[serde(default = "default_pass_enabled")]
    pub html_entities: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            styles: default_pass_enabled(),
            links: default_pass_enabled(),
            html_entities: default_pass_enabled(),
        }
    }
}

/// The Markdown marker pair each named terminal style converts to.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MarkdownTargets {
    /// Target for the inline-code-like `input` style.
    #[serde(default = "default_input_target")]
    pub input: MdPairConfig,
    /// Target for the yellow `accent` style. Empty markers mean the style is
    /// stripped without adding any visible formatting.
    #[serde(default = "default_accent_target")]
    pub accent: MdPairConfig,
    /// Target for the bold `strong` style.
    #[serde(default = "default_strong_target")]
    pub strong: MdPairConfig,
}

impl Default for MarkdownTargets {
    fn default() -> Self {
        MarkdownTargets {
            input: default_input_target(),
            accent: default_accent_target(),
            strong: default_strong_target(),
        }
    }
}

/// A configurable open/close Markdown marker pair.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MdPairConfig {
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub close: String,
}

// --- Default value functions ---
fn default_pass_enabled() -> bool {
    true
}
fn default_input_target() -> MdPairConfig {
    MdPairConfig {
        open: "`".to_string(),
        close: "`".to_string(),
    }
}
fn default_accent_target() -> MdPairConfig {
    MdPairConfig {
        open: String::new(),
        close: String::new(),
    }
}
fn default_strong_target() -> MdPairConfig {
    MdPairConfig {
        open: "**".to_string(),
        close: "**".to_string(),
    }
}

/// The expected name for the project-specific configuration file.
const PROJECT_CONFIG_FILENAME: &str = ".ttymd.toml";

/// Loads the effective configuration: user config overlaid by project config,
/// validated before use.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "TtyMD", "ttymd") {
        let config_dir = proj_dirs.config_dir();
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.ttymd.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        let git_dir = path.join(".git");
        if project_config.exists() && project_config.is_file() {
            return Ok(Some(project_config));
        }
        if git_dir.exists() && git_dir.is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Merges user and project configuration. A project value wins whenever it
/// differs from the built-in default, mirroring the per-field precedence of
/// the pass toggles and Markdown targets.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.convert.styles = if project_cfg.convert.styles != default_pass_enabled() {
        project_cfg.convert.styles
    } else {
        user.convert.styles
    };
    merged.convert.links = if project_cfg.convert.links != default_pass_enabled() {
        project_cfg.convert.links
    } else {
        user.convert.links
    };
    merged.convert.html_entities = if project_cfg.convert.html_entities != default_pass_enabled() {
        project_cfg.convert.html_entities
    } else {
        user.convert.html_entities
    };
    merged.markdown.input = if project_cfg.markdown.input != default_input_target() {
        project_cfg.markdown.input
    } else {
        user.markdown.input
    };
    merged.markdown.accent = if project_cfg.markdown.accent != default_accent_target() {
        project_cfg.markdown.accent
    } else {
        user.markdown.accent
    };
    merged.markdown.strong = if project_cfg.markdown.strong != default_strong_target() {
        project_cfg.markdown.strong
    } else {
        user.markdown.strong
    };
    merged
}

/// Validates the merged configuration. Configured Markdown markers must not
/// contain control characters: a marker with an embedded escape byte would
/// re-introduce the terminal sequences the converter exists to remove.
fn validate_config(config: &Config) -> Result<()> {
    for (name, pair) in [
        ("input", &config.markdown.input),
        ("accent", &config.markdown.accent),
        ("strong", &config.markdown.strong),
    ] {
        if pair.open.chars().any(char::is_control) || pair.close.chars().any(char::is_control) {
            return Err(TtymdError::Config(format!(
                "Markdown markers for style '{}' must not contain control characters",
                name
            )))?;
        }
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert!(cfg.convert.styles);
        assert!(cfg.convert.links);
        assert!(cfg.convert.html_entities);
        assert_eq!(cfg.markdown.input.open, "`");
        assert_eq!(cfg.markdown.accent.open, "");
        assert_eq!(cfg.markdown.strong.close, "**");
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
            [convert]
            links = false

            [markdown.strong]
            open = "__"
            close = "__"
        "#;
        let cfg: Config = toml::from_str(toml_str).expect("Partial config should parse");
        assert!(!cfg.convert.links);
        assert!(cfg.convert.styles); // untouched toggles keep their defaults
        assert_eq!(cfg.markdown.strong.open, "__");
        assert_eq!(cfg.markdown.input.open, "`");
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let toml_str = r#"
            [convert]
            colours = true
        "#;
        let result: std::result::Result<Config, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let mut user = Config::default();
        user.convert.links = false;
        user.markdown.strong = MdPairConfig {
            open: "__".into(),
            close: "__".into(),
        };

        let mut project = Config::default();
        project.convert.styles = false;

        let merged = merge_configs(user, Some(project));
        // Project changed `styles`, so its value wins.
        assert!(!merged.convert.styles);
        // Project left `links` and `markdown.strong` at defaults, so the user
        // settings survive the merge.
        assert!(!merged.convert.links);
        assert_eq!(merged.markdown.strong.open, "__");
    }

    #[test]
    fn test_merge_without_project_config() {
        let mut user = Config::default();
        user.convert.html_entities = false;
        let merged = merge_configs(user, None);
        assert!(!merged.convert.html_entities);
    }

    #[test]
    fn test_validate_rejects_control_characters() {
        let mut cfg = Config::default();
        cfg.markdown.input = MdPairConfig {
            open: "\u{1b}[32m".into(),
            close: "`".into(),
        };
        assert!(validate_config(&cfg).is_err());
        assert!(validate_config(&Config::default()).is_ok());
    }
}
