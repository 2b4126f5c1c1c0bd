//! Themekit configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name
pub const CONFIG_FILE: &str = "themekit.toml";

/// Top-level configuration file (themekit.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Document locations, relative to the config file
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Token document (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<String>,
    /// Group document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<String>,
    /// Component override document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<String>,
    /// Variant document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<String>,
    /// Compiled theme destination (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// A single problem with a config field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Required field is absent
    Missing(&'static str),
    /// Field is present but empty or whitespace
    Blank(&'static str),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "`paths.{field}` is required"),
            Self::Blank(field) => write!(f, "`paths.{field}` must be a non-empty path"),
        }
    }
}

/// Config validation failure, listing every offending field
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid config: {}", join_problems(.0))]
pub struct ConfigError(pub Vec<FieldError>);

fn join_problems(problems: &[FieldError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validated configuration with resolved paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub tokens: PathBuf,
    pub groups: Option<PathBuf>,
    pub components: Option<PathBuf>,
    pub variants: Option<PathBuf>,
    pub output: PathBuf,
}

impl PathsConfig {
    /// Validate fields and resolve them against `root`.
    ///
    /// All problems are collected before failing.
    pub fn validate(&self, root: &Path) -> std::result::Result<ThemeConfig, ConfigError> {
        let mut problems = Vec::new();

        let tokens = required("tokens", self.tokens.as_deref(), &mut problems);
        let output = required("output", self.output.as_deref(), &mut problems);
        let groups = optional("groups", self.groups.as_deref(), &mut problems);
        let components = optional("components", self.components.as_deref(), &mut problems);
        let variants = optional("variants", self.variants.as_deref(), &mut problems);

        match (tokens, output) {
            (Some(tokens), Some(output)) if problems.is_empty() => Ok(ThemeConfig {
                tokens: root.join(tokens),
                groups: groups.map(|p| root.join(p)),
                components: components.map(|p| root.join(p)),
                variants: variants.map(|p| root.join(p)),
                output: root.join(output),
            }),
            _ => Err(ConfigError(problems)),
        }
    }
}

fn required<'a>(
    field: &'static str,
    value: Option<&'a str>,
    problems: &mut Vec<FieldError>,
) -> Option<&'a str> {
    match value {
        None => {
            problems.push(FieldError::Missing(field));
            None
        }
        Some(v) if v.trim().is_empty() => {
            problems.push(FieldError::Blank(field));
            None
        }
        Some(v) => Some(v),
    }
}

fn optional<'a>(
    field: &'static str,
    value: Option<&'a str>,
    problems: &mut Vec<FieldError>,
) -> Option<&'a str> {
    match value {
        Some(v) if v.trim().is_empty() => {
            problems.push(FieldError::Blank(field));
            None
        }
        other => other,
    }
}

impl ConfigFile {
    /// Default layout written by `themekit init`
    pub fn new() -> Self {
        Self {
            paths: PathsConfig {
                tokens: Some("tokens.json".to_string()),
                groups: Some("groups.json".to_string()),
                components: Some("components.json".to_string()),
                variants: Some("variants.json".to_string()),
                output: Some("theme.json".to_string()),
            },
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

impl ThemeConfig {
    /// Load and validate configuration from a file or a directory containing
    /// themekit.toml. Relative paths resolve against the config's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found at {}. Run `themekit init` to create one.",
                CONFIG_FILE,
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        let root = config_path.parent().unwrap_or_else(|| Path::new("."));
        let config = file
            .paths
            .validate(root)
            .with_context(|| format!("Invalid {}", config_path.display()))?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reports_every_missing_field() {
        let paths = PathsConfig {
            groups: Some("  ".to_string()),
            ..PathsConfig::default()
        };

        let err = paths.validate(Path::new("/project")).unwrap_err();

        assert_eq!(
            err.0,
            vec![
                FieldError::Missing("tokens"),
                FieldError::Missing("output"),
                FieldError::Blank("groups"),
            ]
        );
        assert_eq!(
            err.to_string(),
            "invalid config: `paths.tokens` is required; `paths.output` is required; \
             `paths.groups` must be a non-empty path"
        );
    }

    #[test]
    fn blank_required_field_is_reported() {
        let paths = PathsConfig {
            tokens: Some("tokens.json".to_string()),
            output: Some(String::new()),
            ..PathsConfig::default()
        };

        let err = paths.validate(Path::new(".")).unwrap_err();
        assert_eq!(err.0, vec![FieldError::Blank("output")]);
    }

    #[test]
    fn resolves_paths_against_root() {
        let config = ConfigFile::new()
            .paths
            .validate(Path::new("/project"))
            .unwrap();

        assert_eq!(config.tokens, PathBuf::from("/project/tokens.json"));
        assert_eq!(config.output, PathBuf::from("/project/theme.json"));
        assert_eq!(config.variants, Some(PathBuf::from("/project/variants.json")));
    }

    #[test]
    fn parses_toml() {
        let file: ConfigFile = toml::from_str(
            r#"
            [paths]
            tokens = "design/tokens.json"
            output = "dist/theme.json"
            "#,
        )
        .unwrap();

        let config = file.paths.validate(Path::new("/p")).unwrap();
        assert_eq!(config.tokens, PathBuf::from("/p/design/tokens.json"));
        assert_eq!(config.groups, None);
    }

    #[test]
    fn default_config_round_trips() {
        let toml = ConfigFile::new().to_toml().unwrap();
        let parsed: ConfigFile = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.paths.output.as_deref(), Some("theme.json"));
    }
}
