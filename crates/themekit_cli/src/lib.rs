//! Themekit CLI library
//!
//! File-system glue around the `themekit` compiler: config loading, JSON
//! documents, authoring commands and the build step.

pub mod authoring;
pub mod config;
pub mod project;
pub mod store;

use anyhow::{Context, Result};
use themekit::{compile, ComponentOverride, CompiledTheme, Group, ThemeSources, Token, Variant};

use crate::config::ThemeConfig;

/// Compile the configured documents and write the theme to `config.output`.
pub fn build(config: &ThemeConfig) -> Result<CompiledTheme> {
    let tokens: Vec<Token> = store::read_json(&config.tokens)?;
    let groups: Option<Vec<Group>> = store::read_optional(config.groups.as_deref())?;
    let components: Option<Vec<ComponentOverride>> =
        store::read_optional(config.components.as_deref())?;
    let variants: Option<Vec<Variant>> = store::read_optional(config.variants.as_deref())?;

    let sources = ThemeSources {
        tokens: &tokens,
        groups: groups.as_deref(),
        components: components.as_deref(),
        variants: variants.as_deref(),
    };
    let theme = compile(sources).context("Failed to compile theme")?;

    store::write_json(&config.output, &theme)?;
    tracing::info!(
        "Wrote theme with {} tokens to {}",
        tokens.len(),
        config.output.display()
    );
    Ok(theme)
}
