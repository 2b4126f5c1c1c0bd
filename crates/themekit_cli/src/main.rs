//! Themekit CLI
//!
//! Commands:
//! - `init`: scaffold themekit.toml and empty documents
//! - `build`: compile the configured documents into a theme
//! - `add-token`, `add-group`, `add-variant`: append new records

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use themekit::{ComponentKind, GroupOverrides, TokenKind, TokenOverrides, VariantOverrides};
use themekit_cli::authoring::{self, parse_raw_value, parse_style_assignment};
use themekit_cli::config::{ThemeConfig, CONFIG_FILE};
use themekit_cli::{build, project};
use tracing_subscriber::EnvFilter;

/// Compile design tokens into a theme
#[derive(Parser, Debug)]
#[command(name = "themekit")]
#[command(about = "Compile design tokens into a theme")]
#[command(version)]
struct Cli {
    /// Config file, or a directory containing themekit.toml
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create themekit.toml and empty token documents
    Init {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Compile the theme and write it to the configured output
    Build,

    /// Append a new token
    AddToken {
        /// Token kind (color, spacing, font-size, ...)
        kind: TokenKind,
        /// Token name (named kinds only)
        #[arg(long)]
        name: Option<String>,
        /// Token value
        #[arg(long)]
        value: Option<String>,
        /// Group id, repeatable
        #[arg(long = "group")]
        groups: Vec<String>,
        /// Explicit id instead of a generated one
        #[arg(long)]
        id: Option<String>,
    },

    /// Append a new token group
    AddGroup {
        /// Kind of the grouped tokens
        kind: TokenKind,
        #[arg(long)]
        name: Option<String>,
        /// Member token id, repeatable
        #[arg(long = "member")]
        members: Vec<String>,
    },

    /// Append a new component variant
    AddVariant {
        /// Component kind (button, text, card, ...)
        component: ComponentKind,
        #[arg(long)]
        name: Option<String>,
        /// Style assignment `property=value`, repeatable
        #[arg(long = "style")]
        styles: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Command::Init { path } = &cli.command {
        return project::create_project(path);
    }

    let config = ThemeConfig::load(&cli.config)?;

    match cli.command {
        Command::Init { .. } => Ok(()),
        Command::Build => build(&config).map(|_| ()),
        Command::AddToken {
            kind,
            name,
            value,
            groups,
            id,
        } => {
            let overrides = TokenOverrides {
                id,
                name,
                value: value.as_deref().map(parse_raw_value),
                groups: (!groups.is_empty()).then_some(groups),
            };
            authoring::add_token(&config, kind, overrides).map(|_| ())
        }
        Command::AddGroup {
            kind,
            name,
            members,
        } => {
            let overrides = GroupOverrides {
                id: None,
                name,
                members: Some(members),
            };
            authoring::add_group(&config, kind, overrides).map(|_| ())
        }
        Command::AddVariant {
            component,
            name,
            styles,
        } => {
            let mut overrides = VariantOverrides {
                name,
                ..VariantOverrides::default()
            };
            for assignment in &styles {
                let (property, value) = parse_style_assignment(assignment)?;
                overrides = overrides.style(property, value);
            }
            authoring::add_variant(&config, component, overrides).map(|_| ())
        }
    }
}
