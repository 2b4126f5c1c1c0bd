//! Project scaffolding

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::{ConfigFile, CONFIG_FILE};

/// Create a themekit project: config file plus empty documents.
///
/// Existing documents are left alone; an existing config is an error.
pub fn create_project(path: &Path) -> Result<()> {
    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    fs::create_dir_all(path)?;

    let config = ConfigFile::new();
    fs::write(&config_path, config.to_toml()?)?;

    let paths = &config.paths;
    for document in [&paths.tokens, &paths.groups, &paths.components, &paths.variants]
        .into_iter()
        .flatten()
    {
        let document_path = path.join(document);
        if !document_path.exists() {
            fs::write(&document_path, "[]\n")?;
        }
    }

    tracing::info!("Created themekit project in {}", path.display());
    Ok(())
}
