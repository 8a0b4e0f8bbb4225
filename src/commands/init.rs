use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::{default_config_toml, CONFIG_FILE_NAME};
use crate::io;

/// Write a default `.nac-tco.toml` into `dir`, returning its path.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    io::write_file(&config_path, &default_config_toml()?)?;
    println!("Created {}", config_path.display());

    Ok(config_path)
}
