use std::fs;
use std::path::{Path, PathBuf};

use super::core::{TcoConfig, CONFIG_FILE_NAME};
use crate::errors::{Error, Result};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse config contents and validate the `[organization]` section.
pub fn parse_config(contents: &str) -> Result<TcoConfig> {
    let config = toml::from_str::<TcoConfig>(contents)?;

    if let Some(organization) = &config.organization {
        organization.clone().validate()?;
    }

    Ok(config)
}

/// Load an explicitly named config file. Any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<TcoConfig> {
    let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Load a config file found while searching, or `None` if it is missing or
/// unusable.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<TcoConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Missing files are the normal case while walking up the tree
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "Failed to read config file"
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %e,
                "Ignoring invalid config file, using defaults"
            );
            None
        }
    }
}

/// `start` followed by its parents, at most `max_depth` directories.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        parent.pop().then_some(parent)
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the first usable config file.
pub fn find_config_from(start: PathBuf) -> Option<TcoConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

/// Load `.nac-tco.toml` from the current directory or an ancestor, falling
/// back to defaults.
pub fn load_config() -> TcoConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to get current directory, using default config");
            return TcoConfig::default();
        }
    };

    find_config_from(current).unwrap_or_else(|| {
        tracing::debug!(
            "No config found after checking {} directories, using default config",
            MAX_TRAVERSAL_DEPTH
        );
        TcoConfig::default()
    })
}

/// Default config file contents written by `nac-tco init`.
pub fn default_config_toml() -> Result<String> {
    let body = toml::to_string_pretty(&TcoConfig::with_defaults())
        .map_err(|e| Error::Configuration(e.to_string()))?;
    Ok(format!("# nac-tco configuration\n\n{body}"))
}
