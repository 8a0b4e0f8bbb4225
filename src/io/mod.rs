//! File system helpers for the command layer.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Create (or truncate) a report file, creating parent directories first.
pub fn create_output_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))
}
