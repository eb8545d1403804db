//! Requirements manifest checks and parsing.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read the dependency specifiers from a requirements manifest.
///
/// Fails if the manifest is missing. Blank lines and `#` comments are
/// skipped; everything else is passed to pip verbatim, so no specifier
/// validation happens here.
pub fn read_specifiers(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        anyhow::bail!(
            "Manifest not found: {}. Nothing to install.",
            path.display()
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
