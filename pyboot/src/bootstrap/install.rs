//! Package installation via the environment-local pip.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Upgrade pip itself inside the environment.
pub fn upgrade_pip(venv_python: &Path) -> Result<()> {
    run_pip(
        venv_python,
        &["install", "--upgrade", "pip"],
        "upgrade pip",
    )
}

/// Install every dependency listed in the manifest into the environment.
pub fn install_manifest(venv_python: &Path, manifest: &Path) -> Result<()> {
    let manifest_arg = manifest.to_string_lossy();
    run_pip(
        venv_python,
        &["install", "-r", &manifest_arg],
        "install requirements",
    )
}

/// Run pip through the environment's own interpreter.
///
/// Using `python -m pip` instead of the pip script keeps the invocation tied
/// to the environment even before pip's own shebang is rewritten.
fn run_pip(venv_python: &Path, args: &[&str], what: &str) -> Result<()> {
    let output = Command::new(venv_python)
        .args(["-m", "pip"])
        .args(args)
        .output()
        .with_context(|| format!("Failed to {}", what))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("pip {} failed: {}", args.join(" "), stderr.trim());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_pip_bad_interpreter() {
        let result = upgrade_pip(Path::new("/nonexistent/venv/bin/python"));
        assert!(result.is_err());
    }

    #[test]
    fn test_install_manifest_bad_interpreter() {
        let result = install_manifest(
            Path::new("/nonexistent/venv/bin/python"),
            Path::new("requirements.txt"),
        );
        assert!(result.is_err());
    }
}
