//! Virtual environment layout checks and creation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the activation marker inside an environment directory.
///
/// The marker's presence is what signals a usable environment; the directory
/// alone is not enough.
pub fn activation_marker(env_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        env_dir.join("Scripts").join("activate")
    } else {
        env_dir.join("bin").join("activate")
    }
}

/// Get the path to the Python executable inside an environment directory.
pub fn venv_python(env_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        env_dir.join("Scripts").join("python.exe")
    } else {
        env_dir.join("bin").join("python")
    }
}

/// Get the path to pip inside an environment directory.
pub fn venv_pip(env_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        env_dir.join("Scripts").join("pip.exe")
    } else {
        env_dir.join("bin").join("pip")
    }
}

/// Check if the environment exists and was fully initialized.
pub fn is_env_ready(env_dir: &Path) -> bool {
    activation_marker(env_dir).exists()
}

/// Create a virtual environment at `env_dir` using the given interpreter.
pub fn create_venv(interpreter: &Path, env_dir: &Path) -> Result<()> {
    eprintln!("  Creating virtual environment at {}...", env_dir.display());

    let output = Command::new(interpreter)
        .args(["-m", "venv"])
        .arg(env_dir)
        .output()
        .context("Failed to run venv creation")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("Failed to create venv: {}", stderr.trim());
    }

    eprintln!("  Virtual environment created.");
    Ok(())
}
