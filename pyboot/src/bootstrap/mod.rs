//! Bootstrap module: the linear checkpoint sequence behind `pyboot`.
//!
//! Four checkpoints, each fatal on failure:
//! 1. Find a Python interpreter on PATH.
//! 2. Create the virtual environment if its activation marker is missing.
//! 3. Resolve the environment-local interpreter path.
//! 4. Check the manifest, upgrade pip, install the listed dependencies.

pub mod install;
pub mod interpreter;
pub mod manifest;
pub mod venv;

use crate::config::PybootConfig;
use anyhow::Result;
use std::path::Path;

/// Bootstrap status indicating what needs to be done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapStatus {
    /// The environment exists; only activation + install are needed.
    EnvReady,
    /// The environment must be created first.
    NeedsEnv,
}

/// Check the current bootstrap status for an environment directory.
pub fn check_status(env_dir: &Path) -> BootstrapStatus {
    if venv::is_env_ready(env_dir) {
        BootstrapStatus::EnvReady
    } else {
        BootstrapStatus::NeedsEnv
    }
}

/// Run the full bootstrap sequence.
///
/// Re-running after a successful run is safe: the creation step is skipped
/// and only activation + install happen again.
pub fn run(config: &PybootConfig) -> Result<()> {
    eprintln!("[1/4] Locating Python interpreter...");
    let interpreter = interpreter::discover()?;
    match interpreter::version_string(&interpreter) {
        Some(version) => eprintln!("  Using {} ({})", interpreter.display(), version),
        None => eprintln!("  Using {}", interpreter.display()),
    }

    eprintln!("[2/4] Checking virtual environment...");
    let env_dir = &config.env_dir;
    let created = match check_status(env_dir) {
        BootstrapStatus::EnvReady => {
            eprintln!("  Environment already exists at {}", env_dir.display());
            false
        }
        BootstrapStatus::NeedsEnv => {
            venv::create_venv(&interpreter, env_dir)?;
            true
        }
    };

    let result = activate_and_install(config);

    // Only an environment this run created is ever cleaned up
    if result.is_err() && created && config.clean_on_failure {
        eprintln!(
            "  Removing partially set up environment at {}...",
            env_dir.display()
        );
        if let Err(e) = std::fs::remove_dir_all(env_dir) {
            eprintln!("  Warning: cleanup failed: {}", e);
        }
    }

    result
}

/// Checkpoints 3 and 4: resolve environment-local paths and install.
fn activate_and_install(config: &PybootConfig) -> Result<()> {
    let env_dir = &config.env_dir;

    eprintln!("[3/4] Activating environment...");
    let marker = venv::activation_marker(env_dir);
    if !marker.exists() {
        anyhow::bail!(
            "Environment at {} has no activation marker ({}); creation did not produce the expected layout",
            env_dir.display(),
            marker.display()
        );
    }
    let venv_python = venv::venv_python(env_dir);
    eprintln!("  Using environment interpreter {}", venv_python.display());

    eprintln!("[4/4] Installing dependencies from {}...", config.manifest.display());
    let specifiers = manifest::read_specifiers(&config.manifest)?;
    eprintln!("  {} package(s) listed", specifiers.len());

    eprintln!("  Upgrading pip...");
    install::upgrade_pip(&venv_python)?;

    eprintln!("  Installing requirements...");
    install::install_manifest(&venv_python, &config.manifest)?;

    eprintln!();
    eprintln!("Setup complete.");
    Ok(())
}
