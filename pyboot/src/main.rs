//! pyboot - Set up a Python project checkout: venv + requirements install.

mod bootstrap;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::PybootConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pyboot")]
#[command(about = "Create a Python virtual environment and install requirements", long_about = None)]
#[command(version)]
struct Args {
    /// Virtual environment directory (default: venv)
    #[arg(long)]
    env_dir: Option<PathBuf>,

    /// Requirements manifest to install (default: requirements.txt)
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Remove an environment this run created if a later step fails
    #[arg(long, default_value_t = false)]
    clean_on_failure: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let mut config = PybootConfig::load().context("Failed to load configuration")?;

    // CLI flags win over the config file
    if let Some(dir) = args.env_dir {
        config.env_dir = dir;
    }
    if let Some(manifest) = args.manifest {
        config.manifest = manifest;
    }
    if args.clean_on_failure {
        config.clean_on_failure = true;
    }

    bootstrap::run(&config)
}
