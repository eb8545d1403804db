//! Python interpreter discovery on PATH.

use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Interpreter names probed in order of preference.
pub const CANDIDATES: &[&str] = &["python3", "python"];

/// Errors related to interpreter discovery.
#[derive(Debug, Error)]
pub enum InterpreterError {
    #[error("No working Python interpreter found on PATH (tried: {tried}). Install Python 3 and retry.")]
    NotFound { tried: String },
}

/// Find a working Python interpreter on PATH.
///
/// A candidate counts only if it both resolves on PATH and runs
/// `--version` successfully; a broken `python3` falls through to `python`.
pub fn discover() -> Result<PathBuf, InterpreterError> {
    discover_from(CANDIDATES)
}

fn discover_from(candidates: &[&str]) -> Result<PathBuf, InterpreterError> {
    for name in candidates {
        if let Ok(path) = which::which(name) {
            if runs(&path) {
                return Ok(path);
            }
        }
    }

    Err(InterpreterError::NotFound {
        tried: candidates.join(", "),
    })
}

/// Check that an interpreter executes at all.
fn runs(path: &Path) -> bool {
    Command::new(path)
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Get the interpreter's version line for operator output.
pub fn version_string(path: &Path) -> Option<String> {
    let output = Command::new(path).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }

    // python2 printed the version on stderr; cover both streams
    let text = if output.stdout.is_empty() {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::from_utf8_lossy(&output.stdout).to_string()
    };

    Some(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_no_candidates() {
        let err = discover_from(&[]).unwrap_err();
        assert!(err.to_string().contains("No working Python interpreter"));
    }

    #[test]
    fn test_discover_nonexistent_candidate() {
        let err = discover_from(&["pyboot-test-no-such-interpreter"]).unwrap_err();
        assert!(err.to_string().contains("pyboot-test-no-such-interpreter"));
    }

    #[test]
    fn test_runs_nonexistent_path() {
        assert!(!runs(Path::new("/nonexistent/python3")));
    }

    #[test]
    fn test_version_string_nonexistent_path() {
        assert!(version_string(Path::new("/nonexistent/python3")).is_none());
    }
}
