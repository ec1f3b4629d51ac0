//! Current-shell detection and required-program checks.
use std::path::PathBuf;

use crate::error::DependencyError;

/// Shell assumed when detection finds nothing usable.
pub const FALLBACK_SHELL: &str = "bash";

/// Shell names accepted from the parent process.
const KNOWN_SHELLS: [&str; 9] = [
    "bash", "zsh", "sh", "dash", "ksh", "mksh", "yash", "ash", "fish",
];

/// Detect the shell that invoked us.
///
/// Prefers the parent process when it is a known shell (so
/// `eval "$(shellenv gen)"` from zsh targets zsh even when the login shell
/// is bash), then the basename of `$SHELL`, then [`FALLBACK_SHELL`].
#[must_use]
pub fn detect_shell() -> String {
    detect_shell_from(parent_process_name(), std::env::var("SHELL").ok())
}

/// [`detect_shell`] over explicit inputs.
#[must_use]
pub fn detect_shell_from(parent: Option<String>, shell_env: Option<String>) -> String {
    parent
        .as_deref()
        .and_then(shell_name)
        .filter(|name| KNOWN_SHELLS.contains(&name.as_str()))
        .or_else(|| shell_env.as_deref().and_then(shell_name))
        .unwrap_or_else(|| FALLBACK_SHELL.to_string())
}

/// Reduce `/usr/bin/bash`, `-bash` or `bash\n` to `bash`.
fn shell_name(raw: &str) -> Option<String> {
    let base = raw.trim().rsplit('/').next()?;
    let name = base.trim_start_matches('-');
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(target_os = "linux")]
fn parent_process_name() -> Option<String> {
    let ppid = std::os::unix::process::parent_id();
    std::fs::read_to_string(format!("/proc/{ppid}/comm")).ok()
}

#[cfg(not(target_os = "linux"))]
fn parent_process_name() -> Option<String> {
    None
}

/// Locate `program` on `PATH`.
///
/// # Errors
///
/// Returns [`DependencyError::Missing`] if it cannot be found.
pub fn require_program(program: &str) -> Result<PathBuf, DependencyError> {
    which::which(program).map_err(|_| DependencyError::Missing(program.to_string()))
}
