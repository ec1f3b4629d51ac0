//! File lookup for a single (module, runcom) pair.
//!
//! Candidates are tried strictly in order and the first existing file wins.
//! A module without a fragment for a phase is normal, so a miss is `None`
//! rather than an error.
use std::path::{Path, PathBuf};

use super::runcom::Runcom;

/// Pre-generated completion caches, tried before the generic `comp` files.
const COMP_CACHE_PATTERNS: [&str; 4] = [
    "bash_comp.sh.cache",
    "comp.bash.cache",
    "sh_comp.sh.cache",
    "posix_comp.sh.cache",
];

/// Ordered file names to probe for `runcom` in `module`.
#[must_use]
pub fn candidates(runcom: &Runcom, module: &str) -> Vec<String> {
    let mut names = Vec::with_capacity(11);
    match runcom {
        Runcom::Comp => names.extend(COMP_CACHE_PATTERNS.iter().map(ToString::to_string)),
        Runcom::Lib => {
            names.push(format!("{module}.bash"));
            names.push(format!("{module}.sh"));
        }
        _ => {}
    }
    let rc = runcom.as_str();
    names.extend([
        format!("bash_{rc}.bash"),
        format!("{rc}.bash"),
        format!("sh_{rc}.sh"),
        format!("posix_{rc}.sh"),
        format!("{rc}.sh"),
    ]);
    names
}

/// Return the first candidate under `dir` that exists as a file.
#[must_use]
pub fn resolve(dir: &Path, runcom: &Runcom, module: &str) -> Option<PathBuf> {
    resolve_with(dir, runcom, module, Path::is_file)
}

/// [`resolve`] with a caller-supplied existence probe.
///
/// The probe is called once per candidate, in order, and never again after
/// it first returns `true`.
pub fn resolve_with(
    dir: &Path,
    runcom: &Runcom,
    module: &str,
    mut exists: impl FnMut(&Path) -> bool,
) -> Option<PathBuf> {
    candidates(runcom, module)
        .into_iter()
        .map(|name| dir.join(name))
        .find(|path| exists(path))
}
