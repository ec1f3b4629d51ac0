//! Module discovery: which fragment each module contributes to each phase.
//!
//! - **[`runcom`]**: phase tokens and colon-separated phase lists
//! - **[`resolver`]**: first-match lookup of one fragment inside one directory
//! - **[`walker`]**: layout detection and the ordered walk over all modules
pub mod resolver;
pub mod runcom;
pub mod walker;

use std::path::{Component, Path};

use crate::error::ConfigError;

pub use runcom::{DEFAULT_RUNCOMS, Runcom};
pub use walker::{Layout, ResolvedEntry, walk};

/// Module load order used when the configuration does not override it.
pub const DEFAULT_MODULE_ORDER: [&str; 8] = [
    "core", "os", "host", "lang", "tools", "apps", "user", "local",
];

/// [`DEFAULT_MODULE_ORDER`] as owned names.
#[must_use]
pub fn default_module_order() -> Vec<String> {
    DEFAULT_MODULE_ORDER.iter().map(ToString::to_string).collect()
}

/// Check a configured module order and drop repeated names.
///
/// Every name must be one plain directory name under the root; a repeated
/// name only counts once, at its first position.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidModule`] for an empty name, `.`, `..` or a
/// name containing a path separator, and [`ConfigError::EmptyModuleList`]
/// when no names are given.
pub fn validate_module_list(names: Vec<String>) -> Result<Vec<String>, ConfigError> {
    let mut modules: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !is_plain_dir_name(&name) {
            return Err(ConfigError::InvalidModule(name));
        }
        if !modules.contains(&name) {
            modules.push(name);
        }
    }
    if modules.is_empty() {
        return Err(ConfigError::EmptyModuleList);
    }
    Ok(modules)
}

fn is_plain_dir_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
