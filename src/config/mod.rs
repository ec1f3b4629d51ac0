//! Effective settings: command-line flags, environment and the optional
//! `shellenv.toml` in the lookup root.
pub mod toml_loader;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cli::GlobalOpts;
use crate::error::ConfigError;
use crate::logging::Logger;
use crate::modules::{self, DEFAULT_RUNCOMS};

/// Name of the optional configuration file inside the lookup root.
pub const CONFIG_FILE: &str = "shellenv.toml";

/// Placeholder in `path_prepend` entries replaced by the lookup root.
pub const ROOT_PLACEHOLDER: &str = "{root}";

/// Contents of `shellenv.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Module load order.
    pub modules: Option<Vec<String>>,
    /// Directories prepended to `PATH` by generated code.
    pub path_prepend: Option<Vec<String>>,
    /// Runcom list used when a command is given none.
    pub runcoms: Option<String>,
}

/// Everything a command needs, built once in `main`.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding one subdirectory per module.
    pub root: PathBuf,
    /// Module load order.
    pub modules: Vec<String>,
    /// Directories prepended to `PATH`, in order.
    pub path_prepend: Vec<String>,
    /// Runcom list used when a command is given none.
    pub default_runcoms: String,
    /// Dry-run flag.
    pub dry_run: bool,
    /// Force flag.
    pub force: bool,
    /// Level-filtered logger.
    pub log: Logger,
}

impl Settings {
    /// Resolve the root directory and merge `shellenv.toml` over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory does not exist, the config file
    /// cannot be parsed, or it declares an empty module list.
    pub fn load(global: &GlobalOpts, log: Logger) -> Result<Self> {
        let root = resolve_root(
            global.root.as_deref(),
            std::env::var_os("XDG_CONFIG_HOME"),
            std::env::var_os("HOME"),
        );
        let root = dunce::canonicalize(&root)
            .map_err(|_| ConfigError::RootNotFound(root.display().to_string()))?;
        if !root.is_dir() {
            return Err(ConfigError::RootNotFound(root.display().to_string()).into());
        }
        log.debug(&format!("root: {}", root.display()));

        let file: FileConfig = toml_loader::load_config(&root.join(CONFIG_FILE))
            .with_context(|| format!("loading {CONFIG_FILE}"))?;

        let settings = Self::from_parts(root, file, global.dry_run, global.force, log)?;
        log.debug(&format!("modules: {}", settings.modules.join(" ")));
        if settings.dry_run {
            log.dry("dry-run mode enabled");
        }
        Ok(settings)
    }

    /// Combine an already resolved root with a parsed config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyModuleList`] if the file sets `modules = []`,
    /// or [`ConfigError::InvalidModule`] for a name that is not a single
    /// directory under the root.
    pub fn from_parts(
        root: PathBuf,
        file: FileConfig,
        dry_run: bool,
        force: bool,
        log: Logger,
    ) -> Result<Self, ConfigError> {
        let modules = modules::validate_module_list(
            file.modules.unwrap_or_else(modules::default_module_order),
        )?;
        let root_str = root.display().to_string();
        let path_prepend = file
            .path_prepend
            .unwrap_or_else(default_path_prepend)
            .into_iter()
            .map(|dir| dir.replace(ROOT_PLACEHOLDER, &root_str))
            .collect();
        Ok(Self {
            root,
            modules,
            path_prepend,
            default_runcoms: file.runcoms.unwrap_or_else(|| DEFAULT_RUNCOMS.to_string()),
            dry_run,
            force,
            log,
        })
    }
}

/// The three directories generated code puts in front of `PATH`.
#[must_use]
pub fn default_path_prepend() -> Vec<String> {
    vec![
        "$HOME/.local/bin".to_string(),
        "$HOME/bin".to_string(),
        format!("{ROOT_PLACEHOLDER}/bin"),
    ]
}

/// Pick the lookup root: explicit `--root`/`SHELLENV_ROOT`, then
/// `$XDG_CONFIG_HOME/shell`, then `$HOME/.config/shell`, then `./shell`.
#[must_use]
pub fn resolve_root(
    explicit: Option<&Path>,
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> PathBuf {
    if let Some(root) = explicit {
        return root.to_path_buf();
    }
    let config_home = xdg_config_home
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            home.filter(|v| !v.is_empty())
                .map(|h| PathBuf::from(h).join(".config"))
        });
    config_home.map_or_else(|| PathBuf::from("shell"), |dir| dir.join("shell"))
}
