//! Runcom (shell lifecycle phase) tokens and colon-separated runcom lists.
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Runcom list used when the caller does not name one.
pub const DEFAULT_RUNCOMS: &str = "lib:env:interactive:login:comp";

/// A named phase of shell startup for which a module may ship a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Runcom {
    /// Environment variables, sourced by every shell.
    Env,
    /// Login shell setup.
    Login,
    /// Interactive shell setup (prompt, aliases, key bindings).
    Interactive,
    /// Completion definitions, including pre-generated cache files.
    Comp,
    /// Shared function libraries, also looked up by module name.
    Lib,
    /// Any other phase; resolved with the generic patterns only.
    Custom(String),
}

impl Runcom {
    /// The token as written on the command line and in file names.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Env => "env",
            Self::Login => "login",
            Self::Interactive => "interactive",
            Self::Comp => "comp",
            Self::Lib => "lib",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for Runcom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Runcom {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
        if !valid {
            return Err(ConfigError::InvalidRuncom(s.to_string()));
        }
        Ok(match s {
            "env" => Self::Env,
            "login" => Self::Login,
            "interactive" => Self::Interactive,
            "comp" => Self::Comp,
            "lib" => Self::Lib,
            other => Self::Custom(other.to_string()),
        })
    }
}

/// Parse a colon-separated runcom list, keeping caller order.
///
/// Empty tokens are skipped and a repeated token only counts once, at its
/// first position.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidRuncom`] for a token outside `[a-z0-9_-]`,
/// or [`ConfigError::EmptyRuncomList`] when nothing is left after skipping.
pub fn parse_list(list: &str) -> Result<Vec<Runcom>, ConfigError> {
    let mut runcoms: Vec<Runcom> = Vec::new();
    for token in list.split(':').map(str::trim).filter(|t| !t.is_empty()) {
        let runcom = token.parse::<Runcom>()?;
        if !runcoms.contains(&runcom) {
            runcoms.push(runcom);
        }
    }
    if runcoms.is_empty() {
        return Err(ConfigError::EmptyRuncomList(list.to_string()));
    }
    Ok(runcoms)
}
