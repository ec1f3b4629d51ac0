//! The ordered severity scale used for filtering and tagging log lines.
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Severity of a log line, from most verbose to most severe.
///
/// The derived ordering follows declaration order, so `level >= min`
/// decides whether a line is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Fine-grained tracing.
    Trace,
    /// Debugging details.
    Debug,
    /// A step being run.
    Run,
    /// General information.
    Info,
    /// Something skipped because of dry-run mode.
    Dry,
    /// A suggestion to the user.
    Hint,
    /// Noteworthy but normal.
    Notice,
    /// A command being executed.
    Cmd,
    /// Output meant for the user.
    User,
    /// A recoverable problem.
    Warn,
    /// A short-form error.
    Err,
    /// An error.
    Error,
    /// A critical error.
    Crit,
    /// Missing functionality.
    Todo,
    /// A fatal error.
    Die,
}

impl Level {
    /// Every level, in ascending order.
    pub const ALL: [Self; 15] = [
        Self::Trace,
        Self::Debug,
        Self::Run,
        Self::Info,
        Self::Dry,
        Self::Hint,
        Self::Notice,
        Self::Cmd,
        Self::User,
        Self::Warn,
        Self::Err,
        Self::Error,
        Self::Crit,
        Self::Todo,
        Self::Die,
    ];

    /// Upper-case tag printed in front of each line.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Run => "RUN",
            Self::Info => "INFO",
            Self::Dry => "DRY",
            Self::Hint => "HINT",
            Self::Notice => "NOTICE",
            Self::Cmd => "CMD",
            Self::User => "USER",
            Self::Warn => "WARN",
            Self::Err => "ERR",
            Self::Error => "ERROR",
            Self::Crit => "CRIT",
            Self::Todo => "TODO",
            Self::Die => "DIE",
        }
    }

    /// The closest [`tracing::Level`].
    #[must_use]
    pub const fn tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Run
            | Self::Info
            | Self::Dry
            | Self::Hint
            | Self::Notice
            | Self::Cmd
            | Self::User => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Err | Self::Error | Self::Crit | Self::Todo | Self::Die => {
                tracing::Level::ERROR
            }
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}
