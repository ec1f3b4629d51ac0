//! Level-filtered logger that forwards to [`tracing`].
use super::level::Level;

/// Generate one convenience method per level.
macro_rules! level_methods {
    ($($method:ident => $level:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Log a message at [`Level::", stringify!($level), "`].")]
            pub fn $method(&self, msg: &str) {
                self.log(Level::$level, msg);
            }
        )+
    };
}

/// Logger carrying the minimum level chosen on the command line.
///
/// Lines below the minimum are dropped before reaching `tracing`; the rest
/// are emitted with a `tag` field that the console formatter prints in front
/// of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    min_level: Level,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl Logger {
    /// Create a logger that shows `min_level` and above.
    #[must_use]
    pub const fn new(min_level: Level) -> Self {
        Self { min_level }
    }

    /// The configured minimum level.
    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// Whether a line at `level` would be shown.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Log `msg` at `level` if it passes the filter.
    pub fn log(&self, level: Level, msg: &str) {
        if !self.enabled(level) {
            return;
        }
        let tag = level.tag();
        match level {
            Level::Trace => tracing::trace!(tag, "{msg}"),
            Level::Debug => tracing::debug!(tag, "{msg}"),
            Level::Warn => tracing::warn!(tag, "{msg}"),
            Level::Err | Level::Error | Level::Crit | Level::Todo | Level::Die => {
                tracing::error!(tag, "{msg}");
            }
            _ => tracing::info!(tag, "{msg}"),
        }
    }

    level_methods!(
        trace => Trace,
        debug => Debug,
        run => Run,
        info => Info,
        dry => Dry,
        hint => Hint,
        notice => Notice,
        cmd => Cmd,
        user => User,
        warn => Warn,
        err => Err,
        error => Error,
        crit => Crit,
        todo => Todo,
        die => Die,
    );
}
