//! Logging infrastructure: the level scale, the filtering [`Logger`] and the
//! stderr console subscriber.

mod level;
mod logger;
mod subscriber;

pub use level::Level;
pub use logger::Logger;
pub use subscriber::init_subscriber;

use std::panic::Location;

use crate::error::EXIT_INTERNAL;

/// Replace the default panic output with a tagged diagnostic naming the
/// source location, then exit with [`EXIT_INTERNAL`].
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = internal_error_message(info.location(), info.payload_as_str());
        #[allow(clippy::print_stderr)]
        {
            eprintln!("{message}");
        }
        std::process::exit(i32::from(EXIT_INTERNAL));
    }));
}

/// Diagnostic line printed by the panic hook.
fn internal_error_message(location: Option<&Location<'_>>, reason: Option<&str>) -> String {
    let location = location.map_or_else(
        || "unknown location".to_string(),
        |l| format!("{}:{}", l.file(), l.line()),
    );
    let reason = reason.unwrap_or("unknown cause");
    format!("{:>5}: internal error at {location}: {reason}", Level::Crit.tag())
}

/// Run `f` under a thread-local subscriber using the console formatter
/// (without colours) and return everything it printed.
#[cfg(test)]
pub(crate) fn capture_output(f: impl FnOnce()) -> String {
    use std::io;
    use std::sync::{Arc, Mutex, PoisonError};
    use tracing_subscriber::{fmt, layer::SubscriberExt as _};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buffer = Buffer::default();
    let writer = buffer.clone();
    let layer = fmt::layer()
        .event_format(subscriber::TagFormatter { ansi: false })
        .with_writer(move || writer.clone());
    tracing::subscriber::with_default(tracing_subscriber::registry().with(layer), f);

    let bytes = buffer
        .0
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
