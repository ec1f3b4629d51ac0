//! Per-shell handlers and the registry that dispatches to them.
//!
//! Handlers are registered under `<shell>.<operation>` (for example
//! `bash.gen_code`). Supporting a new shell means registering one handler per
//! [`Operation`]; asking for a pair nobody registered is an
//! [`DispatchError::UnknownCommand`].
pub mod bash;

use anyhow::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::error::DispatchError;
use crate::modules::{ResolvedEntry, Runcom, walk};

/// Something a shell handler can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Render code that sources every resolved file.
    GenCode,
    /// List resolved files without sourcing them.
    LookupFiles,
}

impl Operation {
    /// Name used when composing handler names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GenCode => "gen_code",
            Self::LookupFiles => "lookup_files",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs shared by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Directory holding one subdirectory per module.
    pub root: PathBuf,
    /// Module load order.
    pub modules: Vec<String>,
    /// Requested phases, in caller order.
    pub runcoms: Vec<Runcom>,
    /// Directories prepended to `PATH` by generated code.
    pub path_prepend: Vec<String>,
}

impl Request {
    /// Walk the modules for this request. Each call re-reads the filesystem.
    pub fn entries(&self) -> impl Iterator<Item = ResolvedEntry> + '_ {
        walk(&self.root, &self.modules, &self.runcoms)
    }
}

/// One (shell, operation) implementation.
#[cfg_attr(test, mockall::automock)]
pub trait Handler {
    /// Produce the text output for `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be produced.
    fn handle(&self, request: &Request) -> Result<String>;
}

/// Compose the registry key for a (shell, operation) pair.
#[must_use]
pub fn handler_name(shell: &str, operation: Operation) -> String {
    format!("{shell}.{operation}")
}

/// Registry of shell handlers keyed by composed handler name.
#[derive(Default)]
pub struct Dispatcher {
    handlers: BTreeMap<String, Box<dyn Handler>>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Dispatcher {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every shell implemented by this crate.
    #[must_use]
    pub fn with_builtin_shells() -> Self {
        let mut dispatcher = Self::new();
        bash::register(&mut dispatcher);
        dispatcher
    }

    /// Register `handler` for `shell`/`operation`, replacing any previous one.
    pub fn register(
        &mut self,
        shell: &str,
        operation: Operation,
        handler: impl Handler + 'static,
    ) {
        self.handlers.insert(handler_name(shell, operation), Box::new(handler));
    }

    /// Whether a handler exists for `shell`/`operation`.
    #[must_use]
    pub fn supports(&self, shell: &str, operation: Operation) -> bool {
        self.handlers.contains_key(&handler_name(shell, operation))
    }

    /// Registered handler names, sorted.
    pub fn handler_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Run the handler registered for `shell`/`operation`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownCommand`] with the composed handler
    /// name when nothing is registered, or the handler's own error.
    pub fn dispatch(&self, shell: &str, operation: Operation, request: &Request) -> Result<String> {
        let name = handler_name(shell, operation);
        let handler = self
            .handlers
            .get(&name)
            .ok_or(DispatchError::UnknownCommand(name))?;
        handler.handle(request)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn request() -> Request {
        Request {
            root: PathBuf::from("/nonexistent"),
            modules: vec!["a".to_string()],
            runcoms: vec![Runcom::Env],
            path_prepend: vec![],
        }
    }

    #[test]
    fn handler_names_are_composed() {
        assert_eq!(handler_name("bash", Operation::GenCode), "bash.gen_code");
        assert_eq!(
            handler_name("zsh", Operation::LookupFiles),
            "zsh.lookup_files"
        );
    }

    #[test]
    fn builtin_shells_register_bash_only() {
        let dispatcher = Dispatcher::with_builtin_shells();
        let names: Vec<&str> = dispatcher.handler_names().collect();
        assert_eq!(names, ["bash.gen_code", "bash.lookup_files"]);
    }

    #[test]
    fn dispatch_invokes_exactly_the_registered_handler() {
        let mut gen_code = MockHandler::new();
        gen_code
            .expect_handle()
            .times(1)
            .returning(|_| Ok("generated".to_string()));
        let mut lookup = MockHandler::new();
        lookup.expect_handle().times(0);

        let mut dispatcher = Dispatcher::new();
        dispatcher.register("fake", Operation::GenCode, gen_code);
        dispatcher.register("fake", Operation::LookupFiles, lookup);

        let out = dispatcher
            .dispatch("fake", Operation::GenCode, &request())
            .unwrap();
        assert_eq!(out, "generated");
    }

    #[test]
    fn handler_receives_the_request() {
        let mut handler = MockHandler::new();
        handler
            .expect_handle()
            .withf(|req| req.modules == ["a"] && req.runcoms == [Runcom::Env])
            .times(1)
            .returning(|_| Ok(String::new()));
        let mut dispatcher = Dispatcher::new();
        dispatcher.register("fake", Operation::LookupFiles, handler);
        dispatcher
            .dispatch("fake", Operation::LookupFiles, &request())
            .unwrap();
    }

    #[test]
    fn unknown_shell_fails_with_composed_name() {
        let dispatcher = Dispatcher::with_builtin_shells();
        let err = dispatcher
            .dispatch("zsh", Operation::GenCode, &request())
            .unwrap_err();
        let dispatch_err = err.downcast_ref::<DispatchError>().unwrap();
        assert!(
            matches!(dispatch_err, DispatchError::UnknownCommand(name) if name == "zsh.gen_code")
        );
        assert_eq!(crate::error::exit_code(&err), crate::error::EXIT_UNKNOWN_COMMAND);
    }

    #[test]
    fn unregistered_operation_fails_even_for_known_shell() {
        let mut dispatcher = Dispatcher::new();
        let mut handler = MockHandler::new();
        handler.expect_handle().times(0);
        dispatcher.register("fake", Operation::GenCode, handler);
        assert!(!dispatcher.supports("fake", Operation::LookupFiles));
        let err = dispatcher
            .dispatch("fake", Operation::LookupFiles, &request())
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: fake.lookup_files");
    }

    #[test]
    fn handler_errors_propagate() {
        let mut handler = MockHandler::new();
        handler
            .expect_handle()
            .returning(|_| Err(anyhow::anyhow!("boom")));
        let mut dispatcher = Dispatcher::new();
        dispatcher.register("fake", Operation::GenCode, handler);
        let err = dispatcher
            .dispatch("fake", Operation::GenCode, &request())
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
