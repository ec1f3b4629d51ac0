//! Bash handlers: sourcing code generation and file listing.
use anyhow::Result;
use std::fmt::Write as _;

use super::{Dispatcher, Handler, Operation, Request};
use crate::modules::ResolvedEntry;

/// Shell name the bash handlers are registered under.
pub const SHELL: &str = "bash";

/// Variable holding the caller's working directory while modules load.
const SAVED_PWD_VAR: &str = "__shellenv_pwd";

/// Register the bash handlers.
pub fn register(dispatcher: &mut Dispatcher) {
    dispatcher.register(SHELL, Operation::GenCode, GenCode);
    dispatcher.register(SHELL, Operation::LookupFiles, LookupFiles);
}

/// `bash.gen_code`.
#[derive(Debug, Clone, Copy)]
pub struct GenCode;

impl Handler for GenCode {
    fn handle(&self, request: &Request) -> Result<String> {
        Ok(gen_code(&request.path_prepend, request.entries()))
    }
}

/// `bash.lookup_files`.
#[derive(Debug, Clone, Copy)]
pub struct LookupFiles;

impl Handler for LookupFiles {
    fn handle(&self, request: &Request) -> Result<String> {
        Ok(lookup_files(request.entries()))
    }
}

/// Render bash code that prepends `path_prepend` to `PATH` and sources every
/// entry from inside its module directory.
///
/// Each entry is guarded on its own: a failed `cd` or `source` prints a
/// warning on stderr and the next entry still runs. The caller's working
/// directory is restored at the end.
pub fn gen_code(
    path_prepend: &[String],
    entries: impl IntoIterator<Item = ResolvedEntry>,
) -> String {
    let mut out = String::new();
    out.push_str("# Generated by shellenv\n");
    if !path_prepend.is_empty() {
        let dirs: Vec<String> = path_prepend.iter().map(|d| double_quote_inner(d)).collect();
        let _ = writeln!(out, "export PATH=\"{}:$PATH\"", dirs.join(":"));
    }
    let _ = writeln!(out, "{SAVED_PWD_VAR}=\"$PWD\"");

    for entry in entries {
        let dir = single_quote(&entry.module_dir.display().to_string());
        let file = single_quote(&entry.full_path().display().to_string());
        let _ = write!(
            out,
            "\n# {module} {runcom} ({layout})\n\
             if cd -- {dir}; then\n\
             \x20 source {file} || >&2 printf ' WARN: shellenv: failed to source %s\\n' {file}\n\
             else\n\
             \x20 >&2 printf ' WARN: shellenv: cannot enter %s\\n' {dir}\n\
             fi\n",
            module = entry.module,
            runcom = entry.runcom,
            layout = entry.layout,
        );
    }

    let _ = writeln!(out, "\ncd -- \"${SAVED_PWD_VAR}\" || true");
    let _ = writeln!(out, "unset {SAVED_PWD_VAR}");
    out
}

/// One tab-separated line per entry: full path, module, runcom, layout.
pub fn lookup_files(entries: impl IntoIterator<Item = ResolvedEntry>) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            entry.full_path().display(),
            entry.module,
            entry.runcom,
            entry.layout
        );
    }
    out
}

/// Quote `s` as a single bash word with no expansion.
fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Escape `s` for use inside double quotes, leaving `$` expansion intact.
fn double_quote_inner(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '"' | '\\' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
