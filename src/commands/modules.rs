//! `modules`: show the module order and what is on disk for each module.
use std::fmt::Write as _;

use crate::config::Settings;
use crate::modules::Layout;

/// Render one `<module>\t<layout>` line per module in load order; modules
/// without a directory are reported as `missing`.
#[must_use]
pub fn run(settings: &Settings) -> String {
    let mut out = String::new();
    for module in &settings.modules {
        let dir = settings.root.join(module);
        let state = if dir.is_dir() {
            Layout::detect(&dir).as_str()
        } else {
            "missing"
        };
        let _ = writeln!(out, "{module}\t{state}");
    }
    out
}
