//! Walk the module list and resolve one file per (runcom, module) pair.
use std::fmt;
use std::path::{Path, PathBuf};

use super::resolver;
use super::runcom::Runcom;

/// Name of the subdirectory holding an embedded module's shell files.
pub const EMBEDDED_DIR: &str = ".shell";

/// Where a module keeps its shell fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Fragments live directly in the module directory.
    Simple,
    /// Fragments live under the module's `.shell/` subdirectory.
    Embedded,
}

impl Layout {
    /// Detect the layout of `module_dir` from the filesystem.
    #[must_use]
    pub fn detect(module_dir: &Path) -> Self {
        if module_dir.join(EMBEDDED_DIR).is_dir() {
            Self::Embedded
        } else {
            Self::Simple
        }
    }

    /// Directory inside `module_dir` where candidates are looked up.
    #[must_use]
    pub fn lookup_dir(self, module_dir: &Path) -> PathBuf {
        match self {
            Self::Simple => module_dir.to_path_buf(),
            Self::Embedded => module_dir.join(EMBEDDED_DIR),
        }
    }

    /// Lowercase tag used in file listings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Embedded => "embedded",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file chosen to satisfy a (module, runcom) lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// The module's root directory (`<root>/<module>`).
    pub module_dir: PathBuf,
    /// Path of the file relative to `module_dir`; includes `.shell/` for
    /// embedded modules.
    pub relative_path: PathBuf,
    /// Module name as listed in the module order.
    pub module: String,
    /// Phase this file was resolved for.
    pub runcom: Runcom,
    /// Layout detected for the module.
    pub layout: Layout,
}

impl ResolvedEntry {
    /// Absolute path of the resolved file.
    #[must_use]
    pub fn full_path(&self) -> PathBuf {
        self.module_dir.join(&self.relative_path)
    }
}

/// Resolve a single module for a single runcom.
#[must_use]
pub fn resolve_module(root: &Path, module: &str, runcom: &Runcom) -> Option<ResolvedEntry> {
    let module_dir = root.join(module);
    let layout = Layout::detect(&module_dir);
    let found = resolver::resolve(&layout.lookup_dir(&module_dir), runcom, module)?;
    let relative_path = found.strip_prefix(&module_dir).ok()?.to_path_buf();
    Some(ResolvedEntry {
        module_dir,
        relative_path,
        module: module.to_string(),
        runcom: runcom.clone(),
        layout,
    })
}

/// Lazily resolve every runcom (outer, caller order) against every module
/// (inner, declared order).
///
/// Pairs without a matching file are skipped. Each call walks the
/// filesystem again; nothing is cached.
pub fn walk<'a>(
    root: &'a Path,
    modules: &'a [String],
    runcoms: &'a [Runcom],
) -> impl Iterator<Item = ResolvedEntry> + 'a {
    runcoms.iter().flat_map(move |runcom| {
        modules
            .iter()
            .filter_map(move |module| resolve_module(root, module, runcom))
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn modules(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn simple_layout_resolves_in_module_dir() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "a/env.sh");
        let entry = resolve_module(tmp.path(), "a", &Runcom::Env).unwrap();
        assert_eq!(entry.layout, Layout::Simple);
        assert_eq!(entry.relative_path, PathBuf::from("env.sh"));
        assert_eq!(entry.module_dir, tmp.path().join("a"));
        assert_eq!(entry.full_path(), tmp.path().join("a/env.sh"));
    }

    #[test]
    fn embedded_layout_keeps_shell_segment() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "a/.shell/env.sh");
        let entry = resolve_module(tmp.path(), "a", &Runcom::Env).unwrap();
        assert_eq!(entry.layout, Layout::Embedded);
        assert_eq!(entry.relative_path, PathBuf::from(".shell/env.sh"));
        assert_eq!(entry.full_path(), tmp.path().join("a/.shell/env.sh"));
    }

    #[test]
    fn embedded_layout_ignores_top_level_files() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "a/env.sh");
        fs::create_dir_all(tmp.path().join("a/.shell")).unwrap();
        assert!(resolve_module(tmp.path(), "a", &Runcom::Env).is_none());
    }

    #[test]
    fn shell_file_is_not_an_embedded_dir() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "a/.shell");
        write(tmp.path(), "a/env.sh");
        assert_eq!(Layout::detect(&tmp.path().join("a")), Layout::Simple);
        assert!(resolve_module(tmp.path(), "a", &Runcom::Env).is_some());
    }

    #[test]
    fn walk_orders_runcoms_outer_modules_inner() {
        let tmp = tempfile::tempdir().unwrap();
        for rel in ["a/env.sh", "b/env.sh", "a/login.sh", "b/login.sh"] {
            write(tmp.path(), rel);
        }
        let mods = modules(&["a", "b"]);
        let runcoms = vec![Runcom::Env, Runcom::Login];
        let order: Vec<(String, String)> = walk(tmp.path(), &mods, &runcoms)
            .map(|e| (e.module, e.runcom.to_string()))
            .collect();
        assert_eq!(
            order,
            [
                ("a".to_string(), "env".to_string()),
                ("b".to_string(), "env".to_string()),
                ("a".to_string(), "login".to_string()),
                ("b".to_string(), "login".to_string()),
            ]
        );
    }

    #[test]
    fn missing_files_and_modules_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "b/env.sh");
        write(tmp.path(), "a/login.sh");
        let mods = modules(&["a", "absent", "b"]);
        let runcoms = vec![Runcom::Env, Runcom::Login];
        let entries: Vec<ResolvedEntry> = walk(tmp.path(), &mods, &runcoms).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].module, "b");
        assert_eq!(entries[0].runcom, Runcom::Env);
        assert_eq!(entries[1].module, "a");
        assert_eq!(entries[1].runcom, Runcom::Login);
    }

    #[test]
    fn walk_sees_filesystem_changes_between_calls() {
        let tmp = tempfile::tempdir().unwrap();
        let mods = modules(&["a"]);
        let runcoms = vec![Runcom::Env];
        assert_eq!(walk(tmp.path(), &mods, &runcoms).count(), 0);
        write(tmp.path(), "a/env.bash");
        assert_eq!(walk(tmp.path(), &mods, &runcoms).count(), 1);
    }

    #[test]
    fn walk_is_deterministic() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "a/lib.sh");
        write(tmp.path(), "b/.shell/b.bash");
        let mods = modules(&["a", "b"]);
        let runcoms = vec![Runcom::Lib];
        let first: Vec<ResolvedEntry> = walk(tmp.path(), &mods, &runcoms).collect();
        let second: Vec<ResolvedEntry> = walk(tmp.path(), &mods, &runcoms).collect();
        assert_eq!(first, second);
        assert_eq!(first[1].relative_path, PathBuf::from(".shell/b.bash"));
    }

    #[test]
    fn layout_tags() {
        assert_eq!(Layout::Simple.to_string(), "simple");
        assert_eq!(Layout::Embedded.to_string(), "embedded");
    }
}
