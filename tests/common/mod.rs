// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed module root and a fluent builder so
// each integration test can lay out module files without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use shellenv_cli::config::{FileConfig, Settings};
use shellenv_cli::logging::Logger;

/// An isolated module root backed by a [`tempfile::TempDir`].
pub struct ShellRoot {
    /// Temporary directory holding one subdirectory per module.
    pub root: tempfile::TempDir,
}

impl ShellRoot {
    /// Path to the module root, with symlinks resolved so it matches what
    /// [`Settings::load`] reports.
    pub fn path(&self) -> PathBuf {
        dunce::canonicalize(self.root.path()).expect("canonicalize root")
    }

    /// Settings for this root with the given module order.
    pub fn settings(&self, modules: &[&str]) -> Settings {
        Settings::from_parts(
            self.path(),
            FileConfig {
                modules: Some(modules.iter().map(ToString::to_string).collect()),
                ..FileConfig::default()
            },
            false,
            false,
            Logger::default(),
        )
        .expect("build settings")
    }

    /// Absolute path of `rel` inside the root.
    pub fn file(&self, rel: &str) -> PathBuf {
        self.path().join(rel)
    }
}

/// Fluent builder for [`ShellRoot`].
pub struct ShellRootBuilder {
    root: ShellRoot,
}

impl ShellRootBuilder {
    /// Begin building an empty module root.
    pub fn new() -> Self {
        Self {
            root: ShellRoot {
                root: tempfile::tempdir().expect("create temp dir"),
            },
        }
    }

    /// Write `content` to `rel` (e.g. `"git/.shell/env.sh"`), creating parent
    /// directories.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        write_file(self.root.root.path(), rel, content);
        self
    }

    /// Create an empty file at each of `rels`.
    pub fn with_files(self, rels: &[&str]) -> Self {
        for rel in rels {
            write_file(self.root.root.path(), rel, "");
        }
        self
    }

    /// Create an empty directory at `rel`.
    pub fn with_dir(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.root.root.path().join(rel)).expect("create dir");
        self
    }

    /// Finish building and return the root.
    pub fn build(self) -> ShellRoot {
        self.root
    }
}

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(&path, content).expect("write file");
}
