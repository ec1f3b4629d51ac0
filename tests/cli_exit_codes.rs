#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
//! End-to-end tests that run the `shellenv` binary and check its exit status
//! and output streams.

mod common;

use std::process::{Command, Output};

fn shellenv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shellenv"))
        .args(args)
        .env_remove("SHELLENV_ROOT")
        .env_remove("SHELLENV_LOG_LEVEL")
        .output()
        .expect("run shellenv")
}

fn root_arg(root: &common::ShellRoot) -> String {
    root.path().display().to_string()
}

#[test]
fn help_succeeds_and_lists_commands() {
    let out = shellenv(&["help"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("gen"));
    assert!(stdout.contains("files"));
}

#[test]
fn unknown_subcommand_exits_3() {
    let out = shellenv(&["frobnicate"]);
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn unsupported_shell_exits_3() {
    let root = common::ShellRootBuilder::new()
        .with_files(&["core/env.sh"])
        .build();
    let out = shellenv(&["--root", &root_arg(&root), "gen", "env", "zsh"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unknown command: zsh.gen_code"), "{stderr}");
}

#[test]
fn missing_shell_binary_exits_2() {
    let root = common::ShellRootBuilder::new()
        .with_files(&["core/env.sh"])
        .build();
    let empty_path = tempfile::tempdir().unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_shellenv"))
        .args(["--root", &root_arg(&root), "gen", "env", "bash"])
        .env_remove("SHELLENV_ROOT")
        .env_remove("SHELLENV_LOG_LEVEL")
        .env("PATH", empty_path.path())
        .output()
        .expect("run shellenv");
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Required program 'bash' not found in PATH"),
        "{stderr}"
    );
}

#[test]
fn module_outside_root_in_config_exits_1() {
    let root = common::ShellRootBuilder::new()
        .with_file("shellenv.toml", "modules = [\"a\", \"../outside\"]\n")
        .with_files(&["a/env.sh"])
        .build();
    let out = shellenv(&["--root", &root_arg(&root), "files", "env", "bash"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid module '../outside'"));
}

#[test]
fn repeated_module_in_config_is_listed_once() {
    let root = common::ShellRootBuilder::new()
        .with_file("shellenv.toml", "modules = [\"a\", \"a\"]\n")
        .with_files(&["a/env.sh"])
        .build();
    let out = shellenv(&["--root", &root_arg(&root), "files", "env", "bash"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        format!("{}\ta\tenv\tsimple\n", root.file("a/env.sh").display())
    );
}

#[test]
fn invalid_runcom_list_exits_1() {
    let root = common::ShellRootBuilder::new().build();
    let out = shellenv(&["--root", &root_arg(&root), "files", "Env", "bash"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn missing_root_exits_1() {
    let parent = common::ShellRootBuilder::new().build();
    let missing = parent.file("does-not-exist");
    let out = shellenv(&["--root", &missing.display().to_string(), "files"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn files_lists_on_stdout_and_logs_on_stderr() {
    let root = common::ShellRootBuilder::new()
        .with_files(&["core/env.sh"])
        .build();
    let out = shellenv(&["--root", &root_arg(&root), "files", "env", "bash"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        format!("{}\tcore\tenv\tsimple\n", root.file("core/env.sh").display())
    );
    assert!(String::from_utf8_lossy(&out.stderr).contains("INFO: 1 file(s) resolved"));
}

#[test]
fn log_level_filters_stderr() {
    let root = common::ShellRootBuilder::new()
        .with_files(&["core/env.sh"])
        .build();
    let out = shellenv(&[
        "--root",
        &root_arg(&root),
        "-v",
        "WARN",
        "files",
        "env",
        "bash",
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
}
