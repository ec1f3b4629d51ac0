//! `help`: usage, the command table and package metadata.
use std::fmt::Write as _;

/// Registered top-level commands as `(name, one-line description)`, in
/// declaration order.
#[must_use]
pub fn command_table(cmd: &clap::Command) -> Vec<(String, String)> {
    cmd.get_subcommands()
        .map(|sub| {
            let about = sub.get_about().map(ToString::to_string).unwrap_or_default();
            (sub.get_name().to_string(), about)
        })
        .collect()
}

/// Global options as `(flags, description)`.
fn option_table(cmd: &clap::Command) -> Vec<(String, String)> {
    let mut rows = vec![("-h, --help".to_string(), "Print help".to_string())];
    for arg in cmd.get_arguments().filter(|a| !a.is_positional()) {
        let mut flags = String::new();
        if let Some(short) = arg.get_short() {
            let _ = write!(flags, "-{short}, ");
        }
        if let Some(long) = arg.get_long() {
            let _ = write!(flags, "--{long}");
        }
        if let Some(names) = arg.get_value_names()
            && let Some(value) = names.first()
        {
            let _ = write!(flags, " {value}");
        }
        let help = arg.get_help().map(ToString::to_string).unwrap_or_default();
        rows.push((flags, help));
    }
    rows
}

fn write_table(out: &mut String, rows: &[(String, String)]) {
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    for (left, right) in rows {
        let _ = writeln!(out, "  {left:<width$}  {right}");
    }
}

/// Render the help text for `cmd`.
#[must_use]
pub fn render(cmd: &clap::Command) -> String {
    let name = cmd.get_name();
    let mut out = String::new();
    let _ = writeln!(out, "Usage: {name} [OPTIONS] <COMMAND> [ARGS...]");
    if let Some(about) = cmd.get_about() {
        let _ = writeln!(out, "\n{about}");
    }

    out.push_str("\nCommands:\n");
    write_table(&mut out, &command_table(cmd));

    out.push_str("\nOptions:\n");
    write_table(&mut out, &option_table(cmd));

    let _ = writeln!(out, "\nAuthor:  {}", env!("CARGO_PKG_AUTHORS"));
    let _ = writeln!(out, "Version: {}", super::version());
    let _ = writeln!(out, "License: {}", env!("CARGO_PKG_LICENSE"));
    out
}
