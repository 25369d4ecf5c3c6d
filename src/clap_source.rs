//! [`CommandSource`] for `clap::Command`, so clap applications can document
//! themselves (typically from a build script or a `gen-man` binary).
//!
//! Only what the application declared is read: the command is never built,
//! so clap's generated `help` subcommand and `--help`/`--version` flags do
//! not appear.

use crate::node::{first_line, CommandSource, OptionEntry};
use clap::{Arg, Command};

impl CommandSource for Command {
    fn short_help(&self) -> String {
        self.get_about()
            .or_else(|| self.get_long_about())
            .map(|about| first_line(&about.to_string()))
            .unwrap_or_default()
    }

    fn description(&self) -> String {
        self.get_long_about()
            .or_else(|| self.get_about())
            .map(|about| about.to_string())
            .unwrap_or_default()
    }

    fn usage_fragments(&self) -> Vec<String> {
        let mut pieces = Vec::new();
        if self
            .get_arguments()
            .any(|arg| !arg.is_positional() && !arg.is_hide_set())
        {
            pieces.push("[OPTIONS]".to_string());
        }
        pieces.extend(
            self.get_positionals()
                .filter(|arg| !arg.is_hide_set())
                .map(positional_usage),
        );
        if self.get_subcommands().any(|sub| !sub.is_hide_set()) {
            pieces.push("<COMMAND>".to_string());
        }
        pieces
    }

    fn options(&self) -> Vec<Option<OptionEntry>> {
        self.get_arguments()
            .filter(|arg| !arg.is_positional())
            .map(|arg| {
                if arg.is_hide_set() {
                    return None;
                }
                let help = arg
                    .get_long_help()
                    .or_else(|| arg.get_help())
                    .map(|h| h.to_string())
                    .unwrap_or_default();
                Some(OptionEntry::new(switch_text(arg), help))
            })
            .collect()
    }

    fn children(&self) -> Vec<(String, &Self)> {
        self.get_subcommands()
            .map(|sub| (sub.get_name().to_string(), sub))
            .collect()
    }

    fn is_hidden(&self) -> bool {
        self.is_hide_set()
    }
}

fn value_name(arg: &Arg) -> String {
    arg.get_value_names()
        .and_then(|names| names.first())
        .map(|name| name.to_string())
        .unwrap_or_else(|| arg.get_id().as_str().to_uppercase())
}

fn is_multiple(arg: &Arg) -> bool {
    arg.get_num_args()
        .map(|range| range.max_values() > 1)
        .unwrap_or(false)
        || matches!(arg.get_action(), clap::ArgAction::Append)
}

/// `<FILE>`, `[FILE]` or `<FILE>...`
fn positional_usage(arg: &Arg) -> String {
    let name = value_name(arg);
    let dots = if is_multiple(arg) { "..." } else { "" };
    if arg.is_required_set() {
        format!("<{}>{}", name, dots)
    } else {
        format!("[{}]{}", name, dots)
    }
}

/// `-t, --target <TARGET>`
fn switch_text(arg: &Arg) -> String {
    let mut switches = Vec::new();
    if let Some(short) = arg.get_short() {
        switches.push(format!("-{}", short));
    }
    if let Some(long) = arg.get_long() {
        switches.push(format!("--{}", long));
    }
    let mut text = switches.join(", ");
    if arg.get_action().takes_values() {
        text.push_str(&format!(" <{}>", value_name(arg)));
    }
    text
}
