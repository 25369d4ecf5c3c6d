//! Command introspection seam.
//!
//! The walker only sees commands through [`CommandSource`]. Two sources ship
//! with the crate: [`CommandSpec`], a tree deserialized from a registry file,
//! and `clap::Command` (see `clap_source`).

use serde::Deserialize;
use std::collections::BTreeMap;

/// One documented option: switch text such as `--target, -t` and its help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub switch: String,
    pub description: String,
}

impl OptionEntry {
    pub fn new(switch: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            switch: switch.into(),
            description: description.into(),
        }
    }
}

/// Read-only view of one node in a command hierarchy.
///
/// A node does not know its own path; the walker builds it from the root name
/// and the child keys it descends through.
pub trait CommandSource {
    fn short_help(&self) -> String;

    fn description(&self) -> String;

    /// Synopsis tokens, in order.
    fn usage_fragments(&self) -> Vec<String>;

    /// Options in declaration order. `None` marks an option with no help
    /// record (hidden), which is never rendered.
    fn options(&self) -> Vec<Option<OptionEntry>>;

    /// Direct children keyed by the name they are invoked with.
    fn children(&self) -> Vec<(String, &Self)>;

    fn is_hidden(&self) -> bool {
        false
    }
}

/// Command tree as described in a registry file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommandSpec {
    /// Falls back to the first line of `description` when absent.
    pub short_help: Option<String>,
    pub description: String,
    pub usage: Vec<String>,
    pub options: Vec<OptionSpec>,
    pub commands: BTreeMap<String, CommandSpec>,
    pub hidden: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OptionSpec {
    pub switch: String,
    pub help: String,
    pub hidden: bool,
}

impl CommandSource for CommandSpec {
    fn short_help(&self) -> String {
        match self.short_help {
            Some(ref help) => help.clone(),
            None => first_line(&self.description),
        }
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn usage_fragments(&self) -> Vec<String> {
        self.usage.clone()
    }

    fn options(&self) -> Vec<Option<OptionEntry>> {
        self.options
            .iter()
            .map(|opt| {
                if opt.hidden {
                    None
                } else {
                    Some(OptionEntry::new(&opt.switch, &opt.help))
                }
            })
            .collect()
    }

    fn children(&self) -> Vec<(String, &Self)> {
        self.commands
            .iter()
            .map(|(name, child)| (name.clone(), child))
            .collect()
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// First non-blank line of a help text, trimmed.
pub(crate) fn first_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("")
        .to_string()
}
