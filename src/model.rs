//! Data model for one reference page, independent of output format.

use crate::node::OptionEntry;

/// Version recorded when the caller does not supply one.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Everything a renderer needs to produce one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageModel {
    /// Space-joined command path, e.g. "tool remote add"
    pub command_path: String,
    pub section: u32,
    pub source: String,
    pub manual: String,
    pub version: String,
    /// Creation date as printed in the title line
    pub date: String,
    pub short_help: String,
    /// Space-joined usage fragments
    pub synopsis: String,
    pub description: String,
    /// Visible options only; hidden entries are compacted away
    pub options: Vec<OptionEntry>,
    /// Commands listed under COMMANDS, already ordered
    pub subcommands: Vec<SubcommandEntry>,
}

/// A command listed on another command's page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcommandEntry {
    /// Path relative to the page it is listed on ("add", "remote add")
    pub name: String,
    /// Full command path with spaces as dashes ("tool-remote-add")
    pub reference: String,
    pub short_help: String,
}

/// Page metadata shared by every page of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta<'a> {
    pub version: Option<&'a str>,
    pub section: u32,
    pub source: &'a str,
    pub manual: &'a str,
    pub date: &'a str,
}

/// Build the page for one command.
///
/// `subcommands` is embedded as given; callers sort it when they need
/// deterministic output.
pub fn build_page<S: crate::node::CommandSource + ?Sized>(
    node: &S,
    command_path: &str,
    meta: &PageMeta<'_>,
    subcommands: Vec<SubcommandEntry>,
) -> PageModel {
    PageModel {
        command_path: command_path.to_string(),
        section: meta.section,
        source: meta.source.to_string(),
        manual: meta.manual.to_string(),
        version: meta.version.unwrap_or(DEFAULT_VERSION).to_string(),
        date: meta.date.to_string(),
        short_help: node.short_help(),
        synopsis: node.usage_fragments().join(" "),
        description: node.description(),
        options: node.options().into_iter().flatten().collect(),
        subcommands,
    }
}

/// Dashed form of a command path, used for file names and cross-references.
pub fn dashed(command_path: &str) -> String {
    command_path.replace(' ', "-")
}
