//! AsciiDoc renderer (manpage doctype).

use crate::model::{dashed, PageModel};
use crate::render::Renderer;

pub struct AsciidocRenderer;

impl Renderer for AsciidocRenderer {
    fn render(&self, page: &PageModel) -> String {
        let command = &page.command_path;
        let mut lines: Vec<String> = Vec::new();

        // Header
        lines.push(format!("{}({})", dashed(command).to_uppercase(), page.section));
        lines.push("=".repeat(3 + command.chars().count()));
        lines.push(":doctype:       manpage".to_string());
        lines.push(format!(":man source:    {}", page.source));
        lines.push(format!(":man manual:    {}", page.manual));

        section(&mut lines, "NAME");
        lines.push(format!("{} - {}", command, page.short_help));

        section(&mut lines, "SYNOPSIS");
        lines.push(format!("{} {}", command, page.synopsis));

        if !page.description.is_empty() {
            section(&mut lines, "DESCRIPTION");
            lines.push(page.description.clone());
        }

        if !page.options.is_empty() {
            section(&mut lines, "OPTIONS");
            for opt in &page.options {
                let term: Vec<String> = opt
                    .switch
                    .split('\n')
                    .map(|s| format!("*{}*", s))
                    .collect();
                lines.push(format!("    {}::", term.join(" ")));
                lines.extend(opt.description.split('\n').map(str::to_string));
            }
        }

        if !page.subcommands.is_empty() {
            section(&mut lines, "COMMANDS");
            for cmd in &page.subcommands {
                lines.push(format!("*{}*::", cmd.name));
                lines.push(cmd.short_help.clone());
                lines.push(format!(
                    "    See *{}({})* for full documentation on the *{}* command.",
                    cmd.reference, page.section, cmd.name
                ));
            }
        }

        lines.join("\n")
    }

    fn file_extension(&self, _page: &PageModel) -> String {
        "txt".to_string()
    }
}

/// Blank separator, heading and dash underline.
fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(title.to_string());
    lines.push("-".repeat(title.len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SubcommandEntry;
    use crate::node::OptionEntry;

    fn page(command: &str) -> PageModel {
        PageModel {
            command_path: command.to_string(),
            section: 1,
            source: "Rust".to_string(),
            manual: "Commands".to_string(),
            version: "1.0.0".to_string(),
            date: "18-Oct-2026".to_string(),
            short_help: "Manage items".to_string(),
            synopsis: "[OPTIONS] COMMAND [ARGS]...".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn header_and_name() {
        let out = AsciidocRenderer.render(&page("tool"));
        assert_eq!(
            out,
            "TOOL(1)\n\
             =======\n\
             :doctype:       manpage\n\
             :man source:    Rust\n\
             :man manual:    Commands\n\
             \n\
             NAME\n\
             ----\n\
             tool - Manage items\n\
             \n\
             SYNOPSIS\n\
             --------\n\
             tool [OPTIONS] COMMAND [ARGS]..."
        );
    }

    #[test]
    fn nested_title_is_dashed() {
        let out = AsciidocRenderer.render(&page("tool remote add"));
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("TOOL-REMOTE-ADD(1)"));
        assert_eq!(lines.next(), Some("=".repeat(18).as_str()));
    }

    #[test]
    fn description_is_raw() {
        let mut p = page("tool");
        p.description = "line one\n\nline two".to_string();
        let out = AsciidocRenderer.render(&p);
        assert!(out.contains("DESCRIPTION\n-----------\nline one\n\nline two"));
        assert!(!out.contains(".PP"));
    }

    #[test]
    fn options_left_unescaped() {
        let mut p = page("tool");
        p.options = vec![
            OptionEntry::new("--target, -t", "Target location"),
            OptionEntry::new("--mode", "First line\nsecond line"),
        ];
        let out = AsciidocRenderer.render(&p);
        assert!(out.contains(
            "OPTIONS\n-------\n    *--target, -t*::\nTarget location\n    *--mode*::\nFirst line\nsecond line"
        ));
        assert!(!out.contains("\\-"));
    }

    #[test]
    fn multi_line_switch_bolds_each_line() {
        let mut p = page("tool");
        p.options = vec![OptionEntry::new("-v\n--verbose", "Chatty")];
        let out = AsciidocRenderer.render(&p);
        assert!(out.contains("    *-v* *--verbose*::\nChatty"));
    }

    #[test]
    fn commands_reference_full_path() {
        let mut p = page("tool");
        p.subcommands = vec![SubcommandEntry {
            name: "add".to_string(),
            reference: "tool-add".to_string(),
            short_help: "Add an item".to_string(),
        }];
        let out = AsciidocRenderer.render(&p);
        assert!(out.ends_with(
            "COMMANDS\n--------\n*add*::\nAdd an item\n    See *tool-add(1)* for full documentation on the *add* command."
        ));
    }

    #[test]
    fn empty_sections_omitted() {
        let out = AsciidocRenderer.render(&page("tool"));
        assert!(!out.contains("\nDESCRIPTION\n"));
        assert!(!out.contains("\nOPTIONS\n"));
        assert!(!out.contains("\nCOMMANDS\n"));
    }
}
