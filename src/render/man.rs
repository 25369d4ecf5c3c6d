//! Man page renderer (troff).

use crate::model::PageModel;
use crate::render::Renderer;

pub struct ManRenderer;

const PARAGRAPH: &str = ".PP";

impl Renderer for ManRenderer {
    fn render(&self, page: &PageModel) -> String {
        let mut lines: Vec<String> = Vec::new();

        // Title
        lines.push(format!(
            ".TH \"{}\" \"{}\" \"{}\" \"{}\" \"{} Manual\"",
            page.command_path.to_uppercase(),
            page.section,
            page.date,
            page.source,
            page.manual
        ));

        // NAME
        lines.push(".SH NAME".to_string());
        lines.push(format!(
            "{} \\- {}",
            page.command_path.replace(' ', "\\-"),
            page.short_help
        ));

        // SYNOPSIS
        lines.push(".SH SYNOPSIS".to_string());
        lines.push(format!(".B {}", page.command_path));
        lines.push(escape_dashes(&page.synopsis));

        // DESCRIPTION
        if !page.description.is_empty() {
            lines.push(".SH DESCRIPTION".to_string());
            lines.push(paragraphs(&page.description));
        }

        // OPTIONS
        if !page.options.is_empty() {
            lines.push(".SH OPTIONS".to_string());
            for opt in &page.options {
                lines.push(".TP".to_string());
                lines.push(switch_line(&opt.switch));
                lines.push(paragraphs(&opt.description));
            }
        }

        // COMMANDS
        if !page.subcommands.is_empty() {
            lines.push(".SH COMMANDS".to_string());
            for cmd in &page.subcommands {
                lines.push(format!(
                    ".IP \"\\fB{}\\fP - {}\"",
                    cmd.name,
                    paragraphs(&cmd.short_help)
                ));
                lines.push(format!("See {}({}).", cmd.reference, page.section));
            }
        }

        lines.join("\n")
    }

    fn file_extension(&self, page: &PageModel) -> String {
        page.section.to_string()
    }
}

fn escape_dashes(s: &str) -> String {
    s.replace('-', "\\-")
}

/// Replace every blank line with a paragraph break.
fn paragraphs(s: &str) -> String {
    s.split('\n')
        .map(|line| if line.is_empty() { PARAGRAPH } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `--target, -t` → `\fB\-\-target,\fP \-t`
fn switch_line(switch: &str) -> String {
    let escaped = escape_dashes(switch);
    let mut tokens = escaped.split_whitespace();
    let Some(first) = tokens.next() else {
        return String::new();
    };
    let rest: Vec<&str> = tokens.collect();
    if rest.is_empty() {
        format!("\\fB{}\\fP", first)
    } else {
        format!("\\fB{}\\fP {}", first, rest.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SubcommandEntry;
    use crate::node::OptionEntry;

    fn page() -> PageModel {
        PageModel {
            command_path: "tool sync".to_string(),
            section: 1,
            source: "Rust".to_string(),
            manual: "Commands".to_string(),
            version: "1.0.0".to_string(),
            date: "18-Oct-2026".to_string(),
            short_help: "Sync the mirror".to_string(),
            synopsis: "[OPTIONS] --from-file PATH".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn title_and_name() {
        let out = ManRenderer.render(&page());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            r#".TH "TOOL SYNC" "1" "18-Oct-2026" "Rust" "Commands Manual""#
        );
        assert_eq!(lines[1], ".SH NAME");
        assert_eq!(lines[2], r"tool\-sync \- Sync the mirror");
    }

    #[test]
    fn synopsis_escapes_dashes() {
        let out = ManRenderer.render(&page());
        assert!(out.contains(".SH SYNOPSIS\n.B tool sync\n[OPTIONS] \\-\\-from\\-file PATH"));
    }

    #[test]
    fn minimal_page_exact() {
        let out = ManRenderer.render(&page());
        assert_eq!(
            out,
            ".TH \"TOOL SYNC\" \"1\" \"18-Oct-2026\" \"Rust\" \"Commands Manual\"\n\
             .SH NAME\n\
             tool\\-sync \\- Sync the mirror\n\
             .SH SYNOPSIS\n\
             .B tool sync\n\
             [OPTIONS] \\-\\-from\\-file PATH"
        );
    }

    #[test]
    fn empty_sections_omitted() {
        let out = ManRenderer.render(&page());
        assert!(!out.contains(".SH DESCRIPTION"));
        assert!(!out.contains(".SH OPTIONS"));
        assert!(!out.contains(".SH COMMANDS"));
    }

    #[test]
    fn description_blank_lines_become_paragraphs() {
        let mut p = page();
        p.description = "line one\n\nline two".to_string();
        let out = ManRenderer.render(&p);
        assert!(out.contains(".SH DESCRIPTION\nline one\n.PP\nline two"));
    }

    #[test]
    fn option_switches_escaped() {
        let mut p = page();
        p.options = vec![OptionEntry::new("--target, -t", "Target location")];
        let out = ManRenderer.render(&p);
        assert!(out.contains(".SH OPTIONS\n.TP\n\\fB\\-\\-target,\\fP \\-t\nTarget location"));
    }

    #[test]
    fn single_token_switch() {
        assert_eq!(switch_line("--quiet"), r"\fB\-\-quiet\fP");
        assert_eq!(switch_line("-n, --count INTEGER"), r"\fB\-n,\fP \-\-count INTEGER");
        assert_eq!(switch_line("   "), "");
    }

    #[test]
    fn commands_with_cross_references() {
        let mut p = page();
        p.command_path = "tool".to_string();
        p.subcommands = vec![
            SubcommandEntry {
                name: "add".to_string(),
                reference: "tool-add".to_string(),
                short_help: "Add an item".to_string(),
            },
            SubcommandEntry {
                name: "remote prune".to_string(),
                reference: "tool-remote-prune".to_string(),
                short_help: "Prune remotes".to_string(),
            },
        ];
        let out = ManRenderer.render(&p);
        assert!(out.contains(".SH COMMANDS\n.IP \"\\fBadd\\fP - Add an item\"\nSee tool-add(1)."));
        assert!(out.contains(".IP \"\\fBremote prune\\fP - Prune remotes\"\nSee tool-remote-prune(1)."));
    }

    #[test]
    fn extension_is_section() {
        let mut p = page();
        p.section = 5;
        assert_eq!(ManRenderer.file_extension(&p), "5");
    }
}
