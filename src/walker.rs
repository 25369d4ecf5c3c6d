//! Recursive page generation over a command tree.
//!
//! Children are visited before their parent. A node gets its own page when it
//! is the root of the walk or has no visible children; a branch below the root
//! is folded instead, and its commands are listed on the nearest ancestor page
//! that is written.

use crate::error::{Error, Result};
use crate::model::{build_page, dashed, PageMeta, SubcommandEntry};
use crate::node::CommandSource;
use crate::render::{self, Format, Renderer};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Deepest command nesting accepted before the tree is considered malformed.
pub const MAX_DEPTH: usize = 64;

pub const DEFAULT_SOURCE: &str = "Rust";
pub const DEFAULT_MANUAL: &str = "Commands";
pub const DEFAULT_SECTION: u32 = 1;

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory pages are written to (created if absent)
    pub target_dir: PathBuf,
    pub format: Format,
    pub section: u32,
    pub source: String,
    pub manual: String,
    /// Recorded on every page; `None` means `1.0.0`
    pub version: Option<String>,
    /// Creation date printed on every page
    pub date: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("man"),
            format: Format::default(),
            section: DEFAULT_SECTION,
            source: DEFAULT_SOURCE.to_string(),
            manual: DEFAULT_MANUAL.to_string(),
            version: None,
            date: today(),
        }
    }
}

/// Current local date in the `18-Oct-2026` form used on page titles.
pub fn today() -> String {
    chrono::Local::now().format("%d-%b-%Y").to_string()
}

/// Commands owed to the nearest written ancestor: full path → short help.
pub type Bubbled = BTreeMap<String, String>;

/// Write one page per emitted command of `root` into `options.target_dir`.
///
/// Returns the written paths in the order they were written.
pub fn generate<S: CommandSource>(
    root: &S,
    root_name: &str,
    options: &GenerateOptions,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&options.target_dir).map_err(|source| Error::CreateDir {
        path: options.target_dir.clone(),
        source,
    })?;
    let mut generator = Generator::new(options);
    generator.walk(root, root_name, None, 0)?;
    Ok(generator.written)
}

/// Walk state for one run.
pub struct Generator<'a> {
    options: &'a GenerateOptions,
    renderer: Box<dyn Renderer>,
    /// file name → command path that claimed it
    claimed: HashMap<String, String>,
    written: Vec<PathBuf>,
}

impl<'a> Generator<'a> {
    pub fn new(options: &'a GenerateOptions) -> Self {
        Self {
            options,
            renderer: render::create_renderer(options.format),
            claimed: HashMap::new(),
            written: Vec::new(),
        }
    }

    /// Paths written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Visit `node` at `path`, whose parent (if any) is `parent`.
    ///
    /// Returns what this call did not write itself: empty when the node got
    /// its own page, otherwise the node's own entry plus everything listed
    /// beneath it.
    pub fn walk<S: CommandSource>(
        &mut self,
        node: &S,
        path: &str,
        parent: Option<&str>,
        depth: usize,
    ) -> Result<Bubbled> {
        if depth > MAX_DEPTH {
            return Err(Error::TooDeep {
                path: path.to_string(),
                limit: MAX_DEPTH,
            });
        }
        if parent.is_none() {
            check_segment(path, path)?;
        }

        let children: Vec<(String, &S)> = node
            .children()
            .into_iter()
            .filter(|(_, child)| !child.is_hidden())
            .collect();

        let mut listed = Bubbled::new();
        for (name, child) in &children {
            check_segment(path, name)?;
            let child_path = format!("{} {}", path, name);
            listed.insert(child_path.clone(), child.short_help());
            let bubbled = self.walk(*child, &child_path, Some(path), depth + 1)?;
            listed.extend(bubbled);
        }

        if !children.is_empty() && parent.is_some() {
            debug!(command = path, entries = listed.len(), "folding branch into parent page");
            listed.insert(path.to_string(), node.short_help());
            return Ok(listed);
        }

        self.emit(node, path, listed)?;
        Ok(Bubbled::new())
    }

    fn emit<S: CommandSource>(&mut self, node: &S, path: &str, listed: Bubbled) -> Result<()> {
        let subcommands = listed
            .into_iter()
            .map(|(full, short_help)| SubcommandEntry {
                name: relative(path, &full).to_string(),
                reference: dashed(&full),
                short_help,
            })
            .collect();

        let meta = PageMeta {
            version: self.options.version.as_deref(),
            section: self.options.section,
            source: &self.options.source,
            manual: &self.options.manual,
            date: &self.options.date,
        };
        let page = build_page(node, path, &meta, subcommands);
        let file = render::file_name(self.renderer.as_ref(), &page);

        if let Some(first) = self.claimed.insert(file.clone(), path.to_string()) {
            return Err(Error::DuplicatePage {
                first,
                second: path.to_string(),
                file,
            });
        }

        let out_path = self.options.target_dir.join(&file);
        fs::write(&out_path, self.renderer.render(&page)).map_err(|source| Error::Write {
            path: out_path.clone(),
            source,
        })?;
        debug!(command = path, version = %page.version, file = %out_path.display(), "wrote page");
        self.written.push(out_path);
        Ok(())
    }
}

/// Path of `full` below `page`: ("tool", "tool remote add") → "remote add".
fn relative<'p>(page: &str, full: &'p str) -> &'p str {
    full.strip_prefix(page)
        .and_then(|rest| rest.strip_prefix(' '))
        .unwrap_or(full)
}

fn check_segment(path: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::MalformedTree {
            path: path.to_string(),
            reason: "empty command name".to_string(),
        });
    }
    if name.chars().any(char::is_whitespace) {
        return Err(Error::MalformedTree {
            path: path.to_string(),
            reason: format!("command name \"{}\" contains whitespace", name),
        });
    }
    if name.chars().any(std::path::is_separator) {
        return Err(Error::MalformedTree {
            path: path.to_string(),
            reason: format!("command name \"{}\" contains a path separator", name),
        });
    }
    Ok(())
}
