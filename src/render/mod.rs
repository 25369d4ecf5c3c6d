//! Renderer module: trait-based format dispatch.

pub mod asciidoc;
pub mod man;

use crate::model::PageModel;
use clap::ValueEnum;

/// Trait for rendering a page into a specific markup.
pub trait Renderer {
    fn render(&self, page: &PageModel) -> String;
    fn file_extension(&self, page: &PageModel) -> String;
}

/// Output markup selected for a generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Man,
    Asciidoc,
}

impl Format {
    /// Noun used in progress messages ("Generate man pages for ...").
    pub fn label(self) -> &'static str {
        match self {
            Format::Man => "man",
            Format::Asciidoc => "asciidoc",
        }
    }
}

/// Create the renderer for the given format.
pub fn create_renderer(format: Format) -> Box<dyn Renderer> {
    match format {
        Format::Man => Box::new(man::ManRenderer),
        Format::Asciidoc => Box::new(asciidoc::AsciidocRenderer),
    }
}

/// File name (without directory) a page is written to.
pub fn file_name(renderer: &dyn Renderer, page: &PageModel) -> String {
    format!(
        "{}.{}",
        crate::model::dashed(&page.command_path),
        renderer.file_extension(page)
    )
}
