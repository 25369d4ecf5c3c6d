//! climan: generate man pages and AsciiDoc reference pages from a command
//! tree.
//!
//! A tree is anything implementing [`CommandSource`]: a [`CommandSpec`] read
//! from a registry file, or a `clap::Command`. [`generate`] walks it and writes
//! one page per emitted command into the target directory.

mod clap_source;
pub mod error;
pub mod model;
pub mod node;
pub mod registry;
pub mod render;
pub mod walker;

pub use error::{Error, Result};
pub use model::{PageModel, SubcommandEntry};
pub use node::{CommandSource, CommandSpec, OptionEntry};
pub use registry::Registry;
pub use render::Format;
pub use walker::{generate, GenerateOptions};
