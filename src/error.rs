use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("\"{0}\" is not an installed command")]
    NotInstalled(String),
    #[error("\"{name}\" is ambiguous: {count} installed commands share this name")]
    Ambiguous { name: String, count: usize },
    #[error("failed to load registry {path}: {source}")]
    RegistryRead { path: PathBuf, source: io::Error },
    #[error("failed to load registry {path}: {source}")]
    RegistryParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to create target directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("malformed command tree at \"{path}\": {reason}")]
    MalformedTree { path: String, reason: String },
    #[error("command tree deeper than {limit} levels at \"{path}\"")]
    TooDeep { path: String, limit: usize },
    #[error("\"{first}\" and \"{second}\" would both be written to {file}")]
    DuplicatePage {
        first: String,
        second: String,
        file: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
