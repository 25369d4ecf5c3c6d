//! Installed-command registry: resolves the application name given on the
//! command line to exactly one command tree.

use crate::error::{Error, Result};
use crate::node::CommandSpec;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Contents of a registry file.
#[derive(Debug, Default, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub commands: Vec<RegistryEntry>,
}

/// One installed application.
#[derive(Debug, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    pub command: CommandSpec,
}

impl Registry {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::RegistryRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| Error::RegistryParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// The single entry registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&RegistryEntry> {
        let mut matches = self.commands.iter().filter(|entry| entry.name == name);
        let first = matches
            .next()
            .ok_or_else(|| Error::NotInstalled(name.to_string()))?;
        let rest = matches.count();
        if rest > 0 {
            return Err(Error::Ambiguous {
                name: name.to_string(),
                count: rest + 1,
            });
        }
        Ok(first)
    }
}
