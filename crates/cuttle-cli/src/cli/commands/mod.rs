//! Command implementations.

pub mod batch;
pub mod config;
pub mod nodes;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use cuttle_core::{Identity, Topology};

use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded CLI configuration
    pub config: Config,

    /// Where the configuration lives
    pub config_path: PathBuf,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Load and resolve a topology file.
    pub fn resolve(&self, path: &Path) -> Result<(Topology, Vec<Identity>)> {
        let topology = Topology::load(path)
            .with_context(|| format!("Could not load topology {}", path.display()))?;
        let identities = cuttle_core::resolve(&topology);
        Ok((topology, identities))
    }
}
