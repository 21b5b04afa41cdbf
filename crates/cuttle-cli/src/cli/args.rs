//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Derive Fabric identities and CA enrollment batches from a topology file
///
/// Reads a cryptogen-style topology, resolves every orderer, peer, admin and
/// user identity, and projects them into registration/enrollment requests.
#[derive(Parser, Debug)]
#[command(name = "cuttle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Config file (defaults to the platform config directory)
    #[arg(long = "config", env = "CUTTLE_CONFIG", global = true)]
    pub config_file: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the identities derived from a topology
    Nodes(NodesArgs),

    /// Build the enrollment batch for a topology
    Batch(BatchArgs),

    /// Check a topology for empty fields, negative counts and duplicate names
    Validate(ValidateArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Nodes command
// ============================================================================

#[derive(Args, Debug)]
pub struct NodesArgs {
    /// Topology file (YAML)
    pub topology: PathBuf,
}

// ============================================================================
// Batch command
// ============================================================================

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Topology file (YAML)
    pub topology: PathBuf,

    /// Write the batch to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Secret for every registration and enrollment
    #[arg(long, env = "CUTTLE_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// Refuse to emit a batch when validation finds issues
    #[arg(long)]
    pub strict: bool,
}

// ============================================================================
// Validate command
// ============================================================================

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Topology file (YAML)
    pub topology: PathBuf,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., output_format, enrollment_secret, strict)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
