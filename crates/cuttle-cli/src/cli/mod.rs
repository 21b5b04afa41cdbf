//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = match cli.config_file {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)?;

    // Determine output format
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Create context for commands
    let ctx = commands::Context {
        config,
        config_path,
        output_format,
        verbose: cli.verbose,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Nodes(args) => commands::nodes::execute(&ctx, &args),
        Commands::Batch(args) => commands::batch::execute(&ctx, &args),
        Commands::Validate(args) => commands::validate::execute(&ctx, &args),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Log to stderr; `RUST_LOG` wins, otherwise `warn` or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
