//! `cuttle config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(ctx, &key, &value),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(config)?);
        }
        _ => {
            println!("{}", "Current Configuration:".bold());
            println!();

            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );

            let secret_display = config
                .enrollment_secret
                .as_ref()
                .map_or_else(|| "(default)".dimmed().to_string(), |_| "****".to_string());
            println!("  {} {}", "enrollment_secret:".bold(), secret_display);

            println!("  {} {}", "strict:".bold(), config.strict);
        }
    }

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config: Config = ctx.config.clone();
    config.set(key, value)?;
    config.save(&ctx.config_path)?;

    println!("{} {} set.", "Success:".green().bold(), key.cyan());

    Ok(())
}
