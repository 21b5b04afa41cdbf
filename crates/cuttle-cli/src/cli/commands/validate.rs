//! `cuttle validate` - Strict checks the pipeline itself never enforces.

use anyhow::Result;
use colored::Colorize;
use cuttle_core::validate::{duplicate_names, validate_topology};
use tracing::debug;

use super::Context;
use crate::cli::args::ValidateArgs;
use crate::output::{self, OutputFormat};

pub fn execute(ctx: &Context, args: &ValidateArgs) -> Result<()> {
    let (topology, identities) = ctx.resolve(&args.topology)?;

    let mut issues = validate_topology(&topology);
    issues.extend(duplicate_names(&identities));

    for issue in &issues {
        debug!(%issue, "validation issue");
    }

    match ctx.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&issues)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&issues)?),
        OutputFormat::Csv => {
            let rows: Vec<_> = issues.iter().map(|i| [i.to_string()]).collect();
            output::write_csv(std::io::stdout().lock(), &rows)?;
        }
        OutputFormat::Pretty => {
            if issues.is_empty() {
                println!(
                    "{} {} identities, no issues found.",
                    "OK:".green().bold(),
                    identities.len()
                );
            } else {
                println!("{}", "Validation issues:".bold());
                for issue in &issues {
                    println!("  {} {}", "-".red(), issue);
                }
            }
        }
    }

    if !issues.is_empty() {
        anyhow::bail!("{} validation issue(s) found", issues.len());
    }

    Ok(())
}
