//! `cuttle batch` - Build the enrollment batch for a topology.

use anyhow::{Context as _, Result};
use colored::Colorize;
use cuttle_core::{validate, EnrollmentBatch, EnrollmentRequest, ProjectorConfig};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};
use tracing::warn;

use super::Context;
use crate::cli::args::BatchArgs;
use crate::output::{self, OutputFormat};

#[derive(Tabled, Serialize)]
struct RequestRow {
    #[tabled(rename = "Enroll ID")]
    enroll_id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "CA File")]
    ca_file: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Output")]
    output: String,
}

impl From<&EnrollmentRequest> for RequestRow {
    fn from(request: &EnrollmentRequest) -> Self {
        let s = &request.enroll.subject;
        Self {
            enroll_id: request.register.enroll_id.clone(),
            kind: request.register.kind.clone(),
            ca_file: request.ca_file.clone(),
            subject: format!("C={},ST={},L={}", s.country, s.province, s.locality),
            output: request.output.clone(),
        }
    }
}

pub fn execute(ctx: &Context, args: &BatchArgs) -> Result<()> {
    let (topology, identities) = ctx.resolve(&args.topology)?;

    if args.strict || ctx.config.strict {
        validate::ensure_valid(&topology, &identities).map_err(|err| {
            let details: Vec<String> = err.issues().iter().map(|i| format!("  - {i}")).collect();
            anyhow::anyhow!("{err}\n{}", details.join("\n"))
        })?;
    }

    let secret = args
        .secret
        .clone()
        .or_else(|| ctx.config.enrollment_secret.clone());
    if secret.is_none() {
        warn!("using the shared bootstrap secret for every identity; set --secret for real deployments");
    }
    let projector = secret.map_or_else(ProjectorConfig::default, |s| ProjectorConfig::new().secret(s));

    let batch = cuttle_core::project(&identities, &projector);

    if let Some(path) = &args.out {
        let content = match ctx.output_format.file_format()? {
            OutputFormat::Json => batch.to_json()?,
            _ => batch.to_yaml()?,
        };
        std::fs::write(path, content)
            .with_context(|| format!("Could not write batch to {}", path.display()))?;

        println!(
            "{} Wrote {} enrollment requests to {}",
            "Success:".green().bold(),
            batch.len(),
            path.display().to_string().cyan()
        );
        return Ok(());
    }

    match ctx.output_format {
        OutputFormat::Json => println!("{}", batch.to_json()?),
        OutputFormat::Yaml => print!("{}", batch.to_yaml()?),
        OutputFormat::Csv => {
            let rows: Vec<RequestRow> = batch.iter().map(RequestRow::from).collect();
            output::write_csv(std::io::stdout().lock(), &rows)?;
        }
        OutputFormat::Pretty => print_pretty(ctx, &batch)?,
    }

    Ok(())
}

fn print_pretty(ctx: &Context, batch: &EnrollmentBatch) -> Result<()> {
    println!("{}", "Enrollment Batch:".bold());
    println!();

    if batch.is_empty() {
        println!("  No identities to enroll.");
        return Ok(());
    }

    let rows: Vec<RequestRow> = batch.iter().map(RequestRow::from).collect();
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!();
    println!("{} {} requests", "Total:".bold(), batch.len());

    if ctx.verbose {
        println!();
        print!("{}", batch.to_yaml()?);
    } else {
        println!("{}", "Tip: Use --output yaml or --out <FILE> for the full batch".dimmed());
    }

    Ok(())
}
