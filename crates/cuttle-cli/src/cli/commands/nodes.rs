//! `cuttle nodes` - List the identities derived from a topology.

use anyhow::Result;
use colored::Colorize;
use cuttle_core::{Identity, NodeKind};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::cli::args::NodesArgs;
use crate::output::{self, OutputFormat};

#[derive(Tabled, Serialize)]
struct NodeRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Org")]
    org: String,
    #[tabled(rename = "CA File")]
    ca_file: String,
    #[tabled(rename = "Output")]
    output: String,
}

impl From<&Identity> for NodeRow {
    fn from(identity: &Identity) -> Self {
        Self {
            name: identity.name.clone(),
            kind: identity.kind.to_string(),
            org: identity.org_name.clone(),
            ca_file: identity.ca_file.clone(),
            output: identity.output.clone(),
        }
    }
}

pub fn execute(ctx: &Context, args: &NodesArgs) -> Result<()> {
    let (_, identities) = ctx.resolve(&args.topology)?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&identities)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&identities)?);
        }
        OutputFormat::Csv => {
            let rows: Vec<NodeRow> = identities.iter().map(NodeRow::from).collect();
            output::write_csv(std::io::stdout().lock(), &rows)?;
        }
        OutputFormat::Pretty => print_pretty(&identities),
    }

    Ok(())
}

fn print_pretty(identities: &[Identity]) {
    if identities.is_empty() {
        println!("  No identities derived from this topology.");
        return;
    }

    let rows: Vec<NodeRow> = identities.iter().map(NodeRow::from).collect();
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");

    let count = |kind: NodeKind| identities.iter().filter(|i| i.kind == kind).count();
    println!();
    println!(
        "{} {} orderers, {} peers, {} admins, {} users",
        "Total:".bold(),
        count(NodeKind::OrderingNode),
        count(NodeKind::PeerNode),
        count(NodeKind::Admin),
        count(NodeKind::User),
    );
}
