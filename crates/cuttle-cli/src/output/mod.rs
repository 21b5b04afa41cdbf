//! Output formatting for different formats.

use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tables for humans
    #[default]
    #[value(alias = "table")]
    Pretty,
    /// JSON documents
    Json,
    /// One CSV row per record
    Csv,
    /// YAML documents, the layout CA clients read
    #[value(alias = "yml")]
    Yaml,
}

impl OutputFormat {
    /// Format for a batch written to a file.
    ///
    /// Tables have no file form, so `pretty` becomes YAML. CSV cannot carry
    /// nested registration attributes and is rejected.
    pub fn file_format(self) -> Result<Self> {
        match self {
            Self::Json => Ok(Self::Json),
            Self::Yaml | Self::Pretty => Ok(Self::Yaml),
            Self::Csv => anyhow::bail!(
                "csv cannot hold an enrollment batch; write the file as yaml or json"
            ),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true).map_err(|_| {
            anyhow::anyhow!("Unknown output format: {s}\nValid formats: pretty, json, csv, yaml")
        })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// Serialize `rows` as CSV with a header line.
pub fn write_csv<W, T>(writer: W, rows: &[T]) -> Result<()>
where
    W: Write,
    T: Serialize,
{
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}
