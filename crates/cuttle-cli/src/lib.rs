//! # cuttle-cli
//!
//! Command-line interface over `cuttle-core`.
//!
//! ## Commands
//!
//! - **nodes**: list identities resolved from a topology file
//! - **batch**: project identities into a CA enrollment batch, to stdout or a file
//! - **validate**: strict checks for empty fields, negative counts and duplicate names
//! - **config**: persistent defaults (output format, enrollment secret, strict mode)

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
