//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stc")]
#[command(author, version, about = "EOS simple token constructor")]
#[command(
    long_about = "Constructor plugin for an EOS simple token: prints the parameter schema, renders the contract source from a fields file, and describes the contract's callable functions."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the capability descriptor (target blockchain, API version)
    Version,

    /// Show the parameter schema the platform renders a form from
    Schema(SchemaArgs),

    /// Render the contract source from a JSON fields file
    Construct(ConstructArgs),

    /// Show UI metadata for the contract's callable functions
    Functions,
}

#[derive(clap::Args)]
pub struct SchemaArgs {
    /// Show only the presentation-layer UI schema
    #[arg(long)]
    pub ui: bool,
}

#[derive(clap::Args)]
pub struct ConstructArgs {
    /// JSON file with constructor fields, e.g. {"ticker": "TOK", "decimals": 4}
    #[arg(long, short = 'F')]
    pub fields: PathBuf,

    /// Write the generated source to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
