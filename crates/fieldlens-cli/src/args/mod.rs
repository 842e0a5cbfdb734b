use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::OutputFormat;

#[derive(Parser)]
#[command(name = "fieldlens")]
#[command(about = "Pretty-print kernel data structures from debug snapshots", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Render snapshot values through the registered printers")]
    Render {
        snapshot: PathBuf,

        #[arg(long, help = "Render only this symbol instead of the whole snapshot")]
        symbol: Option<String>,
    },

    #[command(about = "Summarize snapshot symbols and printer coverage")]
    Inspect { snapshot: PathBuf },

    #[command(about = "List registered printers and their type patterns")]
    Printers,
}
