use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coindist")]
#[command(about = "Genesis distribution and vesting status tool")]
pub struct Cli {
    /// Distribution config (JSON). Ledger defaults when omitted.
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List distribution addresses with their genesis balance
    List {
        /// Only addresses that may not spend yet
        #[arg(long, conflicts_with = "unlocked")]
        locked: bool,
        /// Only addresses that may spend
        #[arg(long)]
        unlocked: bool,
    },
    /// Show supply constants and the current unlock boundary
    Status,
    /// Check whether the inputs in FILE (JSON array) spend locked outputs
    Check {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Run the start-up self-check on the address table
    Verify,
}
