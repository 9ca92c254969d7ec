mod cli;
mod operations;

use clap::Parser;
use coindist_common::utils::time::current_time;
use coindist_vesting::DistributionConfig;
use serde::Serialize;
use tracing::{error, info};

use cli::{Cli, Commands};
use operations::ListFilter;

/// Exit status when the checked inputs spend locked outputs.
const EXIT_LOCKED: i32 = 2;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so command output can be piped.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,coindist=info".into()),
        )
        .init();

    let config = DistributionConfig::load_or_default(cli.config.as_deref())?.with_now(current_time());
    info!("Distribution config: {:?}", config);

    // Refuse to run on an inconsistent tokenomics configuration.
    let checker = match operations::build_checker(&config) {
        Ok(checker) => checker,
        Err(e) => {
            error!("Invalid distribution configuration: {}", e);
            return Err(e.into());
        }
    };

    match cli.command {
        Commands::List { locked, unlocked } => {
            let entries = operations::list_addresses(&checker, ListFilter::from_flags(locked, unlocked));
            emit(cli.json, &entries, || operations::render_list(&entries))?;
        }
        Commands::Status => {
            let report = operations::status(&checker, &config);
            emit(cli.json, &report, || operations::render_status(&report))?;
        }
        Commands::Check { path } => {
            let inputs = operations::read_inputs(&path)?;
            let report = operations::check_inputs(&checker, &inputs);
            emit(cli.json, &report, || operations::render_check(&report))?;
            if report.locked {
                std::process::exit(EXIT_LOCKED);
            }
        }
        Commands::Verify => {
            checker.registry().verify_genesis()?;
            println!("OK: {} unique distribution addresses", checker.registry().len());
        }
    }

    Ok(())
}

fn emit<T, F>(json: bool, value: &T, text: F) -> Result<(), Box<dyn std::error::Error>>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}
