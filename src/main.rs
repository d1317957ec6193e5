//! esaop CLI - command-line companion for the esa.io documentation service

use clap::Parser;
use colored::Colorize;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

/// Route `log` output to stderr; `RUST_LOG` wins over `--debug`.
fn init_logging(debug: bool) {
    let default_filter = if debug { "esaop=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);
    log::debug!("Options: {:?}", opts);

    match cli.command {
        None | Some(Commands::Categories) => cli::category::list(&opts).await,
        Some(Commands::Team) => cli::team::get(&opts).await,
        Some(Commands::Stats) => cli::team::stats(&opts).await,
        Some(Commands::Members { page }) => cli::team::members(&opts, page).await,
        Some(Commands::Posts { page, query }) => cli::post::list(&opts, page, &query).await,
        Some(Commands::Post { number }) => cli::post::get(&opts, number).await,
        Some(Commands::Create(args)) => cli::post::create(&opts, &args).await,
    }
}
