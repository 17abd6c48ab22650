mod activity;
mod cli;
mod controls;
mod energy;
mod error;
mod fetch;
mod products;
mod update;
mod view;
mod voucher;
mod watch;
mod zones;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use cli::Commands;
use energy::BackendChart;
use env_logger::Env;
use error::CliError;
use log::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Energy(args) => energy::render(BackendChart::Energy, args),
        Commands::Co2(args) => energy::render(BackendChart::Co2, args),
        Commands::Watch(args) => watch::watch(args),
        Commands::Activity(args) => activity::activity(args),
        Commands::Zones(args) => zones::zones(args),
        Commands::Products(args) => products::products(args),
        Commands::Voucher(args) => voucher::voucher(args),
    }
}
