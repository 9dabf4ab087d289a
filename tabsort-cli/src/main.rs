mod args;
mod config;
mod error;
mod logging;
mod paths;
mod report;

use std::process::ExitCode;

use clap::Parser;
use simplelog::LevelFilter;

use args::Cli;
use config::CliConfig;
use error::CliError;
use report::TableFile;

fn run(cli: &Cli, config: CliConfig) -> Result<String, CliError> {
    let table = TableFile::load(&cli.table)?;
    log::info!(
        "loaded {} columns, {} rows from {}",
        table.columns.len(),
        report::row_count(&table.rows),
        cli.table.display()
    );

    let mut engine_config = config.engine;
    engine_config.sort_empty_last |= cli.sort_empty_last;

    let report = report::replay(&table, engine_config, &cli.clicks, cli.visible)?;
    serde_json::to_string_pretty(&report).map_err(CliError::Output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let level = cli.log_level.or(config.log_level).unwrap_or(LevelFilter::Info);
    logging::init(level, config.log_retention());

    match run(&cli, config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
