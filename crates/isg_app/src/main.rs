mod app;
mod config;

use std::process::ExitCode;

use isg_logging::{isg_error, LogDestination};
use log::LevelFilter;

fn main() -> ExitCode {
    let path = config::config_path(std::env::args());
    let config = match config::load_config(&path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let destination = if config.log_to_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    isg_logging::initialize(destination, LevelFilter::Info);

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            isg_error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
