use colored::Colorize;
use std::error::Error;
use std::process::ExitCode;
use subnet_calc::cli::{error_message, run, CommandLine};
use subnet_calc::config::Config;
use subnet_calc::logging::init_logging;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {}", "ERR".on_red(), error_message(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let commands = CommandLine::parse_args();
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main() cidr={}", commands.cidr);

    run(&commands, &config)
}
