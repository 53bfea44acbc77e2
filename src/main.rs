// src/main.rs
use anyhow::Result;
use httping::config::{self, Config, ConfigError};
use httping::health::HealthChecker;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const USAGE_ERROR: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::from(USAGE_ERROR);
    }

    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        // clap prints its own message; help and version exit 0
        Err(ConfigError::Cli(e)) => e.exit(),
        Err(e) => {
            error!("{}", e);
            eprint!("{}", config::usage());
            return ExitCode::from(USAGE_ERROR);
        }
    };

    debug!("Loaded configuration:\n{}", config.summary());

    let checker = match HealthChecker::new(config) {
        Ok(checker) => checker,
        Err(e) => {
            error!("{}: {}", e.kind(), e);
            return ExitCode::FAILURE;
        }
    };

    match checker.check().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}: {}\n\n{}", e.kind(), e, checker.config().summary());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
