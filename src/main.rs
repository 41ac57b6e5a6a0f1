mod catalog;
mod cli;
mod client;
mod config;
mod logging;
mod planner;

use clap::Parser;
use std::process::ExitCode;

use crate::config::ConfigError;

/// Exit status for an unusable configuration, such as a missing API key.
const CONFIG_ERROR_STATUS: u8 = 2;
const FAILURE_STATUS: u8 = 1;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {}", report(&err));
            ExitCode::from(exit_status(&err))
        }
    }
}

fn is_config_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ConfigError>().is_some()
}

/// Configuration errors carry their own remedy, so the context chain is
/// only printed for everything else.
fn report(err: &anyhow::Error) -> String {
    if is_config_error(err) {
        format!("{err}")
    } else {
        format!("{err:#}")
    }
}

fn exit_status(err: &anyhow::Error) -> u8 {
    if is_config_error(err) {
        CONFIG_ERROR_STATUS
    } else {
        FAILURE_STATUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, anyhow};

    #[test]
    fn config_errors_exit_with_status_two() {
        let err = anyhow::Error::new(ConfigError::ZeroTimeout);

        assert_eq!(exit_status(&err), 2);
        assert_eq!(report(&err), "timeout_secs must be greater than zero");
    }

    #[test]
    fn other_failures_exit_with_status_one_and_full_chain() {
        let err = Err::<(), _>(anyhow!("status 503"))
            .context("Watch plan request failed")
            .unwrap_err();

        assert_eq!(exit_status(&err), 1);
        assert_eq!(report(&err), "Watch plan request failed: status 503");
    }
}
