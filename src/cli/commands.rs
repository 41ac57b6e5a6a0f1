use anyhow::Result;
use std::io::{self, Write};
use tracing::debug;

use crate::client::{AIClient, DynLlmClient};
use crate::config::Config;
use crate::planner::{self, WatchRequest};

use super::args::Cli;
use super::form;
use super::render;
use super::setup;

const LOADING_MESSAGE: &str = "🎥 Creating your personalized watch plan...";

pub(crate) async fn run(cli: Cli) -> Result<()> {
    if cli.list {
        return render::print_catalog(&mut io::stdout());
    }

    if cli.setup {
        setup::run_setup(&mut io::stdin().lock(), &mut io::stdout())?;
        return Ok(());
    }

    // A missing API key stops here, before any menu or network call.
    let config = resolve_config(&cli)?;

    let mut stdout = io::stdout();
    render::print_banner(&mut stdout, cli.plain)?;
    let request = form::collect_request(&cli, &mut io::stdin().lock(), &mut stdout)?;

    let client = AIClient::new(&config.llm)?;
    deliver_plan(&client, &config, &request, cli.plain, &mut stdout).await
}

pub(crate) fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_unvalidated()?;
    apply_cli_overrides(cli, &mut config);
    config.validate()?;
    debug!(model = %config.model.name, base_url = %config.llm.base_url, "configuration resolved");
    Ok(config)
}

fn apply_cli_overrides(cli: &Cli, config: &mut Config) {
    if let Some(model) = &cli.model {
        config.model.name = model.clone();
    }
    if let Some(retries) = cli.retries {
        config.model.retries = retries;
    }
    if let Some(timeout) = cli.timeout {
        config.llm.timeout_secs = timeout;
    }
}

/// Requests a plan and writes it out. Nothing reaches `output` on failure.
pub(crate) async fn deliver_plan<W: Write>(
    client: &DynLlmClient,
    config: &Config,
    request: &WatchRequest,
    plain: bool,
    output: &mut W,
) -> Result<()> {
    eprintln!("{LOADING_MESSAGE}");
    let plan = planner::generate_watch_plan(client, &config.model, request).await?;
    render::print_plan(output, &plan, plain)
}
