use anyhow::Result;
use clap::Parser;

use crate::catalog::{Mood, Platform, TimeAvailable};

use super::commands;

/// Entry point for the `watchplan` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "watchplan",
    about = "Plan the perfect movie night or binge weekend",
    version,
    long_about = None
)]
pub struct Cli {
    /// Mood for the session (Thriller, Feel-Good, Mystery, Romance, Comedy, Horror)
    #[arg(short = 'm', long)]
    pub mood: Option<Mood>,

    /// Time available (1-2h, 3-5h, 6+h, weekend)
    #[arg(short = 't', long = "time")]
    pub time_available: Option<TimeAvailable>,

    /// Streaming platform (Netflix, Amazon Prime, Disney+, Hotstar)
    #[arg(short = 'p', long)]
    pub platform: Option<Platform>,

    /// Override the completion model
    #[arg(long)]
    pub model: Option<String>,

    /// Retry transient API failures this many times (default: no retry)
    #[arg(long)]
    pub retries: Option<u32>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the plan without colours or emoji headings
    #[arg(long)]
    pub plain: bool,

    /// List the available moods, time budgets and platforms
    #[arg(long)]
    pub list: bool,

    /// Interactively store the API key in the config file
    #[arg(long)]
    pub setup: bool,

    /// Enable debug logging of completion requests
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        commands::run(self).await
    }
}
