//! Turns a mood, a time budget and a platform into a watch plan.
//!
//! The planner builds a fixed system prompt plus a user message carrying the
//! three selections, sends one chat completion and hands back the first
//! choice's markdown untouched.

mod prompt;
mod transport;
mod types;

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::client::{CompletionError, DynLlmClient};
use crate::config::ModelSettings;

pub use transport::build_request;
pub use types::{WatchPlan, WatchRequest};

const RETRY_DELAY: Duration = Duration::from_millis(500);

pub async fn generate_watch_plan(
    client: &DynLlmClient,
    settings: &ModelSettings,
    request: &WatchRequest,
) -> Result<WatchPlan> {
    let chat_request = build_request(settings, request);
    info!(
        mood = %request.mood,
        time_available = %request.time_available,
        platform = %request.platform,
        model = %settings.name,
        "requesting watch plan"
    );

    let mut attempt = 0;
    let response = loop {
        attempt += 1;
        debug!(attempt, "calling completion service");

        match client.chat_completion(chat_request.clone()).await {
            Ok(response) => break response,
            Err(err) if should_retry(&err, attempt, settings.retries) => {
                warn!(attempt, error = %err, "transient completion failure, retrying");
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(err) => {
                return Err(err).context("Watch plan request failed");
            }
        }
    };

    transport::first_choice_text(response)
}

fn should_retry(err: &CompletionError, attempt: u32, retries: u32) -> bool {
    err.is_transient() && attempt <= retries
}
