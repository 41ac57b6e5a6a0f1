use anyhow::{Result, anyhow};
use tracing::{debug, warn};

use crate::client::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatMessageRole,
};
use crate::config::ModelSettings;

use super::prompt::{WATCH_PLANNER_SYSTEM_PROMPT, user_prompt};
use super::types::{WatchPlan, WatchRequest};

/// Builds the two-message completion payload for one set of selections.
pub fn build_request(settings: &ModelSettings, request: &WatchRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: settings.name.clone(),
        messages: vec![
            ChatMessage {
                role: ChatMessageRole::System,
                content: WATCH_PLANNER_SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: ChatMessageRole::User,
                content: user_prompt(request),
            },
        ],
        temperature: Some(settings.temperature),
        max_tokens: Some(settings.max_tokens),
    }
}

pub(crate) fn first_choice_text(response: ChatCompletionResponse) -> Result<WatchPlan> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("Completion service returned no choices"))?;

    debug!(finish_reason = ?choice.finish_reason, "watch plan received");
    if choice.finish_reason.as_deref() == Some("length") {
        warn!("watch plan was cut off at the max_tokens limit");
    }

    match choice.message.content {
        Some(content) if !content.is_empty() => Ok(WatchPlan::new(content)),
        _ => Err(anyhow!("Completion service returned an empty watch plan")),
    }
}
