use crate::catalog::Choice;

use super::types::WatchRequest;

pub(crate) const WATCH_PLANNER_SYSTEM_PROMPT: &str = "
You are a movie and TV series watch planner.

Rules:
- Suggest only content available on the given platform
- Maximum 3 items
- Include watch order
- Include short synopsis (2\u{2013}3 lines)
- Include snack suggestions
- Use clean markdown formatting
";

pub(crate) fn user_prompt(request: &WatchRequest) -> String {
    format!(
        "\nMood: {}\nTime Available: {}\nStreaming Platform: {}\n",
        request.mood.label(),
        request.time_available.label(),
        request.platform.label()
    )
}
