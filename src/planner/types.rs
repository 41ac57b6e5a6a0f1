use std::fmt;

use crate::catalog::{Mood, Platform, TimeAvailable};

/// The three selections that parameterize one watch plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchRequest {
    pub mood: Mood,
    pub time_available: TimeAvailable,
    pub platform: Platform,
}

impl WatchRequest {
    pub fn new(mood: Mood, time_available: TimeAvailable, platform: Platform) -> Self {
        Self {
            mood,
            time_available,
            platform,
        }
    }
}

/// Markdown returned by the model, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchPlan(String);

impl WatchPlan {
    pub(crate) fn new(markdown: String) -> Self {
        Self(markdown)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WatchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
