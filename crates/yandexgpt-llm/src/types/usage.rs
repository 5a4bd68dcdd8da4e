use serde::{Deserialize, Serialize};

/// Running token-usage counters accumulated across successful calls.
///
/// Counters only grow, and only by whole successfully-parsed responses; a
/// failed attempt inside the retry loop contributes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub total_tokens: u64,
    pub completion_tokens: u64,
    pub input_text_tokens: u64,
}

impl UsageStats {
    pub(crate) fn add(&mut self, delta: UsageStats) {
        self.total_tokens += delta.total_tokens;
        self.completion_tokens += delta.completion_tokens;
        self.input_text_tokens += delta.input_text_tokens;
    }
}
