use crate::error::Result;
use crate::types::ChatMessage;

/// Contract between the orchestration layer and a concrete model adapter.
///
/// Every call blocks the calling thread until the provider answers or the
/// retry budget is spent. Implementations that accumulate per-instance
/// state (usage counters here) assume a single writer; share an instance
/// across threads behind a mutex if you must.
pub trait LanguageModel {
    /// Single-prompt completion returning the generated text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument)
    /// when a stop-sequence list is supplied; stop sequences are not
    /// supported by this provider.
    fn complete(&self, prompt: &str, stop: Option<&[String]>) -> Result<String>;

    /// Multi-message completion returning the generated text.
    fn chat(&self, messages: &[ChatMessage], stop: Option<&[String]>) -> Result<String>;

    /// Multi-message completion returning the full assistant message.
    fn chat_message(&self, messages: &[ChatMessage], stop: Option<&[String]>)
        -> Result<ChatMessage>;
}
