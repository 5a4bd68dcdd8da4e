// YandexGPT client: dispatch, bounded retry, operation polling and
// usage accounting

use std::cell::Cell;
use std::thread;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::auth::CredentialResolver;
use crate::config::YandexGptConfig;
use crate::error::{Error, Result};
use crate::traits::LanguageModel;
use crate::transport::{HttpTransport, Transport};
use crate::types::{ChatMessage, UsageStats};
use crate::yandex::request::{build_request, CompletionRequest};

const COMPLETION_PATH: &str = "/foundationModels/v1/completion";
const COMPLETION_ASYNC_PATH: &str = "/foundationModels/v1/completionAsync";
const OPERATIONS_PATH: &str = "/operations";
const DATA_LOGGING_HEADER: &str = "x-data-logging-enabled";

/// Blocking YandexGPT completion client.
///
/// Usage counters are single-writer state on the instance; the type is
/// deliberately `!Sync`, so sharing it across threads requires an external
/// mutex.
pub struct YandexGptClient {
    config: YandexGptConfig,
    credentials: Box<dyn CredentialResolver>,
    transport: Box<dyn Transport>,
    usage: Cell<UsageStats>,
}

impl YandexGptClient {
    /// Create a client against the production endpoint.
    pub fn new(
        config: YandexGptConfig,
        credentials: impl CredentialResolver + 'static,
    ) -> Result<Self> {
        Ok(Self::with_transport(
            config,
            Box::new(credentials),
            Box::new(HttpTransport::new()?),
        ))
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport(
        config: YandexGptConfig,
        credentials: Box<dyn CredentialResolver>,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            config,
            credentials,
            transport,
            usage: Cell::new(UsageStats::default()),
        }
    }

    /// Snapshot of the counters accumulated since creation or the last
    /// [`reset_usage`](Self::reset_usage).
    pub fn usage(&self) -> UsageStats {
        self.usage.get()
    }

    /// Zero all three usage counters.
    pub fn reset_usage(&self) {
        self.usage.set(UsageStats::default());
    }

    /// Resolve credentials, build the payload and drive the retry loop.
    ///
    /// Configuration, argument and authentication errors surface before
    /// the first attempt and are never retried.
    fn generate(&self, messages: Vec<ChatMessage>) -> Result<ChatMessage> {
        let context = self.credentials.resolve()?;
        let request = build_request(&self.config, context.folder_id.as_deref(), messages)?;
        let mut headers = context.headers;
        if self.config.disable_logging {
            headers.insert(
                HeaderName::from_static(DATA_LOGGING_HEADER),
                HeaderValue::from_static("false"),
            );
        }

        let mut last_error = None;
        for attempt in 1..=self.config.retries {
            match self.try_generate(&headers, &request) {
                Ok(message) => return Ok(message),
                Err(err) => {
                    tracing::warn!(
                        attempt,
                        retries = self.config.retries,
                        error = %err,
                        "YandexGPT attempt failed"
                    );
                    last_error = Some(err);
                    if attempt < self.config.retries {
                        thread::sleep(self.config.sleep_interval);
                    }
                }
            }
        }
        Err(Error::RetryExhausted {
            retries: self.config.retries,
            // retries >= 1 is enforced at config build, so at least one
            // attempt ran and recorded its error
            source: Box::new(last_error.unwrap_or_else(|| {
                Error::UpstreamResponse("no attempt was made".into())
            })),
        })
    }

    /// One attempt: dispatch (sync or async) plus result parsing.
    fn try_generate(&self, headers: &HeaderMap, request: &CompletionRequest) -> Result<ChatMessage> {
        let result = if self.config.use_async {
            self.dispatch_async(headers, request)?
        } else {
            self.dispatch_sync(headers, request)?
        };
        self.parse_result(&result)
    }

    fn dispatch_sync(&self, headers: &HeaderMap, request: &CompletionRequest) -> Result<Value> {
        let body = serde_json::to_value(request)?;
        let response = self.transport.post_json(COMPLETION_PATH, headers, &body)?;
        match response.get("result") {
            Some(result) => Ok(result.clone()),
            None => Err(Error::UpstreamResponse(format!(
                "completion response carries no result: {response}"
            ))),
        }
    }

    fn dispatch_async(&self, headers: &HeaderMap, request: &CompletionRequest) -> Result<Value> {
        let body = serde_json::to_value(request)?;
        let submitted = self
            .transport
            .post_json(COMPLETION_ASYNC_PATH, headers, &body)?;
        let operation_id = submitted
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::UpstreamResponse(format!(
                    "async submission returned no operation id: {submitted}"
                ))
            })?
            .to_string();
        self.poll_operation(headers, &operation_id)
    }

    /// Poll the operation until it reports done or the poll budget is
    /// spent. Budget exhaustion is an explicit [`Error::PollTimeout`].
    fn poll_operation(&self, headers: &HeaderMap, operation_id: &str) -> Result<Value> {
        let path = format!("{OPERATIONS_PATH}/{operation_id}");
        for poll in 1..=self.config.async_retries {
            thread::sleep(self.config.async_sleep_interval);
            let status = self.transport.get_json(&path, headers)?;
            if status.get("done").and_then(Value::as_bool) == Some(true) {
                return match status.get("response") {
                    Some(response) => Ok(response.clone()),
                    None => Err(Error::UpstreamResponse(format!(
                        "operation {operation_id} completed without a response: {status}"
                    ))),
                };
            }
            tracing::debug!(operation_id, poll, "operation still running");
        }
        Err(Error::PollTimeout {
            polls: self.config.async_retries,
        })
    }

    /// Extract the first alternative's message, then commit the usage
    /// counters. Counters move only after the whole parse succeeded, so a
    /// retried attempt never contributes partially.
    fn parse_result(&self, result: &Value) -> Result<ChatMessage> {
        let message = result
            .get("alternatives")
            .and_then(|alternatives| alternatives.get(0))
            .and_then(|alternative| alternative.get("message"))
            .ok_or_else(|| {
                Error::UpstreamResponse(format!("result carries no alternatives: {result}"))
            })?;
        let message: ChatMessage = serde_json::from_value(message.clone()).map_err(|err| {
            Error::UpstreamResponse(format!("malformed alternative message: {err}"))
        })?;

        let usage = result
            .get("usage")
            .ok_or_else(|| Error::MalformedUsage("usage block is missing".into()))?;
        let delta = UsageStats {
            total_tokens: usage_field(usage, "totalTokens")?,
            completion_tokens: usage_field(usage, "completionTokens")?,
            input_text_tokens: usage_field(usage, "inputTextTokens")?,
        };
        let mut counters = self.usage.get();
        counters.add(delta);
        self.usage.set(counters);

        Ok(message)
    }
}

/// The API serializes token counts as JSON strings; accept numbers too.
fn usage_field(usage: &Value, field: &str) -> Result<u64> {
    let value = usage
        .get(field)
        .ok_or_else(|| Error::MalformedUsage(format!("usage field {field} is missing")))?;
    match value {
        Value::Number(n) => n.as_u64().ok_or_else(|| {
            Error::MalformedUsage(format!("usage field {field} is not a non-negative integer"))
        }),
        Value::String(s) => s
            .parse()
            .map_err(|_| Error::MalformedUsage(format!("usage field {field} is not numeric: {s:?}"))),
        other => Err(Error::MalformedUsage(format!(
            "usage field {field} has unexpected type: {other}"
        ))),
    }
}

impl LanguageModel for YandexGptClient {
    fn complete(&self, prompt: &str, stop: Option<&[String]>) -> Result<String> {
        reject_stop(stop)?;
        let mut messages = Vec::new();
        if let Some(instruction) = &self.config.instruction_text {
            messages.push(ChatMessage::system(instruction));
        }
        messages.push(ChatMessage::user(prompt));
        self.generate(messages).map(|message| message.text)
    }

    fn chat(&self, messages: &[ChatMessage], stop: Option<&[String]>) -> Result<String> {
        self.chat_message(messages, stop).map(|message| message.text)
    }

    fn chat_message(
        &self,
        messages: &[ChatMessage],
        stop: Option<&[String]>,
    ) -> Result<ChatMessage> {
        reject_stop(stop)?;
        self.generate(messages.to_vec())
    }
}

fn reject_stop(stop: Option<&[String]>) -> Result<()> {
    if stop.is_some() {
        return Err(Error::InvalidArgument(
            "stop sequences are not supported by YandexGPT".into(),
        ));
    }
    Ok(())
}
