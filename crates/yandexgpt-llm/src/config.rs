// Adapter configuration with explicit, typed fields and eager validation

use std::time::Duration;

use crate::error::{Error, Result};

/// YandexGPT adapter configuration. Immutable once built.
///
/// Exactly one of `instruction_id` or the lite/full selection determines
/// the resolved model endpoint; an instruction id, when present, always
/// wins.
#[derive(Debug, Clone)]
pub struct YandexGptConfig {
    /// Fine-tuned model id; resolves to `ds://{id}` and overrides
    /// lite/full selection.
    pub instruction_id: Option<String>,
    /// Folder (tenant) id for the default model endpoints. Falls back to
    /// the id carried by the credential context.
    pub folder_id: Option<String>,
    /// Select the `yandexgpt-lite` model instead of the full `yandexgpt`.
    pub lite: bool,
    /// Generation cap, must be positive. Default 1500.
    pub max_tokens: u32,
    /// Sampling temperature, must be non-negative. Default 1.0.
    pub temperature: f32,
    /// Attempts per call, including the first. Default 3.
    pub retries: u32,
    /// Fixed wait between attempts. Default 1 s.
    pub sleep_interval: Duration,
    /// Submit through the async endpoint and poll the operation.
    pub use_async: bool,
    /// Poll budget per async attempt. Default 5.
    pub async_retries: u32,
    /// Fixed wait before each poll. Default 100 ms.
    pub async_sleep_interval: Duration,
    /// Send `x-data-logging-enabled: false` to opt out of server-side
    /// request logging.
    pub disable_logging: bool,
    /// System instruction prepended on single-prompt calls only.
    pub instruction_text: Option<String>,
}

impl Default for YandexGptConfig {
    fn default() -> Self {
        Self {
            instruction_id: None,
            folder_id: None,
            lite: true,
            max_tokens: 1500,
            temperature: 1.0,
            retries: 3,
            sleep_interval: Duration::from_secs(1),
            use_async: false,
            async_retries: 5,
            async_sleep_interval: Duration::from_millis(100),
            disable_logging: false,
            instruction_text: None,
        }
    }
}

impl YandexGptConfig {
    /// Create new configuration with builder pattern
    pub fn builder() -> YandexGptConfigBuilder {
        YandexGptConfigBuilder::default()
    }
}

/// Builder for [`YandexGptConfig`]; `build` validates eagerly so a bad
/// config never reaches the transport.
#[derive(Debug)]
pub struct YandexGptConfigBuilder {
    config: YandexGptConfig,
}

impl Default for YandexGptConfigBuilder {
    fn default() -> Self {
        Self {
            config: YandexGptConfig::default(),
        }
    }
}

impl YandexGptConfigBuilder {
    pub fn instruction_id(mut self, id: impl Into<String>) -> Self {
        self.config.instruction_id = Some(id.into());
        self
    }

    pub fn folder_id(mut self, id: impl Into<String>) -> Self {
        self.config.folder_id = Some(id.into());
        self
    }

    pub fn lite(mut self, lite: bool) -> Self {
        self.config.lite = lite;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.config.max_tokens = max_tokens;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = temperature;
        self
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    pub fn sleep_interval(mut self, interval: Duration) -> Self {
        self.config.sleep_interval = interval;
        self
    }

    pub fn use_async(mut self, use_async: bool) -> Self {
        self.config.use_async = use_async;
        self
    }

    pub fn async_retries(mut self, polls: u32) -> Self {
        self.config.async_retries = polls;
        self
    }

    pub fn async_sleep_interval(mut self, interval: Duration) -> Self {
        self.config.async_sleep_interval = interval;
        self
    }

    pub fn disable_logging(mut self, disable: bool) -> Self {
        self.config.disable_logging = disable;
        self
    }

    pub fn instruction_text(mut self, text: impl Into<String>) -> Self {
        self.config.instruction_text = Some(text.into());
        self
    }

    pub fn build(self) -> Result<YandexGptConfig> {
        let config = self.config;
        if config.max_tokens == 0 {
            return Err(Error::Configuration("max_tokens must be positive".into()));
        }
        if config.temperature < 0.0 || config.temperature.is_nan() {
            return Err(Error::Configuration(
                "temperature must be non-negative".into(),
            ));
        }
        if config.retries == 0 {
            return Err(Error::Configuration("retries must be at least 1".into()));
        }
        if config.async_retries == 0 {
            return Err(Error::Configuration(
                "async_retries must be at least 1".into(),
            ));
        }
        Ok(config)
    }
}
