use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot resolve model endpoint: {0}")]
    Configuration(String),

    #[error("Unsupported argument: {0}")]
    InvalidArgument(String),

    #[error("Unexpected YandexGPT response: {0}")]
    UpstreamResponse(String),

    #[error("Usage block missing or invalid: {0}")]
    MalformedUsage(String),

    #[error("Operation did not complete within {polls} polls")]
    PollTimeout { polls: u32 },

    #[error("Error calling YandexGPT after {retries} retries")]
    RetryExhausted {
        retries: u32,
        #[source]
        source: Box<Error>,
    },

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
