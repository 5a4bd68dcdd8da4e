pub mod client;
pub mod request;

pub use client::YandexGptClient;
pub use request::{CompletionOptions, CompletionRequest};
