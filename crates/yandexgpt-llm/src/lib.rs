pub mod auth;
pub mod config;
pub mod error;
pub mod traits;
pub mod transport;
pub mod types;
pub mod yandex;

pub use auth::{ApiKeyCredentials, CredentialContext, CredentialResolver, IamCredentials};
pub use config::{YandexGptConfig, YandexGptConfigBuilder};
pub use error::{Error, Result};
pub use traits::LanguageModel;
pub use transport::{HttpTransport, Transport, DEFAULT_BASE_URL};
pub use types::{ChatMessage, Role, UsageStats};
pub use yandex::YandexGptClient;
