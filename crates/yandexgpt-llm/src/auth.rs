// Credential collaborator: resolves request headers and the default
// folder id. The adapter only consumes the resolved context; credential
// lifecycle (issuance, refresh, rotation) lives elsewhere.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};

use crate::error::{Error, Result};

const FOLDER_ID_HEADER: &str = "x-folder-id";

/// Resolved credentials handed to the transport layer.
#[derive(Debug, Clone)]
pub struct CredentialContext {
    /// Headers attached to every request.
    pub headers: HeaderMap,
    /// Folder id carried by the credentials, used when the adapter config
    /// does not pin one.
    pub folder_id: Option<String>,
}

/// Resolves request credentials for the Yandex Cloud API.
///
/// Resolution failures surface as [`Error::Auth`] and are never retried.
pub trait CredentialResolver {
    fn resolve(&self) -> Result<CredentialContext>;
}

/// Service-account API-key authentication (`Authorization: Api-Key …`).
#[derive(Debug, Clone)]
pub struct ApiKeyCredentials {
    api_key: String,
    folder_id: Option<String>,
}

impl ApiKeyCredentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            folder_id: None,
        }
    }

    pub fn with_folder_id(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }
}

impl CredentialResolver for ApiKeyCredentials {
    fn resolve(&self) -> Result<CredentialContext> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Api-Key {}", self.api_key))
                .map_err(|_| Error::Auth("API key is not a valid header value".into()))?,
        );
        Ok(CredentialContext {
            headers,
            folder_id: self.folder_id.clone(),
        })
    }
}

/// Short-lived IAM-token authentication (`Authorization: Bearer …` plus
/// `x-folder-id`). The folder id is mandatory in this mode and is carried
/// into the context for endpoint resolution.
#[derive(Debug, Clone)]
pub struct IamCredentials {
    token: String,
    folder_id: String,
}

impl IamCredentials {
    pub fn new(token: impl Into<String>, folder_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            folder_id: folder_id.into(),
        }
    }
}

impl CredentialResolver for IamCredentials {
    fn resolve(&self) -> Result<CredentialContext> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token))
                .map_err(|_| Error::Auth("IAM token is not a valid header value".into()))?,
        );
        headers.insert(
            HeaderName::from_static(FOLDER_ID_HEADER),
            HeaderValue::from_str(&self.folder_id)
                .map_err(|_| Error::Auth("folder id is not a valid header value".into()))?,
        );
        Ok(CredentialContext {
            headers,
            folder_id: Some(self.folder_id.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_resolves_to_api_key_header() {
        let context = ApiKeyCredentials::new("secret").resolve().unwrap();
        assert_eq!(context.headers.get(AUTHORIZATION).unwrap(), "Api-Key secret");
        assert!(context.folder_id.is_none());
    }

    #[test]
    fn api_key_can_carry_a_folder_id() {
        let context = ApiKeyCredentials::new("secret")
            .with_folder_id("folder-a")
            .resolve()
            .unwrap();
        assert_eq!(context.folder_id.as_deref(), Some("folder-a"));
    }

    #[test]
    fn iam_token_resolves_to_bearer_and_folder_header() {
        let context = IamCredentials::new("token", "folder-a").resolve().unwrap();
        assert_eq!(context.headers.get(AUTHORIZATION).unwrap(), "Bearer token");
        assert_eq!(context.headers.get(FOLDER_ID_HEADER).unwrap(), "folder-a");
        assert_eq!(context.folder_id.as_deref(), Some("folder-a"));
    }

    #[test]
    fn control_characters_in_credentials_fail_resolution() {
        let err = ApiKeyCredentials::new("bad\nkey").resolve().unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }
}
