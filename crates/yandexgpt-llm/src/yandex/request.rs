use serde::Serialize;

use crate::config::YandexGptConfig;
use crate::error::{Error, Result};
use crate::types::ChatMessage;

/// Wire payload shared by the sync and async completion endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub model_uri: String,
    pub completion_options: CompletionOptions,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOptions {
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Resolve the model endpoint URI.
///
/// A fine-tuned instruction id always wins over lite/full selection; the
/// default endpoints need a folder id, taken from the config first and the
/// credential context second.
pub fn resolve_model_uri(
    config: &YandexGptConfig,
    context_folder_id: Option<&str>,
) -> Result<String> {
    if let Some(id) = &config.instruction_id {
        return Ok(format!("ds://{id}"));
    }
    let folder_id = config
        .folder_id
        .as_deref()
        .or(context_folder_id)
        .ok_or_else(|| {
            Error::Configuration(
                "folder id is neither configured nor carried by the credentials".into(),
            )
        })?;
    if config.lite {
        Ok(format!("gpt://{folder_id}/yandexgpt-lite/latest"))
    } else {
        Ok(format!("gpt://{folder_id}/yandexgpt/latest"))
    }
}

/// Assemble the completion payload for one call.
pub fn build_request(
    config: &YandexGptConfig,
    context_folder_id: Option<&str>,
    messages: Vec<ChatMessage>,
) -> Result<CompletionRequest> {
    Ok(CompletionRequest {
        model_uri: resolve_model_uri(config, context_folder_id)?,
        completion_options: CompletionOptions {
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        },
        messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> YandexGptConfig {
        YandexGptConfig::default()
    }

    #[test]
    fn instruction_id_wins_over_lite_selection() {
        let config = YandexGptConfig::builder()
            .instruction_id("tuned-123")
            .folder_id("folder-a")
            .lite(true)
            .build()
            .unwrap();
        let uri = resolve_model_uri(&config, Some("folder-b")).unwrap();
        assert_eq!(uri, "ds://tuned-123");
    }

    #[test]
    fn lite_selection_resolves_lite_endpoint() {
        let config = YandexGptConfig::builder()
            .folder_id("folder-a")
            .lite(true)
            .build()
            .unwrap();
        let uri = resolve_model_uri(&config, None).unwrap();
        assert_eq!(uri, "gpt://folder-a/yandexgpt-lite/latest");
    }

    #[test]
    fn full_selection_resolves_full_endpoint() {
        let config = YandexGptConfig::builder()
            .folder_id("folder-a")
            .lite(false)
            .build()
            .unwrap();
        let uri = resolve_model_uri(&config, None).unwrap();
        assert_eq!(uri, "gpt://folder-a/yandexgpt/latest");
        assert!(!uri.contains("-lite"));
    }

    #[test]
    fn folder_id_falls_back_to_credential_context() {
        let uri = resolve_model_uri(&config(), Some("ctx-folder")).unwrap();
        assert_eq!(uri, "gpt://ctx-folder/yandexgpt-lite/latest");
    }

    #[test]
    fn missing_folder_id_is_a_configuration_error() {
        let err = resolve_model_uri(&config(), None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn request_serializes_camel_case() {
        let request = build_request(
            &config(),
            Some("folder-a"),
            vec![ChatMessage::user("hi")],
        )
        .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("modelUri").is_some());
        assert!(json["completionOptions"].get("maxTokens").is_some());
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
