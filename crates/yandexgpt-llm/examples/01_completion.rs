use anyhow::Result;
use yandexgpt_llm::{ApiKeyCredentials, LanguageModel, YandexGptClient, YandexGptConfig};

fn main() -> Result<()> {
    let api_key = std::env::var("YC_API_KEY")?;
    let folder_id = std::env::var("YC_FOLDER_ID")?;

    let config = YandexGptConfig::builder()
        .folder_id(folder_id)
        .temperature(0.3)
        .build()?;
    let client = YandexGptClient::new(config, ApiKeyCredentials::new(api_key))?;

    let text = client.complete("What is the capital of France?", None)?;
    println!("Response: {text}");
    println!("Tokens used: {}", client.usage().total_tokens);

    Ok(())
}
