use std::time::Duration;

use anyhow::Result;
use yandexgpt_llm::{ApiKeyCredentials, LanguageModel, YandexGptClient, YandexGptConfig};

fn main() -> Result<()> {
    let api_key = std::env::var("YC_API_KEY")?;
    let folder_id = std::env::var("YC_FOLDER_ID")?;

    // Async submission with a generous poll budget; each poll waits half
    // a second before asking for the operation status.
    let config = YandexGptConfig::builder()
        .folder_id(folder_id)
        .use_async(true)
        .async_retries(20)
        .async_sleep_interval(Duration::from_millis(500))
        .build()?;
    let client = YandexGptClient::new(config, ApiKeyCredentials::new(api_key))?;

    let text = client.complete("Write a haiku about the sea.", None)?;
    println!("{text}");

    let usage = client.usage();
    println!(
        "Tokens: {} total ({} prompt, {} completion)",
        usage.total_tokens, usage.input_text_tokens, usage.completion_tokens
    );

    Ok(())
}
