use anyhow::Result;
use yandexgpt_llm::{
    ApiKeyCredentials, ChatMessage, LanguageModel, YandexGptClient, YandexGptConfig,
};

fn main() -> Result<()> {
    let api_key = std::env::var("YC_API_KEY")?;
    let folder_id = std::env::var("YC_FOLDER_ID")?;

    let config = YandexGptConfig::builder()
        .folder_id(folder_id)
        .lite(false)
        .build()?;
    let client = YandexGptClient::new(config, ApiKeyCredentials::new(api_key))?;

    let messages = vec![
        ChatMessage::system("You answer in one sentence."),
        ChatMessage::user("Why is the sky blue?"),
    ];

    let reply = client.chat_message(&messages, None)?;
    println!("{}: {}", reply.role.as_str(), reply.text);

    Ok(())
}
