use yandexgpt_llm::{ChatMessage, Role};

#[test]
fn test_message_system() {
    let msg = ChatMessage::system("You are helpful");
    assert_eq!(msg.role, Role::System);
    assert_eq!(msg.text, "You are helpful");
}

#[test]
fn test_message_user() {
    let msg = ChatMessage::user("Hello");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.text, "Hello");
}

#[test]
fn test_message_assistant() {
    let msg = ChatMessage::assistant("Hi there!");
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.text, "Hi there!");
}

#[test]
fn test_role_as_str() {
    assert_eq!(Role::System.as_str(), "system");
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Assistant.as_str(), "assistant");
}

#[test]
fn test_message_serialization() {
    let msg = ChatMessage::user("Hello");
    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("\"role\":\"user\""));
    assert!(json.contains("Hello"));
}

#[test]
fn test_message_deserialization() {
    let json = r#"{"role":"assistant","text":"Bonjour"}"#;
    let msg: ChatMessage = serde_json::from_str(json).unwrap();
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.text, "Bonjour");
}

#[test]
fn test_message_roundtrip() {
    for msg in [
        ChatMessage::system("s"),
        ChatMessage::user("u"),
        ChatMessage::assistant("a"),
    ] {
        let json = serde_json::to_string(&msg).unwrap();
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
