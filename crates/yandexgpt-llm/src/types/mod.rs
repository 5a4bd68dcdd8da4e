pub mod message;
pub mod usage;

pub use message::{ChatMessage, Role};
pub use usage::UsageStats;
