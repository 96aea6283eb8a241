use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
    Error,
}

/// One transcript entry.
///
/// Entries are append-only: once pushed to the transcript they are never
/// mutated or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub role: Role,
    pub at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
            at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Role::User)
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(text, Role::Ai)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Role::Error)
    }
}
