use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Course;

/// Discrete category assigned to free-text chat input via keyword matching
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    English,
    Programming,
    Marketing,
    Design,
    DataScience,
    Business,
    PriceInquiry,
    QualityInquiry,
    BeginnerInquiry,
    AdvancedInquiry,
    General,
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Ai,
}

/// A single message in the assistant conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_ai(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender: Sender::Ai,
            timestamp: Utc::now(),
        }
    }
}

/// Classifier output: canned response text, ranked suggestions, intent label
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub message: String,
    pub suggestions: Vec<Course>,
    pub intent: Intent,
}
