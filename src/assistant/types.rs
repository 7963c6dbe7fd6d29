use crate::models::{ChatMessage, ChatRole};
use serde::{Deserialize, Serialize};

/// One turn of conversation as sent to the text-generation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub role: ChatRole,
    pub content: String,
}

impl From<&ChatMessage> for Turn {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role,
            content: message.text.clone(),
        }
    }
}

/// Everything the service needs for a single reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    pub turns: Vec<Turn>,
    pub system_instruction: String,
    pub temperature: f32,
}

impl GenerationRequest {
    /// Prior transcript followed by the new user message as the final turn
    pub fn new(
        history: &[ChatMessage],
        message: &str,
        system_instruction: String,
        temperature: f32,
    ) -> Self {
        let mut turns: Vec<Turn> = history.iter().map(Turn::from).collect();
        turns.push(Turn {
            role: ChatRole::User,
            content: message.to_string(),
        });

        Self {
            turns,
            system_instruction,
            temperature,
        }
    }
}
