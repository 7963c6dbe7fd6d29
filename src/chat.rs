//! Chat sessions bound to the view that opened them.
//!
//! A session lives while its chat view is open. Outbound requests carry the
//! session id, and replies for a session that has since closed are dropped.

use crate::assistant::{Assistant, Persona};
use crate::models::{new_id, ChatMessage};
use tracing::{debug, info};

/// A request waiting on the assistant
#[derive(Debug, Clone)]
pub struct PendingReply {
    pub session_id: String,
    pub persona: Persona,
    pub message: String,
    /// Transcript before `message` was added
    pub history: Vec<ChatMessage>,
}

impl PendingReply {
    /// Run the request; never fails, see `Assistant::reply`
    pub async fn resolve(self, assistant: &Assistant) -> AssistantReply {
        let text = assistant
            .reply(&self.persona, &self.message, &self.history)
            .await;
        AssistantReply {
            session_id: self.session_id,
            text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    pub session_id: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    id: String,
    persona: Persona,
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl ChatSession {
    /// New session seeded with the persona's greeting
    pub fn open(persona: Persona) -> Self {
        let greeting = ChatMessage::model(persona.greeting());
        let session = Self {
            id: new_id(),
            persona,
            messages: vec![greeting],
            loading: false,
        };
        info!("💬 Chat session {} opened", session.id);
        session
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a reply is outstanding; input is disabled meanwhile
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Append the user's message and hand back the request to run.
    ///
    /// Blank input, or input while already waiting, is ignored.
    pub fn send(&mut self, input: &str) -> Option<PendingReply> {
        if input.trim().is_empty() || self.loading {
            debug!("Ignoring chat input (loading: {})", self.loading);
            return None;
        }

        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(input));
        self.loading = true;

        Some(PendingReply {
            session_id: self.id.clone(),
            persona: self.persona.clone(),
            message: input.to_string(),
            history,
        })
    }

    /// Append a reply; returns false if it belongs to another session
    pub fn deliver(&mut self, reply: AssistantReply) -> bool {
        if reply.session_id != self.id {
            return false;
        }
        self.messages.push(ChatMessage::model(reply.text));
        self.loading = false;
        true
    }
}
