use crate::assistant::persona::Persona;
use crate::assistant::traits::TextGenerator;
use crate::assistant::types::GenerationRequest;
use crate::models::{ChatMessage, Listing};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Stateless chat front over a text-generation backend.
///
/// The caller owns the transcript and passes it in full on every call.
/// Each call is a single attempt; failures turn into the persona's apology.
#[derive(Clone)]
pub struct Assistant {
    generator: Arc<dyn TextGenerator>,
}

impl Assistant {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Platform help persona
    pub async fn send_message(&self, message: &str, history: &[ChatMessage]) -> String {
        self.reply(&Persona::Help, message, history).await
    }

    /// Owner persona for `listing`
    pub async fn send_host_message(
        &self,
        message: &str,
        history: &[ChatMessage],
        listing: &Listing,
    ) -> String {
        self.reply(&Persona::Host(listing.clone()), message, history)
            .await
    }

    pub async fn reply(&self, persona: &Persona, message: &str, history: &[ChatMessage]) -> String {
        let request = GenerationRequest::new(
            history,
            message,
            persona.instruction(),
            persona.temperature(),
        );

        debug!(
            "Asking {} ({} turns, temperature {})",
            self.generator.model_name(),
            request.turns.len(),
            request.temperature
        );

        match self.generator.generate(&request).await {
            Ok(Some(text)) => {
                info!("Assistant replied ({} chars)", text.len());
                text
            }
            Ok(None) => {
                warn!("Assistant returned no text");
                persona.empty_reply().to_string()
            }
            Err(err) => {
                warn!("Assistant call failed: {:#}", err);
                persona.apology().to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatRole;
    use crate::seed::initial_listings;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every request and answers with a canned outcome
    struct Scripted {
        outcome: fn() -> Result<Option<String>>,
        seen: Mutex<Vec<GenerationRequest>>,
    }

    impl Scripted {
        fn new(outcome: fn() -> Result<Option<String>>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn last(&self) -> GenerationRequest {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl TextGenerator for Scripted {
        async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>> {
            self.seen.lock().unwrap().push(request.clone());
            (self.outcome)()
        }

        fn model_name(&self) -> &str {
            "scripted"
        }
    }

    fn wifi_listing() -> Listing {
        let mut listing = initial_listings().remove(2);
        listing.amenities = vec!["Wifi".to_string()];
        listing
    }

    #[tokio::test]
    async fn host_failure_returns_apology() {
        let backend = Scripted::new(|| Err(anyhow::anyhow!("quota exceeded")));
        let assistant = Assistant::new(backend.clone());
        let listing = wifi_listing();

        let reply = assistant
            .send_host_message("¿Incluye agua caliente?", &[], &listing)
            .await;

        assert_eq!(
            reply,
            "Lo siento, ahora mismo no puedo contestar. Inténtalo más tarde."
        );
        let request = backend.last();
        assert!(request.system_instruction.contains(&listing.title));
        assert!(request.system_instruction.contains("Precio: 310."));
        assert!(request.system_instruction.contains("Servicios: Wifi."));
        assert!((request.temperature - 0.8).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn help_failure_returns_apology() {
        let assistant = Assistant::new(Scripted::new(|| Err(anyhow::anyhow!("offline"))));
        let reply = assistant.send_message("hola", &[]).await;
        assert_eq!(reply, "Hubo un error al conectar con el asistente.");
    }

    #[tokio::test]
    async fn empty_reply_uses_persona_fallback() {
        let assistant = Assistant::new(Scripted::new(|| Ok(None)));
        assert_eq!(
            assistant.send_message("hola", &[]).await,
            "Lo siento, tuve un problema."
        );
        assert_eq!(
            assistant.send_host_message("hola", &[], &wifi_listing()).await,
            "Hola, perdona, ¿puedes repetir?"
        );
    }

    #[tokio::test]
    async fn history_is_sent_before_new_message() {
        let backend = Scripted::new(|| Ok(Some("Claro".to_string())));
        let assistant = Assistant::new(backend.clone());
        let history = vec![
            ChatMessage::model("¡Hola!"),
            ChatMessage::user("¿Cuánto es la fianza?"),
            ChatMessage::model("Un mes."),
        ];

        let reply = assistant.send_message("¿Y los gastos?", &history).await;

        assert_eq!(reply, "Claro");
        let request = backend.last();
        assert_eq!(request.turns.len(), 4);
        assert_eq!(request.turns[0].role, ChatRole::Model);
        assert_eq!(request.turns[3].role, ChatRole::User);
        assert_eq!(request.turns[3].content, "¿Y los gastos?");
        assert!(request.system_instruction.contains("Roomy"));
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
    }
}
