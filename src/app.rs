use crate::assistant::Assistant;
use crate::checkout::PROCESSING_DELAY;
use crate::error::Result;
use crate::state::{AppState, Command, Effect};
use std::time::Duration;

/// Runs commands against the state and carries out their effects inline
pub struct App {
    state: AppState,
    assistant: Assistant,
    payment_delay: Duration,
}

impl App {
    pub fn new(state: AppState, assistant: Assistant) -> Self {
        Self {
            state,
            assistant,
            payment_delay: PROCESSING_DELAY,
        }
    }

    /// Override the simulated payment delay
    pub fn with_payment_delay(mut self, delay: Duration) -> Self {
        self.payment_delay = delay;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn handle(&mut self, command: Command) -> Result<()> {
        match self.state.dispatch(command)? {
            Effect::None => {}
            Effect::AskAssistant(pending) => {
                let reply = pending.resolve(&self.assistant).await;
                self.state.deliver_reply(reply);
            }
            Effect::ProcessPayment(ticket) => {
                let ticket = ticket.process(self.payment_delay).await;
                self.state.complete_payment(&ticket);
            }
        }
        Ok(())
    }
}
