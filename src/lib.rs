//! Roomy: a room-rental marketplace core with an assistant-backed chat.

pub mod app;
pub mod assistant;
pub mod catalog;
pub mod chat;
pub mod checkout;
pub mod config;
pub mod error;
pub mod forms;
pub mod image;
pub mod models;
pub mod seed;
pub mod state;

pub use app::App;
pub use error::FormError;
pub use state::{AppState, ChatTarget, Command, Effect};
