pub mod client;
pub mod gemini;
pub mod persona;
pub mod traits;
pub mod types;

pub use client::Assistant;
pub use gemini::GeminiClient;
pub use persona::Persona;
pub use traits::TextGenerator;
pub use types::{GenerationRequest, Turn};
