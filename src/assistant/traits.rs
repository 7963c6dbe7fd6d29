use crate::assistant::types::GenerationRequest;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for remote text-generation backends
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce a reply; `Ok(None)` when the service answered without text
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>>;

    /// Get the model identifier used for requests
    fn model_name(&self) -> &str;
}
