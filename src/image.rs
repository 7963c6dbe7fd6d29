use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use std::path::Path;
use tracing::debug;

/// Read a local photo and inline it as a `data:` URL for display
pub async fn encode_data_url(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {}", path.display()))?;

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    debug!("Encoded {} ({} bytes, {})", path.display(), bytes.len(), mime);

    Ok(format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(bytes)))
}
