use crate::assistant::traits::TextGenerator;
use crate::assistant::types::GenerationRequest;
use crate::config::AssistantConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The credential travels in a header so it never appears in URLs or errors
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` REST backend
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &AssistantConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>> {
        let body = GenerateContentRequest::from(request);
        debug!("POST {} ({} turns)", self.endpoint(), body.contents.len());

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|err| anyhow::Error::new(err.without_url()))
            .context("Gemini API request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            warn!("Gemini returned status: {}", status);
            anyhow::bail!(describe_http_error(status, &body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        Ok(parsed.text())
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: SystemInstruction,
    generation_config: GenerationConfig,
}

impl From<&GenerationRequest> for GenerateContentRequest {
    fn from(request: &GenerationRequest) -> Self {
        let contents = request
            .turns
            .iter()
            .map(|turn| Content {
                role: turn.role.as_str().to_string(),
                parts: vec![Part {
                    text: turn.content.clone(),
                }],
            })
            .collect();

        Self {
            contents,
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: request.system_instruction.clone(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn text(self) -> Option<String> {
        let content = self.candidates?.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn describe_http_error(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let message = wrapper.error.message.unwrap_or_else(|| body.to_string());
            match wrapper.error.status {
                Some(s) if !s.is_empty() => format!("{}: {}", s, message),
                _ => message,
            }
        })
        .unwrap_or_else(|_| body.to_string());

    format!("Gemini API error {}: {}", status.as_u16(), detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::Assistant;
    use crate::models::ChatMessage;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    #[test]
    fn request_body_uses_gemini_shape() {
        let history = vec![ChatMessage::model("¡Hola!"), ChatMessage::user("¿Hay wifi?")];
        let request = GenerationRequest::new(&history, "¿Y ascensor?", "Sé amable".to_string(), 0.8);

        let body = serde_json::to_value(GenerateContentRequest::from(&request)).unwrap();

        assert_eq!(
            body["contents"],
            json!([
                {"role": "model", "parts": [{"text": "¡Hola!"}]},
                {"role": "user", "parts": [{"text": "¿Hay wifi?"}]},
                {"role": "user", "parts": [{"text": "¿Y ascensor?"}]},
            ])
        );
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Sé amable");
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.8).abs() < 1e-6);
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Sí, "}, {"text": "incluye agua caliente."}]}},
                {"content": {"role": "model", "parts": [{"text": "ignorado"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Sí, incluye agua caliente."));
    }

    #[test]
    fn response_without_text_is_empty_not_error() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert_eq!(response.text(), None);

        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn http_error_includes_status_and_message() {
        let body = r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        let text = describe_http_error(StatusCode::FORBIDDEN, body);
        assert_eq!(text, "Gemini API error 403: PERMISSION_DENIED: API key not valid");

        let text = describe_http_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(text, "Gemini API error 502: upstream down");
    }

    fn client_for(base_url: &str, api_key: &str) -> GeminiClient {
        let config = AssistantConfig {
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            ..AssistantConfig::default()
        };
        GeminiClient::new(&config).unwrap()
    }

    /// Answer one request with `status_line` and `body`, returning the raw request
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).to_string()
        });

        (base_url, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error() {
        let client = client_for("http://127.0.0.1:9", "");
        let request = GenerationRequest::new(&[], "hola", "x".to_string(), 0.7);
        assert!(client.generate(&request).await.is_err());
    }

    #[tokio::test]
    async fn transport_error_does_not_leak_api_key() {
        let client = client_for("http://127.0.0.1:9", "SECRET-KEY-1234");
        let request = GenerationRequest::new(&[], "hola", "x".to_string(), 0.7);

        let err = client.generate(&request).await.unwrap_err();
        let text = format!("{:#}", err);
        assert!(text.starts_with("Gemini API request failed"));
        assert!(!text.contains("SECRET-KEY-1234"), "key leaked: {}", text);
    }

    #[tokio::test]
    async fn forbidden_status_becomes_apology() {
        let body = r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;

        let (base_url, server) = serve_once("HTTP/1.1 403 Forbidden", body).await;
        let client = client_for(&base_url, "SECRET-KEY-1234");
        let request = GenerationRequest::new(&[], "hola", "x".to_string(), 0.7);
        let err = client.generate(&request).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Gemini API error 403: PERMISSION_DENIED: API key not valid"
        );

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /gemini-3-flash-preview:generateContent HTTP/1.1"));
        assert!(raw.to_lowercase().contains("x-goog-api-key: secret-key-1234"));

        let (base_url, _server) = serve_once("HTTP/1.1 403 Forbidden", body).await;
        let assistant = Assistant::new(Arc::new(client_for(&base_url, "SECRET-KEY-1234")));
        let reply = assistant.send_message("hola", &[]).await;
        assert_eq!(reply, "Hubo un error al conectar con el asistente.");
    }
}
