use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde::Serialize;

use crate::application::ports::{ChatModel, ChatModelError, ModelPrompt};

/// Client for the Generative Language API (`generateContent`). One bounded
/// attempt per call; failures are classified into `ChatModelError` with the
/// HTTP status as the primary signal and body substrings only as fallback.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

impl GeminiClient {
    pub fn new(api_key: String, request_timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_base_url(api_key, request_timeout, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(
        api_key: String,
        request_timeout: Duration,
        base_url: String,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    fn request_body(prompt: &ModelPrompt) -> GenerateRequest {
        let mut parts = vec![Part {
            text: Some(prompt.text.clone()),
            inline_data: None,
        }];

        if let Some(image) = &prompt.image {
            parts.push(Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: image.mime.clone(),
                    data: base64::engine::general_purpose::STANDARD.encode(&image.data),
                }),
            });
        }

        GenerateRequest {
            contents: vec![Content { parts }],
        }
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    #[tracing::instrument(skip(self, prompt), fields(has_image = prompt.image.is_some()))]
    async fn generate(&self, model: &str, prompt: &ModelPrompt) -> Result<String, ChatModelError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            model,
            self.api_key
        );

        let response = self
            .http
            .post(url)
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChatModelError::InvalidResponse(e.to_string()))?;

        let text = extract_candidate_text(&body);
        if text.trim().is_empty() {
            return Err(ChatModelError::InvalidResponse(
                "empty candidate text".to_string(),
            ));
        }

        Ok(text)
    }
}

fn classify_transport_error(error: reqwest::Error) -> ChatModelError {
    if error.is_timeout() || error.is_connect() {
        ChatModelError::Unavailable
    } else {
        ChatModelError::RequestFailed(error.to_string())
    }
}

fn classify_failure(status: reqwest::StatusCode, body: &str) -> ChatModelError {
    use reqwest::StatusCode;

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ChatModelError::InvalidCredentials,
        StatusCode::TOO_MANY_REQUESTS => ChatModelError::RateLimited,
        StatusCode::NOT_FOUND => ChatModelError::UnknownModel,
        s if s.is_server_error() => ChatModelError::Unavailable,
        _ => classify_by_body(body),
    }
}

/// Fallback for upstream faults that arrive without a telling status code.
/// Substring matching is brittle; anything unrecognized lands in the
/// generic bucket with a bounded excerpt of the body.
fn classify_by_body(body: &str) -> ChatModelError {
    let lowered = body.to_lowercase();
    if body.contains("API_KEY_INVALID") {
        ChatModelError::InvalidCredentials
    } else if lowered.contains("quota") {
        ChatModelError::RateLimited
    } else if lowered.contains("unavailable") {
        ChatModelError::Unavailable
    } else if lowered.contains("model not found") {
        ChatModelError::UnknownModel
    } else {
        ChatModelError::RequestFailed(body.chars().take(200).collect())
    }
}

fn extract_candidate_text(body: &serde_json::Value) -> String {
    let mut out = String::new();
    let parts = body
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array());

    if let Some(parts) = parts {
        for part in parts {
            if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(text);
            }
        }
    }

    out
}
