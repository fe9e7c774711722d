use async_trait::async_trait;
use bytes::Bytes;

/// Instruction payload for one generative call: the fully composed prompt
/// text plus, for image analysis, the raw image to send inline.
#[derive(Debug, Clone)]
pub struct ModelPrompt {
    pub text: String,
    pub image: Option<InlineImage>,
}

#[derive(Debug, Clone)]
pub struct InlineImage {
    pub mime: String,
    pub data: Bytes,
}

impl ModelPrompt {
    pub fn text_only(text: String) -> Self {
        Self { text, image: None }
    }

    pub fn with_image(text: String, mime: String, data: Bytes) -> Self {
        Self {
            text,
            image: Some(InlineImage { mime, data }),
        }
    }
}

/// Outbound generative-AI call. One attempt per invocation, no retries;
/// implementations classify failures into the closed error set below so
/// callers never have to inspect raw upstream messages.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(&self, model: &str, prompt: &ModelPrompt) -> Result<String, ChatModelError>;

    fn is_configured(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatModelError {
    #[error("no credential configured")]
    NotConfigured,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("rate limited")]
    RateLimited,
    #[error("service unavailable")]
    Unavailable,
    #[error("unknown model")]
    UnknownModel,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
}
