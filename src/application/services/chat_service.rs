use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{ChatModel, ChatModelError, FileLoader};
use crate::domain::{Attachment, AttachmentKind};

use super::prompt;

/// Model identifiers per payload shape. Image analysis and document analysis
/// use the vision- and long-context-capable models; plain chat uses the
/// cheaper conversational model.
#[derive(Debug, Clone)]
pub struct ChatModelIds {
    pub chat: String,
    pub vision: String,
    pub document: String,
}

/// An upload that has been accepted and staged, plus its bytes for prompt
/// construction. The orchestrator owns the staged object's lifecycle.
pub struct StoredUpload {
    pub attachment: Attachment,
    pub data: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStatus {
    Success,
    Degraded,
}

/// What the chatbot endpoint returns. Degraded replies carry a pre-scripted
/// advisory instead of generated text.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub text: String,
    pub status: ReplyStatus,
}

impl ChatReply {
    fn success(text: String) -> Self {
        Self {
            text,
            status: ReplyStatus::Success,
        }
    }

    fn degraded(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: ReplyStatus::Degraded,
        }
    }
}

const PDF_UNREADABLE_ADVISORY: &str = "⚠️ I couldn't read the PDF file properly. Please make \
sure it's not password protected and contains extractable text.";

const GENERIC_FAILURE_DETAIL_LIMIT: usize = 100;

/// Composes the prompt for a chat request, invokes the generative gateway,
/// and converts every failure into a user-safe advisory. Never returns an
/// error: graceful degradation is the contract of the chat surface.
pub struct ChatService {
    chat_model: Arc<dyn ChatModel>,
    file_loader: Arc<dyn FileLoader>,
    models: ChatModelIds,
}

impl ChatService {
    pub fn new(
        chat_model: Arc<dyn ChatModel>,
        file_loader: Arc<dyn FileLoader>,
        models: ChatModelIds,
    ) -> Self {
        Self {
            chat_model,
            file_loader,
            models,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.chat_model.is_configured()
    }

    #[tracing::instrument(skip(self, message, upload), fields(has_file = upload.is_some()))]
    pub async fn respond(&self, message: &str, upload: Option<&StoredUpload>) -> ChatReply {
        let (model, prompt) = match upload {
            None => (self.models.chat.as_str(), prompt::text_only(message)),
            Some(stored) => match &stored.attachment.kind {
                AttachmentKind::Image { mime } => (
                    self.models.vision.as_str(),
                    prompt::image_analysis(message, mime, stored.data.clone()),
                ),
                AttachmentKind::Pdf | AttachmentKind::Text => {
                    let document_text = match self
                        .file_loader
                        .extract_text(&stored.data, &stored.attachment)
                        .await
                    {
                        Ok(text) => text,
                        Err(e) => {
                            tracing::warn!(
                                filename = %stored.attachment.filename,
                                error = %e,
                                "Document extraction failed"
                            );
                            return ChatReply::degraded(PDF_UNREADABLE_ADVISORY);
                        }
                    };
                    (
                        self.models.document.as_str(),
                        prompt::document_context(message, &document_text),
                    )
                }
            },
        };

        match self.chat_model.generate(model, &prompt).await {
            Ok(text) => {
                let text = if prompt.image.is_some() {
                    format!("{text}{}", prompt::IMAGE_DISCLAIMER)
                } else {
                    text
                };
                ChatReply::success(text)
            }
            Err(e) => {
                tracing::error!(model, error = %e, "Generative call failed");
                ChatReply::degraded(advisory_for(&e))
            }
        }
    }
}

/// Total mapping from gateway fault kind to advisory text. The same kind
/// always yields the same message.
pub fn advisory_for(error: &ChatModelError) -> String {
    match error {
        ChatModelError::NotConfigured => {
            "⚠️ Health information service is currently unavailable. Please try again later."
                .to_string()
        }
        ChatModelError::InvalidCredentials => {
            "⚠️ Invalid API key. Please check your GEMINI_API_KEY configuration.".to_string()
        }
        ChatModelError::RateLimited => {
            "⚠️ API quota exceeded. Please try again later or check your billing.".to_string()
        }
        ChatModelError::Unavailable => {
            "⚠️ The AI service is temporarily unavailable. Please try again in a moment."
                .to_string()
        }
        ChatModelError::UnknownModel => {
            "⚠️ Model not found. Please configure a supported model.".to_string()
        }
        ChatModelError::InvalidResponse(detail) | ChatModelError::RequestFailed(detail) => {
            let excerpt: String = detail.chars().take(GENERIC_FAILURE_DETAIL_LIMIT).collect();
            format!(
                "⚠️ I'm experiencing difficulties connecting to the health information service. \
                 Error: {excerpt}"
            )
        }
    }
}
