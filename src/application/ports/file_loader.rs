use async_trait::async_trait;

use crate::domain::Attachment;

/// Text extraction from an uploaded document. Extracting no text is not an
/// error — callers receive an empty string and decide what to do with it;
/// `ExtractionFailed` is reserved for structurally unreadable input.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        attachment: &Attachment,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
