use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Attachment, AttachmentKind};

/// Dispatches extraction to the adapter matching the attachment kind.
/// Images have no text to extract and are rejected here; the chat service
/// never routes them through this loader.
pub struct CompositeLoader {
    pdf: Arc<dyn FileLoader>,
    text: Arc<dyn FileLoader>,
}

impl CompositeLoader {
    pub fn new(pdf: Arc<dyn FileLoader>, text: Arc<dyn FileLoader>) -> Self {
        Self { pdf, text }
    }
}

#[async_trait]
impl FileLoader for CompositeLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        attachment: &Attachment,
    ) -> Result<String, FileLoaderError> {
        match &attachment.kind {
            AttachmentKind::Pdf => self.pdf.extract_text(data, attachment).await,
            AttachmentKind::Text => self.text.extract_text(data, attachment).await,
            AttachmentKind::Image { mime } => {
                Err(FileLoaderError::UnsupportedContentType(mime.clone()))
            }
        }
    }
}
