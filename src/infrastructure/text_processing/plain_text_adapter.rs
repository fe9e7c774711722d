use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Attachment, AttachmentKind};

/// Text attachments need no parsing; malformed UTF-8 is replaced rather
/// than rejected, since the text only serves as prompt context.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        attachment: &Attachment,
    ) -> Result<String, FileLoaderError> {
        if attachment.kind != AttachmentKind::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                attachment.kind.as_mime().to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(data).into_owned())
    }
}
