use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Attachment, AttachmentKind};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Only the leading pages of a document are read; anything past this is
/// replaced by a truncation marker.
const PAGE_LIMIT: usize = 5;

const PAGE_TRUNCATION_MARKER: &str = "\n[Document truncated after 5 pages]";

/// Hard ceiling on extracted output, applied after the page cap.
const TEXT_LIMIT: usize = 10_000;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &std::path::Path) -> Result<(Vec<String>, usize), FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count.min(PAGE_LIMIT));
        for page_index in 0..page_count.min(PAGE_LIMIT) {
            let text = doc.extract_text(page_index).unwrap_or_default();
            pages.push(sanitize_extracted_text(&text));
        }

        Ok((pages, page_count))
    }
}

/// Joins per-page text with newlines, drops pages that yielded nothing,
/// marks page-cap truncation, and clips the result to the output ceiling.
pub fn assemble_document_text(pages: Vec<String>, total_pages: usize) -> String {
    let mut text = pages
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if total_pages > PAGE_LIMIT {
        text.push_str(PAGE_TRUNCATION_MARKER);
    }

    if text.chars().count() > TEXT_LIMIT {
        text = text.chars().take(TEXT_LIMIT).collect();
    }

    text
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %attachment.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        attachment: &Attachment,
    ) -> Result<String, FileLoaderError> {
        if attachment.kind != AttachmentKind::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                attachment.kind.as_mime().to_string(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();

        let (pages, total_pages) = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(
            total_pages,
            extracted_pages = pages.len(),
            "PDF text extraction complete"
        );

        Ok(assemble_document_text(pages, total_pages))
    }
}
