use healthdesk::application::ports::{FileLoader, FileLoaderError};
use healthdesk::domain::Attachment;
use healthdesk::infrastructure::text_processing::{PdfAdapter, assemble_document_text};

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let garbage = b"not a pdf at all";
    let attachment = Attachment::new(
        "corrupt.pdf".to_string(),
        "application/pdf",
        garbage.len() as u64,
    );

    let result = adapter.extract_text(garbage, &attachment).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_non_pdf_attachment_when_extracting_then_returns_unsupported() {
    let adapter = PdfAdapter::new();
    let data = b"some data";
    let attachment = Attachment::new("scan.png".to_string(), "image/png", data.len() as u64);

    let result = adapter.extract_text(data, &attachment).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}

#[test]
fn given_document_within_page_cap_when_assembling_then_no_truncation_marker() {
    let pages = vec!["page one".to_string(), "page two".to_string()];

    let text = assemble_document_text(pages, 2);

    assert_eq!(text, "page one\npage two");
}

#[test]
fn given_document_over_page_cap_when_assembling_then_marker_is_appended() {
    let pages: Vec<String> = (1..=5).map(|i| format!("page {i}")).collect();

    let text = assemble_document_text(pages, 10);

    assert!(text.starts_with("page 1\npage 2"));
    assert!(text.ends_with("[Document truncated after 5 pages]"));
}

#[test]
fn given_pages_without_text_when_assembling_then_they_contribute_nothing() {
    let pages = vec![
        "page one".to_string(),
        String::new(),
        "page three".to_string(),
    ];

    let text = assemble_document_text(pages, 3);

    assert_eq!(text, "page one\npage three");
}

#[test]
fn given_output_over_character_cap_when_assembling_then_clipped_to_exactly_ten_thousand() {
    let pages = vec!["a".repeat(6_000), "b".repeat(6_000)];

    let text = assemble_document_text(pages, 2);

    assert_eq!(text.chars().count(), 10_000);
    assert!(text.starts_with('a'));
    assert!(text.ends_with('b'));
}
