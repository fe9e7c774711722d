use bytes::Bytes;

use healthdesk::application::ports::ChatModelError;
use healthdesk::application::services::{ReplyStatus, StoredUpload, prompt};
use healthdesk::domain::Attachment;

use crate::helpers::{
    MockChatModel, MockFileLoader, TEST_CHAT_MODEL, TEST_VISION_MODEL, chat_service_with,
    real_file_loader,
};

fn stored(filename: &str, mime: &str, data: &'static [u8]) -> StoredUpload {
    StoredUpload {
        attachment: Attachment::new(filename.to_string(), mime, data.len() as u64),
        data: Bytes::from_static(data),
    }
}

#[tokio::test]
async fn given_no_attachment_when_responding_then_uses_chat_model() {
    let model = MockChatModel::answering("General answer.");
    let service = chat_service_with(model.clone(), real_file_loader());

    let reply = service.respond("what is a healthy diet?", None).await;

    assert_eq!(reply.status, ReplyStatus::Success);
    assert_eq!(reply.text, "General answer.");
    assert_eq!(
        model.last_model.lock().unwrap().as_deref(),
        Some(TEST_CHAT_MODEL)
    );
}

#[tokio::test]
async fn given_image_attachment_when_responding_then_appends_disclaimer() {
    let model = MockChatModel::answering("The image shows a skin lesion.");
    let service = chat_service_with(model.clone(), real_file_loader());

    let upload = stored("lesion.png", "image/png", b"\x89PNG data");
    let reply = service.respond("what is this?", Some(&upload)).await;

    assert_eq!(reply.status, ReplyStatus::Success);
    assert!(reply.text.starts_with("The image shows a skin lesion."));
    assert!(reply.text.ends_with(prompt::IMAGE_DISCLAIMER));
    assert_eq!(
        model.last_model.lock().unwrap().as_deref(),
        Some(TEST_VISION_MODEL)
    );

    let sent = model.last_prompt.lock().unwrap().clone().unwrap();
    assert_eq!(sent.image.unwrap().mime, "image/png");
}

#[tokio::test]
async fn given_extraction_failure_when_responding_then_advisory_without_gateway_call() {
    let model = MockChatModel::answering("unused");
    let service = chat_service_with(model.clone(), MockFileLoader::failing());

    let upload = stored("locked.pdf", "application/pdf", b"%PDF encrypted");
    let reply = service.respond("explain this", Some(&upload)).await;

    assert_eq!(reply.status, ReplyStatus::Degraded);
    assert!(reply.text.contains("couldn't read the PDF file"));
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn given_text_attachment_when_responding_then_content_flows_into_document_prompt() {
    let model = MockChatModel::answering("Explained.");
    let service = chat_service_with(model.clone(), real_file_loader());

    let upload = stored("notes.txt", "text/plain", b"Creatinine 90 umol/L");
    let reply = service.respond("explain", Some(&upload)).await;

    assert_eq!(reply.status, ReplyStatus::Success);
    let sent = model.last_prompt.lock().unwrap().clone().unwrap();
    assert!(sent.text.contains("Creatinine 90 umol/L"));
    assert!(sent.text.contains("DOCUMENT CONTENT"));
}

#[tokio::test]
async fn given_same_fault_kind_when_responding_twice_then_advisory_is_identical() {
    let model = MockChatModel::failing(ChatModelError::InvalidCredentials);
    let service = chat_service_with(model.clone(), real_file_loader());

    let first = service.respond("hello", None).await;
    let second = service.respond("different question", None).await;

    assert_eq!(first.status, ReplyStatus::Degraded);
    assert_eq!(first.text, second.text);
}

#[tokio::test]
async fn given_each_fault_kind_when_responding_then_advisories_are_distinct() {
    let kinds = [
        ChatModelError::NotConfigured,
        ChatModelError::InvalidCredentials,
        ChatModelError::RateLimited,
        ChatModelError::Unavailable,
        ChatModelError::UnknownModel,
    ];

    let mut advisories = Vec::new();
    for kind in kinds {
        let service = chat_service_with(MockChatModel::failing(kind), real_file_loader());
        let reply = service.respond("hello", None).await;
        assert_eq!(reply.status, ReplyStatus::Degraded);
        advisories.push(reply.text);
    }

    let unique: std::collections::HashSet<_> = advisories.iter().collect();
    assert_eq!(unique.len(), advisories.len());
}

#[tokio::test]
async fn given_opaque_fault_when_responding_then_detail_excerpt_is_bounded() {
    let long_detail = "boom ".repeat(100);
    let model = MockChatModel::failing(ChatModelError::RequestFailed(long_detail));
    let service = chat_service_with(model, real_file_loader());

    let reply = service.respond("hello", None).await;

    assert_eq!(reply.status, ReplyStatus::Degraded);
    let detail_start = reply.text.find("Error: ").unwrap() + "Error: ".len();
    assert!(reply.text[detail_start..].chars().count() <= 100);
}
