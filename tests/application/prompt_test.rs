use bytes::Bytes;

use healthdesk::application::services::prompt;

#[test]
fn given_plain_message_when_composing_text_only_then_system_prompt_precedes_question() {
    let composed = prompt::text_only("What is hypertension?");

    assert!(composed.image.is_none());
    assert!(composed.text.starts_with(prompt::SYSTEM_PROMPT));
    assert!(composed.text.contains("What is hypertension?"));
}

#[test]
fn given_image_attachment_when_composing_then_image_and_instruction_are_present() {
    let data = Bytes::from_static(b"\x89PNG fake image bytes");
    let composed = prompt::image_analysis("what is this rash?", "image/png", data.clone());

    let image = composed.image.expect("image payload missing");
    assert_eq!(image.mime, "image/png");
    assert_eq!(image.data, data);
    assert!(composed.text.contains("what is this rash?"));
    assert!(composed.text.contains("Do not diagnose"));
}

#[test]
fn given_short_document_when_composing_then_no_truncation_marker() {
    let composed = prompt::document_context("explain", "Haemoglobin 140 g/L");

    assert!(composed.text.contains("Haemoglobin 140 g/L"));
    assert!(!composed.text.contains("[Document truncated due to length]"));
}

#[test]
fn given_long_document_when_composing_then_clipped_to_context_limit_with_marker() {
    let document: String = "¤".repeat(9_000);
    let composed = prompt::document_context("explain", &document);

    assert!(composed.text.contains("[Document truncated due to length]"));

    let kept = composed.text.chars().filter(|c| *c == '¤').count();
    assert_eq!(kept, 8_000);
}

#[test]
fn given_document_prompt_when_composed_then_terminology_instructions_present() {
    let composed = prompt::document_context("explain this", "some text");

    assert!(composed.text.contains("Explain medical terminology"));
    assert!(composed.text.contains("Do NOT interpret results"));
    assert!(composed.text.contains("healthcare professional"));
}
