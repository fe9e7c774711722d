use healthdesk::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_hyphenated_line_break_when_sanitizing_then_word_is_rejoined() {
    let raw = "haemo-\nglobin levels";

    assert_eq!(sanitize_extracted_text(raw), "haemoglobin levels");
}

#[test]
fn given_runs_of_spaces_when_sanitizing_then_collapsed_to_single_spaces() {
    let raw = "creatinine    90   umol/L";

    assert_eq!(sanitize_extracted_text(raw), "creatinine 90 umol/L");
}

#[test]
fn given_blank_lines_when_sanitizing_then_paragraph_break_is_preserved() {
    let raw = "first paragraph\n\n\nsecond paragraph";

    assert_eq!(
        sanitize_extracted_text(raw),
        "first paragraph\n\nsecond paragraph"
    );
}

#[test]
fn given_leading_and_trailing_whitespace_when_sanitizing_then_trimmed() {
    let raw = "   \n  result: normal  \n   ";

    assert_eq!(sanitize_extracted_text(raw), "result: normal");
}

#[test]
fn given_empty_input_when_sanitizing_then_returns_empty() {
    assert_eq!(sanitize_extracted_text(""), "");
}
