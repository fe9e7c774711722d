use healthdesk::domain::{StoragePath, sanitize_filename};

#[test]
fn given_same_filename_when_building_paths_then_paths_are_unique() {
    let first = StoragePath::for_upload("report.pdf");
    let second = StoragePath::for_upload("report.pdf");

    assert_ne!(first, second);
}

#[test]
fn given_filename_with_path_separators_when_sanitizing_then_no_traversal_remains() {
    assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_filename("..\\windows\\cmd.exe"), "cmd.exe");
    assert_eq!(sanitize_filename("dir/file.pdf"), "file.pdf");
}

#[test]
fn given_filename_with_spaces_and_symbols_when_sanitizing_then_replaced_with_underscores() {
    assert_eq!(
        sanitize_filename("my lab result (final).pdf"),
        "my_lab_result__final_.pdf"
    );
}

#[test]
fn given_empty_or_dot_only_filename_when_sanitizing_then_falls_back_to_placeholder() {
    assert_eq!(sanitize_filename(""), "upload");
    assert_eq!(sanitize_filename("..."), "upload");
}

#[test]
fn given_upload_path_when_rendered_then_contains_sanitized_name() {
    let path = StoragePath::for_upload("lab result.pdf");

    assert!(path.as_str().ends_with("_lab_result.pdf"));
}
