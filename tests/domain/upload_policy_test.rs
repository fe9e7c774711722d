use healthdesk::domain::{UploadPolicy, UploadRejection};

const ONE_MIB: u64 = 1024 * 1024;

#[test]
fn given_allowed_extensions_when_checking_filename_then_accepts() {
    let policy = UploadPolicy::new(16 * ONE_MIB);

    for filename in ["scan.png", "photo.jpg", "photo.jpeg", "report.pdf", "notes.txt"] {
        assert!(policy.check_filename(filename).is_ok(), "{filename}");
    }
}

#[test]
fn given_uppercase_extension_when_checking_filename_then_accepts() {
    let policy = UploadPolicy::new(16 * ONE_MIB);

    assert!(policy.check_filename("SCAN.PNG").is_ok());
    assert!(policy.check_filename("Report.Pdf").is_ok());
}

#[test]
fn given_disallowed_extension_when_checking_filename_then_rejects() {
    let policy = UploadPolicy::new(16 * ONE_MIB);

    assert_eq!(
        policy.check_filename("x.exe"),
        Err(UploadRejection::ExtensionNotAllowed)
    );
    assert_eq!(
        policy.check_filename("archive.tar.gz"),
        Err(UploadRejection::ExtensionNotAllowed)
    );
}

#[test]
fn given_filename_without_extension_when_checking_then_rejects() {
    let policy = UploadPolicy::new(16 * ONE_MIB);

    assert_eq!(
        policy.check_filename("README"),
        Err(UploadRejection::ExtensionNotAllowed)
    );
}

#[test]
fn given_size_at_limit_when_checking_then_accepts() {
    let policy = UploadPolicy::new(16 * ONE_MIB);

    assert!(policy.check_size(16 * ONE_MIB).is_ok());
}

#[test]
fn given_size_over_limit_when_checking_then_rejects_naming_limit_in_mib() {
    let policy = UploadPolicy::new(16 * ONE_MIB);

    let rejection = policy.check_size(16 * ONE_MIB + 1).unwrap_err();
    assert_eq!(rejection, UploadRejection::TooLarge { limit_mib: 16 });
    assert_eq!(
        rejection.to_string(),
        "File too large. Maximum size is 16MB."
    );
}

#[test]
fn given_type_rejection_when_rendered_then_names_allowed_types() {
    assert_eq!(
        UploadRejection::ExtensionNotAllowed.to_string(),
        "File type not allowed. Please upload PNG, JPG, JPEG, or PDF files only."
    );
}
