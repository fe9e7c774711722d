const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "pdf", "txt"];

const BYTES_PER_MIB: u64 = 1_048_576;

/// File intake policy: extension allow-list plus a byte-size ceiling.
/// Pure predicate — persistence and deletion belong to the caller.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    max_bytes: u64,
}

impl UploadPolicy {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    pub fn check_filename(&self, filename: &str) -> Result<(), UploadRejection> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension {
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(UploadRejection::ExtensionNotAllowed),
        }
    }

    pub fn check_size(&self, size_bytes: u64) -> Result<(), UploadRejection> {
        if size_bytes > self.max_bytes {
            Err(UploadRejection::TooLarge {
                limit_mib: self.max_bytes / BYTES_PER_MIB,
            })
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("File type not allowed. Please upload PNG, JPG, JPEG, or PDF files only.")]
    ExtensionNotAllowed,
    #[error("File too large. Maximum size is {limit_mib}MB.")]
    TooLarge { limit_mib: u64 },
}
