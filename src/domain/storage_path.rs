use std::fmt;

use uuid::Uuid;

/// Location of a staged upload, unique per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// Builds a collision-free path for an upload: a fresh UUID prefix
    /// joined with the sanitized original filename.
    pub fn for_upload(filename: &str) -> Self {
        Self(format!("{}_{}", Uuid::new_v4(), sanitize_filename(filename)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips a client-supplied filename down to a safe single path segment:
/// only the final path component is kept, anything outside [A-Za-z0-9._-]
/// becomes an underscore, and leading dots are dropped so the result can
/// never traverse upward.
pub fn sanitize_filename(filename: &str) -> String {
    let basename = filename
        .rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .unwrap_or("");

    let cleaned: String = basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}
