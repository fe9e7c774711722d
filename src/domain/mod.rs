mod advice;
mod attachment;
mod storage_path;
mod upload_policy;

pub use advice::{Disease, HealthAdvice};
pub use attachment::{Attachment, AttachmentKind};
pub use storage_path::{StoragePath, sanitize_filename};
pub use upload_policy::{UploadPolicy, UploadRejection};
