mod composite_loader;
mod pdf_adapter;
mod plain_text_adapter;
mod text_sanitizer;

pub use composite_loader::CompositeLoader;
pub use pdf_adapter::{PdfAdapter, assemble_document_text};
pub use plain_text_adapter::PlainTextAdapter;
pub use text_sanitizer::sanitize_extracted_text;
