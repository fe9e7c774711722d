mod chat_model;
mod classifier;
mod file_loader;
mod staging_store;

pub use chat_model::{ChatModel, ChatModelError, InlineImage, ModelPrompt};
pub use classifier::{Classifier, ClassifierError, Prediction};
pub use file_loader::{FileLoader, FileLoaderError};
pub use staging_store::{StagingStore, StagingStoreError};
