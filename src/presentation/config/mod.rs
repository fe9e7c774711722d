mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ClassifierSettings, GeminiSettings, LoggingSettings, ServerSettings, Settings, UploadSettings,
};
