mod gemini_client;
mod unconfigured;

pub use gemini_client::GeminiClient;
pub use unconfigured::UnconfiguredChatModel;
