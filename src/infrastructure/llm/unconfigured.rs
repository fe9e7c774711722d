use async_trait::async_trait;

use crate::application::ports::{ChatModel, ChatModelError, ModelPrompt};

/// Stand-in wired at startup when no API credential is present. Every call
/// short-circuits without touching the network, so the chat surface degrades
/// to its fixed unavailability advisory instead of crashing.
pub struct UnconfiguredChatModel;

#[async_trait]
impl ChatModel for UnconfiguredChatModel {
    async fn generate(
        &self,
        _model: &str,
        _prompt: &ModelPrompt,
    ) -> Result<String, ChatModelError> {
        Err(ChatModelError::NotConfigured)
    }

    fn is_configured(&self) -> bool {
        false
    }
}
