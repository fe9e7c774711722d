use std::sync::Arc;

use crate::application::ports::StagingStore;
use crate::application::services::{ChatService, PredictionService};
use crate::domain::UploadPolicy;
use crate::presentation::config::Settings;

/// Process-wide handles, constructed once at startup and read-only
/// afterwards. Injected into handlers through axum state so tests can
/// substitute fakes behind the same ports.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub staging_store: Arc<dyn StagingStore>,
    pub prediction_service: Arc<PredictionService>,
    pub upload_policy: UploadPolicy,
    pub settings: Settings,
}
