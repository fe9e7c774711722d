mod chat_service;
mod observation;
mod prediction_service;
pub mod prompt;

pub use chat_service::{ChatModelIds, ChatReply, ChatService, ReplyStatus, StoredUpload};
pub use observation::{
    DiabetesObservation, HeartObservation, KidneyObservation, ObservationError,
};
pub use prediction_service::PredictionService;
