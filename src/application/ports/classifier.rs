use async_trait::async_trait;

/// Outcome of one classifier invocation. `confidence` is the highest class
/// probability as a percentage; 0.0 when the model exposes no probabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub positive: bool,
    pub confidence: f32,
}

/// Pre-trained disease classifier. Implementations are opaque: a feature
/// vector goes in, a label and confidence come out.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn predict(&self, features: &[f32]) -> Result<Prediction, ClassifierError>;

    fn is_available(&self) -> bool {
        true
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("no trained model is loaded")]
    Unavailable,
    #[error("inference failed: {0}")]
    InferenceFailed(String),
}
