use async_trait::async_trait;

use crate::application::ports::{Classifier, ClassifierError, Prediction};

/// Takes the place of a classifier whose model file is missing or failed to
/// load. It refuses to predict rather than fabricating output, so the route
/// reports the degradation instead of serving meaningless results.
pub struct UnavailableClassifier;

#[async_trait]
impl Classifier for UnavailableClassifier {
    async fn predict(&self, _features: &[f32]) -> Result<Prediction, ClassifierError> {
        Err(ClassifierError::Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}
