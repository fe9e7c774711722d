use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::application::ports::{Classifier, ClassifierError, Prediction};
use crate::domain::Disease;

/// Routes a feature vector to the classifier loaded for the given disease.
/// Handles are read-only after construction and shared across requests.
pub struct PredictionService {
    classifiers: HashMap<Disease, Arc<dyn Classifier>>,
}

impl PredictionService {
    pub fn new(classifiers: HashMap<Disease, Arc<dyn Classifier>>) -> Self {
        Self { classifiers }
    }

    #[tracing::instrument(skip(self, features), fields(disease = disease.as_str()))]
    pub async fn predict(
        &self,
        disease: Disease,
        features: &[f32],
    ) -> Result<Prediction, ClassifierError> {
        let classifier = self
            .classifiers
            .get(&disease)
            .ok_or(ClassifierError::Unavailable)?;
        classifier.predict(features).await
    }

    /// Which diseases have a real trained model behind them. Surfaced by the
    /// status route so degraded prediction capacity is visible.
    pub fn availability(&self) -> BTreeMap<&'static str, bool> {
        Disease::ALL
            .iter()
            .map(|d| {
                (
                    d.as_str(),
                    self.classifiers
                        .get(d)
                        .map(|c| c.is_available())
                        .unwrap_or(false),
                )
            })
            .collect()
    }
}
