use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ort::inputs;
use ort::session::Session;
use ort::session::builder::GraphOptimizationLevel;
use ort::value::Value;

use crate::application::ports::{Classifier, ClassifierError, Prediction};

/// Pre-trained classifier loaded from an ONNX export. The session requires
/// exclusive access to run, so it sits behind a mutex; the lock is held for
/// a single inference call inside `spawn_blocking`, never across an await.
///
/// Expected model signature: one `[1, n]` f32 input; output 0 is the label
/// tensor (i64), output 1 (when exported) the class probabilities (f32).
pub struct OnnxClassifier {
    session: Arc<Mutex<Session>>,
    expected_features: usize,
}

impl OnnxClassifier {
    pub fn load(path: &Path, expected_features: usize) -> Result<Self, ort::Error> {
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(1)?
            .commit_from_file(path)?;

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            expected_features,
        })
    }

    fn run_inference(
        session: &Arc<Mutex<Session>>,
        features: Vec<f32>,
    ) -> Result<Prediction, ClassifierError> {
        let mut session = session
            .lock()
            .map_err(|_| ClassifierError::InferenceFailed("session lock poisoned".to_string()))?;

        let input = Value::from_array(([1_usize, features.len()], features.into_boxed_slice()))
            .map_err(|e| ClassifierError::InferenceFailed(e.to_string()))?;

        let outputs = session
            .run(inputs![input])
            .map_err(|e| ClassifierError::InferenceFailed(e.to_string()))?;

        let (_, labels) = outputs[0]
            .try_extract_tensor::<i64>()
            .map_err(|e| ClassifierError::InferenceFailed(e.to_string()))?;
        let positive = labels.first().copied().unwrap_or(0) == 1;

        let confidence = if outputs.len() > 1 {
            outputs[1]
                .try_extract_tensor::<f32>()
                .ok()
                .and_then(|(_, probabilities)| {
                    probabilities
                        .iter()
                        .copied()
                        .reduce(f32::max)
                        .map(|max| max * 100.0)
                })
                .unwrap_or(0.0)
        } else {
            0.0
        };

        Ok(Prediction {
            positive,
            confidence,
        })
    }
}

#[async_trait]
impl Classifier for OnnxClassifier {
    async fn predict(&self, features: &[f32]) -> Result<Prediction, ClassifierError> {
        if features.len() != self.expected_features {
            return Err(ClassifierError::InferenceFailed(format!(
                "expected {} features, got {}",
                self.expected_features,
                features.len()
            )));
        }

        let session = Arc::clone(&self.session);
        let features = features.to_vec();

        tokio::task::spawn_blocking(move || Self::run_inference(&session, features))
            .await
            .map_err(|e| ClassifierError::InferenceFailed(format!("task join error: {e}")))?
    }
}
