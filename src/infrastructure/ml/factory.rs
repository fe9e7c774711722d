use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::Classifier;
use crate::domain::Disease;

use super::onnx_classifier::OnnxClassifier;
use super::unavailable::UnavailableClassifier;

/// Feature-vector widths the exported models were trained with.
fn feature_count(disease: Disease) -> usize {
    match disease {
        Disease::Diabetes => 18,
        Disease::Heart => 13,
        Disease::Kidney => 24,
    }
}

/// Loads one classifier per disease from `<model_dir>/<disease>.onnx`.
/// A missing or unloadable model yields the unavailable stub for that
/// disease only; startup always succeeds.
pub fn load_classifiers(model_dir: &Path) -> HashMap<Disease, Arc<dyn Classifier>> {
    let _ = ort::init();

    Disease::ALL
        .iter()
        .map(|&disease| {
            let path = model_dir.join(format!("{}.onnx", disease.as_str()));
            let classifier: Arc<dyn Classifier> = if path.exists() {
                match OnnxClassifier::load(&path, feature_count(disease)) {
                    Ok(loaded) => {
                        tracing::info!(disease = disease.as_str(), path = %path.display(), "Classifier loaded");
                        Arc::new(loaded)
                    }
                    Err(e) => {
                        tracing::warn!(
                            disease = disease.as_str(),
                            error = %e,
                            "Failed to load classifier, predictions disabled"
                        );
                        Arc::new(UnavailableClassifier)
                    }
                }
            } else {
                tracing::warn!(
                    disease = disease.as_str(),
                    path = %path.display(),
                    "No model file, predictions disabled"
                );
                Arc::new(UnavailableClassifier)
            };
            (disease, classifier)
        })
        .collect()
}
