mod factory;
mod onnx_classifier;
mod unavailable;

pub use factory::load_classifiers;
pub use onnx_classifier::OnnxClassifier;
pub use unavailable::UnavailableClassifier;
