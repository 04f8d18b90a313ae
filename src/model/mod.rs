mod artifact;
mod predictor;
mod store;

pub use artifact::{Artifact, ArtifactError, Forest, DEFAULT_MODEL_PATH};
pub use predictor::{describe_estimate, EstimateRequest, PredictError};
pub use store::ModelStore;
