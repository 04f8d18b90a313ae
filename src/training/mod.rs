mod clean;
mod filters;
mod pipeline;
mod stats;
mod trainer;

pub use pipeline::prepare;
pub use trainer::{run, train};

use crate::dataset::DatasetError;
use crate::domain::UnseenCategory;
use crate::model::ArtifactError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrainError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("not enough rows after {stage}: {rows}")]
    NotEnoughRows { stage: &'static str, rows: usize },
    #[error(transparent)]
    Encode(#[from] UnseenCategory),
    #[error("random forest fit failed: {0}")]
    Model(String),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}
