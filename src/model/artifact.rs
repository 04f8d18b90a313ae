// src/model/artifact.rs

use crate::domain::LabelEncoder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Forest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

pub const DEFAULT_MODEL_PATH: &str = "model/estimator.json";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("cannot access model file {0}: {1}")]
    Io(String, #[source] std::io::Error),
    #[error("model file {0} is corrupt: {1}")]
    Corrupt(String, #[source] serde_json::Error),
    #[error("cannot encode model: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Everything the predictor needs: the fitted forest and the frozen encoders.
#[derive(Serialize, Deserialize)]
pub struct Artifact {
    pub regressor: Forest,
    pub type_encoder: LabelEncoder,
    pub location_encoder: LabelEncoder,
    /// Type used when a request does not name one.
    pub default_type: String,
    pub trained_at: DateTime<Utc>,
    pub rows_used: usize,
}

impl Artifact {
    /// Writes the artifact, replacing any previous file at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ArtifactError> {
        let path = path.as_ref();
        let io_err = |e| ArtifactError::Io(path.display().to_string(), e);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let tmp = tmp_path(path);
        let file = File::create(&tmp).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self).map_err(ArtifactError::Encode)?;
        writer.flush().map_err(io_err)?;
        drop(writer);

        fs::rename(&tmp, path).map_err(io_err)?;
        tracing::info!(path = %path.display(), "💾 model artifact written");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ArtifactError::Io(path.display().to_string(), e))?;

        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ArtifactError::Corrupt(path.display().to_string(), e))
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
