// src/model/store.rs

use crate::model::{Artifact, ArtifactError};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// The live model, shared read-only by every request handler.
///
/// Loaded once at startup; only `reload` swaps it.
pub struct ModelStore {
    path: PathBuf,
    current: RwLock<Arc<Artifact>>,
}

impl ModelStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ArtifactError> {
        let path = path.into();
        let artifact = Artifact::load(&path)?;
        tracing::info!(
            path = %path.display(),
            trained_at = %artifact.trained_at,
            rows = artifact.rows_used,
            "🧠 model loaded"
        );

        Ok(Self::with_artifact(path, artifact))
    }

    pub fn with_artifact(path: impl Into<PathBuf>, artifact: Artifact) -> Self {
        Self {
            path: path.into(),
            current: RwLock::new(Arc::new(artifact)),
        }
    }

    pub fn current(&self) -> Arc<Artifact> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Re-reads the artifact from disk. On failure the old model stays live.
    pub fn reload(&self) -> Result<Arc<Artifact>, ArtifactError> {
        let fresh = Arc::new(Artifact::load(&self.path)?);

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = fresh.clone();
        tracing::info!(path = %self.path.display(), trained_at = %fresh.trained_at, "🔄 model reloaded");
        Ok(fresh)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
