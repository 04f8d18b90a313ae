// errors.rs
use crate::model::PredictError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, form input) or the model behind it.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
    #[error("Model Error: {0}")]
    ModelError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unprocessable(_) => 422,
            ServerError::ModelError(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<PredictError> for ServerError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::Unseen(unseen) => ServerError::Unprocessable(unseen.to_string()),
            other => ServerError::ModelError(other.to_string()),
        }
    }
}
