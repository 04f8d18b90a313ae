// src/model/predictor.rs

use crate::domain::UnseenCategory;
use crate::model::Artifact;
use smartcore::linalg::basic::matrix::DenseMatrix;
use thiserror::Error;

/// One property to price, as submitted through the form.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRequest {
    pub location: String,
    /// Property type label; the artifact's default type when absent.
    pub kind: Option<String>,
    pub bed: u32,
    pub bath: u32,
    pub toilet: u32,
    pub parking_space: u32,
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Unseen(#[from] UnseenCategory),
    #[error("model failed: {0}")]
    Model(String),
    #[error("model returned no prediction")]
    Empty,
}

impl Artifact {
    /// Estimated price in whole naira.
    pub fn estimate(&self, req: &EstimateRequest) -> Result<f64, PredictError> {
        let location = self.location_encoder.transform(&req.location)?;
        let kind = self
            .type_encoder
            .transform(req.kind.as_deref().unwrap_or(self.default_type.as_str()))?;

        let row = vec![vec![
            kind as f64,
            location as f64,
            f64::from(req.bed),
            f64::from(req.bath),
            f64::from(req.toilet),
            f64::from(req.parking_space),
        ]];
        let x = DenseMatrix::from_2d_vec(&row);

        let log_price = self
            .regressor
            .predict(&x)
            .map_err(|e| PredictError::Model(e.to_string()))?
            .first()
            .copied()
            .ok_or(PredictError::Empty)?;

        Ok((log_price.exp() + 1.0).round())
    }
}

/// Sentence shown under the form, e.g. "... is NGN 35,000,000".
pub fn describe_estimate(amount: f64) -> String {
    format!(
        "The estimated cost of the property is NGN {}",
        group_thousands(amount.round() as u64)
    )
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
