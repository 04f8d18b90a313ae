// src/training/trainer.rs

use crate::dataset::load_dir;
use crate::domain::{FeatureRow, RawListing, FEATURE_COUNT};
use crate::model::{Artifact, Forest};
use crate::training::pipeline::{prepare, PipelineReport};
use crate::training::TrainError;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressorParameters;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::path::Path;

pub const TEST_SIZE: f64 = 0.2;
pub const SEED: u64 = 123;
pub const N_TREES: usize = 90;
pub const MAX_DEPTH: u16 = 12;
const MIN_TRAIN_ROWS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    pub pipeline: PipelineReport,
    pub train_rows: usize,
    pub test_rows: usize,
}

pub struct Split {
    pub train: Vec<FeatureRow>,
    pub test: Vec<FeatureRow>,
}

/// Shuffles row indices with a fixed seed and carves off `ceil(test_size * n)`
/// rows for the test partition.
pub fn train_test_split(rows: &[FeatureRow], test_size: f64, seed: u64) -> Split {
    let n_test = (test_size * rows.len() as f64).ceil() as usize;

    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.shuffle(&mut StdRng::seed_from_u64(seed));

    let (test_idx, train_idx) = order.split_at(n_test.min(rows.len()));
    Split {
        train: train_idx.iter().map(|&i| rows[i].clone()).collect(),
        test: test_idx.iter().map(|&i| rows[i].clone()).collect(),
    }
}

/// Every split searches all features; smartcore would otherwise sample `sqrt(n)` of them.
pub fn forest_params() -> RandomForestRegressorParameters {
    RandomForestRegressorParameters::default()
        .with_n_trees(N_TREES)
        .with_max_depth(MAX_DEPTH)
        .with_m(FEATURE_COUNT)
        .with_seed(SEED)
}

pub fn fit_forest(rows: &[FeatureRow]) -> Result<Forest, TrainError> {
    let features: Vec<Vec<f64>> = rows.iter().map(|r| r.features.to_vec()).collect();
    let target: Vec<f64> = rows.iter().map(|r| r.log_price).collect();
    let x = DenseMatrix::from_2d_vec(&features);

    Forest::fit(&x, &target, forest_params()).map_err(|e| TrainError::Model(e.to_string()))
}

/// Runs the full pipeline on scraped rows and fits the price model.
pub fn train(raw: &[RawListing]) -> Result<(Artifact, TrainingReport), TrainError> {
    let prepared = prepare(raw)?;

    let split = train_test_split(&prepared.rows, TEST_SIZE, SEED);
    if split.train.len() < MIN_TRAIN_ROWS {
        return Err(TrainError::NotEnoughRows {
            stage: "train split",
            rows: split.train.len(),
        });
    }

    tracing::info!(train = split.train.len(), test = split.test.len(), "🌲 fitting random forest");
    let regressor = fit_forest(&split.train)?;

    let report = TrainingReport {
        pipeline: prepared.report,
        train_rows: split.train.len(),
        test_rows: split.test.len(),
    };

    let artifact = Artifact {
        regressor,
        type_encoder: prepared.type_encoder,
        location_encoder: prepared.location_encoder,
        default_type: prepared.default_type,
        trained_at: Utc::now(),
        rows_used: report.train_rows,
    };

    Ok((artifact, report))
}

/// Loads every table in `data_dir`, trains, and overwrites the artifact at `model_path`.
pub fn run(data_dir: &Path, model_path: &Path) -> Result<TrainingReport, TrainError> {
    let raw = load_dir(data_dir)?;
    let (artifact, report) = train(&raw)?;
    artifact.save(model_path)?;

    tracing::info!(
        rows_in = report.pipeline.cleaning.rows_in,
        train = report.train_rows,
        test = report.test_rows,
        types = artifact.type_encoder.classes().len(),
        locations = artifact.location_encoder.classes().len(),
        "✅ training complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<FeatureRow> {
        (0..n)
            .map(|i| FeatureRow {
                features: [0.0, 0.0, i as f64, 2.0, 2.0, 3.0],
                log_price: i as f64,
            })
            .collect()
    }

    #[test]
    fn split_sizes_round_test_up() {
        let split = train_test_split(&rows(29), TEST_SIZE, SEED);
        assert_eq!(split.test.len(), 6);
        assert_eq!(split.train.len(), 23);
    }

    #[test]
    fn split_is_deterministic_and_disjoint() {
        let data = rows(40);
        let a = train_test_split(&data, TEST_SIZE, SEED);
        let b = train_test_split(&data, TEST_SIZE, SEED);
        assert_eq!(a.train, b.train);
        assert_eq!(a.test, b.test);

        let mut seen: Vec<f64> = a.train.iter().chain(&a.test).map(|r| r.log_price).collect();
        seen.sort_by(f64::total_cmp);
        seen.dedup();
        assert_eq!(seen.len(), 40);
    }

    #[test]
    fn forest_searches_every_feature() {
        let params = forest_params();
        assert_eq!(params.n_trees, 90);
        assert_eq!(params.max_depth, Some(12));
        assert_eq!(params.m, Some(FEATURE_COUNT));
        assert_eq!(params.seed, 123);
    }

    #[test]
    fn forest_splits_on_a_late_feature() {
        // Price depends only on parking, the last column; the other columns are noise.
        let data: Vec<FeatureRow> = (0..40)
            .map(|i| FeatureRow {
                features: [(i % 3) as f64, (i % 5) as f64, 3.0, 3.0, 3.0, (i % 2) as f64],
                log_price: if i % 2 == 0 { 10.0 } else { 20.0 },
            })
            .collect();

        let forest = fit_forest(&data).unwrap();
        let x = DenseMatrix::from_2d_vec(&vec![
            vec![0.0, 0.0, 3.0, 3.0, 3.0, 0.0],
            vec![0.0, 0.0, 3.0, 3.0, 3.0, 1.0],
        ]);
        let predicted = forest.predict(&x).unwrap();

        assert!((predicted[0] - 10.0).abs() < 0.5, "got {predicted:?}");
        assert!((predicted[1] - 20.0).abs() < 0.5, "got {predicted:?}");
    }

    #[test]
    fn too_few_rows_is_an_error() {
        assert!(matches!(
            train(&[]),
            Err(TrainError::NotEnoughRows { .. })
        ));
    }
}
