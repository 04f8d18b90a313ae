// src/training/pipeline.rs

use crate::domain::{FeatureRow, LabelEncoder, RawListing};
use crate::training::clean::{clean_all, CleaningReport};
use crate::training::filters::{
    apply_price_cutoff, apply_range_filters, fill_missing_parking, keep_locations, top_locations,
    PRICE_PERCENTILE, TOP_LOCATIONS,
};
use crate::training::stats::rank_by_frequency;
use crate::training::TrainError;

/// Row counts and fitted constants from one pass over the raw table.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub cleaning: CleaningReport,
    pub after_ranges: usize,
    pub price_cutoff: f64,
    pub after_price: usize,
    pub parking_median: f64,
    pub locations_kept: Vec<String>,
    pub after_locations: usize,
}

/// Encoded rows plus the encoders that produced them.
pub struct PreparedDataset {
    pub rows: Vec<FeatureRow>,
    pub type_encoder: LabelEncoder,
    pub location_encoder: LabelEncoder,
    pub default_type: String,
    pub report: PipelineReport,
}

/// `ln(price + 1)`
pub fn to_log_price(price: f64) -> f64 {
    price.ln_1p()
}

/// Cleans, filters and encodes the scraped table into model-ready rows.
pub fn prepare(raw: &[RawListing]) -> Result<PreparedDataset, TrainError> {
    let (rows, cleaning) = clean_all(raw);
    tracing::info!(
        rows_in = cleaning.rows_in,
        kept = cleaning.kept,
        dropped = cleaning.dropped(),
        missing = cleaning.missing,
        not_numeric = ?cleaning.not_numeric,
        "🧹 cleaned listings"
    );

    let rows = apply_range_filters(rows);
    let after_ranges = rows.len();

    let (mut rows, price_cutoff) = apply_price_cutoff(rows, PRICE_PERCENTILE);
    let price_cutoff = price_cutoff.ok_or(TrainError::NotEnoughRows {
        stage: "range filters",
        rows: 0,
    })?;
    let after_price = rows.len();

    let parking_median = fill_missing_parking(&mut rows).unwrap_or_default();

    let locations_kept = top_locations(&rows, TOP_LOCATIONS);
    let rows = keep_locations(rows, &locations_kept);
    let after_locations = rows.len();

    tracing::info!(
        after_ranges,
        price_cutoff,
        after_price,
        parking_median,
        after_locations,
        locations = locations_kept.len(),
        "filtered listings"
    );

    let type_encoder = LabelEncoder::fit("type", rows.iter().map(|l| l.kind.as_str()));
    let location_encoder = LabelEncoder::fit("location", rows.iter().map(|l| l.location.as_str()));
    let default_type = rank_by_frequency(rows.iter().map(|l| l.kind.as_str()))
        .first()
        .map(|(kind, _)| kind.to_string())
        .unwrap_or_default();

    let mut encoded = Vec::with_capacity(rows.len());
    for l in &rows {
        let features = [
            type_encoder.transform(&l.kind)? as f64,
            location_encoder.transform(&l.location)? as f64,
            f64::from(l.bed),
            f64::from(l.bath),
            f64::from(l.toilet),
            f64::from(l.parking_space.unwrap_or_default()),
        ];
        encoded.push(FeatureRow {
            features,
            log_price: to_log_price(l.price),
        });
    }

    Ok(PreparedDataset {
        rows: encoded,
        type_encoder,
        location_encoder,
        default_type,
        report: PipelineReport {
            cleaning,
            after_ranges,
            price_cutoff,
            after_price,
            parking_median,
            locations_kept,
            after_locations,
        },
    })
}
