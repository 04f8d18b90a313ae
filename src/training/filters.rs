// src/training/filters.rs

use crate::domain::CleanListing;
use crate::training::stats::{median, percentile, rank_by_frequency};

pub const PRICE_PERCENTILE: f64 = 96.0;
pub const TOP_LOCATIONS: usize = 15;

/// Bedroom/toilet, bathroom and parking range filters, applied in that order.
pub fn apply_range_filters(mut rows: Vec<CleanListing>) -> Vec<CleanListing> {
    rows.retain(|l| l.bed > 1 && l.toilet < 8);
    rows.retain(|l| l.bath > 1 && l.bath < 8);
    rows.retain(|l| matches!(l.parking_space, Some(p) if p > 2 && p < 11));
    rows
}

/// Drops rows priced above the given percentile of the current rows.
/// Returns the survivors and the cutoff used.
pub fn apply_price_cutoff(mut rows: Vec<CleanListing>, q: f64) -> (Vec<CleanListing>, Option<f64>) {
    let prices: Vec<f64> = rows.iter().map(|l| l.price).collect();
    let cutoff = percentile(&prices, q);

    if let Some(cutoff) = cutoff {
        rows.retain(|l| l.price <= cutoff);
    }
    (rows, cutoff)
}

/// Fills missing parking counts with the median of the known ones.
pub fn fill_missing_parking(rows: &mut [CleanListing]) -> Option<f64> {
    let known: Vec<f64> = rows
        .iter()
        .filter_map(|l| l.parking_space.map(f64::from))
        .collect();
    let median = median(&known)?;

    for listing in rows.iter_mut().filter(|l| l.parking_space.is_none()) {
        listing.parking_space = Some(median.round() as u32);
    }
    Some(median)
}

/// The `n` most frequent locations, most frequent first.
pub fn top_locations(rows: &[CleanListing], n: usize) -> Vec<String> {
    rank_by_frequency(rows.iter().map(|l| l.location.as_str()))
        .into_iter()
        .take(n)
        .map(|(location, _)| location.to_string())
        .collect()
}

pub fn keep_locations(mut rows: Vec<CleanListing>, keep: &[String]) -> Vec<CleanListing> {
    rows.retain(|l| keep.contains(&l.location));
    rows
}
