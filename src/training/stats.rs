// src/training/stats.rs

use std::collections::BTreeMap;

/// Percentile with linear interpolation between closest ranks.
/// `q` is in `[0, 100]`. Returns `None` for an empty slice.
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (sorted.len() - 1) as f64 * q / 100.0;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

pub fn median(values: &[f64]) -> Option<f64> {
    percentile(values, 50.0)
}

/// Counts labels and orders them by descending count.
/// Equal counts keep alphabetical order.
pub fn rank_by_frequency<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&values, 50.0), Some(3.0));
        assert_eq!(percentile(&values, 100.0), Some(5.0));
        assert!((percentile(&values, 96.0).unwrap() - 4.84).abs() < 1e-9);
    }

    #[test]
    fn percentile_of_nothing() {
        assert_eq!(percentile(&[], 96.0), None);
    }

    #[test]
    fn median_even_count() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let ranked = rank_by_frequency(["Lekki", "Ajah", "Ikoyi", "Lekki", "Ajah", "Yaba"]);
        assert_eq!(
            ranked,
            vec![("Ajah", 2), ("Lekki", 2), ("Ikoyi", 1), ("Yaba", 1)]
        );
    }
}
