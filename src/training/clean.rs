// src/training/clean.rs

use crate::domain::{extract_city, extract_type_keywords, strip_non_digits};
use crate::domain::{CleanListing, RawListing};
use std::collections::BTreeMap;
use thiserror::Error;

/// Why a scraped row could not become a `CleanListing`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RowRejection {
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("{field} is not numeric: {value:?}")]
    NotNumeric { field: &'static str, value: String },
}

/// Per-run tally of rows lost during cleaning.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CleaningReport {
    pub rows_in: usize,
    pub kept: usize,
    pub missing: usize,
    pub not_numeric: BTreeMap<&'static str, usize>,
}

impl CleaningReport {
    pub fn dropped(&self) -> usize {
        self.rows_in - self.kept
    }

    fn record(&mut self, rejection: &RowRejection) {
        match rejection {
            RowRejection::Missing(_) => self.missing += 1,
            RowRejection::NotNumeric { field, .. } => {
                *self.not_numeric.entry(*field).or_default() += 1;
            }
        }
    }
}

/// Turns one scraped row into a typed listing, or says why it can't.
pub fn clean_listing(raw: &RawListing) -> Result<CleanListing, RowRejection> {
    if let Some(field) = raw.first_missing() {
        return Err(RowRejection::Missing(field));
    }

    let text = |v: &Option<String>| v.as_deref().unwrap_or_default().to_string();

    Ok(CleanListing {
        kind: extract_type_keywords(&text(&raw.title)),
        location: extract_city(&text(&raw.address)),
        bed: parse_count("bed", &text(&raw.bed))?,
        bath: parse_count("bath", &text(&raw.bath))?,
        toilet: parse_count("toilet", &text(&raw.toilet))?,
        parking_space: Some(parse_count("pkn_space", &text(&raw.parking_space))?),
        price: parse_price(&text(&raw.price))?,
    })
}

/// Cleans every row, keeping the survivors and a tally of the rest.
pub fn clean_all(rows: &[RawListing]) -> (Vec<CleanListing>, CleaningReport) {
    let mut report = CleaningReport {
        rows_in: rows.len(),
        ..Default::default()
    };
    let mut kept = Vec::with_capacity(rows.len());

    for raw in rows {
        match clean_listing(raw) {
            Ok(listing) => kept.push(listing),
            Err(rejection) => {
                tracing::trace!(%rejection, "row rejected");
                report.record(&rejection);
            }
        }
    }

    report.kept = kept.len();
    (kept, report)
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, RowRejection> {
    strip_non_digits(raw)
        .parse()
        .map_err(|_| RowRejection::NotNumeric {
            field,
            value: raw.to_string(),
        })
}

fn parse_price(raw: &str) -> Result<f64, RowRejection> {
    strip_non_digits(raw)
        .parse()
        .map_err(|_| RowRejection::NotNumeric {
            field: "price",
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str, address: &str, nums: [&str; 5]) -> RawListing {
        RawListing {
            title: Some(title.into()),
            address: Some(address.into()),
            bed: Some(nums[0].into()),
            bath: Some(nums[1].into()),
            toilet: Some(nums[2].into()),
            parking_space: Some(nums[3].into()),
            price: Some(nums[4].into()),
        }
    }

    #[test]
    fn cleans_scraped_text() {
        let listing = clean_listing(&raw(
            "3 Bedroom Duplex",
            "Lekki, Lagos, Nigeria",
            ["3 beds", "3 baths", "3 Toilets", "3 Parking Spaces", "₦35,000,000"],
        ))
        .unwrap();

        assert_eq!(listing.kind, "Duplex");
        assert_eq!(listing.location, "Lagos");
        assert_eq!(listing.bed, 3);
        assert_eq!(listing.parking_space, Some(3));
        assert_eq!(listing.price, 35_000_000.0);
    }

    #[test]
    fn non_numeric_field_rejects_row() {
        let err = clean_listing(&raw("Duplex", "Ajah, Lagos", ["3", "two", "3", "3", "100"]))
            .unwrap_err();

        assert_eq!(
            err,
            RowRejection::NotNumeric {
                field: "bath",
                value: "two".into()
            }
        );
    }

    #[test]
    fn report_counts_each_reason() {
        let mut missing = raw("Duplex", "Ajah, Lagos", ["3", "3", "3", "3", "100"]);
        missing.price = None;
        let rows = vec![
            raw("Duplex", "Ajah, Lagos", ["3", "3", "3", "3", "100"]),
            missing,
            raw("Duplex", "Ajah, Lagos", ["3", "3", "3", "", "100"]),
            raw("Duplex", "Ajah, Lagos", ["3", "3", "3", "-", "100"]),
        ];

        let (kept, report) = clean_all(&rows);

        assert_eq!(kept.len(), 1);
        assert_eq!(report.rows_in, 4);
        assert_eq!(report.missing, 1);
        assert_eq!(report.not_numeric.get("pkn_space"), Some(&2));
        assert_eq!(report.dropped(), 3);
    }
}
