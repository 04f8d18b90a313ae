// src/domain/listing.rs

/// CSV column names, in the order the scraper writes them.
pub const COLUMNS: [&str; 7] = [
    "title",
    "address",
    "bed",
    "bath",
    "toilet",
    "pkn_space",
    "price",
];

/// One listing exactly as scraped. Every field is free text and may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawListing {
    pub title: Option<String>,
    pub address: Option<String>,
    pub bed: Option<String>,
    pub bath: Option<String>,
    pub toilet: Option<String>,
    pub parking_space: Option<String>,
    pub price: Option<String>,
}

impl RawListing {
    /// Fields in CSV column order, for writing.
    pub fn fields(&self) -> [&str; 7] {
        [
            self.title.as_deref().unwrap_or(""),
            self.address.as_deref().unwrap_or(""),
            self.bed.as_deref().unwrap_or(""),
            self.bath.as_deref().unwrap_or(""),
            self.toilet.as_deref().unwrap_or(""),
            self.parking_space.as_deref().unwrap_or(""),
            self.price.as_deref().unwrap_or(""),
        ]
    }

    /// Name of the first missing field, if any.
    pub fn first_missing(&self) -> Option<&'static str> {
        let slots = [
            &self.title,
            &self.address,
            &self.bed,
            &self.bath,
            &self.toilet,
            &self.parking_space,
            &self.price,
        ];

        slots
            .iter()
            .zip(COLUMNS)
            .find(|(value, _)| value.is_none())
            .map(|(_, name)| name)
    }
}

/// A listing after cleaning and numeric coercion.
///
/// `kind` is the property type built from title keywords and `location` is the
/// city segment of the address. Both may be empty strings, which are still
/// valid categories for the encoders.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanListing {
    pub kind: String,
    pub location: String,
    pub bed: u32,
    pub bath: u32,
    pub toilet: u32,
    pub parking_space: Option<u32>,
    pub price: f64,
}

/// Width of a feature vector: `[type, location, bed, bath, toilet, parking_space]`.
pub const FEATURE_COUNT: usize = 6;

/// Encoded training row and its target.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub features: [f64; FEATURE_COUNT],
    pub log_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_missing_reports_column_name() {
        let listing = RawListing {
            title: Some("3 Bedroom Duplex".into()),
            address: Some("Lekki, Lagos".into()),
            bed: Some("3".into()),
            bath: Some("3".into()),
            toilet: Some("4".into()),
            parking_space: None,
            price: Some("₦35,000,000".into()),
        };

        assert_eq!(listing.first_missing(), Some("pkn_space"));
        assert_eq!(listing.fields()[5], "");
    }

    #[test]
    fn complete_listing_has_nothing_missing() {
        let listing = RawListing {
            title: Some("t".into()),
            address: Some("a".into()),
            bed: Some("1".into()),
            bath: Some("1".into()),
            toilet: Some("1".into()),
            parking_space: Some("1".into()),
            price: Some("1".into()),
        };
        assert_eq!(listing.first_missing(), None);
    }
}
