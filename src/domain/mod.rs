pub mod cleaners;
pub mod encoder;
pub mod listing;

pub use cleaners::{extract_city, extract_type_keywords, strip_non_digits};
pub use encoder::{LabelEncoder, UnseenCategory};
pub use listing::{CleanListing, FeatureRow, RawListing, COLUMNS, FEATURE_COUNT};
