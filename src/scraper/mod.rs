mod scraper;
mod scraper_error;
mod selectors;

pub use self::scraper::{PropertyCentreScraper, ScrapeSummary};
pub use scraper_error::ScraperError;
