// scraper.rs
use crate::domain::{RawListing, COLUMNS};
use crate::scraper::selectors::ListingSelectors;
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

const BASE_URL: &str = "https://nigeriapropertycentre.com/for-sale/houses/lagos/showtype";

// Trailing cards on each results page are ads, not listings.
const TRAILING_NON_LISTINGS: usize = 3;

const PAGE_DELAY: Duration = Duration::from_millis(200);

pub struct PropertyCentreScraper {
    client: Client,
    selectors: ListingSelectors,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrapeSummary {
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub listings: usize,
}

impl fmt::Display for ScrapeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scraped {} listings from {} pages ({} failed)",
            self.listings, self.pages_fetched, self.pages_failed
        )
    }
}

impl PropertyCentreScraper {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self {
            client,
            selectors: ListingSelectors::new()?,
        })
    }

    pub fn page_url(page: u32) -> Result<Url, ScraperError> {
        let mut url = Url::parse(BASE_URL).map_err(|e| ScraperError::Network(e.to_string()))?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }

    /// Scrapes pages `first..=last` into a CSV file at `out`, overwriting it.
    ///
    /// A page that fails to download is logged and skipped.
    pub fn scrape_to_csv(&self, first: u32, last: u32, out: &Path) -> Result<ScrapeSummary, ScraperError> {
        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ScraperError::Io(e.to_string()))?;
        }

        let mut writer = csv::Writer::from_path(out)?;
        writer.write_record(COLUMNS)?;

        let mut summary = ScrapeSummary::default();

        for page in first..=last {
            std::thread::sleep(PAGE_DELAY);

            let url = Self::page_url(page)?;
            tracing::info!(page, %url, "📄 scraping page");

            let html = match self.fetch_html(&url) {
                Ok(html) => html,
                Err(e) => {
                    tracing::warn!(page, error = %e, "⚠️ page failed, skipping");
                    summary.pages_failed += 1;
                    continue;
                }
            };

            let listings = self.parse_listings(&html);
            for listing in &listings {
                writer.write_record(listing.fields())?;
            }

            summary.pages_fetched += 1;
            summary.listings += listings.len();
            tracing::debug!(page, listings = listings.len(), "page parsed");
        }

        writer.flush().map_err(|e| ScraperError::Io(e.to_string()))?;
        tracing::info!(
            pages = summary.pages_fetched,
            failed = summary.pages_failed,
            listings = summary.listings,
            out = %out.display(),
            "✅ scrape complete"
        );
        Ok(summary)
    }

    pub fn fetch_html(&self, url: &Url) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ScraperError::Network(format!("HTTP {status} for {url}")));
        }

        Ok(text)
    }

    /// Extracts one raw listing per result card. Fields that are not on the
    /// card come back as `None`.
    pub fn parse_listings(&self, html: &str) -> Vec<RawListing> {
        let document = Html::parse_document(html);
        let s = &self.selectors;

        let cards: Vec<ElementRef> = document.select(&s.card).collect();
        let keep = cards.len().saturating_sub(TRAILING_NON_LISTINGS);

        cards
            .into_iter()
            .take(keep)
            .map(|card| RawListing {
                title: first_text(card, &s.title),
                address: first_text(card, &s.address),
                bed: first_text(card, &s.bed),
                bath: first_text(card, &s.bath),
                toilet: first_text(card, &s.toilet),
                parking_space: first_text(card, &s.parking_space),
                price: first_text(card, &s.price),
            })
            .collect()
    }
}

// Text of the first match, every text node trimmed and concatenated.
fn first_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(|el| {
        el.text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<String>()
    })
}
