use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
