mod loader;

pub use loader::load_dir;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read {0}: {1}")]
    Io(String, #[source] std::io::Error),
    #[error("malformed table {0}: {1}")]
    Csv(String, #[source] csv::Error),
}
