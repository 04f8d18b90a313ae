// config.rs
use crate::model::DEFAULT_MODEL_PATH;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "naija_house_price",
    about = "Scrape Lagos house listings, train a price model and serve estimates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape listing pages into a CSV file in the data directory
    Scrape {
        /// First results page to fetch
        #[arg(long, default_value_t = 1)]
        first: u32,
        /// Last results page to fetch (inclusive)
        #[arg(long, default_value_t = 200)]
        last: u32,
        #[command(flatten)]
        data: DataArgs,
    },
    /// Clean every table in the data directory and fit the price model
    Train {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        model: ModelArgs,
    },
    /// Serve the estimate form
    Serve {
        #[arg(long, env = "HOUSE_ADDR", default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
        #[arg(long, env = "HOUSE_WORKERS", default_value_t = 8)]
        workers: usize,
        #[command(flatten)]
        model: ModelArgs,
    },
}

#[derive(Args)]
pub struct DataArgs {
    /// Directory holding scraped CSV tables
    #[arg(long = "data-dir", env = "HOUSE_DATA_DIR", default_value = "data")]
    pub dir: PathBuf,
}

#[derive(Args)]
pub struct ModelArgs {
    /// Where the trained model artifact lives
    #[arg(long = "model", env = "HOUSE_MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    pub path: PathBuf,
}

impl DataArgs {
    /// One file per page range so repeated scrapes accumulate.
    pub fn scrape_file(&self, first: u32, last: u32) -> PathBuf {
        self.dir.join(format!("house_data_{first}_{last}.csv"))
    }
}
