use crate::config::{Cli, Commands};
use crate::model::ModelStore;
use crate::router::handle;
use crate::scraper::PropertyCentreScraper;
use anyhow::Context;
use astra::Server;
use clap::Parser;

mod config;
mod dataset;
mod domain;
mod errors;
mod model;
mod responses;
mod router;
mod scraper;
mod templates;
mod training;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    match Cli::parse().command {
        Commands::Scrape { first, last, data } => {
            let out = data.scrape_file(first, last);
            let scraper = PropertyCentreScraper::new()?;
            let summary = scraper
                .scrape_to_csv(first, last, &out)
                .with_context(|| format!("scrape into {}", out.display()))?;
            println!("{summary}; written to {}", out.display());
        }

        Commands::Train { data, model } => {
            let report = training::run(&data.dir, &model.path)?;
            println!(
                "Trained on {} rows ({} held out) from {} scraped rows; model saved to {}",
                report.train_rows,
                report.test_rows,
                report.pipeline.cleaning.rows_in,
                model.path.display()
            );
        }

        Commands::Serve {
            addr,
            workers,
            model,
        } => {
            // A missing or corrupt model is fatal here; nothing to serve without it.
            let store = ModelStore::open(&model.path)
                .with_context(|| format!("load model from {}", model.path.display()))?;

            tracing::info!("Starting server at http://{addr}");

            let server = Server::bind(&addr).max_workers(workers);

            server
                .serve(move |req, _info| match handle(req, &store) {
                    Ok(resp) => resp,
                    Err(err) => responses::html_error_response(err),
                })
                .context("server ended with error")?;

            tracing::info!("Server shut down cleanly.");
        }
    }

    Ok(())
}
