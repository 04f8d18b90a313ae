use crate::templates::{card, desktop_layout};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub fn reloaded_page(trained_at: DateTime<Utc>, rows_used: usize, locations: usize) -> Markup {
    desktop_layout(
        "Model reloaded",
        html! {
            main {
                (card("Model reloaded", html! {
                    p { "Trained at " (trained_at.format("%Y-%m-%d %H:%M UTC").to_string()) }
                    p { (rows_used) " training rows, " (locations) " locations" }
                    p { a href="/" { "← Back to the estimator" } }
                }))
            }
        },
    )
}
