// templates/pages/home.rs

use crate::templates::{card, desktop_layout, estimate_form, EstimateFormVm};
use maud::{html, Markup};

pub fn home_page(vm: &EstimateFormVm) -> Markup {
    desktop_layout(
        "House Price Estimator",
        html! {
            main {
                h1 { "What is this house worth?" }
                p {
                    "Estimates are learned from houses listed for sale in Lagos. "
                    "Pick one of the suggested locations; the model only knows those."
                }

                (card("Property details", estimate_form(vm)))
            }
        },
    )
}
