use maud::{html, Markup};

pub mod estimate_form;

pub use estimate_form::{estimate_form, EstimateFormVm};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
