use maud::{html, Markup};

/// What the estimate form needs to render: the categories the live model
/// knows about and, after a submit, the estimate sentence.
pub struct EstimateFormVm<'a> {
    pub locations: &'a [String],
    pub types: &'a [String],
    pub prediction_text: Option<&'a str>,
}

pub fn estimate_form(vm: &EstimateFormVm) -> Markup {
    html! {
        form class="estimate" method="post" action="/predict" {
            label for="location" { "Location" }
            input type="text" id="location" name="location" list="known-locations"
                placeholder="e.g. Lekki" autocomplete="off" required;
            datalist id="known-locations" {
                @for location in vm.locations {
                    option value=(location) {}
                }
            }

            label for="type" { "Property type" }
            select id="type" name="type" {
                option value="" { "Most common" }
                @for kind in vm.types.iter().filter(|t| !t.is_empty()) {
                    option value=(kind) { (kind) }
                }
            }

            (number_field("bed", "Bedrooms", 2, 20))
            (number_field("bath", "Bathrooms", 2, 7))
            (number_field("toilet", "Toilets", 0, 7))
            (number_field("pkn_space", "Parking spaces", 3, 10))

            button type="submit" { "Estimate price" }
        }

        @if let Some(text) = vm.prediction_text {
            p class="prediction" { (text) }
        }
    }
}

fn number_field(name: &str, label: &str, min: u32, max: u32) -> Markup {
    html! {
        label for=(name) { (label) }
        input type="number" id=(name) name=(name) min=(min) max=(max) step="1" required;
    }
}
