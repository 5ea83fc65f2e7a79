use crate::domain::validation::FieldErrors;
use crate::domain::PropertyForm;
use crate::submissions::Toast;
use crate::templates::components::listing_form;
use crate::templates::{desktop_layout, sections};
use maud::{html, Markup};

pub fn list_property_page(
    form: &PropertyForm,
    errors: Option<&FieldErrors>,
    notice: Option<&Toast>,
) -> Markup {
    desktop_layout(
        "List Your Property",
        html! {
            section class="section" {
                div class="container narrow" {
                    h1 { "List Your Property" }
                    p class="lead" { "Add your property details to connect with potential tenants." }
                    (listing_form(form, errors, notice))
                }
            }
            (sections::footer())
        },
    )
}

pub fn list_property_fragment(
    form: &PropertyForm,
    errors: Option<&FieldErrors>,
    notice: Option<&Toast>,
) -> Markup {
    listing_form(form, errors, notice)
}
