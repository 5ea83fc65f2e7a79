use crate::domain::validation::FieldErrors;
use crate::domain::PropertyForm;
use crate::submissions::Toast;
use crate::templates::components::{form_field, toast, Field};
use maud::{html, Markup};

pub fn listing_form(form: &PropertyForm, errors: Option<&FieldErrors>, notice: Option<&Toast>) -> Markup {
    let description_error = errors.and_then(|e| e.message("description"));

    html! {
        div id="listing-form" class="form-wrapper" {
            @if let Some(t) = notice {
                (toast(t))
            }
            form
                method="post"
                action="/properties"
                hx-post="/properties"
                hx-target="#listing-form"
                hx-swap="outerHTML"
                hx-disabled-elt="button"
                class="stack"
                novalidate
            {
                (form_field(&Field { name: "title", label: "Property Title", input_type: "text", placeholder: "e.g. Modern 3-Bedroom Apartment", value: &form.title }, errors))

                div class="grid grid-2" {
                    (form_field(&Field { name: "location", label: "Full Address", input_type: "text", placeholder: "e.g. Lekki Phase 1", value: &form.location }, errors))
                    (form_field(&Field { name: "city", label: "City", input_type: "text", placeholder: "e.g. Lagos", value: &form.city }, errors))
                }
                div class="grid grid-2" {
                    (form_field(&Field { name: "price", label: "Annual Rent (₦)", input_type: "number", placeholder: "2500000", value: &form.price }, errors))
                    (form_field(&Field { name: "area", label: "Area", input_type: "text", placeholder: "e.g. 120 sqm", value: &form.area }, errors))
                }
                div class="grid grid-2" {
                    (form_field(&Field { name: "bedrooms", label: "Bedrooms", input_type: "number", placeholder: "3", value: &form.bedrooms }, errors))
                    (form_field(&Field { name: "bathrooms", label: "Bathrooms", input_type: "number", placeholder: "2", value: &form.bathrooms }, errors))
                }

                div class="field" {
                    label for="description" { "Description" }
                    textarea id="description" name="description" rows="4" placeholder="Describe your property..." {
                        (form.description)
                    }
                    @if let Some(msg) = description_error {
                        p class="field-error" { (msg) }
                    }
                }

                (form_field(&Field { name: "landlord_email", label: "Contact Email", input_type: "email", placeholder: "landlord@example.com", value: &form.landlord_email }, errors))
                (form_field(&Field { name: "landlord_phone", label: "Contact Phone", input_type: "tel", placeholder: "+234 800 000 0000", value: &form.landlord_phone }, errors))

                button type="submit" class="btn btn-primary btn-block" { "List Property" }
            }
        }
    }
}
