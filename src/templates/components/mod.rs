use crate::domain::validation::FieldErrors;
use maud::{html, Markup};

pub mod listing_form;
pub mod property_card;
pub mod signup_form;
pub mod toast;

pub use listing_form::listing_form;
pub use property_card::{listing_grid, property_image};
pub use signup_form::signup_form;
pub use toast::toast;

pub fn link_button(label: &str, href: &str, variant: &str) -> Markup {
    html! {
        a class=(format!("btn btn-{variant}")) href=(href) { (label) }
    }
}

pub fn section_heading(title: &str, lead: &str) -> Markup {
    html! {
        div class="section-heading" {
            h2 { (title) }
            p class="lead" { (lead) }
        }
    }
}

/// Text input with its label and, when present, the field's one error message.
pub struct Field<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub input_type: &'a str,
    pub placeholder: &'a str,
    pub value: &'a str,
}

pub fn form_field(field: &Field<'_>, errors: Option<&FieldErrors>) -> Markup {
    let message = errors.and_then(|e| e.message(field.name));
    let error_id = format!("{}-error", field.name);

    html! {
        div class="field" {
            label for=(field.name) { (field.label) }
            input
                id=(field.name)
                name=(field.name)
                type=(field.input_type)
                placeholder=(field.placeholder)
                value=(field.value)
                aria-invalid=[message.map(|_| "true")]
                aria-describedby=[message.map(|_| error_id.as_str())];
            @if let Some(msg) = message {
                p class="field-error" id=(error_id) { (msg) }
            }
        }
    }
}
