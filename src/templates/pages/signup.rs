use crate::domain::validation::FieldErrors;
use crate::domain::SignupForm;
use crate::submissions::Toast;
use crate::templates::components::signup_form;
use crate::templates::{desktop_layout, sections};
use maud::{html, Markup};

pub fn signup_page(form: &SignupForm, errors: Option<&FieldErrors>, notice: Option<&Toast>) -> Markup {
    desktop_layout(
        "Join House Matters",
        html! {
            section class="section" {
                div class="container narrow" {
                    h1 { "Join House Matters" }
                    p class="lead" { "Sign up to start your journey. No fees, no hassle." }
                    (signup_form(form, errors, notice))
                }
            }
            (sections::footer())
        },
    )
}

/// Just the form, for htmx swaps.
pub fn signup_fragment(form: &SignupForm, errors: Option<&FieldErrors>, notice: Option<&Toast>) -> Markup {
    signup_form(form, errors, notice)
}
