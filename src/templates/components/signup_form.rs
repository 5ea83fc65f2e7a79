use crate::domain::validation::FieldErrors;
use crate::domain::SignupForm;
use crate::submissions::Toast;
use crate::templates::components::{form_field, toast, Field};
use maud::{html, Markup};

const USER_TYPES: &[(&str, &str)] = &[
    ("tenant", "Tenant (Looking for a home)"),
    ("landlord", "Landlord (Have property to rent)"),
];

/// Signup form. On a failed submit it comes back with the typed values intact.
pub fn signup_form(form: &SignupForm, errors: Option<&FieldErrors>, notice: Option<&Toast>) -> Markup {
    let role_error = errors.and_then(|e| e.message("userType"));

    html! {
        div id="signup-form" class="form-wrapper" {
            @if let Some(t) = notice {
                (toast(t))
            }
            form
                method="post"
                action="/signup"
                hx-post="/signup"
                hx-target="#signup-form"
                hx-swap="outerHTML"
                hx-disabled-elt="button"
                class="stack"
                novalidate
            {
                (form_field(&Field { name: "name", label: "Full Name", input_type: "text", placeholder: "John Doe", value: &form.name }, errors))
                (form_field(&Field { name: "email", label: "Email", input_type: "email", placeholder: "john@example.com", value: &form.email }, errors))
                (form_field(&Field { name: "phone", label: "Phone Number", input_type: "tel", placeholder: "+234 800 000 0000", value: &form.phone }, errors))

                fieldset class="field" {
                    legend { "I am a" }
                    @for (value, label) in USER_TYPES {
                        label class="radio" {
                            input type="radio" name="userType" value=(value) checked[form.user_type == *value];
                            " " (label)
                        }
                    }
                    @if let Some(msg) = role_error {
                        p class="field-error" { (msg) }
                    }
                }

                button type="submit" class="btn btn-primary btn-block" { "Sign Up" }
            }
        }
    }
}
