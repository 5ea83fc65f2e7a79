use crate::domain::SignupForm;
use crate::templates::components::signup_form;
use maud::{html, Markup};

pub fn cta() -> Markup {
    html! {
        section id="cta" class="section cta" {
            div class="container narrow center" {
                h2 { "Ready to Transform Your Rental Experience?" }
                p class="lead" {
                    "Join House Matters today and discover a better way to rent. No fees, no hassle, just homes."
                }

                (signup_form(&SignupForm::default(), None, None))

                ul class="inline-list muted" {
                    li { "Available in Lagos, Abuja & Port Harcourt" }
                    li { "100% Verified Listings" }
                    li { "Zero Agent Fees" }
                }
            }
        }
    }
}
