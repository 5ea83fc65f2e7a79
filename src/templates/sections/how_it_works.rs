use crate::templates::components::section_heading;
use maud::{html, Markup};

const STEPS: &[(&str, &str)] = &[
    ("Sign Up & Verify", "Create your account and verify your identity for a secure experience."),
    ("Search or List", "Tenants search for homes. Landlords list their properties with ease."),
    ("Connect & Chat", "Message directly, schedule viewings, and discuss terms without agents."),
    ("Book & Pay", "Secure your home with our integrated payment and escrow system."),
];

pub fn how_it_works() -> Markup {
    html! {
        section id="how-it-works" class="section" {
            div class="container" {
                (section_heading(
                    "How It Works",
                    "Getting started is simple. Find your home or list your property in four easy steps.",
                ))
                ol class="grid grid-4 steps" {
                    @for (i, (title, description)) in STEPS.iter().enumerate() {
                        li class="step" {
                            span class="step-number" { (i + 1) }
                            h3 { (title) }
                            p class="muted" { (description) }
                        }
                    }
                }
            }
        }
    }
}
