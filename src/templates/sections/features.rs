use crate::templates::components::section_heading;
use maud::{html, Markup};

const FEATURES: &[(&str, &str)] = &[
    ("Self-Service Listings", "Landlords manage properties easily. Tenants search verified, affordable homes."),
    ("Verified & Secure", "All users and properties are verified. TLS encryption keeps your data safe."),
    ("Direct Messaging", "Chat directly with landlords or tenants. No middlemen, no delays."),
    ("Secure Payments", "Built-in escrow and payment integration for safe, transparent transactions."),
    ("Reviews & Ratings", "Build trust with honest reviews from real tenants and landlords."),
    ("Map Integration", "Find homes near you with our interactive map and location search."),
];

pub fn features() -> Markup {
    html! {
        section id="features" class="section section-muted" {
            div class="container" {
                (section_heading(
                    "Everything You Need, All in One Place",
                    "House Matters connects you directly, making renting simple, affordable, and transparent.",
                ))
                div class="grid grid-3" {
                    @for (title, description) in FEATURES {
                        div class="card feature" {
                            h3 { (title) }
                            p class="muted" { (description) }
                        }
                    }
                }
            }
        }
    }
}
