use crate::templates::components::link_button;
use maud::{html, Markup};

const STATS: &[(&str, &str)] = &[("0%", "Agent Fees"), ("24/7", "Direct Access"), ("100%", "Verified")];

pub fn hero() -> Markup {
    html! {
        section class="hero" {
            div class="container" {
                div class="hero-content" {
                    h1 { "Find Your Perfect Home, Without the Fees" }
                    p class="hero-lead" {
                        "Connect directly with landlords and tenants. No agents. No high fees. Just affordable, transparent renting."
                    }
                    div class="actions" {
                        (link_button("Find a Home", "#listings", "primary"))
                        (link_button("List Your Property", "/list-property", "ghost"))
                    }
                    div class="stats" {
                        @for (value, label) in STATS {
                            div class="stat" {
                                div class="stat-value" { (value) }
                                div class="stat-label" { (label) }
                            }
                        }
                    }
                }
            }
        }
    }
}
