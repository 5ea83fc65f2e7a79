use crate::templates::components::section_heading;
use maud::{html, Markup};

struct Benefit {
    audience: &'static str,
    headline: &'static str,
    description: &'static str,
}

const BENEFITS: &[Benefit] = &[
    Benefit {
        audience: "For Tenants",
        headline: "Affordable Housing",
        description: "Skip the agent fees and find verified, affordable homes directly from landlords.",
    },
    Benefit {
        audience: "For Landlords",
        headline: "Self-Service Control",
        description: "Manage your properties on your own terms with full control and transparency.",
    },
    Benefit {
        audience: "For Everyone",
        headline: "Trust & Security",
        description: "Verified users, secure payments, and honest reviews create a trustworthy marketplace.",
    },
];

pub fn benefits() -> Markup {
    html! {
        section id="benefits" class="section" {
            div class="container" {
                (section_heading(
                    "Built for Landlords & Tenants",
                    "Remove the middleman and experience direct, transparent rental transactions.",
                ))
                div class="grid grid-3" {
                    @for benefit in BENEFITS {
                        div class="card benefit" {
                            div class="eyebrow" { (benefit.audience) }
                            h3 { (benefit.headline) }
                            p class="muted" { (benefit.description) }
                        }
                    }
                }
            }
        }
    }
}
