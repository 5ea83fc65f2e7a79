use maud::{html, Markup};

pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="container grid grid-4" {
                div class="span-2" {
                    strong class="brand" { "House Matters" }
                    p class="muted" {
                        "Connecting landlords and tenants directly. No agents, no fees, just affordable and transparent renting."
                    }
                }
                div {
                    h4 { "Platform" }
                    ul {
                        li { a href="/#listings" { "Find a Home" } }
                        li { a href="/list-property" { "List Property" } }
                        li { a href="/#how-it-works" { "How It Works" } }
                        li { a href="/signup" { "Sign Up" } }
                    }
                }
                div {
                    h4 { "Company" }
                    ul {
                        li { a href="#" { "About Us" } }
                        li { a href="#" { "Contact" } }
                        li { a href="#" { "Privacy Policy" } }
                        li { a href="#" { "Terms of Service" } }
                    }
                }
            }
            p class="container copyright muted" {
                "© 2025 House Matters. Making renting accessible and affordable across Nigeria."
            }
        }
    }
}
