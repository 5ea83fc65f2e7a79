use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            section class="section" {
                div class="container narrow center" {
                    h1 { "Error " (status) }
                    p class="lead" { (message) }
                    p { a href="/" { "← Back to home" } }
                }
            }
        },
    )
}
