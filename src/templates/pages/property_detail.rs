use crate::domain::property::format_naira;
use crate::domain::PropertyDetail;
use crate::templates::components::property_image;
use crate::templates::{desktop_layout, sections};
use maud::{html, Markup};

pub fn property_detail_page(detail: &PropertyDetail) -> Markup {
    let p = &detail.record;

    desktop_layout(
        &p.title,
        html! {
            section class="section" {
                div class="container narrow detail" {
                    a href="/#listings" class="muted" { "← Back to listings" }
                    h1 { (p.title) }
                    p class="muted location" { (p.location) }

                    (property_image(p, "detail-image"))

                    p class="price price-lg" {
                        span class="amount" { (format_naira(p.price)) }
                        span class="muted" { "/year" }
                    }

                    ul class="specs specs-lg" {
                        li { (p.bedrooms) " Bedrooms" }
                        li { (p.bathrooms) " Bathrooms" }
                        li { (p.area) }
                    }

                    @if let Some(description) = &detail.description {
                        h3 { "Description" }
                        p class="muted" { (description) }
                    }

                    @if let Some(contact) = &detail.contact {
                        div class="contact" {
                            h3 { "Contact Landlord" }
                            p { a href=(format!("mailto:{}", contact.email)) { (contact.email) } }
                            p { a href=(format!("tel:{}", contact.phone)) { (contact.phone) } }
                            div class="actions" {
                                a class="btn btn-primary" href=(format!("mailto:{}", contact.email)) { "Contact via Email" }
                                a class="btn btn-outline" href=(format!("tel:{}", contact.phone)) { "Call Now" }
                            }
                        }
                    } @else {
                        p class="muted" {
                            "Interested? "
                            a href="/signup" { "Sign up" }
                            " and we'll put you in touch with the landlord."
                        }
                    }
                }
            }
            (sections::footer())
        },
    )
}
