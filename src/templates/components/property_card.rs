use crate::domain::filter::FilterCriteria;
use crate::domain::property::format_naira;
use crate::domain::PropertyRecord;
use maud::{html, Markup};

pub fn property_card(property: &PropertyRecord) -> Markup {
    html! {
        article class="card property-card" {
            div class="property-image" {
                (property_image(property, "card-image"))
                @if property.featured {
                    span class="badge" { "Featured" }
                }
            }
            div class="card-body" {
                h3 class="line-clamp" { (property.title) }
                p class="muted location" { (property.location) }
                p class="price" {
                    span class="amount" { (format_naira(property.price)) }
                    span class="muted" { "/year" }
                }
                ul class="specs" {
                    li { (property.bedrooms) " Beds" }
                    li { (property.bathrooms) " Baths" }
                    li { (property.area) }
                }
                a class="btn btn-outline btn-block" href=(format!("/properties/{}", property.id)) {
                    "View Details"
                }
            }
        }
    }
}

/// The listing photo, or a tinted block naming the city when there is none.
pub fn property_image(property: &PropertyRecord, class: &str) -> Markup {
    html! {
        @match &property.image_ref {
            Some(src) => {
                img class=(class) src=(src) alt=(property.title) loading="lazy";
            }
            None => {
                div class={ (class) " image-placeholder" } role="img" aria-label=(property.title) {
                    span { (property.city()) }
                }
            }
        }
    }
}

/// Resets the filter bar and the grid by re-fetching the listings section
/// without a query. Plain `/#listings` without htmx.
fn clear_filters_link(class: &str) -> Markup {
    html! {
        a class=(class)
            href="/#listings"
            hx-get="/"
            hx-select="#listings"
            hx-target="#listings"
            hx-swap="outerHTML"
        { "Clear filters" }
    }
}

/// The swappable grid under the filter bar.
pub fn listing_grid(properties: &[&PropertyRecord], criteria: &FilterCriteria) -> Markup {
    html! {
        div id="listing-grid" {
            @if properties.is_empty() {
                div class="empty-state" {
                    p { "No properties match your filters" }
                    (clear_filters_link("btn btn-outline"))
                }
            } @else {
                @if !criteria.is_cleared() {
                    p class="result-count" {
                        "Showing " (properties.len()) " matching "
                        @if properties.len() == 1 { "property" } @else { "properties" }
                        " · "
                        (clear_filters_link("clear-filters"))
                    }
                }
                div class="grid grid-3" {
                    @for property in properties {
                        (property_card(property))
                    }
                }
            }
        }
    }
}
