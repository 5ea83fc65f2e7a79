use crate::domain::filter::{filter_properties, location_options, FilterCriteria, BEDROOM_OPTIONS, ALL};
use crate::domain::PropertyRecord;
use crate::templates::components::{listing_grid, section_heading};
use maud::{html, Markup};

/// Search box, two selects and the grid. Without htmx the form falls back to a
/// plain GET of the home page.
pub fn listings(records: &[PropertyRecord], criteria: &FilterCriteria) -> Markup {
    let matches = filter_properties(records, criteria);
    let cities = location_options(records);
    let location = criteria.location.as_param();
    let bedrooms = criteria.bedrooms.as_param();

    html! {
        section id="listings" class="section" {
            div class="container" {
                (section_heading(
                    "Featured Properties",
                    "Discover verified rental properties across Nigeria. Connect directly with landlords and secure your next home.",
                ))

                form
                    class="filter-bar"
                    method="get"
                    action="/#listings"
                    hx-get="/listings"
                    hx-target="#listing-grid"
                    hx-swap="outerHTML"
                    hx-trigger="input changed delay:250ms, change"
                {
                    label class="sr-only" for="search" { "Search by title or location" }
                    input
                        type="search"
                        id="search"
                        name="search"
                        placeholder="Search by title or location..."
                        value=(criteria.search_text);

                    label class="sr-only" for="location" { "Location" }
                    select id="location" name="location" {
                        option value=(ALL) selected[location == ALL] { "All Locations" }
                        @for city in &cities {
                            option value=(city) selected[location == city.as_str()] { (city) }
                        }
                    }

                    label class="sr-only" for="bedrooms" { "Bedrooms" }
                    select id="bedrooms" name="bedrooms" {
                        option value=(ALL) selected[bedrooms == ALL] { "Any Bedrooms" }
                        @for (value, label) in BEDROOM_OPTIONS {
                            option value=(value) selected[bedrooms == *value] { (label) }
                        }
                    }

                    noscript { button type="submit" class="btn btn-outline" { "Filter" } }
                }

                (listing_grid(&matches, criteria))

                div class="center" {
                    a class="btn btn-primary" href="/list-property" { "List Your Property" }
                }
            }
        }
    }
}
