// templates/pages/home.rs

use crate::domain::filter::FilterCriteria;
use crate::domain::PropertyRecord;
use crate::templates::{desktop_layout, sections};
use maud::{html, Markup};

pub fn home_page(records: &[PropertyRecord], criteria: &FilterCriteria) -> Markup {
    desktop_layout(
        "Find Your Perfect Home",
        html! {
            (sections::hero())
            (sections::how_it_works())
            (sections::features())
            (sections::benefits())
            (sections::listings(records, criteria))
            (sections::cta())
            (sections::footer())
        },
    )
}
