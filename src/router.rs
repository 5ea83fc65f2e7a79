use crate::config::ListingSource;
use crate::db::properties;
use crate::db::Database;
use crate::domain::filter::filter_properties;
use crate::domain::{fixtures, FieldErrors, PropertyDetail, PropertyForm, PropertyRecord, SignupForm};
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::responses::{css_response, html_response, json_response, ResultResp};
use crate::submissions::{self, Outcome, Toast};
use crate::templates::components::listing_grid;
use crate::templates::pages;
use astra::Request;
use maud::Markup;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Everything a request handler needs.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub listing_source: ListingSource,
}

impl AppState {
    pub fn new(db: Database, listing_source: ListingSource) -> Self {
        Self { db, listing_source }
    }

    fn listings(&self) -> Result<Vec<PropertyRecord>, ServerError> {
        match self.listing_source {
            ListingSource::Fixture => Ok(fixtures::sample_properties()),
            ListingSource::Database => properties::list_properties(&self.db),
        }
    }

    fn detail(&self, id: i64) -> Result<Option<PropertyDetail>, ServerError> {
        match self.listing_source {
            ListingSource::Fixture => Ok(fixtures::sample_detail(id)),
            ListingSource::Database => properties::find_property(&self.db, id),
        }
    }
}

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    tracing::debug!(%method, %path, "dispatch");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let criteria = FormData::from_query(&req).filter_criteria();
            html_response(pages::home_page(&app.listings()?, &criteria))
        }
        ("GET", "/listings") => {
            let criteria = FormData::from_query(&req).filter_criteria();
            let records = app.listings()?;
            html_response(listing_grid(&filter_properties(&records, &criteria), &criteria))
        }
        ("GET", "/api/listings") => {
            let criteria = FormData::from_query(&req).filter_criteria();
            let records = app.listings()?;
            json_response(&filter_properties(&records, &criteria))
        }
        ("GET", "/signup") => html_response(pages::signup_page(&SignupForm::default(), None, None)),
        ("POST", "/signup") => post_signup(req, app),
        ("GET", "/list-property") => {
            html_response(pages::list_property_page(&PropertyForm::default(), None, None))
        }
        ("POST", "/properties") => post_property(req, app),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        ("GET", p) if p.starts_with("/properties/") => {
            let id: i64 = p["/properties/".len()..]
                .parse()
                .map_err(|_| ServerError::NotFound)?;
            let detail = app.detail(id)?.ok_or(ServerError::NotFound)?;
            html_response(pages::property_detail_page(&detail))
        }
        _ => Err(ServerError::NotFound),
    }
}

/// htmx sets `HX-Request` on its own requests; those only want the fragment.
fn is_htmx(req: &Request) -> bool {
    req.headers().get("HX-Request").is_some()
}

fn post_signup(req: Request, app: &AppState) -> ResultResp {
    let partial = is_htmx(&req);
    let form = SignupForm::from_input(&FormData::from_body(req)?);

    let markup = match submissions::submit_signup(&app.db, &form) {
        // Success clears the form; anything else hands the typed values back.
        Outcome::Stored { toast, .. } => render_signup(partial, &SignupForm::default(), None, Some(&toast)),
        Outcome::Invalid(errors) => render_signup(partial, &form, Some(&errors), None),
        Outcome::Failed(toast) => render_signup(partial, &form, None, Some(&toast)),
    };
    html_response(markup)
}

fn render_signup(
    partial: bool,
    form: &SignupForm,
    errors: Option<&FieldErrors>,
    toast: Option<&Toast>,
) -> Markup {
    if partial {
        pages::signup_fragment(form, errors, toast)
    } else {
        pages::signup_page(form, errors, toast)
    }
}

fn post_property(req: Request, app: &AppState) -> ResultResp {
    let partial = is_htmx(&req);
    let form = PropertyForm::from_input(&FormData::from_body(req)?);

    let markup = match submissions::submit_property(&app.db, &form) {
        Outcome::Stored { toast, .. } => render_listing(partial, &PropertyForm::default(), None, Some(&toast)),
        Outcome::Invalid(errors) => render_listing(partial, &form, Some(&errors), None),
        Outcome::Failed(toast) => render_listing(partial, &form, None, Some(&toast)),
    };
    html_response(markup)
}

fn render_listing(
    partial: bool,
    form: &PropertyForm,
    errors: Option<&FieldErrors>,
    toast: Option<&Toast>,
) -> Markup {
    if partial {
        pages::list_property_fragment(form, errors, toast)
    } else {
        pages::list_property_page(form, errors, toast)
    }
}
