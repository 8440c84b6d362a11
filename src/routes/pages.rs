// Handlers for the HTML pages.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::AppError,
    facets, filter,
    form::SearchForm,
    models::VehicleListing,
    pagination::{self, PAGE_SIZE},
};

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate;

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate;

#[derive(Template)]
#[template(path = "stock.html")]
struct StockTemplate {
    listings: Vec<VehicleListing>,
    makes: Vec<String>,
    models: Vec<String>,
    keyword: String,
    selected_make: String,
    selected_model: String,
    min_price: String,
    max_price: String,
    min_price_error: String,
    max_price_error: String,
    price_summary: String,
    total_matches: usize,
    current_page: usize,
    total_pages: usize,
    has_previous: bool,
    has_next: bool,
    previous_page: usize,
    next_page: usize,
}

// Raw search parameters as they arrive on the URL. Names match the form
// field names emitted by the stock page.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StockQuery {
    pub keyword: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub page: Option<usize>,
}

pub async fn landing_page() -> Result<impl IntoResponse, AppError> {
    let template = LandingTemplate {};
    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Failed to render landing template: {}", e);
            Err(AppError::InternalServerError(anyhow::Error::new(e)))
        }
    }
}

/// Fallback for unknown paths, rendered with a 404 status.
pub async fn not_found() -> Result<impl IntoResponse, AppError> {
    let template = NotFoundTemplate {};
    match template.render() {
        Ok(html) => Ok((StatusCode::NOT_FOUND, Html(html))),
        Err(e) => {
            tracing::error!("Failed to render not-found template: {}", e);
            Err(AppError::InternalServerError(anyhow::Error::new(e)))
        }
    }
}

pub async fn stock_vehicles(
    State(app_state): State<AppState>,
    Query(query): Query<StockQuery>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("GET /stock-vehicles with query: {:?}", query);

    // Run the raw query through the form controller so HTTP input is gated
    // by the same rules as interactive editing (malformed price entries are
    // dropped, a model without its make is cleared on the next make change).
    let mut form = SearchForm::new();
    form.set_keyword(query.keyword.as_deref().unwrap_or(""));
    form.select_make(query.make.as_deref().unwrap_or(""));
    form.select_model(query.model.as_deref().unwrap_or(""));
    form.edit_min_price(query.min_price.as_deref().unwrap_or(""));
    form.edit_max_price(query.max_price.as_deref().unwrap_or(""));
    let criteria = form.submit();

    let all = app_state.inventory.listings();
    let filtered = filter::apply(all, &criteria);
    let (visible, page_info) =
        pagination::window(&filtered, PAGE_SIZE, query.page.unwrap_or(1));

    tracing::info!(
        "Stock search: {} of {} listings match, page {} of {}",
        filtered.len(),
        all.len(),
        page_info.current_page,
        page_info.total_pages
    );

    let template = StockTemplate {
        listings: visible.to_vec(),
        makes: facets::available_makes(all),
        models: facets::available_models(all, form.selected_make()),
        keyword: form.keyword().to_string(),
        selected_make: form.selected_make().to_string(),
        selected_model: form.selected_model().to_string(),
        min_price: form.min_price().map(|p| p.to_string()).unwrap_or_default(),
        max_price: form.max_price().map(|p| p.to_string()).unwrap_or_default(),
        min_price_error: form.min_price_error().unwrap_or("").to_string(),
        max_price_error: form.max_price_error().unwrap_or("").to_string(),
        price_summary: form.price_summary(),
        total_matches: page_info.total_items,
        current_page: page_info.current_page,
        total_pages: page_info.total_pages,
        has_previous: page_info.has_previous(),
        has_next: page_info.has_next(),
        previous_page: page_info.current_page.saturating_sub(1).max(1),
        next_page: (page_info.current_page + 1).min(page_info.total_pages.max(1)),
    };

    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Failed to render stock template: {}", e);
            Err(AppError::InternalServerError(anyhow::Error::new(e)))
        }
    }
}
