// Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

mod api;
mod pages;

pub fn create_router(app_state: AppState) -> Router {
    // JSON API consumed by the search form script.
    let api_router = Router::new()
        .route("/makes", get(api::get_makes))
        .route("/models/:make", get(api::get_models))
        .route("/price-check", get(api::price_check))
        .route("/search", post(api::search_listings))
        .with_state(app_state.clone());

    Router::new()
        .route("/", get(pages::landing_page))
        .route("/stock-vehicles", get(pages::stock_vehicles))
        .nest("/api", api_router)
        .fallback(pages::not_found)
        .with_state(app_state)
}
