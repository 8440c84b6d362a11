// Handlers for the JSON API behind the search form: facet dropdowns,
// price-range validation, and the search endpoint itself.

use axum::{
    extract::{Json as JsonExtract, Path, Query, State},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    error::AppError,
    facets, filter,
    form::validate_price_bounds,
    models::{FilterCriteria, VehicleListing},
    pagination::{self, PAGE_SIZE},
};

// --- Request / Response Structs ---

#[derive(Debug, Deserialize)]
pub struct PriceCheckQuery {
    min: Option<f64>,
    max: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PriceCheckResponse {
    valid: bool,
    min_error: Option<&'static str>,
    max_error: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(flatten)]
    criteria: FilterCriteria,
    page: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    success: bool,
    total_matches: usize,
    total_pages: usize,
    page: usize,
    listings: Vec<VehicleListing>,
}

// --- API Handlers ---

pub async fn get_makes(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let makes = facets::available_makes(app_state.inventory.listings());
    tracing::debug!("/api/makes - returning {} makes", makes.len());
    Ok(Json(makes))
}

pub async fn get_models(
    State(app_state): State<AppState>,
    Path(make): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let models = facets::available_models(app_state.inventory.listings(), &make);
    tracing::debug!("/api/models/{} - returning {} models", make, models.len());
    Ok(Json(models))
}

/// Inline validation for the price popup. Mirrors the controller's
/// cross-field check so the client and server can never disagree.
pub async fn price_check(
    Query(query): Query<PriceCheckQuery>,
) -> Result<impl IntoResponse, AppError> {
    let check = validate_price_bounds(query.min, query.max);
    Ok(Json(PriceCheckResponse {
        valid: check.is_valid(),
        min_error: check.min_error,
        max_error: check.max_error,
    }))
}

pub async fn search_listings(
    State(app_state): State<AppState>,
    JsonExtract(request): JsonExtract<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("/api/search with criteria: {:?}", request.criteria);

    let filtered = filter::apply(app_state.inventory.listings(), &request.criteria);
    let (visible, page_info) =
        pagination::window(&filtered, PAGE_SIZE, request.page.unwrap_or(1));

    // An empty result set is a normal outcome, not a failure.
    Ok(Json(SearchResponse {
        success: true,
        total_matches: page_info.total_items,
        total_pages: page_info.total_pages,
        page: page_info.current_page,
        listings: visible.to_vec(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::{AppState, config::Settings, inventory::Inventory, routes::create_router};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            settings: Arc::new(Settings {
                server_address: "127.0.0.1:0".to_string(),
                inventory_path: None,
            }),
            inventory: Arc::new(Inventory::load_bundled().unwrap()),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn makes_endpoint_returns_sorted_distinct_makes() {
        let app = create_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/api/makes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let makes = body_json(response).await;
        let makes = makes.as_array().unwrap();
        assert_eq!(makes.first().unwrap(), "Audi");
        let names: Vec<&str> = makes.iter().map(|v| v.as_str().unwrap()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn models_endpoint_is_scoped_to_the_make() {
        let app = create_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/models/Audi")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!(["A3", "A4"]));
    }

    #[tokio::test]
    async fn price_check_flags_inverted_bounds() {
        let app = create_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/price-check?min=5000&max=3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["valid"], json!(false));
        assert!(body["minError"].is_string());
        assert!(body["maxError"].is_string());
    }

    #[tokio::test]
    async fn search_endpoint_filters_and_paginates() {
        let app = create_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/search")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({"make": "Audi", "model": "A3"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["totalMatches"], json!(2));
        assert_eq!(body["totalPages"], json!(1));
        for listing in body["listings"].as_array().unwrap() {
            assert_eq!(listing["make"], json!("Audi"));
            assert_eq!(listing["model"], json!("A3"));
        }
    }

    #[tokio::test]
    async fn diesel_keyword_search_over_fourteen_listings() {
        // End to end over a 14-listing dataset: only diesel-fuelled listings
        // match, and they fit on a single 12-per-page window.
        let listings = Inventory::load_bundled().unwrap().listings()[..14].to_vec();
        let expected = listings.iter().filter(|l| l.fuel_type == "Diesel").count();
        assert!(expected > 0);

        let state = AppState {
            settings: Arc::new(Settings {
                server_address: "127.0.0.1:0".to_string(),
                inventory_path: None,
            }),
            inventory: Arc::new(Inventory::from_listings(listings)),
        };
        let app = create_router(state);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/search")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({"keyword": "diesel"}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["totalMatches"], json!(expected));
        assert_eq!(body["totalPages"], json!(1));
        assert_eq!(body["page"], json!(1));
        assert_eq!(
            body["listings"].as_array().unwrap().len(),
            expected.min(12)
        );
    }

    #[tokio::test]
    async fn stock_page_renders_with_filters_applied() {
        let app = create_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/stock-vehicles?keyword=diesel&page=99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Browse"));
        assert!(html.contains("Diesel"));
        // Out-of-range page requests are clamped, not errored.
        assert!(!html.contains("No vehicles found"));
    }
}
