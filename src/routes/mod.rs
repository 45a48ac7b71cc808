use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    middleware::{make_span_with_request_id, request_id_middleware},
    services::{IngredientMatcher, PlaceProvider, SearchArea, SynonymTable},
};

pub mod ingredients;
pub mod shopping_list;
pub mod supermarkets;

/// Shared application state, built once at startup
pub struct AppState {
    /// Synonym table used by every matching request
    pub synonyms: SynonymTable,
    pub places: Arc<dyn PlaceProvider>,
    pub search_area: SearchArea,
    /// Sites used for shopping search links
    pub search_sites: Vec<String>,
}

impl AppState {
    pub fn new(synonyms: SynonymTable, places: Arc<dyn PlaceProvider>, config: &Config) -> Self {
        Self {
            synonyms,
            places,
            search_area: SearchArea {
                radius_deg: config.supermarket_search_radius_deg,
                limit: config.supermarket_result_limit,
            },
            search_sites: config.supermarket_search_sites.clone(),
        }
    }

    pub fn matcher(&self) -> IngredientMatcher<'_> {
        IngredientMatcher::new(&self.synonyms)
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ingredients", get(ingredients::list))
        .route("/shopping-list", post(shopping_list::create))
        .route("/supermarkets/:chain", get(supermarkets::nearby))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
