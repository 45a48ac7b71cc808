use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{Coordinates, NearbySupermarketsResponse, SupermarketChain},
    routes::AppState,
    services::supermarkets,
};

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    lat: f64,
    lon: f64,
}

/// Handler for nearby branches of a supermarket chain
pub async fn nearby(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(chain): Path<String>,
    Query(params): Query<NearbyQuery>,
) -> AppResult<Json<NearbySupermarketsResponse>> {
    let chain: SupermarketChain = chain.parse()?;
    let origin = Coordinates::new(params.lat, params.lon)?;

    tracing::info!(
        request_id = %request_id,
        chain = %chain,
        lat = origin.lat,
        lon = origin.lon,
        "Processing supermarket search"
    );

    let results =
        supermarkets::find_nearby(state.places.clone(), chain, origin, state.search_area).await?;

    Ok(Json(NearbySupermarketsResponse { chain, results }))
}
