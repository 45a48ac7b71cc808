use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{ShoppingListRequest, ShoppingListResponse},
    routes::AppState,
    services::shopping_list,
};

/// Handler comparing a recipe with the user's pantry
pub async fn create(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ShoppingListRequest>,
) -> AppResult<Json<ShoppingListResponse>> {
    tracing::info!(
        request_id = %request_id,
        recipe_count = request.recipe_ingredients.len(),
        pantry_count = request.pantry_ingredients.len() + request.pantry_ids.len(),
        "Processing shopping list request"
    );

    let response =
        shopping_list::build_shopping_list(&state.matcher(), request, &state.search_sites)?;

    tracing::info!(
        request_id = %request_id,
        missing_count = response.missing.len(),
        "Shopping list completed"
    );

    Ok(Json(response))
}
