use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::{
    models::{CategoryGroup, Language},
    services::catalog,
};

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    lang: Language,
}

/// Handler for the pantry catalog, optionally filtered by name
pub async fn list(Query(params): Query<CatalogQuery>) -> Json<Vec<CategoryGroup>> {
    Json(catalog::search(&params.q, params.lang))
}
