use reqwest::Url;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{AvailableIngredient, SearchLink, ShoppingListRequest, ShoppingListResponse},
    services::{catalog, ingredients::IngredientMatcher},
};

const SEARCH_ENGINE_URL: &str = "https://www.google.com/search";

/// Compares a recipe against the user's pantry
///
/// Catalog ids in the request are resolved to display names and added after
/// the free-text pantry entries. `missing` is exactly what the matcher's
/// missing-set returns; `available` lists the remaining recipe items with the
/// first pantry entry that covers each of them.
pub fn build_shopping_list(
    matcher: &IngredientMatcher<'_>,
    request: ShoppingListRequest,
    search_sites: &[String],
) -> AppResult<ShoppingListResponse> {
    let mut pantry = request.pantry_ingredients;
    pantry.extend(
        catalog::resolve(&request.pantry_ids, request.lang)?
            .into_iter()
            .map(Value::String),
    );

    let recipe = request.recipe_ingredients;
    let missing = matcher.missing_ingredients(&recipe, &pantry);

    let available: Vec<AvailableIngredient> = recipe
        .iter()
        .filter_map(|item| {
            matcher
                .find_equivalent(item, &pantry)
                .map(|(covered_by, rule)| AvailableIngredient {
                    ingredient: item.clone(),
                    covered_by: covered_by.clone(),
                    rule,
                })
        })
        .collect();

    let search_links = missing
        .iter()
        .filter_map(Value::as_str)
        .filter(|ingredient| !ingredient.trim().is_empty())
        .map(|ingredient| {
            Ok(SearchLink {
                ingredient: ingredient.to_string(),
                url: search_url(ingredient, search_sites)?,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    tracing::debug!(
        recipe = recipe.len(),
        pantry = pantry.len(),
        missing = missing.len(),
        available = available.len(),
        "Shopping list computed"
    );

    Ok(ShoppingListResponse {
        all_available: missing.is_empty(),
        missing,
        available,
        search_links,
    })
}

/// Web search URL for an ingredient, restricted to the given sites
///
/// `search_url("Arroz", ["lider.cl", "jumbo.cl"])` searches for
/// `Arroz site:lider.cl OR site:jumbo.cl`.
pub fn search_url(ingredient: &str, sites: &[String]) -> AppResult<String> {
    let site_filter = sites
        .iter()
        .map(|site| format!("site:{}", site.trim()))
        .collect::<Vec<_>>()
        .join(" OR ");

    let query = if site_filter.is_empty() {
        ingredient.trim().to_string()
    } else {
        format!("{} {}", ingredient.trim(), site_filter)
    };

    let url = Url::parse_with_params(SEARCH_ENGINE_URL, &[("q", query.as_str())])
        .map_err(|e| AppError::Internal(format!("Failed to build search URL: {}", e)))?;

    Ok(url.into())
}
