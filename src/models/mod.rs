use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::ingredients::MatchRule;

pub mod catalog;
pub mod supermarket;

pub use catalog::{CatalogIngredient, CatalogItem, Category, CategoryGroup, Language, PANTRY_CATALOG};
pub use supermarket::{
    Coordinates, NearbySupermarketsResponse, NominatimPlace, Place, Supermarket, SupermarketChain,
};

/// Request to compare a recipe against the user's pantry
///
/// Ingredient lists are taken as raw JSON values: entries that are not
/// strings are kept, but can never be matched.
#[derive(Debug, Deserialize)]
pub struct ShoppingListRequest {
    pub recipe_ingredients: Vec<Value>,
    #[serde(default)]
    pub pantry_ingredients: Vec<Value>,
    /// Catalog ids, resolved to display names in `lang`
    #[serde(default)]
    pub pantry_ids: Vec<u32>,
    #[serde(default)]
    pub lang: Language,
}

/// What the user still has to buy for a recipe
#[derive(Debug, Serialize)]
pub struct ShoppingListResponse {
    /// Recipe ingredients with no pantry equivalent, in recipe order
    pub missing: Vec<Value>,
    pub available: Vec<AvailableIngredient>,
    pub all_available: bool,
    pub search_links: Vec<SearchLink>,
}

/// Recipe ingredient already covered by the pantry
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AvailableIngredient {
    pub ingredient: Value,
    pub covered_by: Value,
    pub rule: MatchRule,
}

/// Web search for a missing ingredient restricted to supermarket sites
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchLink {
    pub ingredient: String,
    pub url: String,
}
