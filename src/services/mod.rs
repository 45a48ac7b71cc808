pub mod catalog;
pub mod geo;
pub mod ingredients;
pub mod providers;
pub mod shopping_list;
pub mod supermarkets;

pub use ingredients::{missing_ingredients, IngredientMatcher, SynonymTable};
pub use providers::{NominatimProvider, PlaceProvider};
pub use supermarkets::SearchArea;
