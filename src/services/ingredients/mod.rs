//! Ingredient matching engine
//!
//! Decides which recipe ingredients a user already has, tolerating quantity
//! prefixes, units, accents and culinary synonyms. Layered as
//! normalizer → equivalence → missing-set; callers normally only need
//! [`missing_ingredients`].
//!
//! Everything here is pure and synchronous. The synonym table is read-only
//! after construction and can be shared across threads.

pub mod equivalence;
pub mod missing;
pub mod normalizer;
pub mod synonyms;

pub use equivalence::{are_equivalent, IngredientMatcher, MatchRule};
pub use missing::missing_ingredients;
pub use normalizer::{normalize, IngredientText};
pub use synonyms::{SynonymTable, SynonymTableError};
