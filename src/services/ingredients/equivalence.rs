use serde::Serialize;

use super::normalizer::{normalize, IngredientText};
use super::synonyms::SynonymTable;

/// Which rule decided that two ingredient phrases are the same pantry item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Normalized forms are identical
    Exact,
    /// One normalized form contains the other ("cerdo" / "cerdo molido")
    Containment,
    /// Linked through the synonym table
    Synonym,
}

/// Ingredient matching against a synonym table
#[derive(Debug, Clone, Copy)]
pub struct IngredientMatcher<'a> {
    synonyms: &'a SynonymTable,
}

impl Default for IngredientMatcher<'static> {
    fn default() -> Self {
        Self::new(SynonymTable::reference())
    }
}

impl<'a> IngredientMatcher<'a> {
    pub fn new(synonyms: &'a SynonymTable) -> Self {
        Self { synonyms }
    }

    /// Decides whether the user's pantry item and the recipe item denote
    /// the same ingredient, and by which rule.
    ///
    /// Phrases that normalize to nothing never match, not even each other.
    pub fn match_rule<U, R>(&self, user: &U, recipe: &R) -> Option<MatchRule>
    where
        U: IngredientText + ?Sized,
        R: IngredientText + ?Sized,
    {
        let user_normalized = normalize(user);
        let recipe_normalized = normalize(recipe);

        if user_normalized.is_empty() || recipe_normalized.is_empty() {
            return None;
        }

        if user_normalized == recipe_normalized {
            return Some(MatchRule::Exact);
        }

        if user_normalized.contains(&recipe_normalized)
            || recipe_normalized.contains(&user_normalized)
        {
            return Some(MatchRule::Containment);
        }

        // Both have text here, otherwise normalization would have been empty
        let user_raw = user.as_text().unwrap_or_default().to_lowercase();
        let recipe_raw = recipe.as_text().unwrap_or_default().to_lowercase();

        if self.synonyms_link(
            user_raw.trim(),
            recipe_raw.trim(),
            &user_normalized,
            &recipe_normalized,
        ) {
            tracing::trace!(
                user = %user_raw.trim(),
                recipe = %recipe_raw.trim(),
                "Matched through synonym table"
            );
            return Some(MatchRule::Synonym);
        }

        None
    }

    /// Synonym lookups, tried with the phrases as typed and then with their
    /// normalized forms as keys, in both directions.
    fn synonyms_link(
        &self,
        user_raw: &str,
        recipe_raw: &str,
        user_normalized: &str,
        recipe_normalized: &str,
    ) -> bool {
        let table = self.synonyms;

        table.lists_raw(user_raw, recipe_raw)
            || table.lists_normalized(user_raw, recipe_normalized)
            || table.lists_raw(recipe_raw, user_raw)
            || table.lists_normalized(recipe_raw, user_normalized)
            || table.lists_normalized(user_normalized, recipe_normalized)
            || table.lists_normalized(recipe_normalized, user_normalized)
    }

    /// True if both phrases denote the same pantry item
    pub fn are_equivalent<U, R>(&self, user: &U, recipe: &R) -> bool
    where
        U: IngredientText + ?Sized,
        R: IngredientText + ?Sized,
    {
        self.match_rule(user, recipe).is_some()
    }

    /// First pantry item equivalent to the recipe item, with the rule that matched
    pub fn find_equivalent<'p, R, P>(
        &self,
        recipe_item: &R,
        pantry: &'p [P],
    ) -> Option<(&'p P, MatchRule)>
    where
        R: IngredientText + ?Sized,
        P: IngredientText,
    {
        pantry
            .iter()
            .find_map(|item| self.match_rule(item, recipe_item).map(|rule| (item, rule)))
    }
}

/// True if both phrases denote the same pantry item, using the built-in synonyms
pub fn are_equivalent<U, R>(user: &U, recipe: &R) -> bool
where
    U: IngredientText + ?Sized,
    R: IngredientText + ?Sized,
{
    IngredientMatcher::default().are_equivalent(user, recipe)
}
