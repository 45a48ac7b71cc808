use super::equivalence::IngredientMatcher;
use super::normalizer::IngredientText;

impl IngredientMatcher<'_> {
    /// Recipe items with no equivalent in the pantry, in recipe order.
    ///
    /// Duplicates are judged one by one. An empty pantry returns the recipe
    /// list unchanged.
    pub fn missing_ingredients<R, P>(&self, recipe: &[R], pantry: &[P]) -> Vec<R>
    where
        R: IngredientText + Clone,
        P: IngredientText,
    {
        if recipe.is_empty() {
            return Vec::new();
        }

        if pantry.is_empty() {
            return recipe.to_vec();
        }

        recipe
            .iter()
            .filter(|item| self.find_equivalent(*item, pantry).is_none())
            .cloned()
            .collect()
    }
}

/// Recipe items the user still has to buy, matched with the built-in synonyms
pub fn missing_ingredients<R, P>(recipe: &[R], pantry: &[P]) -> Vec<R>
where
    R: IngredientText + Clone,
    P: IngredientText,
{
    IngredientMatcher::default().missing_ingredients(recipe, pantry)
}
