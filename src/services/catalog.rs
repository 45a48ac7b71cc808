use crate::{
    error::{AppError, AppResult},
    models::{CatalogItem, CategoryGroup, Language, PANTRY_CATALOG},
};

/// Searches the pantry catalog by display name, grouped by category
///
/// A blank query returns the whole catalog. Matching is a case-insensitive
/// substring test on the name in the requested language. Groups and the
/// entries inside them keep catalog order; empty groups are omitted.
pub fn search(query: &str, lang: Language) -> Vec<CategoryGroup> {
    let needle = query.trim().to_lowercase();
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for ingredient in PANTRY_CATALOG {
        let name = ingredient.name(lang);
        if !needle.is_empty() && !name.to_lowercase().contains(&needle) {
            continue;
        }

        let item = CatalogItem {
            id: ingredient.id,
            name: name.to_string(),
        };

        match groups.iter_mut().find(|g| g.category == ingredient.category) {
            Some(group) => group.ingredients.push(item),
            None => groups.push(CategoryGroup {
                category: ingredient.category,
                label: ingredient.category.label(lang).to_string(),
                ingredients: vec![item],
            }),
        }
    }

    groups
}

/// Resolves catalog ids to display names, keeping the order of `ids`
pub fn resolve(ids: &[u32], lang: Language) -> AppResult<Vec<String>> {
    ids.iter()
        .map(|id| {
            PANTRY_CATALOG
                .iter()
                .find(|ingredient| ingredient.id == *id)
                .map(|ingredient| ingredient.name(lang).to_string())
                .ok_or_else(|| AppError::InvalidInput(format!("Unknown ingredient id: {}", id)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_blank_query_returns_everything() {
        let groups = search("  ", Language::Es);
        let categories: Vec<Category> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec![Category::Vegetables, Category::Dairy, Category::Meats]
        );
        let total: usize = groups.iter().map(|g| g.ingredients.len()).sum();
        assert_eq!(total, 15);
        assert_eq!(groups[0].label, "Verduras");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let groups = search("LECH", Language::Es);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].ingredients[0].name, "Lechuga");
        assert_eq!(groups[1].ingredients[0].name, "Leche");
    }

    #[test]
    fn test_search_in_english() {
        let groups = search("ee", Language::En);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Dairy");
        assert_eq!(groups[0].ingredients[0].name, "Cheese");
        assert_eq!(groups[1].ingredients[0].name, "Beef");
    }

    #[test]
    fn test_search_without_matches() {
        assert!(search("quinoa", Language::Es).is_empty());
    }

    #[test]
    fn test_resolve_ids() {
        let names = resolve(&[13, 1], Language::Es).unwrap();
        assert_eq!(names, vec!["Cerdo", "Tomate"]);

        let names = resolve(&[15], Language::En).unwrap();
        assert_eq!(names, vec!["Eggs"]);
    }

    #[test]
    fn test_resolve_unknown_id() {
        let result = resolve(&[1, 99], Language::Es);
        assert!(matches!(result, Err(AppError::InvalidInput(msg)) if msg.contains("99")));
    }
}
