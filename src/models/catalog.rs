use serde::{Deserialize, Serialize};

/// Display language for catalog names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

/// Aisle grouping used by the pantry picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vegetables,
    Dairy,
    Meats,
}

impl Category {
    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Category::Vegetables, Language::Es) => "Verduras",
            (Category::Vegetables, Language::En) => "Vegetables",
            (Category::Dairy, Language::Es) => "Lácteos",
            (Category::Dairy, Language::En) => "Dairy",
            (Category::Meats, Language::Es) => "Carnes",
            (Category::Meats, Language::En) => "Meats",
        }
    }
}

/// Fixed pantry ingredient the user can pick by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogIngredient {
    pub id: u32,
    pub name_es: &'static str,
    pub name_en: &'static str,
    pub category: Category,
}

impl CatalogIngredient {
    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::Es => self.name_es,
            Language::En => self.name_en,
        }
    }
}

const fn entry(id: u32, name_es: &'static str, name_en: &'static str, category: Category) -> CatalogIngredient {
    CatalogIngredient {
        id,
        name_es,
        name_en,
        category,
    }
}

/// Built-in pantry catalog, in display order
pub const PANTRY_CATALOG: &[CatalogIngredient] = &[
    entry(1, "Tomate", "Tomato", Category::Vegetables),
    entry(2, "Cebolla", "Onion", Category::Vegetables),
    entry(3, "Ajo", "Garlic", Category::Vegetables),
    entry(4, "Pimiento", "Bell pepper", Category::Vegetables),
    entry(5, "Zanahoria", "Carrot", Category::Vegetables),
    entry(6, "Lechuga", "Lettuce", Category::Vegetables),
    entry(7, "Leche", "Milk", Category::Dairy),
    entry(8, "Queso", "Cheese", Category::Dairy),
    entry(9, "Mantequilla", "Butter", Category::Dairy),
    entry(10, "Yogur", "Yogurt", Category::Dairy),
    entry(11, "Pollo", "Chicken", Category::Meats),
    entry(12, "Carne de res", "Beef", Category::Meats),
    entry(13, "Cerdo", "Pork", Category::Meats),
    entry(14, "Pescado", "Fish", Category::Meats),
    entry(15, "Huevos", "Eggs", Category::Meats),
];

/// Catalog entry as returned to the client
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
}

/// Catalog entries sharing a category
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub label: String,
    pub ingredients: Vec<CatalogItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = PANTRY_CATALOG.iter().map(|i| i.id).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<u32>>());
    }

    #[test]
    fn test_localized_names() {
        let beef = PANTRY_CATALOG[11];
        assert_eq!(beef.name(Language::Es), "Carne de res");
        assert_eq!(beef.name(Language::En), "Beef");
        assert_eq!(Category::Dairy.label(Language::Es), "Lácteos");
    }

    #[test]
    fn test_language_serde() {
        let lang: Language = serde_json::from_str(r#""en""#).unwrap();
        assert_eq!(lang, Language::En);
        assert_eq!(Language::default(), Language::Es);
        assert!(serde_json::from_str::<Language>(r#""fr""#).is_err());
    }
}
