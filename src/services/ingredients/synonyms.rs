use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use thiserror::Error;

use super::normalizer::normalize;

/// Interchangeable ingredient names shipped with the service.
///
/// Not every pair is listed in both directions (e.g. "pierna de pollo" only
/// appears under "pollo"), which is why lookups try both sides.
pub const REFERENCE_SYNONYMS: &[(&str, &[&str])] = &[
    ("carne de vacuno", &["carne de res", "filete de res", "bistec de res", "res"]),
    ("carne de res", &["carne de vacuno", "filete de res", "bistec de res", "res"]),
    ("filete de res", &["carne de vacuno", "carne de res", "bistec de res", "res"]),
    ("bistec de res", &["carne de vacuno", "carne de res", "filete de res", "res"]),
    ("res", &["carne de vacuno", "carne de res", "filete de res", "bistec de res"]),
    ("cerdo", &["lomo de cerdo", "costillas de cerdo", "chuleta de cerdo"]),
    ("lomo de cerdo", &["cerdo", "costillas de cerdo", "chuleta de cerdo"]),
    ("costillas de cerdo", &["cerdo", "lomo de cerdo", "chuleta de cerdo"]),
    ("pollo", &["pechuga de pollo", "trutro de pollo", "muslo de pollo", "pierna de pollo"]),
    ("pechuga de pollo", &["pollo", "trutro de pollo", "muslo de pollo"]),
    ("trutro de pollo", &["pollo", "pechuga de pollo", "muslo de pollo"]),
    ("huevo", &["huevos"]),
    ("huevos", &["huevo"]),
    ("tomate", &["tomates"]),
    ("tomates", &["tomate"]),
    ("cebolla", &["cebollas"]),
    ("cebollas", &["cebolla"]),
    ("ajo", &["ajos"]),
    ("ajos", &["ajo"]),
];

static REFERENCE_TABLE: LazyLock<SynonymTable> =
    LazyLock::new(|| SynonymTable::from_entries(REFERENCE_SYNONYMS.iter().copied()));

/// Errors raised while loading a synonym table from JSON
#[derive(Debug, Error)]
pub enum SynonymTableError {
    #[error("Failed to read synonym file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid synonym JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One alternative name, kept as typed (lower-cased, trimmed) and normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synonym {
    pub raw: String,
    pub normalized: String,
}

impl Synonym {
    fn new(name: &str) -> Self {
        Self {
            raw: name.to_lowercase().trim().to_string(),
            normalized: normalize(name),
        }
    }
}

/// Read-only mapping from an ingredient name to its interchangeable names
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<Synonym>>,
}

impl SynonymTable {
    /// Table without any entries; only normalization rules apply
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared instance of the built-in table
    pub fn reference() -> &'static SynonymTable {
        &REFERENCE_TABLE
    }

    /// Builds a table from `(name, alternatives)` pairs.
    /// A repeated name extends the alternatives of the first one.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a [&'a str])>) -> Self {
        let mut table = Self::empty();
        for (name, alternatives) in entries {
            table.insert(name, alternatives.iter().copied());
        }
        table
    }

    /// Parses a JSON object of the form `{"name": ["alt", ...]}`
    pub fn from_json(json: &str) -> Result<Self, SynonymTableError> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut table = Self::empty();
        for (name, alternatives) in &raw {
            table.insert(name, alternatives.iter().map(String::as_str));
        }
        Ok(table)
    }

    /// Reads and parses a JSON synonym file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SynonymTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SynonymTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_json(&json)?;

        tracing::info!(
            path = %path.display(),
            entries = table.len(),
            "Loaded synonym table"
        );

        Ok(table)
    }

    fn insert<'a>(&mut self, name: &str, alternatives: impl Iterator<Item = &'a str>) {
        let key = name.to_lowercase().trim().to_string();
        self.entries
            .entry(key)
            .or_default()
            .extend(alternatives.map(Synonym::new));
    }

    /// Alternatives registered under `name`. The key must already be
    /// lower-cased and trimmed.
    pub fn get(&self, name: &str) -> Option<&[Synonym]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// True if `name` lists `candidate` among its alternatives as typed
    pub fn lists_raw(&self, name: &str, candidate: &str) -> bool {
        self.get(name)
            .is_some_and(|synonyms| synonyms.iter().any(|s| s.raw == candidate))
    }

    /// True if `name` lists an alternative whose normalized form is `candidate`
    pub fn lists_normalized(&self, name: &str, candidate: &str) -> bool {
        self.get(name)
            .is_some_and(|synonyms| synonyms.iter().any(|s| s.normalized == candidate))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reference_table_contents() {
        let table = SynonymTable::reference();
        assert_eq!(table.len(), 19);
        assert!(table.lists_raw("res", "filete de res"));
        assert!(table.lists_raw("pollo", "pierna de pollo"));
        assert!(!table.lists_raw("pechuga de pollo", "pierna de pollo"));
        assert!(table.get("pierna de pollo").is_none());
    }

    #[test]
    fn test_values_are_normalized_once() {
        let table = SynonymTable::reference();
        let synonyms = table.get("carne de vacuno").unwrap();
        let normalized: Vec<&str> = synonyms.iter().map(|s| s.normalized.as_str()).collect();
        assert_eq!(normalized, vec!["carne res", "res", "res", "res"]);
        assert!(table.lists_normalized("cerdo", "cerdo"));
    }

    #[test]
    fn test_from_json_lowercases_and_trims() {
        let table = SynonymTable::from_json(r#"{" Palta ": ["  Aguacate", "PALTA HASS"]}"#).unwrap();
        assert!(table.lists_raw("palta", "aguacate"));
        assert!(table.lists_raw("palta", "palta hass"));
        assert!(table.get(" Palta ").is_none());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            SynonymTable::from_json(r#"{"palta": "aguacate"}"#),
            Err(SynonymTableError::Parse(_))
        ));
        assert!(SynonymTable::from_json("not json").is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"choclo": ["maiz", "elote"]}}"#).unwrap();

        let table = SynonymTable::from_path(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.lists_raw("choclo", "elote"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = SynonymTable::from_path("/definitely/not/here/synonyms.json");
        assert!(matches!(result, Err(SynonymTableError::Io { .. })));
    }

    #[test]
    fn test_empty_table() {
        let table = SynonymTable::empty();
        assert!(table.is_empty());
        assert!(!table.lists_raw("res", "carne de res"));
    }
}
