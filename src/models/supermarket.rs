use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt::Display, str::FromStr};

use crate::error::{AppError, AppResult};

/// Supermarket chains that can be located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SupermarketChain {
    Jumbo,
    Unimarc,
    SantaIsabel,
}

impl SupermarketChain {
    pub const ALL: [SupermarketChain; 3] = [
        SupermarketChain::Jumbo,
        SupermarketChain::Unimarc,
        SupermarketChain::SantaIsabel,
    ];

    /// Path segment identifying the chain
    pub fn slug(self) -> &'static str {
        match self {
            SupermarketChain::Jumbo => "jumbo",
            SupermarketChain::Unimarc => "unimarc",
            SupermarketChain::SantaIsabel => "santaisabel",
        }
    }

    /// Free-text query sent to the geocoder
    pub fn search_query(self) -> &'static str {
        match self {
            SupermarketChain::Jumbo => "Jumbo supermercado",
            SupermarketChain::Unimarc => "Unimarc supermercado",
            SupermarketChain::SantaIsabel => "Santa Isabel supermercado",
        }
    }
}

impl Display for SupermarketChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for SupermarketChain {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_lowercase();
        SupermarketChain::ALL
            .into_iter()
            .find(|chain| chain.slug() == slug)
            .ok_or_else(|| AppError::NotFound(format!("Unknown supermarket chain: {}", s)))
    }
}

/// A point on Earth in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Validated coordinates; latitude within ±90, longitude within ±180
    pub fn new(lat: f64, lon: f64) -> AppResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::InvalidInput(format!("Invalid latitude: {}", lat)));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(AppError::InvalidInput(format!("Invalid longitude: {}", lon)));
        }
        Ok(Self { lat, lon })
    }
}

/// Place returned by a geocoding provider
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: Option<String>,
    pub display_name: String,
    pub location: Coordinates,
}

/// Supermarket branch near the user, with its distance from the search origin
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Supermarket {
    pub name: Option<String>,
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
    pub distance_km: f64,
}

/// Response for a nearby supermarket search, closest first
#[derive(Debug, Serialize)]
pub struct NearbySupermarketsResponse {
    pub chain: SupermarketChain,
    pub results: Vec<Supermarket>,
}

// ============================================================================
// Nominatim API Types
// ============================================================================

/// Raw search result from Nominatim (`format=json`)
///
/// Coordinates are kept loose so one malformed entry does not fail the
/// whole result list.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    #[serde(default)]
    pub place_id: Option<u64>,
    #[serde(default)]
    pub lat: Option<Value>,
    #[serde(default)]
    pub lon: Option<Value>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Nominatim sends degrees as strings; plain numbers are accepted too
fn parse_degrees(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

impl NominatimPlace {
    /// Converts to a [`Place`]; `None` when the coordinates are missing or invalid
    pub fn into_place(self) -> Option<Place> {
        let lat = parse_degrees(self.lat.as_ref())?;
        let lon = parse_degrees(self.lon.as_ref())?;
        let location = Coordinates::new(lat, lon).ok()?;

        Some(Place {
            name: self.name.filter(|name| !name.trim().is_empty()),
            display_name: self.display_name,
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chain_from_str() {
        assert_eq!("jumbo".parse::<SupermarketChain>().unwrap(), SupermarketChain::Jumbo);
        assert_eq!(
            "SantaIsabel".parse::<SupermarketChain>().unwrap(),
            SupermarketChain::SantaIsabel
        );
        assert!(matches!(
            "lider".parse::<SupermarketChain>(),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_chain_search_query() {
        assert_eq!(SupermarketChain::Unimarc.search_query(), "Unimarc supermercado");
        assert_eq!(
            SupermarketChain::SantaIsabel.search_query(),
            "Santa Isabel supermercado"
        );
    }

    #[test]
    fn test_chain_serializes_as_slug() {
        let json = serde_json::to_string(&SupermarketChain::SantaIsabel).unwrap();
        assert_eq!(json, r#""santaisabel""#);
        assert_eq!(SupermarketChain::Jumbo.to_string(), "jumbo");
    }

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(-33.45, -70.66).is_ok());
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(matches!(
            Coordinates::new(91.0, 0.0),
            Err(AppError::InvalidInput(_))
        ));
        assert!(Coordinates::new(0.0, -180.5).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_nominatim_place_deserialization() {
        let json = r#"{
            "place_id": 12345,
            "lat": "-33.4172",
            "lon": "-70.6064",
            "display_name": "Jumbo, Avenida Kennedy, Las Condes, Chile",
            "name": "Jumbo",
            "type": "supermarket"
        }"#;

        let place: NominatimPlace = serde_json::from_str(json).unwrap();
        assert_eq!(place.place_id, Some(12345));

        let place = place.into_place().unwrap();
        assert_eq!(place.name, Some("Jumbo".to_string()));
        assert_eq!(place.location, Coordinates { lat: -33.4172, lon: -70.6064 });
    }

    #[test]
    fn test_nominatim_place_with_bad_coordinates() {
        let place = NominatimPlace {
            place_id: None,
            lat: Some(json!("not a number")),
            lon: Some(json!("-70.6")),
            display_name: "Somewhere".to_string(),
            name: Some("".to_string()),
        };
        assert_eq!(place.into_place(), None);
    }

    #[test]
    fn test_nominatim_place_missing_or_numeric_coordinates() {
        let raw: Vec<NominatimPlace> = serde_json::from_str(
            r#"[
                {"place_id": 1, "lat": "-33.41", "lon": "-70.60", "display_name": "Jumbo Kennedy"},
                {"place_id": 2, "lon": "-70.6", "display_name": "no lat"},
                {"place_id": 3, "lat": -33.43, "lon": -70.62, "display_name": "Unimarc Bilbao"},
                {"place_id": 4, "lat": null, "lon": "-70.6", "display_name": "null lat"}
            ]"#,
        )
        .unwrap();
        assert_eq!(raw.len(), 4);

        let places: Vec<Place> = raw.into_iter().filter_map(NominatimPlace::into_place).collect();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].display_name, "Jumbo Kennedy");
        assert_eq!(places[1].location, Coordinates { lat: -33.43, lon: -70.62 });
    }
}
