use std::sync::Arc;
use std::time::Instant;

use crate::{
    error::AppResult,
    models::{Coordinates, Supermarket, SupermarketChain},
    services::{
        geo::{haversine_km, BoundingBox},
        providers::PlaceProvider,
    },
};

/// Search area settings for nearby supermarket lookups
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    /// Half-size of the search box, in degrees
    pub radius_deg: f64,
    /// Maximum places requested from the provider
    pub limit: usize,
}

impl Default for SearchArea {
    fn default() -> Self {
        Self {
            radius_deg: 0.1,
            limit: 10,
        }
    }
}

/// Finds branches of a supermarket chain around `origin`, closest first
pub async fn find_nearby(
    provider: Arc<dyn PlaceProvider>,
    chain: SupermarketChain,
    origin: Coordinates,
    area: SearchArea,
) -> AppResult<Vec<Supermarket>> {
    let start = Instant::now();
    let bbox = BoundingBox::around(origin, area.radius_deg);

    let places = provider
        .search_places(chain.search_query(), &bbox, area.limit)
        .await?;

    let mut supermarkets: Vec<Supermarket> = places
        .into_iter()
        .map(|place| Supermarket {
            distance_km: haversine_km(origin, place.location),
            name: place.name,
            display_name: place.display_name,
            lat: place.location.lat,
            lon: place.location.lon,
        })
        .collect();

    supermarkets.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    tracing::info!(
        chain = %chain,
        provider = provider.name(),
        results = supermarkets.len(),
        processing_time_ms = start.elapsed().as_millis(),
        "Nearby supermarket search completed"
    );

    Ok(supermarkets)
}
