//! Place search provider abstraction
//!
//! Geocoding backends implement [`PlaceProvider`] so the supermarket search
//! does not depend on a specific service. Nominatim (OpenStreetMap) is the
//! only implementation today.

use crate::{error::AppResult, models::Place, services::geo::BoundingBox};

pub mod nominatim;

pub use nominatim::NominatimProvider;

/// Trait for place search providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PlaceProvider: Send + Sync {
    /// Search for places matching `query` inside `bbox`
    ///
    /// Returns at most `limit` places, in provider order. Entries whose
    /// coordinates cannot be read are skipped by the provider.
    async fn search_places(
        &self,
        query: &str,
        bbox: &BoundingBox,
        limit: usize,
    ) -> AppResult<Vec<Place>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
