//! Nominatim (OpenStreetMap) place search
//!
//! Uses the public `/search` endpoint with a bounded viewbox so results stay
//! near the user. Nominatim's usage policy requires an identifying
//! User-Agent, which is set on the HTTP client.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{NominatimPlace, Place},
    services::{geo::BoundingBox, providers::PlaceProvider},
};

#[derive(Clone)]
pub struct NominatimProvider {
    http_client: HttpClient,
    api_url: String,
}

impl NominatimProvider {
    /// Creates a provider for the Nominatim instance at `api_url`
    pub fn new(api_url: String, user_agent: &str) -> AppResult<Self> {
        let http_client = HttpClient::builder().user_agent(user_agent).build()?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_endpoint(&self) -> String {
        format!("{}/search", self.api_url)
    }

    fn query_params(query: &str, bbox: &BoundingBox, limit: usize) -> Vec<(&'static str, String)> {
        vec![
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
            ("limit", limit.to_string()),
            ("bounded", "1".to_string()),
            ("viewbox", bbox.to_viewbox()),
            ("q", query.to_string()),
        ]
    }

    /// Converts raw results, dropping entries with unreadable coordinates
    fn parse_places(raw: Vec<NominatimPlace>) -> Vec<Place> {
        raw.into_iter()
            .filter_map(|place| {
                let place_id = place.place_id;
                let converted = place.into_place();
                if converted.is_none() {
                    tracing::debug!(
                        place_id = ?place_id,
                        "Skipping Nominatim result with invalid coordinates"
                    );
                }
                converted
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl PlaceProvider for NominatimProvider {
    async fn search_places(
        &self,
        query: &str,
        bbox: &BoundingBox,
        limit: usize,
    ) -> AppResult<Vec<Place>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let response = self
            .http_client
            .get(self.search_endpoint())
            .query(&Self::query_params(query, bbox, limit))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Nominatim returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        let raw: Vec<NominatimPlace> = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize Nominatim response"
            );
            AppError::ExternalApi(format!("Failed to parse Nominatim response: {}", e))
        })?;

        let places = Self::parse_places(raw);

        tracing::info!(
            query = %query,
            results = places.len(),
            provider = self.name(),
            "Place search completed"
        );

        Ok(places)
    }

    fn name(&self) -> &'static str {
        "nominatim"
    }
}
