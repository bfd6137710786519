//! Places API client

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{BusinessError, Result};
use crate::model::PlaceDetails;

const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place/details/json";

/// Fields requested from the details endpoint
const FIELDS: &str = "name,rating,user_ratings_total,reviews,opening_hours,\
                      formatted_address,formatted_phone_number,website";

/// Mockable place-details lookup trait
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Fetch details for a place; `None` when the listing does not exist
    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>>;
}

/// Production client for the Google Places details API
pub struct GooglePlacesClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    result: Option<PlaceDetails>,
    error_message: Option<String>,
}

impl GooglePlacesClient {
    /// Create a client with the given API key
    pub fn new(api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| BusinessError::BuildError(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Override the details endpoint (tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>> {
        debug!("Fetching place details for {}", place_id);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("place_id", place_id),
                ("fields", FIELDS),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BusinessError::HttpStatus {
                status,
                message: response.text().await.unwrap_or_default(),
            });
        }

        let details: DetailsResponse = response.json().await?;
        match details.status.as_str() {
            "OK" => Ok(details.result),
            "ZERO_RESULTS" | "NOT_FOUND" => Ok(None),
            other => Err(BusinessError::Upstream {
                status: other.to_string(),
                message: details.error_message.unwrap_or_default(),
            }),
        }
    }
}
