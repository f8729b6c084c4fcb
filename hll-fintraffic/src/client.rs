//! Async client for the Fintraffic parking API.
//!
//! One client serves one facility. All fetches pass through the
//! revalidation cache; there is no retry and no fallback, a failed or
//! malformed response propagates to the caller (and fails the render).

use futures::future::try_join_all;
use log::{debug, warn};
use reqwest::{Client, StatusCode};

use crate::cache::{ResponseCache, REVALIDATE_WINDOW};
use crate::error::FetchError;
use crate::prediction::{self, PredictionSeries};
use crate::utilization::UtilizationSnapshot;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://parking.fintraffic.fi/api/v1";

pub struct ParkingClient {
    http: Client,
    base_url: String,
    facility_id: u32,
    cache: ResponseCache,
}

impl ParkingClient {
    /// Create a client for one facility. `base_url` should not end with
    /// a slash.
    pub fn new(base_url: impl Into<String>, facility_id: u32) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            facility_id,
            cache: ResponseCache::new(REVALIDATE_WINDOW),
        }
    }

    pub fn facility_id(&self) -> u32 {
        self.facility_id
    }

    fn utilization_url(&self) -> String {
        format!(
            "{}/facilities/{}/utilization",
            self.base_url, self.facility_id
        )
    }

    fn prediction_url(&self, after: u32) -> String {
        format!(
            "{}/facilities/{}/prediction?after={}",
            self.base_url, self.facility_id, after
        )
    }

    /// Fetch a response body, honoring the revalidation window.
    async fn get_body(&self, url: &str) -> Result<String, FetchError> {
        if let Some(body) = self.cache.get(url).await {
            debug!("revalidation cache hit for {}", url);
            return Ok(body);
        }

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!("request failed for {}: {}", url, e);
            FetchError::Http {
                url: url.to_string(),
                source: e,
            }
        })?;

        if response.status() != StatusCode::OK {
            warn!("bad response status for {}: {}", url, response.status());
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            warn!("failed to read response body for {}: {}", url, e);
            FetchError::Http {
                url: url.to_string(),
                source: e,
            }
        })?;

        self.cache.put(url, body.clone()).await;
        Ok(body)
    }

    /// Fetch the current utilization snapshot.
    pub async fn utilization(&self) -> Result<UtilizationSnapshot, FetchError> {
        let url = self.utilization_url();
        let body = self.get_body(&url).await?;
        UtilizationSnapshot::from_json(&body, &url)
    }

    /// Fetch the predicted free-space count `after` minutes from now.
    pub async fn prediction(&self, after: u32) -> Result<u32, FetchError> {
        let url = self.prediction_url(after);
        let body = self.get_body(&url).await?;
        prediction::spaces_from_json(&body, &url)
    }

    /// Fetch a prediction for each offset, all requests in flight at once.
    /// The result keeps the positional order of `offsets`.
    pub async fn predictions(&self, offsets: &[u32]) -> Result<PredictionSeries, FetchError> {
        try_join_all(offsets.iter().map(|&after| self.prediction(after))).await
    }
}
