use std::time::Duration;

use serde::Deserialize;
use tokio::{sync::Mutex, time::Instant};
use tracing::debug;
use waypoint_routing::GeoPoint;

use crate::{
    error::ResolveError,
    location_resolver::{LocationQuery, LocationResolver},
};

pub const NOMINATIM_SEARCH_API_URL: &str = "https://nominatim.openstreetmap.org/search";

const NOMINATIM_URL_ENV_VAR: &str = "NOMINATIM_URL";
const NOMINATIM_USER_AGENT_ENV_VAR: &str = "NOMINATIM_USER_AGENT";
const NOMINATIM_MIN_INTERVAL_ENV_VAR: &str = "NOMINATIM_MIN_INTERVAL_MS";

#[derive(Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

#[derive(Debug, Clone)]
pub struct NominatimParams {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying user agent.
    pub user_agent: String,
    /// Minimum delay between two requests.
    pub min_interval: Duration,
    pub timeout: Duration,
}

impl Default for NominatimParams {
    fn default() -> Self {
        NominatimParams {
            base_url: NOMINATIM_SEARCH_API_URL.to_string(),
            user_agent: "waypoint".to_string(),
            min_interval: Duration::from_secs(1),
            timeout: Duration::from_secs(10),
        }
    }
}

impl NominatimParams {
    /// Defaults overridden by `NOMINATIM_URL`, `NOMINATIM_USER_AGENT` and
    /// `NOMINATIM_MIN_INTERVAL_MS` when they are set.
    pub fn from_env() -> Self {
        let defaults = NominatimParams::default();

        NominatimParams {
            base_url: std::env::var(NOMINATIM_URL_ENV_VAR).unwrap_or(defaults.base_url),
            user_agent: std::env::var(NOMINATIM_USER_AGENT_ENV_VAR)
                .unwrap_or(defaults.user_agent),
            min_interval: std::env::var(NOMINATIM_MIN_INTERVAL_ENV_VAR)
                .ok()
                .and_then(|value| value.parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.min_interval),
            timeout: defaults.timeout,
        }
    }
}

/// Geocoder backed by the OpenStreetMap Nominatim search API.
///
/// Requests are serialized and spaced by at least `min_interval`.
pub struct NominatimResolver {
    params: NominatimParams,
    client: reqwest::Client,
    last_request: Mutex<Option<Instant>>,
}

impl NominatimResolver {
    pub fn new(params: NominatimParams) -> Result<Self, ResolveError> {
        let client = reqwest::Client::builder()
            .user_agent(params.user_agent.clone())
            .timeout(params.timeout)
            .build()?;

        Ok(Self {
            params,
            client,
            last_request: Mutex::new(None),
        })
    }

    async fn throttle(&self) -> tokio::sync::MutexGuard<'_, Option<Instant>> {
        let mut last_request = self.last_request.lock().await;

        if let Some(last) = *last_request {
            let elapsed = last.elapsed();
            if elapsed < self.params.min_interval {
                tokio::time::sleep(self.params.min_interval - elapsed).await;
            }
        }

        *last_request = Some(Instant::now());
        last_request
    }

    async fn search(&self, text: &str) -> Result<Option<GeoPoint>, ResolveError> {
        // Holding the guard keeps concurrent lookups in line
        let _guard = self.throttle().await;

        debug!(text, "Nominatim: searching");

        let response = self
            .client
            .get(&self.params.base_url)
            .query(&[("q", text), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ResolveError::Api { status, message });
        }

        let body = response.text().await?;
        parse_search_response(&body)
    }
}

fn parse_search_response(body: &str) -> Result<Option<GeoPoint>, ResolveError> {
    let results: Vec<SearchResult> = serde_json::from_str(body)?;

    let Some(first) = results.first() else {
        return Ok(None);
    };

    let parse = |value: &str| {
        value
            .parse::<f64>()
            .map_err(|_| ResolveError::InvalidResponse(format!("invalid coordinate {value}")))
    };

    Ok(Some(GeoPoint::new(parse(&first.lat)?, parse(&first.lon)?)))
}

impl LocationResolver for NominatimResolver {
    async fn resolve(&self, query: &LocationQuery) -> Result<Option<GeoPoint>, ResolveError> {
        self.search(&query.search_text()).await
    }
}
