//! Nominatim Client
//!
//! HTTP client for the public Nominatim API (`/search` and `/reverse`),
//! restricted to the configured countries and identified by `User-Agent`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{GeoError, Result};
use crate::geocode::fallback::{DEFAULT_CITY, DEFAULT_COUNTRY, DEFAULT_PROVINCE};
use crate::geocode::provider::GeocodingProvider;
use crate::geocode::types::{GeocodeResult, ReverseGeocodeResult};

// == Upstream Payloads ==
/// Nominatim sends coordinates as strings; accept plain numbers too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Text(String),
    Number(f64),
}

impl Coordinate {
    fn value(&self, name: &str) -> Result<f64> {
        let value = match self {
            Coordinate::Number(n) => *n,
            Coordinate::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| GeoError::Parse(format!("Invalid {} in upstream result: '{}'", name, s)))?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GeoError::Parse(format!("Non-finite {} in upstream result", name)))
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: Coordinate,
    lon: Coordinate,
    #[serde(default)]
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct ReversePayload {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    address: Option<AddressDetails>,
}

/// The `address` object of a Nominatim reverse response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressDetails {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub neighbourhood: Option<String>,
    pub suburb: Option<String>,
    pub quarter: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub municipality: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// First non-blank candidate, in order.
fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .filter_map(Option::as_deref)
        .map(str::trim)
        .find(|v| !v.is_empty())
}

// == Mapping ==
/// Maps a Nominatim address onto the normalized reverse result.
pub fn map_address(details: &AddressDetails, display_name: &str) -> ReverseGeocodeResult {
    let road = first_present(&[&details.road]);
    let house_number = first_present(&[&details.house_number]);

    let street_address = match (road, house_number) {
        (Some(road), Some(number)) => format!("{} {}", road, number),
        (Some(road), None) => road.to_string(),
        _ => String::new(),
    };

    let neighborhood = first_present(&[&details.neighbourhood, &details.suburb, &details.quarter])
        .unwrap_or_default()
        .to_string();

    let city = first_present(&[
        &details.city,
        &details.town,
        &details.village,
        &details.municipality,
    ])
    .unwrap_or(DEFAULT_CITY)
    .to_string();

    let formatted_address = [
        house_number,
        road,
        first_present(&[&details.neighbourhood, &details.suburb]),
        first_present(&[&details.city, &details.town]),
        first_present(&[&details.state]),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ");

    ReverseGeocodeResult {
        street_address,
        neighborhood,
        city,
        province: first_present(&[&details.state])
            .unwrap_or(DEFAULT_PROVINCE)
            .to_string(),
        country: first_present(&[&details.country])
            .unwrap_or(DEFAULT_COUNTRY)
            .to_string(),
        display_name: display_name.to_string(),
        formatted_address,
    }
}

fn first_hit(hits: Vec<SearchHit>) -> Result<Option<GeocodeResult>> {
    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };

    Ok(Some(GeocodeResult {
        latitude: hit.lat.value("lat")?,
        longitude: hit.lon.value("lon")?,
        display_name: hit.display_name,
    }))
}

fn reverse_result(payload: ReversePayload) -> Option<ReverseGeocodeResult> {
    let details = payload.address?;
    let display_name = payload.display_name.unwrap_or_default();
    Some(map_address(&details, &display_name))
}

// == Client ==
/// Nominatim-backed `GeocodingProvider`.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
    country_codes: String,
}

impl NominatimClient {
    /// Builds a client sending `user_agent` on every request.
    ///
    /// No timeout is applied unless one is given.
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        country_codes: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GeoError::Upstream(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            country_codes: country_codes.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.upstream_base_url.clone(),
            &config.user_agent,
            config.country_codes.clone(),
            config.upstream_timeout_secs.map(Duration::from_secs),
        )
    }

    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("Upstream request: GET {}", url);

        let resp = self.client.get(&url).query(params).send().await?;

        if !resp.status().is_success() {
            return Err(GeoError::Upstream(format!(
                "Geocoding service returned status {}",
                resp.status().as_u16()
            )));
        }
        Ok(resp)
    }
}

#[async_trait]
impl GeocodingProvider for NominatimClient {
    async fn search(&self, address: &str) -> Result<Option<GeocodeResult>> {
        let params = [
            ("format", "json".to_string()),
            ("q", address.to_string()),
            ("countrycodes", self.country_codes.clone()),
            ("limit", "1".to_string()),
            ("addressdetails", "1".to_string()),
        ];
        let hits: Vec<SearchHit> = self.get("search", &params).await?.json().await?;
        first_hit(hits)
    }

    async fn reverse(&self, lat: f64, lng: f64) -> Result<Option<ReverseGeocodeResult>> {
        let params = [
            ("format", "json".to_string()),
            ("lat", lat.to_string()),
            ("lon", lng.to_string()),
            ("countrycodes", self.country_codes.clone()),
            ("addressdetails", "1".to_string()),
        ];
        let payload: ReversePayload = self.get("reverse", &params).await?.json().await?;
        Ok(reverse_result(payload))
    }
}
