use async_trait::async_trait;
use serde::Deserialize;

use super::geocoder::{is_valid_coordinates, GeocodedLocation, Geocoder};
use crate::core::config::GeocodingConfig;
use crate::core::error::{AppError, Result};

const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Nominatim search result
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

/// Nominatim reverse result
#[derive(Debug, Deserialize)]
struct NominatimReverse {
    address: Option<NominatimAddress>,
}

/// Nominatim address components
#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    road: Option<String>,
    pedestrian: Option<String>,
    suburb: Option<String>,
    neighbourhood: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    state_district: Option<String>,
    postcode: Option<String>,
    country: Option<String>,
}

impl NominatimAddress {
    /// Get city, falling back to town or village
    fn get_city(&self) -> Option<&String> {
        self.city
            .as_ref()
            .or(self.town.as_ref())
            .or(self.village.as_ref())
    }

    /// "road, suburb, city, state, postcode, country" with missing parts skipped
    fn format(&self) -> String {
        let parts: Vec<&str> = [
            self.road.as_ref().or(self.pedestrian.as_ref()),
            self.suburb.as_ref().or(self.neighbourhood.as_ref()),
            self.get_city(),
            self.state.as_ref().or(self.state_district.as_ref()),
            self.postcode.as_ref(),
            self.country.as_ref(),
        ]
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

        if parts.is_empty() {
            UNKNOWN_LOCATION.to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Geocoder backed by the Nominatim HTTP API
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
    region_hint: String,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocodingConfig) -> std::result::Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            region_hint: config.region_hint.clone(),
        })
    }

    fn search_url(&self, area_name: &str) -> String {
        format!(
            "{}/search?format=json&limit=1&q={}",
            self.base_url,
            urlencoding::encode(&with_region_hint(area_name, &self.region_hint))
        )
    }

    fn reverse_url(&self, lat: f64, lng: f64) -> String {
        format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom=18&addressdetails=1&accept-language=en",
            self.base_url, lat, lng
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!("Nominatim request failed: {:?}", e);
            AppError::ExternalServiceError(format!("Nominatim request failed: {}", e))
        })?;

        if !response.status().is_success() {
            tracing::warn!("Nominatim returned status: {}", response.status());
            return Ok(None);
        }

        let body = response.json::<T>().await.map_err(|e| {
            tracing::warn!("Failed to parse Nominatim response: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to parse Nominatim response: {}", e))
        })?;

        Ok(Some(body))
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode_area(&self, area_name: &str) -> Result<Option<GeocodedLocation>> {
        let url = self.search_url(area_name);
        tracing::debug!("Geocoding area: {} -> {}", area_name, url);

        let places: Vec<NominatimPlace> = self.get_json(&url).await?.unwrap_or_default();
        let Some(place) = places.into_iter().next() else {
            tracing::warn!("No geocoding results for area: {}", area_name);
            return Ok(None);
        };

        Ok(to_location(place, area_name))
    }

    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<String> {
        let url = self.reverse_url(lat, lng);
        tracing::debug!("Reverse geocoding: ({}, {}) -> {}", lat, lng, url);

        let address = self
            .get_json::<NominatimReverse>(&url)
            .await?
            .and_then(|r| r.address)
            .unwrap_or_default();

        Ok(address.format())
    }
}

/// Append the region hint unless its leading part is already mentioned
fn with_region_hint(area_name: &str, region_hint: &str) -> String {
    let area_name = area_name.trim();
    let hint_key = region_hint
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    if region_hint.trim().is_empty() || area_name.to_lowercase().contains(&hint_key) {
        area_name.to_string()
    } else {
        format!("{}, {}", area_name, region_hint)
    }
}

fn to_location(place: NominatimPlace, area_name: &str) -> Option<GeocodedLocation> {
    let (Ok(lat), Ok(lng)) = (place.lat.parse::<f64>(), place.lon.parse::<f64>()) else {
        tracing::warn!("Unparseable coordinates for area {}: {:?}", area_name, place);
        return None;
    };

    if !is_valid_coordinates(lat, lng) {
        tracing::warn!("Invalid coordinates returned for {}: {}, {}", area_name, lat, lng);
        return None;
    }

    Some(GeocodedLocation {
        lat,
        lng,
        address: place
            .display_name
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| area_name.to_string()),
    })
}
