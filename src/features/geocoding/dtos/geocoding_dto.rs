use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::geocoding::GeocodedLocation;

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ReverseGeocodeQuery {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReverseGeocodeResponseDto {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    /// False when the address is the raw coordinate fallback
    pub resolved: bool,
}

impl ReverseGeocodeResponseDto {
    /// Coordinate string shown when the lookup fails
    pub fn fallback(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            address: format!("Lat: {:.6}, Lng: {:.6}", lat, lng),
            resolved: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct GeocodeSearchQuery {
    /// Free-text area name
    #[validate(length(min = 1, max = 255, message = "Query must be 1-255 characters"))]
    pub q: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeocodeResponseDto {
    pub success: bool,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Provider display name, or the query itself when nothing was found
    pub address: String,
}

impl GeocodeResponseDto {
    pub fn from_lookup(query: &str, location: Option<GeocodedLocation>) -> Self {
        match location {
            Some(l) => Self {
                success: true,
                lat: Some(l.lat),
                lng: Some(l.lng),
                address: l.address,
            },
            None => Self {
                success: false,
                lat: None,
                lng: None,
                address: query.to_string(),
            },
        }
    }
}
