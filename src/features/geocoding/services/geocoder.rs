use async_trait::async_trait;

use crate::core::error::Result;

/// A successfully geocoded place
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// Narrow geocoding capability used by issue creation and the lookup endpoints.
///
/// `Ok(None)` means the provider answered but had no usable result; `Err` means
/// the provider could not be reached. Callers degrade in both cases.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a free-text area name to coordinates
    async fn geocode_area(&self, area_name: &str) -> Result<Option<GeocodedLocation>>;

    /// Resolve coordinates to a human-readable address
    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<String>;
}

/// Both values within standard ranges and not the (0, 0) null island
pub fn is_valid_coordinates(lat: f64, lng: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng)
        && !(lat == 0.0 && lng == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_coordinates() {
        assert!(is_valid_coordinates(28.6139, 77.2090));
        assert!(is_valid_coordinates(-90.0, 180.0));
        assert!(is_valid_coordinates(0.0, 77.0));
        assert!(!is_valid_coordinates(0.0, 0.0));
        assert!(!is_valid_coordinates(90.1, 77.0));
        assert!(!is_valid_coordinates(28.0, -180.5));
        assert!(!is_valid_coordinates(f64::NAN, 77.0));
    }
}
