mod geocoder;
mod nominatim_geocoder;

pub use geocoder::{is_valid_coordinates, GeocodedLocation, Geocoder};
pub use nominatim_geocoder::NominatimGeocoder;
