//! Forward and reverse geocoding behind the `Geocoder` capability.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/geocoding/reverse` | No | Coordinates to a readable address |
//! | GET | `/api/geocoding/search` | No | Area name to coordinates |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::{is_valid_coordinates, GeocodedLocation, Geocoder, NominatimGeocoder};
