use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::geocoding::dtos::{
    GeocodeResponseDto, GeocodeSearchQuery, ReverseGeocodeQuery, ReverseGeocodeResponseDto,
};
use crate::features::geocoding::{is_valid_coordinates, Geocoder};
use crate::shared::types::ApiResponse;
use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/geocoding/reverse",
    params(ReverseGeocodeQuery),
    responses(
        (status = 200, description = "Address for the coordinates (coordinate fallback on lookup failure)", body = ApiResponse<ReverseGeocodeResponseDto>),
        (status = 400, description = "Coordinates out of range")
    ),
    tag = "geocoding"
)]
pub async fn reverse_geocode(
    State(geocoder): State<Arc<dyn Geocoder>>,
    AppQuery(query): AppQuery<ReverseGeocodeQuery>,
) -> Result<Json<ApiResponse<ReverseGeocodeResponseDto>>> {
    if !is_valid_coordinates(query.lat, query.lng) {
        return Err(AppError::BadRequest(format!(
            "Invalid coordinates: {}, {}",
            query.lat, query.lng
        )));
    }

    let dto = match geocoder.reverse_geocode(query.lat, query.lng).await {
        Ok(address) => ReverseGeocodeResponseDto {
            lat: query.lat,
            lng: query.lng,
            address,
            resolved: true,
        },
        Err(e) => {
            tracing::warn!(
                "Reverse geocoding failed for ({}, {}): {}",
                query.lat,
                query.lng,
                e
            );
            ReverseGeocodeResponseDto::fallback(query.lat, query.lng)
        }
    };

    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/geocoding/search",
    params(GeocodeSearchQuery),
    responses(
        (status = 200, description = "Lookup result; success is false when nothing usable was found", body = ApiResponse<GeocodeResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "geocoding"
)]
pub async fn search(
    State(geocoder): State<Arc<dyn Geocoder>>,
    AppQuery(query): AppQuery<GeocodeSearchQuery>,
) -> Result<Json<ApiResponse<GeocodeResponseDto>>> {
    query.validate()?;

    let location = geocoder.geocode_area(&query.q).await.unwrap_or_else(|e| {
        tracing::warn!("Geocoding failed for {}: {}", query.q, e);
        None
    });

    Ok(Json(ApiResponse::success(
        Some(GeocodeResponseDto::from_lookup(&query.q, location)),
        None,
        None,
    )))
}
