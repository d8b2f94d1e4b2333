use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::area_overview::dtos::{AreaOverviewDto, AreaOverviewQuery};
use crate::features::area_overview::services::AreaOverviewService;
use crate::shared::types::ApiResponse;
use axum::{extract::State, Json};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/area-overview",
    params(AreaOverviewQuery),
    responses(
        (status = 200, description = "Aggregated view of reported issues", body = ApiResponse<AreaOverviewDto>),
        (status = 400, description = "Malformed query")
    ),
    tag = "area-overview"
)]
pub async fn get_area_overview(
    State(service): State<Arc<AreaOverviewService>>,
    AppQuery(query): AppQuery<AreaOverviewQuery>,
) -> Result<Json<ApiResponse<AreaOverviewDto>>> {
    let user_location = query.lat.zip(query.lng);
    let overview = service
        .overview(query.time_window(), user_location)
        .await?;

    Ok(Json(ApiResponse::success(Some(overview), None, None)))
}
