use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireCitizen;
use crate::features::users::dtos::{RecordSessionDto, UserProfileResponseDto};
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;
use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Profile retrieved successfully", body = ApiResponse<UserProfileResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No sign-in recorded yet")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_profile(
    RequireCitizen(user): RequireCitizen,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<UserProfileResponseDto>>> {
    let profile = service.get_profile(&user.uid).await?;
    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/users/me/session",
    request_body = RecordSessionDto,
    responses(
        (status = 200, description = "Sign-in recorded", body = ApiResponse<UserProfileResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn record_session(
    RequireCitizen(user): RequireCitizen,
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<RecordSessionDto>,
) -> Result<Json<ApiResponse<UserProfileResponseDto>>> {
    dto.validate()?;

    let profile = service.record_session(&user, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(profile),
        Some("Sign-in recorded".to_string()),
        None,
    )))
}
