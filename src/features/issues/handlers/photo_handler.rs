use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::AppError;
use crate::features::auth::guards::RequireCitizen;
use crate::features::issues::dtos::{
    PhotoUploadResponseDto, UploadPhotoDto, ALLOWED_PHOTO_TYPES, MAX_PHOTO_SIZE,
};
use crate::features::issues::services::PhotoService;
use crate::shared::types::ApiResponse;

/// Upload an issue photo
///
/// Accepts multipart/form-data with a single `file` field. The returned URL is
/// sent back as `photo_url` when reporting the issue.
#[utoipa::path(
    post,
    path = "/api/issues/photos",
    tag = "issues",
    request_body(
        content = UploadPhotoDto,
        content_type = "multipart/form-data",
        description = "Photo upload form",
    ),
    responses(
        (status = 201, description = "Photo uploaded", body = ApiResponse<PhotoUploadResponseDto>),
        (status = 400, description = "Missing file, unsupported type or too large"),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_photo(
    RequireCitizen(user): RequireCitizen,
    State(service): State<Arc<PhotoService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<PhotoUploadResponseDto>>), AppError> {
    let mut photo: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        if field.name() != Some("file") {
            debug!("Ignoring unknown field: {:?}", field.name());
            continue;
        }

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        if !ALLOWED_PHOTO_TYPES.contains(&content_type.as_str()) {
            return Err(AppError::BadRequest(format!(
                "File type '{}' is not allowed. Allowed types: {}",
                content_type,
                ALLOWED_PHOTO_TYPES.join(", ")
            )));
        }

        let data = field.bytes().await.map_err(|e| {
            debug!("Failed to read file bytes: {}", e);
            AppError::BadRequest(format!("Failed to read file data: {}", e))
        })?;

        photo = Some((data.to_vec(), content_type));
    }

    let (data, content_type) =
        photo.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;

    if data.is_empty() {
        return Err(AppError::BadRequest("File is empty".to_string()));
    }

    if data.len() > MAX_PHOTO_SIZE {
        return Err(AppError::BadRequest(format!(
            "File too large. Maximum size is {} MB",
            MAX_PHOTO_SIZE / 1024 / 1024
        )));
    }

    let response = service.upload_photo(&user.uid, data, &content_type).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(response), None, None)),
    ))
}
