use crate::features::helplines::catalogue::{helpline_for_label, ALL_HELPLINES};
use crate::features::helplines::dtos::HelplineResponseDto;
use crate::shared::types::{ApiResponse, Meta};
use axum::{extract::Path, Json};

#[utoipa::path(
    get,
    path = "/api/helplines",
    responses(
        (status = 200, description = "All civic helplines", body = ApiResponse<Vec<HelplineResponseDto>>)
    ),
    tag = "helplines"
)]
pub async fn list_helplines() -> Json<ApiResponse<Vec<HelplineResponseDto>>> {
    let helplines: Vec<HelplineResponseDto> =
        ALL_HELPLINES.into_iter().map(Into::into).collect();
    let total = helplines.len() as i64;

    Json(ApiResponse::success(
        Some(helplines),
        None,
        Some(Meta::total(total)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/helplines/{category}",
    params(
        ("category" = String, Path, description = "Category label or alias, e.g. `Water` or `Garbage`")
    ),
    responses(
        (status = 200, description = "Helpline for the category, or the general one", body = ApiResponse<HelplineResponseDto>)
    ),
    tag = "helplines"
)]
pub async fn get_helpline(Path(category): Path<String>) -> Json<ApiResponse<HelplineResponseDto>> {
    Json(ApiResponse::success(
        Some(helpline_for_label(&category).into()),
        None,
        None,
    ))
}
