use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::auth::guards::{RequireAdmin, RequireCitizen, RequireWorker};
use crate::features::issues::dtos::{
    CreateIssueDto, CreateIssueUpdateDto, IssueDetailResponseDto, IssueMutationResultDto,
    IssueQueryParams, IssueResponseDto, IssueStatsDto, UpdateIssueDto,
};
use crate::features::issues::services::IssueService;
use crate::shared::types::{ApiResponse, Meta};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Report a new issue
#[utoipa::path(
    post,
    path = "/api/issues",
    request_body = CreateIssueDto,
    responses(
        (status = 201, description = "Issue reported", body = ApiResponse<IssueMutationResultDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "issues",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_issue(
    RequireCitizen(user): RequireCitizen,
    State(service): State<Arc<IssueService>>,
    AppJson(dto): AppJson<CreateIssueDto>,
) -> Result<(StatusCode, Json<ApiResponse<IssueMutationResultDto>>)> {
    dto.validate()?;

    let result = service.create(&user, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(result),
            Some("Issue reported successfully".to_string()),
            None,
        )),
    ))
}

/// List the caller's own issues, newest first
#[utoipa::path(
    get,
    path = "/api/issues/mine",
    responses(
        (status = 200, description = "Issues retrieved", body = ApiResponse<Vec<IssueResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "issues",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_my_issues(
    RequireCitizen(user): RequireCitizen,
    State(service): State<Arc<IssueService>>,
) -> Result<Json<ApiResponse<Vec<IssueResponseDto>>>> {
    let issues = service.list_mine(&user.uid).await?;
    let total = issues.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(issues),
        None,
        Some(Meta::total(total)),
    )))
}

/// Get an issue with its status log
#[utoipa::path(
    get,
    path = "/api/issues/{id}",
    params(
        ("id" = Uuid, Path, description = "Issue ID")
    ),
    responses(
        (status = 200, description = "Issue retrieved", body = ApiResponse<IssueDetailResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the reporter of this issue"),
        (status = 404, description = "Issue not found")
    ),
    tag = "issues",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_issue(
    RequireCitizen(user): RequireCitizen,
    State(service): State<Arc<IssueService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<IssueDetailResponseDto>>> {
    let detail = service.get_detail(&user, id).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

/// Append a status update (worker)
#[utoipa::path(
    post,
    path = "/api/issues/{id}/updates",
    params(
        ("id" = Uuid, Path, description = "Issue ID")
    ),
    request_body = CreateIssueUpdateDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<IssueMutationResultDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Worker access required"),
        (status = 404, description = "Issue not found")
    ),
    tag = "issues",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_issue_update(
    RequireWorker(user): RequireWorker,
    State(service): State<Arc<IssueService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<CreateIssueUpdateDto>,
) -> Result<Json<ApiResponse<IssueMutationResultDto>>> {
    dto.validate()?;

    let result = service.add_update(&user, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(result),
        Some("Issue status updated".to_string()),
        None,
    )))
}

/// Edit an issue (admin)
#[utoipa::path(
    patch,
    path = "/api/issues/{id}",
    params(
        ("id" = Uuid, Path, description = "Issue ID")
    ),
    request_body = UpdateIssueDto,
    responses(
        (status = 200, description = "Issue updated", body = ApiResponse<IssueMutationResultDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Issue not found")
    ),
    tag = "issues",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_issue(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<IssueService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateIssueDto>,
) -> Result<Json<ApiResponse<IssueMutationResultDto>>> {
    dto.validate()?;

    let result = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(result),
        Some("Issue updated".to_string()),
        None,
    )))
}

/// List all issues with filters (admin)
#[utoipa::path(
    get,
    path = "/api/issues",
    params(IssueQueryParams),
    responses(
        (status = 200, description = "Issues retrieved", body = ApiResponse<Vec<IssueResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    tag = "issues",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_issues(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<IssueService>>,
    AppQuery(params): AppQuery<IssueQueryParams>,
) -> Result<Json<ApiResponse<Vec<IssueResponseDto>>>> {
    let (issues, total) = service.list(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(issues),
        None,
        Some(Meta::paged(total, &params.pagination())),
    )))
}

/// Unresolved issues, oldest first (worker)
#[utoipa::path(
    get,
    path = "/api/issues/queue",
    responses(
        (status = 200, description = "Work queue retrieved", body = ApiResponse<Vec<IssueResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Worker access required")
    ),
    tag = "issues",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_queue(
    RequireWorker(_worker): RequireWorker,
    State(service): State<Arc<IssueService>>,
) -> Result<Json<ApiResponse<Vec<IssueResponseDto>>>> {
    let issues = service.queue().await?;
    let total = issues.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(issues),
        None,
        Some(Meta::total(total)),
    )))
}

/// Issue counters by status (public)
#[utoipa::path(
    get,
    path = "/api/issues/stats",
    responses(
        (status = 200, description = "Counters retrieved", body = ApiResponse<IssueStatsDto>)
    ),
    tag = "issues"
)]
pub async fn get_stats(
    State(service): State<Arc<IssueService>>,
) -> Result<Json<ApiResponse<IssueStatsDto>>> {
    let stats = service.stats().await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}
