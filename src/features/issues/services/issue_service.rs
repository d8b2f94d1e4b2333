use chrono::Utc;
use sqlx::{PgExecutor, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::geocoding::{is_valid_coordinates, GeocodedLocation, Geocoder};
use crate::features::issues::dtos::{
    CreateIssueDto, CreateIssueUpdateDto, IssueDetailResponseDto, IssueMutationResultDto,
    IssueQueryParams, IssueResponseDto, IssueStatsDto, UpdateIssueDto,
};
use crate::features::issues::models::{CreateIssue, Issue, IssueStatus, IssueUpdate};

const INITIAL_UPDATE_COMMENT: &str = "Issue reported";

/// Service for issue reporting, tracking and resolution
pub struct IssueService {
    pool: PgPool,
    geocoder: Arc<dyn Geocoder>,
}

impl IssueService {
    pub fn new(pool: PgPool, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { pool, geocoder }
    }

    /// Best-effort geocoding; failures only cost the coordinates
    async fn locate(&self, location: &str) -> Option<GeocodedLocation> {
        match self.geocoder.geocode_area(location).await {
            Ok(Some(found)) if is_valid_coordinates(found.lat, found.lng) => Some(found),
            Ok(_) => {
                tracing::warn!("No valid coordinates for '{}', saving without", location);
                None
            }
            Err(e) => {
                tracing::warn!(
                    "Geocoding failed for '{}': {}. Saving without coordinates",
                    location,
                    e
                );
                None
            }
        }
    }

    /// Report a new issue; it starts Pending with an initial "Issue reported" update
    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        dto: CreateIssueDto,
    ) -> Result<IssueMutationResultDto> {
        let located = self.locate(&dto.location).await;

        let data = CreateIssue {
            user_id: user.uid.clone(),
            category: dto.category,
            description: dto.description.trim().to_string(),
            location: dto.location.trim().to_string(),
            lat: located.as_ref().map(|l| l.lat),
            lng: located.as_ref().map(|l| l.lng),
            address: located.map(|l| l.address),
            photo_url: dto.photo_url,
            affected_count: dto.affected_count,
        };

        let issue_id = Uuid::now_v7();
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        sqlx::query(
            r#"
            INSERT INTO issues (
                id, user_id, category, description, location,
                lat, lng, address, photo_url, affected_count, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(issue_id)
        .bind(&data.user_id)
        .bind(data.category)
        .bind(&data.description)
        .bind(&data.location)
        .bind(data.lat)
        .bind(data.lng)
        .bind(&data.address)
        .bind(&data.photo_url)
        .bind(data.affected_count)
        .bind(IssueStatus::Pending)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create issue: {:?}", e);
            AppError::Database(e)
        })?;

        Self::append_update(
            &mut tx,
            issue_id,
            IssueStatus::Pending,
            Some(INITIAL_UPDATE_COMMENT),
            &data.user_id,
        )
        .await?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit issue {}: {:?}", issue_id, e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Issue created: id={}, user={}, category={}, geocoded={}",
            issue_id,
            data.user_id,
            data.category,
            data.lat.is_some()
        );

        Ok(IssueMutationResultDto { issue_id })
    }

    async fn append_update(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        issue_id: Uuid,
        status: IssueStatus,
        comment: Option<&str>,
        created_by: &str,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO issue_updates (id, issue_id, status, comment, created_by)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(issue_id)
        .bind(status)
        .bind(comment)
        .bind(created_by)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to append update to issue {}: {:?}", issue_id, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Issue> {
        sqlx::query_as::<_, Issue>(
            r#"
            SELECT
                id, user_id, category, description, location,
                lat, lng, address, photo_url, affected_count, status,
                created_at, updated_at, resolved_at
            FROM issues
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get issue {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Issue {} not found", id)))
    }

    /// The caller's own issues, newest first
    pub async fn list_mine(&self, uid: &str) -> Result<Vec<IssueResponseDto>> {
        let issues = sqlx::query_as::<_, Issue>(
            r#"
            SELECT
                id, user_id, category, description, location,
                lat, lng, address, photo_url, affected_count, status,
                created_at, updated_at, resolved_at
            FROM issues
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(uid)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list issues for {}: {:?}", uid, e);
            AppError::Database(e)
        })?;

        Ok(to_responses(issues))
    }

    /// Issue plus its update log; citizens only see their own issues
    pub async fn get_detail(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<IssueDetailResponseDto> {
        let issue = self.find(id).await?;

        if issue.user_id != user.uid && !user.has_worker_access() {
            return Err(AppError::Forbidden(
                "You can only view your own issues".to_string(),
            ));
        }

        let updates = sqlx::query_as::<_, IssueUpdate>(
            r#"
            SELECT id, issue_id, status, comment, created_by, created_at
            FROM issue_updates
            WHERE issue_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list updates for issue {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(IssueDetailResponseDto {
            issue: issue.aged(Utc::now()).into(),
            updates: updates.into_iter().map(Into::into).collect(),
        })
    }

    /// Append a status update; the issue's status follows it
    pub async fn add_update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        dto: CreateIssueUpdateDto,
    ) -> Result<IssueMutationResultDto> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let updated: Option<Uuid> = sqlx::query_scalar(
            r#"
            UPDATE issues
            SET status = $2,
                resolved_at = CASE
                    WHEN $2 = 'resolved'::issue_status THEN COALESCE(resolved_at, NOW())
                    ELSE NULL
                END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(dto.status)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update status of issue {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if updated.is_none() {
            return Err(AppError::NotFound(format!("Issue {} not found", id)));
        }

        let comment = dto
            .comment
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        Self::append_update(&mut tx, id, dto.status, comment, &user.uid).await?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit update for issue {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        tracing::info!("Issue {} moved to {} by {}", id, dto.status, user.uid);
        Ok(IssueMutationResultDto { issue_id: id })
    }

    /// Admin edit; a new location is geocoded again
    pub async fn update(&self, id: Uuid, dto: UpdateIssueDto) -> Result<IssueMutationResultDto> {
        let location = dto.location.as_deref().map(str::trim);
        let relocated = match location {
            Some(location) => Some(self.locate(location).await),
            None => None,
        };
        let moved = relocated.flatten();

        let updated: Option<Uuid> = sqlx::query_scalar(
            r#"
            UPDATE issues
            SET category = COALESCE($2, category),
                description = COALESCE($3, description),
                location = COALESCE($4, location),
                affected_count = COALESCE($5, affected_count),
                lat = CASE WHEN $6 THEN $7 ELSE lat END,
                lng = CASE WHEN $6 THEN $8 ELSE lng END,
                address = CASE WHEN $6 THEN $9 ELSE address END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(dto.category)
        .bind(dto.description.as_deref().map(str::trim))
        .bind(location)
        .bind(dto.affected_count)
        .bind(location.is_some())
        .bind(moved.as_ref().map(|l| l.lat))
        .bind(moved.as_ref().map(|l| l.lng))
        .bind(moved.as_ref().map(|l| l.address.as_str()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update issue {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        let issue_id =
            updated.ok_or_else(|| AppError::NotFound(format!("Issue {} not found", id)))?;

        tracing::info!("Issue {} edited (relocated={})", issue_id, location.is_some());
        Ok(IssueMutationResultDto { issue_id })
    }

    /// Paginated listing with optional status/category/location filters
    pub async fn list(&self, params: &IssueQueryParams) -> Result<(Vec<IssueResponseDto>, i64)> {
        let pagination = params.pagination();

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM issues
            WHERE ($1::issue_status IS NULL OR status = $1)
              AND ($2::issue_category IS NULL OR category = $2)
              AND ($3::text IS NULL OR location = $3)
            "#,
        )
        .bind(params.status)
        .bind(params.category)
        .bind(&params.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count issues: {:?}", e);
            AppError::Database(e)
        })?;

        let issues = sqlx::query_as::<_, Issue>(
            r#"
            SELECT
                id, user_id, category, description, location,
                lat, lng, address, photo_url, affected_count, status,
                created_at, updated_at, resolved_at
            FROM issues
            WHERE ($1::issue_status IS NULL OR status = $1)
              AND ($2::issue_category IS NULL OR category = $2)
              AND ($3::text IS NULL OR location = $3)
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(params.status)
        .bind(params.category)
        .bind(&params.location)
        .bind(pagination.offset())
        .bind(pagination.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list issues: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((to_responses(issues), total))
    }

    /// Unresolved issues, oldest first
    pub async fn queue(&self) -> Result<Vec<IssueResponseDto>> {
        let issues = sqlx::query_as::<_, Issue>(
            r#"
            SELECT
                id, user_id, category, description, location,
                lat, lng, address, photo_url, affected_count, status,
                created_at, updated_at, resolved_at
            FROM issues
            WHERE status <> 'resolved'
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load work queue: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(to_responses(issues))
    }

    pub async fn stats(&self) -> Result<IssueStatsDto> {
        count_by_status(&self.pool).await
    }
}

/// All-time status counters; takes any executor so callers can read them
/// inside their own transaction
pub async fn count_by_status<'e, E>(executor: E) -> Result<IssueStatsDto>
where
    E: PgExecutor<'e>,
{
    let (total, pending, in_progress, resolved): (i64, i64, i64, i64) = sqlx::query_as(
        r#"
        SELECT
            COUNT(*),
            COUNT(*) FILTER (WHERE status = 'pending'),
            COUNT(*) FILTER (WHERE status = 'in_progress'),
            COUNT(*) FILTER (WHERE status = 'resolved')
        FROM issues
        "#,
    )
    .fetch_one(executor)
    .await
    .map_err(|e| {
        tracing::error!("Failed to compute issue stats: {:?}", e);
        AppError::Database(e)
    })?;

    Ok(IssueStatsDto {
        total,
        pending,
        in_progress,
        resolved,
    })
}

fn to_responses(issues: Vec<Issue>) -> Vec<IssueResponseDto> {
    let now = Utc::now();
    issues
        .into_iter()
        .map(|issue| issue.aged(now).into())
        .collect()
}
