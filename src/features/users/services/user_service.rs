use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::dtos::{RecordSessionDto, UserProfileResponseDto};
use crate::features::users::models::User;

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upsert the profile of a signed-in user.
    ///
    /// `created_at` is kept from the first sign-in; `last_login_at` moves.
    /// Fields missing from this sign-in keep their stored values.
    pub async fn record_session(
        &self,
        user: &AuthenticatedUser,
        dto: RecordSessionDto,
    ) -> Result<UserProfileResponseDto> {
        let profile = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (uid, email, phone_number, display_name, photo_url, created_at, last_login_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            ON CONFLICT (uid) DO UPDATE
            SET email = COALESCE(EXCLUDED.email, users.email),
                phone_number = COALESCE(EXCLUDED.phone_number, users.phone_number),
                display_name = COALESCE(EXCLUDED.display_name, users.display_name),
                photo_url = COALESCE(EXCLUDED.photo_url, users.photo_url),
                last_login_at = NOW()
            RETURNING uid, email, phone_number, display_name, photo_url, created_at, last_login_at
            "#,
        )
        .bind(&user.uid)
        .bind(&user.email)
        .bind(user.phone_number.as_ref().or(dto.phone_number.as_ref()))
        .bind(&dto.display_name)
        .bind(&dto.photo_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to record session for {}: {:?}", user.uid, e);
            AppError::Database(e)
        })?;

        tracing::info!("Recorded session for user {}", profile.uid);
        Ok(profile.into())
    }

    pub async fn get_profile(&self, uid: &str) -> Result<UserProfileResponseDto> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT uid, email, phone_number, display_name, photo_url, created_at, last_login_at
            FROM users
            WHERE uid = $1
            "#,
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get profile for {}: {:?}", uid, e);
            AppError::Database(e)
        })?
        .map(Into::into)
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", uid)))
    }
}
