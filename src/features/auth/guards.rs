//! Role-based authorization guards.
//!
//! Each guard reads the `AuthenticatedUser` placed by `auth_middleware` and
//! rejects with 401 when it is missing or 403 when the role is insufficient.
//!
//! Roles, from highest to lowest:
//! - admin: oversees every issue, edits reports, sees the full listing
//! - worker: works the resolution queue and posts status updates
//! - citizen: reports issues and tracks their own reports
//!
//! Admins pass every worker check.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

fn current_user(parts: &Parts) -> Result<&AuthenticatedUser, AppError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
}

/// Any signed-in user.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireCitizen(user): RequireCitizen) { ... }
/// ```
pub struct RequireCitizen(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireCitizen
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequireCitizen(current_user(parts)?.clone()))
    }
}

/// Worker or admin.
pub struct RequireWorker(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireWorker
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = current_user(parts)?;

        if !user.has_worker_access() {
            return Err(AppError::Forbidden("Worker access required".to_string()));
        }

        Ok(RequireWorker(user.clone()))
    }
}

/// Admin only.
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = current_user(parts)?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}
