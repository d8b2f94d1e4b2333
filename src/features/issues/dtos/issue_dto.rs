use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::issues::models::{Issue, IssueCategory, IssueStatus, IssueUpdate};
use crate::shared::constants::{MIN_DESCRIPTION_LENGTH, MIN_LOCATION_LENGTH};
use crate::shared::types::{default_page, default_page_size, PaginationQuery};

// =============================================================================
// REQUESTS
// =============================================================================

fn default_affected_count() -> i32 {
    1
}

/// Request DTO for reporting a new issue
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIssueDto {
    pub category: IssueCategory,

    #[validate(length(
        min = MIN_DESCRIPTION_LENGTH,
        max = 2000,
        message = "Description must be 10-2000 characters"
    ))]
    pub description: String,

    /// Free-text area label, e.g. "MG Road, Block A"
    #[validate(length(
        min = MIN_LOCATION_LENGTH,
        max = 255,
        message = "Location must be 5-255 characters"
    ))]
    pub location: String,

    /// Number of people affected (default: 1)
    #[serde(default = "default_affected_count")]
    #[validate(range(min = 1, message = "Affected count must be at least 1"))]
    pub affected_count: i32,

    #[validate(url(message = "Photo URL must be a valid URL"))]
    pub photo_url: Option<String>,
}

/// Request DTO for appending a status update
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIssueUpdateDto {
    pub status: IssueStatus,

    #[validate(length(max = 1000, message = "Comment must not exceed 1000 characters"))]
    pub comment: Option<String>,
}

/// Request DTO for admin edits; at least one field must be present
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_has_changes"))]
pub struct UpdateIssueDto {
    pub category: Option<IssueCategory>,

    #[validate(length(
        min = MIN_DESCRIPTION_LENGTH,
        max = 2000,
        message = "Description must be 10-2000 characters"
    ))]
    pub description: Option<String>,

    #[validate(length(
        min = MIN_LOCATION_LENGTH,
        max = 255,
        message = "Location must be 5-255 characters"
    ))]
    pub location: Option<String>,

    #[validate(range(min = 1, message = "Affected count must be at least 1"))]
    pub affected_count: Option<i32>,
}

fn validate_has_changes(dto: &UpdateIssueDto) -> Result<(), ValidationError> {
    if dto.category.is_none()
        && dto.description.is_none()
        && dto.location.is_none()
        && dto.affected_count.is_none()
    {
        return Err(ValidationError::new("empty_update")
            .with_message("At least one field must be provided".into()));
    }
    Ok(())
}

/// Query parameters for the admin issue listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct IssueQueryParams {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
    /// Items per page
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
    /// Filter by status
    pub status: Option<IssueStatus>,
    /// Filter by category
    pub category: Option<IssueCategory>,
    /// Filter by exact location label
    pub location: Option<String>,
}

impl IssueQueryParams {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Id of the issue a write touched; clients refresh the views that show it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IssueMutationResultDto {
    pub issue_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IssueResponseDto {
    pub id: Uuid,
    pub user_id: String,
    pub category: IssueCategory,
    pub description: String,
    pub location: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
    pub photo_url: Option<String>,
    pub affected_count: i32,
    pub status: IssueStatus,
    /// Present only while the issue is unresolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_unresolved: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl From<Issue> for IssueResponseDto {
    fn from(i: Issue) -> Self {
        Self {
            id: i.id,
            user_id: i.user_id,
            category: i.category,
            description: i.description,
            location: i.location,
            lat: i.lat,
            lng: i.lng,
            address: i.address,
            photo_url: i.photo_url,
            affected_count: i.affected_count,
            status: i.status,
            days_unresolved: i.days_unresolved,
            created_at: i.created_at,
            updated_at: i.updated_at,
            resolved_at: i.resolved_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IssueUpdateResponseDto {
    pub id: Uuid,
    pub status: IssueStatus,
    pub comment: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<IssueUpdate> for IssueUpdateResponseDto {
    fn from(u: IssueUpdate) -> Self {
        Self {
            id: u.id,
            status: u.status,
            comment: u.comment,
            created_by: u.created_by,
            created_at: u.created_at,
        }
    }
}

/// Issue with its status log, oldest update first
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IssueDetailResponseDto {
    pub issue: IssueResponseDto,
    pub updates: Vec<IssueUpdateResponseDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct IssueStatsDto {
    pub total: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub resolved: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_dto(description: &str, location: &str, affected_count: i32) -> CreateIssueDto {
        CreateIssueDto {
            category: IssueCategory::Waste,
            description: description.to_string(),
            location: location.to_string(),
            affected_count,
            photo_url: None,
        }
    }

    #[test]
    fn test_create_issue_validation_boundaries() {
        assert!(create_dto("0123456789", "Sec 4", 1).validate().is_ok());
        assert!(create_dto("012345678", "Sec 4", 1).validate().is_err());
        assert!(create_dto("0123456789", "Sec4", 1).validate().is_err());
        assert!(create_dto("0123456789", "Sec 4", 0).validate().is_err());
    }

    #[test]
    fn test_create_issue_defaults_affected_count() {
        let dto: CreateIssueDto = serde_json::from_value(json!({
            "category": "Garbage",
            "description": "Bins overflowing for a week",
            "location": "Market Street"
        }))
        .unwrap();

        assert_eq!(dto.affected_count, 1);
        assert_eq!(dto.category, IssueCategory::Waste);
    }

    #[test]
    fn test_empty_update_is_rejected() {
        assert!(UpdateIssueDto::default().validate().is_err());

        let dto = UpdateIssueDto {
            affected_count: Some(4),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
