use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::geocoding::is_valid_coordinates;

/// Issue status enum matching database enum
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "issue_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Pending,
    InProgress,
    Resolved,
}

impl IssueStatus {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Pending => "Pending",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        }
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueStatus::Pending => write!(f, "pending"),
            IssueStatus::InProgress => write!(f, "in_progress"),
            IssueStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// Issue category enum matching database enum.
///
/// Serialized with its display label; the common aliases are accepted on input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "issue_category", rename_all = "snake_case")]
pub enum IssueCategory {
    #[serde(alias = "waste", alias = "Garbage", alias = "Sanitation")]
    Waste,
    #[serde(alias = "water")]
    Water,
    #[serde(alias = "air", alias = "Pollution")]
    Air,
    #[serde(alias = "transport", alias = "Traffic")]
    Transport,
    #[serde(alias = "energy", alias = "Electricity", alias = "Power")]
    Energy,
    #[serde(
        rename = "Street Lighting",
        alias = "street_lighting",
        alias = "Street Light"
    )]
    StreetLighting,
    #[serde(alias = "roads", alias = "Infrastructure")]
    Roads,
    #[serde(alias = "health", alias = "Medical")]
    Health,
    #[serde(alias = "general")]
    General,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 9] = [
        IssueCategory::Waste,
        IssueCategory::Water,
        IssueCategory::Air,
        IssueCategory::Transport,
        IssueCategory::Energy,
        IssueCategory::StreetLighting,
        IssueCategory::Roads,
        IssueCategory::Health,
        IssueCategory::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::Waste => "Waste",
            IssueCategory::Water => "Water",
            IssueCategory::Air => "Air",
            IssueCategory::Transport => "Transport",
            IssueCategory::Energy => "Energy",
            IssueCategory::StreetLighting => "Street Lighting",
            IssueCategory::Roads => "Roads",
            IssueCategory::Health => "Health",
            IssueCategory::General => "General",
        }
    }

    /// Resolve a label, alias or snake_case key, ignoring case
    pub fn from_label(value: &str) -> Option<Self> {
        let key = value.trim().to_lowercase().replace(['_', '-'], " ");
        let category = match key.as_str() {
            "waste" | "garbage" | "sanitation" => IssueCategory::Waste,
            "water" => IssueCategory::Water,
            "air" | "pollution" => IssueCategory::Air,
            "transport" | "traffic" => IssueCategory::Transport,
            "energy" | "electricity" | "power" => IssueCategory::Energy,
            "street lighting" | "street light" => IssueCategory::StreetLighting,
            "roads" | "infrastructure" => IssueCategory::Roads,
            "health" | "medical" => IssueCategory::Health,
            "general" => IssueCategory::General,
            _ => return None,
        };
        Some(category)
    }
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Database model for an issue.
///
/// `days_unresolved` is not stored; `aged` derives it from `created_at`.
#[derive(Debug, Clone, FromRow)]
pub struct Issue {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    #[sqlx(skip)]
    pub days_unresolved: Option<i64>,
}

impl Issue {
    /// Whole days since creation while unresolved, never negative
    pub fn days_unresolved_at(&self, now: DateTime<Utc>) -> Option<i64> {
        if self.status == IssueStatus::Resolved {
            return None;
        }
        Some((now - self.created_at).num_days().max(0))
    }

    /// Fill in `days_unresolved` as of `now`
    pub fn aged(mut self, now: DateTime<Utc>) -> Self {
        self.days_unresolved = self.days_unresolved_at(now);
        self
    }

    /// Coordinates, only when both are present and valid
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if is_valid_coordinates(lat, lng) => Some((lat, lng)),
            _ => None,
        }
    }
}

/// Data for inserting a new issue
#[derive(Debug)]
pub struct CreateIssue {
    pub user_id: String,
    pub category: IssueCategory,
    pub description: String,
    pub location: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
    pub photo_url: Option<String>,
    pub affected_count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::issue_fixture;
    use chrono::Duration;

    #[test]
    fn test_category_labels_round_trip_through_from_label() {
        for category in IssueCategory::ALL {
            assert_eq!(IssueCategory::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_category_aliases() {
        assert_eq!(
            IssueCategory::from_label("electricity"),
            Some(IssueCategory::Energy)
        );
        assert_eq!(
            IssueCategory::from_label("STREET_LIGHTING"),
            Some(IssueCategory::StreetLighting)
        );
        assert_eq!(
            IssueCategory::from_label("Garbage"),
            Some(IssueCategory::Waste)
        );
        assert_eq!(IssueCategory::from_label("Potholes"), None);
    }

    #[test]
    fn test_category_serde_uses_labels_and_accepts_aliases() {
        assert_eq!(
            serde_json::to_string(&IssueCategory::StreetLighting).unwrap(),
            "\"Street Lighting\""
        );
        let parsed: IssueCategory = serde_json::from_str("\"Traffic\"").unwrap();
        assert_eq!(parsed, IssueCategory::Transport);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&IssueStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(IssueStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn test_days_unresolved() {
        let now = Utc::now();
        let issue = issue_fixture(
            IssueCategory::Waste,
            "X",
            IssueStatus::Pending,
            now - Duration::hours(50),
        );
        assert_eq!(issue.days_unresolved_at(now), Some(2));

        let future = issue_fixture(
            IssueCategory::Waste,
            "X",
            IssueStatus::Pending,
            now + Duration::hours(3),
        );
        assert_eq!(future.days_unresolved_at(now), Some(0));

        let resolved = issue_fixture(
            IssueCategory::Waste,
            "X",
            IssueStatus::Resolved,
            now - Duration::days(9),
        );
        assert_eq!(resolved.aged(now).days_unresolved, None);
    }

    #[test]
    fn test_coordinates_require_both_valid_values() {
        let mut issue =
            issue_fixture(IssueCategory::Air, "X", IssueStatus::Pending, Utc::now());
        assert_eq!(issue.coordinates(), None);

        issue.lat = Some(28.6);
        assert_eq!(issue.coordinates(), None);

        issue.lng = Some(77.2);
        assert_eq!(issue.coordinates(), Some((28.6, 77.2)));

        issue.lat = Some(0.0);
        issue.lng = Some(0.0);
        assert_eq!(issue.coordinates(), None);
    }
}
