use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::area_overview::aggregator::{SeverityTier, TimeWindow};
use crate::features::issues::dtos::{IssueResponseDto, IssueStatsDto};
use crate::features::issues::models::{IssueCategory, IssueStatus};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AreaOverviewQuery {
    /// `24h`, `7d` (default), `30d` or `all`; unrecognised values mean `all`
    pub window: Option<String>,
    /// Viewer latitude, echoed back for map centring when valid
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl AreaOverviewQuery {
    pub fn time_window(&self) -> TimeWindow {
        self.window
            .as_deref()
            .map(TimeWindow::parse)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CoordinatesDto {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryShareDto {
    pub category: IssueCategory,
    pub count: usize,
    /// Rounded share of the all-time total
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AreaTileDto {
    pub area: String,
    pub short_name: String,
    pub unresolved_count: usize,
    pub max_days_unresolved: i64,
    pub tier: SeverityTier,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapMarkerDto {
    pub issue_id: Uuid,
    pub lat: f64,
    pub lng: f64,
    pub category: IssueCategory,
    pub status: IssueStatus,
    pub location: String,
    pub days_unresolved: Option<i64>,
    pub color: String,
}

/// Everything the area overview page renders, computed in one pass
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AreaOverviewDto {
    pub window: TimeWindow,
    pub window_label: String,
    pub user_location: Option<CoordinatesDto>,
    /// All-time status counters, independent of the window
    pub stats: IssueStatsDto,
    /// Issues inside the window
    pub issue_count: usize,
    #[schema(value_type = Object)]
    pub category_counts: BTreeMap<IssueCategory, usize>,
    pub category_shares: Vec<CategoryShareDto>,
    pub area_counts: BTreeMap<String, usize>,
    #[schema(value_type = Object)]
    pub area_category_matrix: BTreeMap<String, BTreeMap<IssueCategory, usize>>,
    pub tiles: Vec<AreaTileDto>,
    pub recent_issues: Vec<IssueResponseDto>,
    pub markers: Vec<MapMarkerDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_defaults_to_seven_days() {
        let query = AreaOverviewQuery::default();
        assert_eq!(query.time_window(), TimeWindow::Last7Days);

        let query = AreaOverviewQuery {
            window: Some("fortnight".to_string()),
            ..Default::default()
        };
        assert_eq!(query.time_window(), TimeWindow::All);
    }
}
