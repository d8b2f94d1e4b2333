use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};

use crate::core::error::{AppError, Result};
use crate::features::area_overview::aggregator::{
    area_category_matrix, count_by_category, count_by_location, filter_by_window, marker_color,
    percentage, severity_by_area, short_area_name, TimeWindow, SEEDED_AREAS,
};
use crate::features::area_overview::dtos::{
    AreaOverviewDto, AreaTileDto, CategoryShareDto, CoordinatesDto, MapMarkerDto,
};
use crate::features::geocoding::is_valid_coordinates;
use crate::features::issues::dtos::IssueStatsDto;
use crate::features::issues::models::Issue;
use crate::features::issues::services::count_by_status;
use crate::shared::constants::RECENT_ISSUES_LIMIT;

pub struct AreaOverviewService {
    pool: PgPool,
}

impl AreaOverviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Issues created since `cutoff` (all when `None`), newest first
    async fn load_issues(
        tx: &mut Transaction<'_, Postgres>,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<Vec<Issue>> {
        sqlx::query_as::<_, Issue>(
            r#"
            SELECT
                id, user_id, category, description, location,
                lat, lng, address, photo_url, affected_count, status,
                created_at, updated_at, resolved_at
            FROM issues
            WHERE $1::timestamptz IS NULL OR created_at >= $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(cutoff)
        .fetch_all(&mut **tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load issues for area overview: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn overview(
        &self,
        window: TimeWindow,
        user_location: Option<(f64, f64)>,
    ) -> Result<AreaOverviewDto> {
        let now = Utc::now();

        // Counters and windowed rows must come from one snapshot
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to set overview isolation level: {:?}", e);
                AppError::Database(e)
            })?;

        let stats = count_by_status(&mut *tx).await?;
        let issues = Self::load_issues(&mut tx, window.cutoff(now)).await?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit area overview snapshot: {:?}", e);
            AppError::Database(e)
        })?;

        let issues: Vec<Issue> = issues.into_iter().map(|issue| issue.aged(now)).collect();

        tracing::debug!(
            "Building area overview for window {} over {} issues",
            window.label(),
            issues.len()
        );

        Ok(build_overview(&issues, window, now, stats, user_location))
    }
}

/// Assemble the overview from already-aged issues ordered newest first.
///
/// `stats` is the all-time counter set; category shares are taken against its
/// total so they shrink as the window narrows.
fn build_overview(
    issues: &[Issue],
    window: TimeWindow,
    now: DateTime<Utc>,
    stats: IssueStatsDto,
    user_location: Option<(f64, f64)>,
) -> AreaOverviewDto {
    let filtered = filter_by_window(issues, window, now);
    // A share can never exceed the whole, even if the counters lag the rows
    let total = usize::try_from(stats.total)
        .unwrap_or(0)
        .max(filtered.len());

    let category_counts = count_by_category(filtered.iter().copied());
    let category_shares = category_counts
        .iter()
        .map(|(category, count)| CategoryShareDto {
            category: *category,
            count: *count,
            percentage: percentage(*count, total),
        })
        .collect();

    let severity = severity_by_area(filtered.iter().copied());
    // Reported areas in first-seen order, then any seeded area not yet listed
    let mut tile_order: Vec<&str> = Vec::new();
    for issue in &filtered {
        if !tile_order.contains(&issue.location.as_str()) {
            tile_order.push(&issue.location);
        }
    }
    for area in SEEDED_AREAS {
        if !tile_order.contains(&area) {
            tile_order.push(area);
        }
    }
    let tiles = tile_order
        .into_iter()
        .map(|area| {
            let entry = severity.get(area).copied().unwrap_or_default();
            AreaTileDto {
                area: area.to_string(),
                short_name: short_area_name(area).to_string(),
                unresolved_count: entry.count,
                max_days_unresolved: entry.max_days_unresolved,
                tier: entry.tier(),
            }
        })
        .collect();

    let markers = filtered
        .iter()
        .filter_map(|issue| {
            issue.coordinates().map(|(lat, lng)| MapMarkerDto {
                issue_id: issue.id,
                lat,
                lng,
                category: issue.category,
                status: issue.status,
                location: issue.location.clone(),
                days_unresolved: issue.days_unresolved,
                color: marker_color(issue).to_string(),
            })
        })
        .collect();

    let recent_issues = filtered
        .iter()
        .take(RECENT_ISSUES_LIMIT)
        .map(|issue| (*issue).clone().into())
        .collect();

    AreaOverviewDto {
        window,
        window_label: window.label().to_string(),
        user_location: user_location
            .filter(|(lat, lng)| is_valid_coordinates(*lat, *lng))
            .map(|(lat, lng)| CoordinatesDto { lat, lng }),
        stats,
        issue_count: filtered.len(),
        category_counts,
        category_shares,
        area_counts: count_by_location(filtered.iter().copied()),
        area_category_matrix: area_category_matrix(filtered.iter().copied()),
        tiles,
        recent_issues,
        markers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::area_overview::aggregator::SeverityTier;
    use crate::features::issues::models::{IssueCategory, IssueStatus};
    use crate::shared::test_helpers::issue_fixture;
    use chrono::Duration;

    fn stats(total: i64) -> IssueStatsDto {
        IssueStatsDto {
            total,
            pending: total,
            in_progress: 0,
            resolved: 0,
        }
    }

    fn sample(now: DateTime<Utc>) -> Vec<Issue> {
        let mut issues = vec![
            issue_fixture(
                IssueCategory::Waste,
                "Sector 4 Park",
                IssueStatus::Pending,
                now - Duration::hours(2),
            ),
            issue_fixture(
                IssueCategory::Water,
                "Karol Bagh, Block 7",
                IssueStatus::InProgress,
                now - Duration::days(4),
            ),
            issue_fixture(
                IssueCategory::Waste,
                "Sector 4 Park",
                IssueStatus::Pending,
                now - Duration::days(6),
            ),
            issue_fixture(
                IssueCategory::Roads,
                "Market Street",
                IssueStatus::Resolved,
                now - Duration::days(20),
            ),
        ];
        issues[1].lat = Some(28.65);
        issues[1].lng = Some(77.19);
        issues.into_iter().map(|i| i.aged(now)).collect()
    }

    #[test]
    fn test_week_window_aggregates_filtered_issues() {
        let now = Utc::now();
        let issues = sample(now);

        let overview = build_overview(&issues, TimeWindow::Last7Days, now, stats(4), None);

        assert_eq!(overview.issue_count, 3);
        assert_eq!(overview.stats.total, 4);
        assert_eq!(overview.category_counts[&IssueCategory::Waste], 2);
        assert!(!overview.category_counts.contains_key(&IssueCategory::Roads));
        assert_eq!(overview.area_counts["Sector 4 Park"], 2);

        let waste = overview
            .category_shares
            .iter()
            .find(|s| s.category == IssueCategory::Waste)
            .unwrap();
        assert_eq!(waste.percentage, 50);
    }

    #[test]
    fn test_tiles_list_reported_areas_then_seeded_ones() {
        let now = Utc::now();
        let issues = sample(now);

        let overview = build_overview(&issues, TimeWindow::Last7Days, now, stats(4), None);
        let names: Vec<&str> = overview.tiles.iter().map(|t| t.area.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "Sector 4 Park",
                "Karol Bagh, Block 7",
                "MG Road, Block A",
                "Market Street",
                "Central Mall Area",
            ]
        );

        let park = &overview.tiles[0];
        assert_eq!(park.unresolved_count, 2);
        assert_eq!(park.max_days_unresolved, 6);
        assert_eq!(park.tier, SeverityTier::Critical);

        let karol_bagh = &overview.tiles[1];
        assert_eq!(karol_bagh.short_name, "Karol Bagh");
        assert_eq!(karol_bagh.tier, SeverityTier::Warning);

        assert_eq!(overview.tiles[2].unresolved_count, 0);
        assert_eq!(overview.tiles[2].tier, SeverityTier::Healthy);
    }

    #[test]
    fn test_markers_only_for_located_issues() {
        let now = Utc::now();
        let issues = sample(now);

        let overview = build_overview(&issues, TimeWindow::All, now, stats(4), None);

        assert_eq!(overview.markers.len(), 1);
        assert_eq!(overview.markers[0].location, "Karol Bagh, Block 7");
        assert_eq!(overview.markers[0].color, "#f59e0b");
    }

    #[test]
    fn test_recent_issues_are_capped_and_keep_order() {
        let now = Utc::now();
        let issues: Vec<Issue> = (0..15)
            .map(|i| {
                issue_fixture(
                    IssueCategory::Air,
                    "Central Mall Area",
                    IssueStatus::Pending,
                    now - Duration::minutes(i),
                )
                .aged(now)
            })
            .collect();

        let overview = build_overview(&issues, TimeWindow::Last24Hours, now, stats(15), None);

        assert_eq!(overview.recent_issues.len(), RECENT_ISSUES_LIMIT);
        assert_eq!(overview.recent_issues[0].id, issues[0].id);
        assert_eq!(overview.recent_issues[9].id, issues[9].id);
    }

    #[test]
    fn test_user_location_is_echoed_only_when_valid() {
        let now = Utc::now();

        let overview = build_overview(
            &[],
            TimeWindow::All,
            now,
            IssueStatsDto::default(),
            Some((28.61, 77.21)),
        );
        assert_eq!(
            overview.user_location,
            Some(CoordinatesDto {
                lat: 28.61,
                lng: 77.21
            })
        );

        let overview = build_overview(
            &[],
            TimeWindow::All,
            now,
            IssueStatsDto::default(),
            Some((123.0, 77.21)),
        );
        assert_eq!(overview.user_location, None);
    }

    #[test]
    fn test_share_never_exceeds_whole_when_total_lags() {
        let now = Utc::now();
        let issues: Vec<Issue> = (0..3)
            .map(|i| {
                issue_fixture(
                    IssueCategory::Air,
                    "Central Mall Area",
                    IssueStatus::Pending,
                    now - Duration::hours(i),
                )
                .aged(now)
            })
            .collect();

        let overview = build_overview(&issues, TimeWindow::Last7Days, now, stats(1), None);

        assert_eq!(overview.issue_count, 3);
        assert_eq!(overview.category_shares.len(), 1);
        assert_eq!(overview.category_shares[0].count, 3);
        assert_eq!(overview.category_shares[0].percentage, 100);
    }

    #[test]
    fn test_empty_store_still_shows_seeded_tiles() {
        let overview = build_overview(
            &[],
            TimeWindow::Last7Days,
            Utc::now(),
            IssueStatsDto::default(),
            None,
        );

        assert_eq!(overview.issue_count, 0);
        assert!(overview.category_shares.is_empty());
        assert_eq!(overview.tiles.len(), SEEDED_AREAS.len());
        assert!(overview.markers.is_empty());
    }
}
