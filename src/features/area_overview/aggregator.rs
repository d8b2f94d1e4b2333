//! Pure aggregations over issue records for the area overview.
//!
//! Nothing here performs I/O or mutates its input. Location strings are used
//! verbatim as keys: case-sensitive, no trimming or normalization.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::features::issues::models::{Issue, IssueCategory, IssueStatus};
use crate::shared::constants::{CRITICAL_AGE_DAYS, WARNING_AGE_DAYS};

/// Areas always shown on the overview, even with no reports
pub const SEEDED_AREAS: [&str; 4] = [
    "MG Road, Block A",
    "Sector 4 Park",
    "Market Street",
    "Central Mall Area",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TimeWindow {
    #[serde(rename = "24h")]
    Last24Hours,
    #[default]
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "all")]
    All,
}

impl TimeWindow {
    /// Parse a window tag; unknown tags mean no filtering
    pub fn parse(tag: &str) -> Self {
        match tag {
            "24h" => TimeWindow::Last24Hours,
            "7d" => TimeWindow::Last7Days,
            "30d" => TimeWindow::Last30Days,
            _ => TimeWindow::All,
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        match self {
            TimeWindow::Last24Hours => Some(Duration::hours(24)),
            TimeWindow::Last7Days => Some(Duration::days(7)),
            TimeWindow::Last30Days => Some(Duration::days(30)),
            TimeWindow::All => None,
        }
    }

    /// Earliest `created_at` still inside the window
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.duration().map(|d| now - d)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Last24Hours => "Last 24 hours",
            TimeWindow::Last7Days => "Last 7 days",
            TimeWindow::Last30Days => "Last 30 days",
            TimeWindow::All => "All time",
        }
    }
}

/// Issues created at or after `now - window`, in input order
pub fn filter_by_window(
    issues: &[Issue],
    window: TimeWindow,
    now: DateTime<Utc>,
) -> Vec<&Issue> {
    match window.cutoff(now) {
        Some(cutoff) => issues.iter().filter(|i| i.created_at >= cutoff).collect(),
        None => issues.iter().collect(),
    }
}

pub fn count_by_category<'a, I>(issues: I) -> BTreeMap<IssueCategory, usize>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut counts = BTreeMap::new();
    for issue in issues {
        *counts.entry(issue.category).or_insert(0) += 1;
    }
    counts
}

pub fn count_by_location<'a, I>(issues: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut counts = BTreeMap::new();
    for issue in issues {
        *counts.entry(issue.location.clone()).or_insert(0) += 1;
    }
    counts
}

/// location -> category -> count; categories absent from an area are omitted
pub fn area_category_matrix<'a, I>(
    issues: I,
) -> BTreeMap<String, BTreeMap<IssueCategory, usize>>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut matrix: BTreeMap<String, BTreeMap<IssueCategory, usize>> = BTreeMap::new();
    for issue in issues {
        *matrix
            .entry(issue.location.clone())
            .or_default()
            .entry(issue.category)
            .or_insert(0) += 1;
    }
    matrix
}

/// Unresolved load of one area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AreaSeverity {
    pub count: usize,
    pub max_days_unresolved: i64,
}

impl AreaSeverity {
    pub fn tier(&self) -> SeverityTier {
        SeverityTier::classify(self.max_days_unresolved)
    }
}

/// Unresolved count and oldest age per area.
///
/// Every reported area gets an entry, even when all of its issues are resolved;
/// seeded areas are always included.
pub fn severity_by_area<'a, I>(issues: I) -> BTreeMap<String, AreaSeverity>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut severity: BTreeMap<String, AreaSeverity> = SEEDED_AREAS
        .iter()
        .map(|area| (area.to_string(), AreaSeverity::default()))
        .collect();

    for issue in issues {
        let entry = severity.entry(issue.location.clone()).or_default();
        if issue.status == IssueStatus::Resolved {
            continue;
        }
        entry.count += 1;
        entry.max_days_unresolved = entry
            .max_days_unresolved
            .max(issue.days_unresolved.unwrap_or(0));
    }

    severity
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Healthy,
    Warning,
    Critical,
}

impl SeverityTier {
    /// Critical strictly above 5 days, warning from 3 days inclusive
    pub fn classify(max_days_unresolved: i64) -> Self {
        if max_days_unresolved > CRITICAL_AGE_DAYS {
            SeverityTier::Critical
        } else if max_days_unresolved >= WARNING_AGE_DAYS {
            SeverityTier::Warning
        } else {
            SeverityTier::Healthy
        }
    }
}

/// Map marker colour: age first, then category
pub fn marker_color(issue: &Issue) -> &'static str {
    let age = issue.days_unresolved.unwrap_or(0);
    if age > CRITICAL_AGE_DAYS {
        return "#dc2626";
    }
    if age >= WARNING_AGE_DAYS {
        return "#f59e0b";
    }
    match issue.category {
        IssueCategory::Waste => "#84cc16",
        IssueCategory::Water => "#3b82f6",
        IssueCategory::Air => "#8b5cf6",
        IssueCategory::Transport => "#f97316",
        IssueCategory::Energy => "#ec4899",
        _ => "#6b7280",
    }
}

/// Text before the first comma, for compact tiles
pub fn short_area_name(location: &str) -> &str {
    location.split(',').next().unwrap_or(location).trim()
}

/// Rounded share of `count` in `total`; 0 when there is nothing to share
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::issue_fixture;
    use fake::{Fake, Faker};

    fn aged(
        category: IssueCategory,
        location: &str,
        status: IssueStatus,
        days: i64,
        now: DateTime<Utc>,
    ) -> Issue {
        issue_fixture(category, location, status, now - Duration::days(days)).aged(now)
    }

    #[test]
    fn test_window_parse() {
        assert_eq!(TimeWindow::parse("24h"), TimeWindow::Last24Hours);
        assert_eq!(TimeWindow::parse("7d"), TimeWindow::Last7Days);
        assert_eq!(TimeWindow::parse("30d"), TimeWindow::Last30Days);
        assert_eq!(TimeWindow::parse("all"), TimeWindow::All);
        assert_eq!(TimeWindow::parse("fortnight"), TimeWindow::All);
        assert_eq!(TimeWindow::default(), TimeWindow::Last7Days);
    }

    #[test]
    fn test_filter_by_window_keeps_order_and_boundary() {
        let now = Utc::now();
        let issues = vec![
            issue_fixture(
                IssueCategory::Water,
                "A",
                IssueStatus::Pending,
                now - Duration::hours(2),
            ),
            issue_fixture(
                IssueCategory::Air,
                "B",
                IssueStatus::Pending,
                now - Duration::days(3),
            ),
            issue_fixture(
                IssueCategory::Waste,
                "C",
                IssueStatus::Pending,
                now - Duration::hours(24),
            ),
        ];

        let last_day = filter_by_window(&issues, TimeWindow::Last24Hours, now);
        let locations: Vec<&str> = last_day.iter().map(|i| i.location.as_str()).collect();
        assert_eq!(locations, vec!["A", "C"]);

        assert_eq!(filter_by_window(&issues, TimeWindow::Last7Days, now).len(), 3);
    }

    #[test]
    fn test_filter_all_is_identity_for_any_now() {
        let now = Utc::now();
        let issues = vec![
            issue_fixture(
                IssueCategory::Water,
                "A",
                IssueStatus::Pending,
                now - Duration::days(400),
            ),
            issue_fixture(
                IssueCategory::Air,
                "B",
                IssueStatus::Resolved,
                now + Duration::days(2),
            ),
        ];

        for at in [now, now - Duration::days(1000), now + Duration::days(1000)] {
            let kept = filter_by_window(&issues, TimeWindow::All, at);
            assert_eq!(kept.len(), issues.len());
            assert!(kept.iter().zip(issues.iter()).all(|(a, b)| a.id == b.id));
        }
    }

    #[test]
    fn test_category_counts_sum_to_input_length() {
        let now = Utc::now();
        let issues: Vec<Issue> = (0..(5..40).fake::<usize>())
            .map(|_| {
                let category = IssueCategory::ALL[(0..IssueCategory::ALL.len()).fake::<usize>()];
                let location: String = Faker.fake();
                let days = (0..60).fake::<i64>();
                aged(category, &location, IssueStatus::Pending, days, now)
            })
            .collect();

        let filtered = filter_by_window(&issues, TimeWindow::Last30Days, now);
        let counts = count_by_category(filtered.iter().copied());
        assert_eq!(counts.values().sum::<usize>(), filtered.len());
    }

    #[test]
    fn test_location_counts_are_case_sensitive() {
        let now = Utc::now();
        let issues = vec![
            aged(IssueCategory::Waste, "Market Street", IssueStatus::Pending, 1, now),
            aged(IssueCategory::Waste, "market street", IssueStatus::Pending, 1, now),
            aged(IssueCategory::Water, "Market Street", IssueStatus::Pending, 1, now),
        ];

        let counts = count_by_location(&issues);
        assert_eq!(counts.get("Market Street"), Some(&2));
        assert_eq!(counts.get("market street"), Some(&1));
    }

    #[test]
    fn test_matrix_omits_absent_categories() {
        let now = Utc::now();
        let issues = vec![
            aged(IssueCategory::Waste, "X", IssueStatus::Pending, 1, now),
            aged(IssueCategory::Waste, "X", IssueStatus::Resolved, 1, now),
            aged(IssueCategory::Energy, "Y", IssueStatus::Pending, 1, now),
        ];

        let matrix = area_category_matrix(&issues);
        assert_eq!(matrix["X"].len(), 1);
        assert_eq!(matrix["X"][&IssueCategory::Waste], 2);
        assert_eq!(matrix["Y"][&IssueCategory::Energy], 1);
        assert!(!matrix["Y"].contains_key(&IssueCategory::Waste));
    }

    #[test]
    fn test_empty_input() {
        let issues: Vec<Issue> = Vec::new();
        assert!(count_by_category(&issues).is_empty());
        assert!(count_by_location(&issues).is_empty());
        assert!(area_category_matrix(&issues).is_empty());

        let severity = severity_by_area(&issues);
        assert_eq!(severity.len(), SEEDED_AREAS.len());
        for area in SEEDED_AREAS {
            assert_eq!(severity[area], AreaSeverity::default());
        }
    }

    #[test]
    fn test_resolved_issues_never_count_toward_severity() {
        let now = Utc::now();
        let issues = vec![
            aged(IssueCategory::Waste, "X", IssueStatus::Pending, 7, now),
            aged(IssueCategory::Waste, "X", IssueStatus::Resolved, 10, now),
            aged(IssueCategory::Roads, "Z", IssueStatus::Resolved, 30, now),
        ];

        let severity = severity_by_area(&issues);
        assert_eq!(
            severity["X"],
            AreaSeverity {
                count: 1,
                max_days_unresolved: 7
            }
        );
        assert_eq!(severity["X"].tier(), SeverityTier::Critical);
        assert_eq!(severity["Z"], AreaSeverity::default());
        assert_eq!(severity["Z"].tier(), SeverityTier::Healthy);
    }

    #[test]
    fn test_stale_age_on_resolved_issue_is_ignored() {
        let now = Utc::now();
        let mut resolved = issue_fixture(
            IssueCategory::Waste,
            "X",
            IssueStatus::Resolved,
            now - Duration::days(10),
        );
        resolved.days_unresolved = Some(10);
        let issues = vec![
            resolved,
            aged(IssueCategory::Waste, "X", IssueStatus::Pending, 7, now),
        ];

        let severity = severity_by_area(&issues);
        assert_eq!(
            severity["X"],
            AreaSeverity {
                count: 1,
                max_days_unresolved: 7
            }
        );
    }

    #[test]
    fn test_missing_age_counts_as_zero() {
        let issue = issue_fixture(
            IssueCategory::Air,
            "Sector 4 Park",
            IssueStatus::InProgress,
            Utc::now(),
        );
        assert!(issue.days_unresolved.is_none());

        let severity = severity_by_area([&issue]);
        assert_eq!(
            severity["Sector 4 Park"],
            AreaSeverity {
                count: 1,
                max_days_unresolved: 0
            }
        );
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(SeverityTier::classify(6), SeverityTier::Critical);
        assert_eq!(SeverityTier::classify(5), SeverityTier::Warning);
        assert_eq!(SeverityTier::classify(3), SeverityTier::Warning);
        assert_eq!(SeverityTier::classify(2), SeverityTier::Healthy);
        assert_eq!(SeverityTier::classify(0), SeverityTier::Healthy);
    }

    #[test]
    fn test_marker_colors() {
        let now = Utc::now();
        assert_eq!(
            marker_color(&aged(IssueCategory::Water, "X", IssueStatus::Pending, 6, now)),
            "#dc2626"
        );
        assert_eq!(
            marker_color(&aged(IssueCategory::Water, "X", IssueStatus::Pending, 3, now)),
            "#f59e0b"
        );
        assert_eq!(
            marker_color(&aged(IssueCategory::Water, "X", IssueStatus::Pending, 1, now)),
            "#3b82f6"
        );
        assert_eq!(
            marker_color(&aged(IssueCategory::Health, "X", IssueStatus::Pending, 0, now)),
            "#6b7280"
        );
        assert_eq!(
            marker_color(&aged(IssueCategory::Waste, "X", IssueStatus::Resolved, 9, now)),
            "#84cc16"
        );
    }

    #[test]
    fn test_short_area_name_and_percentage() {
        assert_eq!(short_area_name("MG Road, Block A"), "MG Road");
        assert_eq!(short_area_name("Market Street"), "Market Street");
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(4, 0), 0);
    }
}
