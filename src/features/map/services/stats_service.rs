use chrono::{DateTime, Duration, Utc};

use crate::features::issues::models::{IssueReport, IssueStatus};
use crate::features::map::models::{Cluster, RecentActivity, StatsSummary};
use crate::shared::constants::RECENT_ACTIVITY_WINDOW_HOURS;

/// Tally the filtered issues and count priority areas among the clusters.
///
/// `now` anchors the recent-activity window.
pub fn summarize<'a>(
    filtered: impl IntoIterator<Item = &'a IssueReport>,
    clusters: &[Cluster],
    priority_area_min_issues: usize,
    now: DateTime<Utc>,
) -> StatsSummary {
    let recent_cutoff = now - Duration::hours(RECENT_ACTIVITY_WINDOW_HOURS);
    let is_recent = |at: Option<DateTime<Utc>>| at.is_some_and(|t| t >= recent_cutoff && t <= now);

    let mut stats = StatsSummary::default();

    for issue in filtered {
        stats.total += 1;

        if issue.status.is_active() {
            stats.active += 1;
        }
        match issue.status {
            IssueStatus::InProgress => stats.in_progress += 1,
            IssueStatus::Resolved => stats.resolved += 1,
            _ => {}
        }

        *stats.by_category.entry(issue.category).or_insert(0) += 1;
        *stats.by_status.entry(issue.status).or_insert(0) += 1;
        *stats
            .by_priority
            .entry(issue.effective_priority())
            .or_insert(0) += 1;

        if is_recent(Some(issue.created_at)) {
            stats.recent.new_reports += 1;
        }
        if is_recent(issue.resolved_at) {
            stats.recent.recently_resolved += 1;
        }
        if is_recent(issue.updated_at) {
            stats.recent.recently_updated += 1;
        }
    }

    stats.priority_area_count = priority_areas(clusters, priority_area_min_issues).count();

    stats
}

/// Clusters dense enough to be highlighted on the map
pub fn priority_areas(
    clusters: &[Cluster],
    priority_area_min_issues: usize,
) -> impl Iterator<Item = &Cluster> {
    clusters
        .iter()
        .filter(move |c| c.is_priority_area(priority_area_min_issues))
}

impl RecentActivity {
    pub fn is_quiet(&self) -> bool {
        self.new_reports == 0 && self.recently_resolved == 0 && self.recently_updated == 0
    }
}
