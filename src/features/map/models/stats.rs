use std::collections::BTreeMap;

use serde::Serialize;

use crate::features::issues::models::{IssueCategory, IssuePriority, IssueStatus};

/// Last-24h counters shown under "Recent Activity"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RecentActivity {
    pub new_reports: usize,
    pub recently_resolved: usize,
    pub recently_updated: usize,
}

/// Dashboard numbers derived from the filtered issues and their clusters
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatsSummary {
    pub total: usize,
    /// Submitted, acknowledged or in progress
    pub active: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub by_category: BTreeMap<IssueCategory, usize>,
    pub by_status: BTreeMap<IssueStatus, usize>,
    pub by_priority: BTreeMap<IssuePriority, usize>,
    pub priority_area_count: usize,
    pub recent: RecentActivity,
}

impl StatsSummary {
    pub fn category_count(&self, category: IssueCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    pub fn status_count(&self, status: IssueStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn priority_count(&self, priority: IssuePriority) -> usize {
        self.by_priority.get(&priority).copied().unwrap_or(0)
    }
}
