use chrono::{DateTime, Utc};

use crate::features::issues::models::IssueReport;
use crate::features::map::models::FilterSpec;

/// True when the issue passes every dimension of the filter.
///
/// `now` anchors the relative date window and is passed in so the check stays pure.
pub fn matches(issue: &IssueReport, filter: &FilterSpec, now: DateTime<Utc>) -> bool {
    let category_match =
        filter.categories.is_empty() || filter.categories.contains(&issue.category);
    let status_match = filter.statuses.is_empty() || filter.statuses.contains(&issue.status);
    let date_match = filter
        .date_range
        .cutoff(now)
        .map_or(true, |cutoff| issue.created_at >= cutoff);

    category_match && status_match && date_match
}

/// Matching issues in their original order
pub fn filter_issues<'a>(
    issues: &'a [IssueReport],
    filter: &FilterSpec,
    now: DateTime<Utc>,
) -> Vec<&'a IssueReport> {
    issues
        .iter()
        .filter(|issue| matches(issue, filter, now))
        .collect()
}
