use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::features::issues::models::{IssueCategory, IssueStatus};

/// Relative date window applied to `created_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateRange {
    #[default]
    All,
    LastDays(u32),
}

impl DateRange {
    pub const LAST_7_DAYS: DateRange = DateRange::LastDays(7);
    pub const LAST_30_DAYS: DateRange = DateRange::LastDays(30);
    pub const LAST_90_DAYS: DateRange = DateRange::LastDays(90);

    /// Earliest accepted `created_at`, or `None` when the window is unbounded.
    ///
    /// A window reaching past the representable date range is unbounded too.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            DateRange::All => None,
            DateRange::LastDays(days) => Duration::try_days(i64::from(*days))
                .and_then(|window| now.checked_sub_signed(window)),
        }
    }

    pub fn label(&self) -> String {
        match self {
            DateRange::All => "All Time".to_string(),
            DateRange::LastDays(90) => "Last 3 Months".to_string(),
            DateRange::LastDays(days) => format!("Last {} Days", days),
        }
    }
}

impl From<&str> for DateRange {
    /// Parses `all` or `<N>d`. Anything else means no restriction so a bad
    /// control value never blanks the map.
    fn from(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case("all") {
            return DateRange::All;
        }

        match token
            .strip_suffix('d')
            .and_then(|days| days.parse::<u32>().ok())
        {
            Some(days) if days > 0 => DateRange::LastDays(days),
            _ => {
                tracing::warn!("Unrecognized date range '{}', showing all dates", token);
                DateRange::All
            }
        }
    }
}

impl From<String> for DateRange {
    fn from(token: String) -> Self {
        DateRange::from(token.as_str())
    }
}

impl From<DateRange> for String {
    fn from(range: DateRange) -> Self {
        range.to_string()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateRange::All => write!(f, "all"),
            DateRange::LastDays(days) => write!(f, "{}d", days),
        }
    }
}

/// Category/status/date restriction currently applied by the user.
///
/// An empty set means "no restriction" for that dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub categories: BTreeSet<IssueCategory>,
    #[serde(default)]
    pub statuses: BTreeSet<IssueStatus>,
    #[serde(default)]
    pub date_range: DateRange,
}

impl FilterSpec {
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = IssueCategory>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = IssueStatus>) -> Self {
        self.statuses.extend(statuses);
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    /// Checkbox toggle for one category
    pub fn toggle_category(&mut self, category: IssueCategory, checked: bool) {
        if checked {
            self.categories.insert(category);
        } else {
            self.categories.remove(&category);
        }
    }

    /// Checkbox toggle for one status
    pub fn toggle_status(&mut self, status: IssueStatus, checked: bool) {
        if checked {
            self.statuses.insert(status);
        } else {
            self.statuses.remove(&status);
        }
    }

    /// Number shown on the filter panel badge
    pub fn active_filter_count(&self) -> usize {
        let date = usize::from(self.date_range != DateRange::All);
        self.categories.len() + self.statuses.len() + date
    }

    pub fn is_identity(&self) -> bool {
        self.active_filter_count() == 0
    }

    pub fn clear(&mut self) {
        *self = FilterSpec::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_range_presets_parse() {
        assert_eq!(DateRange::from("all"), DateRange::All);
        assert_eq!(DateRange::from("7d"), DateRange::LAST_7_DAYS);
        assert_eq!(DateRange::from("30d"), DateRange::LAST_30_DAYS);
        assert_eq!(DateRange::from("90d"), DateRange::LAST_90_DAYS);
        assert_eq!(DateRange::from("14d"), DateRange::LastDays(14));
    }

    #[test]
    fn test_unrecognized_date_range_fails_open() {
        assert_eq!(DateRange::from("yesterday"), DateRange::All);
        assert_eq!(DateRange::from("0d"), DateRange::All);
        assert_eq!(DateRange::from("-3d"), DateRange::All);
        assert_eq!(DateRange::from(""), DateRange::All);

        let filter: FilterSpec = serde_json::from_str(r#"{ "date_range": "fortnight" }"#).unwrap();
        assert_eq!(filter.date_range, DateRange::All);
    }

    #[test]
    fn test_window_past_the_calendar_is_unbounded() {
        let now = Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap();

        let filter: FilterSpec = serde_json::from_str(r#"{ "date_range": "100000000d" }"#).unwrap();
        assert_eq!(filter.date_range, DateRange::LastDays(100_000_000));
        assert_eq!(filter.date_range.cutoff(now), None);
        assert_eq!(DateRange::LastDays(u32::MAX).cutoff(now), None);
    }

    #[test]
    fn test_date_range_serializes_as_token() {
        let json = serde_json::to_string(&DateRange::LAST_30_DAYS).unwrap();
        assert_eq!(json, "\"30d\"");
        assert_eq!(DateRange::LAST_90_DAYS.label(), "Last 3 Months");
        assert_eq!(DateRange::LAST_7_DAYS.label(), "Last 7 Days");
    }

    #[test]
    fn test_cutoff() {
        let now = Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap();
        assert_eq!(DateRange::All.cutoff(now), None);
        assert_eq!(
            DateRange::LAST_7_DAYS.cutoff(now),
            Some(Utc.with_ymd_and_hms(2025, 1, 24, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_missing_dimensions_mean_no_restriction() {
        let filter: FilterSpec = serde_json::from_str("{}").unwrap();
        assert!(filter.is_identity());
        assert_eq!(filter, FilterSpec::default());
    }

    #[test]
    fn test_active_filter_count_and_clear() {
        let mut filter = FilterSpec::default()
            .with_categories([IssueCategory::Pothole, IssueCategory::Water])
            .with_statuses([IssueStatus::Resolved])
            .with_date_range(DateRange::LAST_30_DAYS);
        assert_eq!(filter.active_filter_count(), 4);

        filter.toggle_category(IssueCategory::Water, false);
        filter.toggle_status(IssueStatus::Submitted, true);
        assert_eq!(filter.active_filter_count(), 4);

        filter.clear();
        assert!(filter.is_identity());
    }
}
