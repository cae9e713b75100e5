// =============================================================================
// MAP AGGREGATION
// =============================================================================

/// Default clustering radius in degree space (roughly 100m at mid-latitudes)
pub const DEFAULT_CLUSTER_THRESHOLD_DEGREES: f64 = 0.001;

/// A cluster with at least this many issues is flagged as a priority area
pub const PRIORITY_AREA_MIN_ISSUES: usize = 5;

/// Window used for the "recent activity" counters
pub const RECENT_ACTIVITY_WINDOW_HOURS: i64 = 24;

// =============================================================================
// ISSUE REPORTS
// =============================================================================

/// Prefix for issue ids generated when a submission carries none
pub const ISSUE_ID_PREFIX: &str = "ISS";
