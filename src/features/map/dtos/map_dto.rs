use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::issues::models::{IssueCategory, IssueStatus};
use crate::features::map::models::{Cluster, StatsSummary};
use crate::features::map::services::MapSession;

// ============================================================================
// Markers
// ============================================================================

/// How the rendering surface draws a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// Single issue, colored by category
    Pin,
    /// Numbered badge for a group of issues
    Badge,
}

/// Marker handed to the rendering surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarkerDto {
    /// Issue id for pins, `cluster-<index>` for badges
    pub key: String,
    pub kind: MarkerKind,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub summary: Option<String>,
    pub count: usize,
    pub is_cluster: bool,
    pub is_priority_area: bool,
    /// Set for pins only
    pub category: Option<IssueCategory>,
    /// Set for pins only
    pub status: Option<IssueStatus>,
    pub category_label: Option<String>,
    pub status_label: Option<String>,
    pub issue_ids: Vec<String>,
}

impl MapMarkerDto {
    pub fn from_cluster(index: usize, cluster: &Cluster, priority_area_min_issues: usize) -> Self {
        let centroid = cluster.centroid();
        let seed = cluster.seed();
        let (key, kind, category, status) = if cluster.is_cluster() {
            (format!("cluster-{}", index), MarkerKind::Badge, None, None)
        } else {
            (
                seed.id.clone(),
                MarkerKind::Pin,
                Some(seed.category),
                Some(seed.status),
            )
        };

        Self {
            key,
            kind,
            lat: centroid.lat,
            lng: centroid.lng,
            title: cluster.title(),
            summary: cluster.summary(),
            count: cluster.count(),
            is_cluster: cluster.is_cluster(),
            is_priority_area: cluster.is_priority_area(priority_area_min_issues),
            category,
            status,
            category_label: category.map(|c| c.label().to_string()),
            status_label: status.map(|s| s.label().to_string()),
            issue_ids: cluster.members().iter().map(|m| m.id.clone()).collect(),
        }
    }
}

// ============================================================================
// Map View
// ============================================================================

/// Everything the map page renders after one recompute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapViewDto {
    pub markers: Vec<MapMarkerDto>,
    /// Keys of the markers highlighted as priority areas
    pub priority_area_keys: Vec<String>,
    pub stats: StatsSummary,
    pub filtered_count: usize,
    pub excluded_count: usize,
    /// Bounding box [min_lat, min_lng, max_lat, max_lng]
    pub bounds: Option<[f64; 4]>,
    /// Badge count on the filter panel
    pub active_filter_count: usize,
    pub date_range_label: String,
    /// Shown as "No issues found matching current filters"
    pub is_empty: bool,
    pub generated_at: DateTime<Utc>,
}

impl MapViewDto {
    pub fn from_session(session: &MapSession) -> Self {
        let snapshot = session.snapshot();
        let priority_min = session.config().priority_area_min_issues;

        let markers: Vec<MapMarkerDto> = snapshot
            .clusters
            .iter()
            .enumerate()
            .map(|(index, cluster)| MapMarkerDto::from_cluster(index, cluster, priority_min))
            .collect();
        let priority_area_keys = markers
            .iter()
            .filter(|m| m.is_priority_area)
            .map(|m| m.key.clone())
            .collect();

        Self {
            markers,
            priority_area_keys,
            stats: snapshot.stats.clone(),
            filtered_count: snapshot.filtered_count,
            excluded_count: snapshot.excluded_count,
            bounds: snapshot.bounds.map(|b| b.as_array()),
            active_filter_count: session.filter().active_filter_count(),
            date_range_label: session.filter().date_range.label(),
            is_empty: snapshot.is_empty(),
            generated_at: snapshot.generated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MapConfig;
    use crate::features::issues::services::InMemoryIssueSource;
    use crate::features::map::services::FixedClock;
    use crate::shared::test_helpers::{fixed_now, pothole_at};

    fn demo_session() -> MapSession {
        let mut session =
            MapSession::with_clock(MapConfig::default(), Box::new(FixedClock(fixed_now())))
                .unwrap();
        session.reload(&InMemoryIssueSource::demo()).unwrap();
        session
    }

    #[test]
    fn test_demo_view_markers() {
        let view = MapViewDto::from_session(&demo_session());

        assert_eq!(view.markers.len(), 3);
        assert!(!view.is_empty);
        assert_eq!(view.active_filter_count, 0);

        let first = &view.markers[0];
        assert_eq!(first.kind, MarkerKind::Badge);
        assert_eq!(first.key, "cluster-0");
        assert_eq!(first.title, "3 Issues in Area");
        assert_eq!(first.issue_ids, vec!["ISS-001", "ISS-002", "ISS-003"]);
        assert_eq!(first.category, None);
        assert!(!first.is_priority_area);

        let pin = &view.markers[2];
        assert_eq!(pin.kind, MarkerKind::Pin);
        assert_eq!(pin.key, "ISS-005");
        assert_eq!(pin.title, "Traffic light malfunction");
        assert_eq!(pin.category, Some(IssueCategory::Traffic));
        assert_eq!(pin.status, Some(IssueStatus::Resolved));
        assert_eq!(pin.category_label.as_deref(), Some("Traffic Signals"));
        assert_eq!(
            pin.summary.as_deref(),
            Some("Traffic light stuck on red in all directions, causing major traffic delays during rush hour.")
        );
        assert_eq!(first.category_label, None);
        assert_eq!(view.date_range_label, "All Time");
    }

    #[test]
    fn test_view_serializes_for_rendering() {
        let view = MapViewDto::from_session(&demo_session());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["markers"][0]["kind"], "badge");
        assert_eq!(json["markers"][2]["kind"], "pin");
        assert_eq!(json["stats"]["by_status"]["in-progress"], 2);
        assert_eq!(json["stats"]["by_category"]["pothole"], 1);
        assert_eq!(json["bounds"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_priority_areas_are_listed_by_key() {
        let mut session =
            MapSession::with_clock(MapConfig::default(), Box::new(FixedClock(fixed_now())))
                .unwrap();
        let mut issues: Vec<_> = (0..5)
            .map(|i| pothole_at(&format!("ISS-20{}", i), 40.7128, -74.0060 + i as f64 * 0.0001))
            .collect();
        issues.push(pothole_at("ISS-299", 40.9, -73.5));
        session.set_issues(issues).unwrap();

        let view = MapViewDto::from_session(&session);
        assert_eq!(view.markers.len(), 2);
        assert_eq!(view.priority_area_keys, vec!["cluster-0"]);
        assert!(view.markers[0].is_priority_area);
        assert!(!view.markers[1].is_priority_area);

        assert!(MapViewDto::from_session(&demo_session())
            .priority_area_keys
            .is_empty());
    }

    #[test]
    fn test_empty_view() {
        let mut session = demo_session();
        session
            .update_filter(|f| f.toggle_status(IssueStatus::Rejected, true))
            .unwrap();
        let view = MapViewDto::from_session(&session);

        assert!(view.is_empty);
        assert!(view.markers.is_empty());
        assert_eq!(view.bounds, None);
        assert_eq!(view.active_filter_count, 1);
    }
}
