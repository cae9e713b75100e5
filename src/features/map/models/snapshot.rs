use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Cluster, StatsSummary};
use crate::features::issues::models::Coordinates;

/// Bounding box in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl Bounds {
    pub fn contains(&self, point: Coordinates) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }

    /// `[min_lat, min_lng, max_lat, max_lng]`
    pub fn as_array(&self) -> [f64; 4] {
        [self.min_lat, self.min_lng, self.max_lat, self.max_lng]
    }
}

/// Output of one recompute: markers plus the stats derived with them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSnapshot {
    pub clusters: Vec<Cluster>,
    pub stats: StatsSummary,
    /// Issues that passed the filter
    pub filtered_count: usize,
    /// Filtered issues dropped for a missing or malformed location
    pub excluded_count: usize,
    pub bounds: Option<Bounds>,
    pub generated_at: DateTime<Utc>,
}

impl MapSnapshot {
    pub fn empty(generated_at: DateTime<Utc>) -> Self {
        Self {
            clusters: Vec::new(),
            stats: StatsSummary::default(),
            filtered_count: 0,
            excluded_count: 0,
            bounds: None,
            generated_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Number of issues actually placed on the map
    pub fn plotted_count(&self) -> usize {
        self.clusters.iter().map(Cluster::count).sum()
    }

    pub fn find_cluster(&self, issue_id: &str) -> Option<&Cluster> {
        self.clusters
            .iter()
            .find(|c| c.members().iter().any(|m| m.id == issue_id))
    }
}
