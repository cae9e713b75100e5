//! Greedy single-linkage grouping of issues into map markers.
//!
//! Each unprocessed issue, in input order, becomes a seed and absorbs every
//! later unprocessed issue strictly closer than the threshold **to the seed**.
//! Membership is not transitive: an issue near a folded member but outside the
//! threshold of the seed stays out and may seed its own cluster later. This is
//! a known approximation of connected-components clustering and is kept as-is
//! because marker layout depends on it.
//!
//! Runs in O(n^2) over the filtered issues, which is fine for municipal data
//! sets in the hundreds but will not scale to large imports.

use crate::features::issues::models::{Coordinates, IssueReport};
use crate::features::map::models::Cluster;
use crate::features::map::services::geometry;

/// Group issues by proximity. Issues without usable coordinates are skipped.
pub fn cluster(issues: Vec<IssueReport>, threshold: f64) -> Vec<Cluster> {
    let points: Vec<Option<Coordinates>> = issues
        .iter()
        .map(|issue| issue.location.coordinates())
        .collect();
    // A taken slot is a processed issue
    let mut slots: Vec<Option<IssueReport>> = issues.into_iter().map(Some).collect();
    let mut clusters = Vec::new();

    for index in 0..slots.len() {
        let Some(seed_point) = points[index] else {
            continue;
        };
        let Some(seed) = slots[index].take() else {
            continue;
        };

        let mut current = Cluster::new(seed, seed_point);

        for other in (index + 1)..slots.len() {
            let Some(point) = points[other] else {
                continue;
            };
            if !geometry::within(seed_point, point, threshold) {
                continue;
            }
            if let Some(member) = slots[other].take() {
                current.push(member);
            }
        }

        clusters.push(current);
    }

    tracing::debug!(
        "Clustered {} issues into {} markers (threshold {})",
        points.len(),
        clusters.len(),
        threshold
    );

    clusters
}

/// One marker per issue, used when clustering is switched off
pub fn singletons(issues: Vec<IssueReport>) -> Vec<Cluster> {
    issues
        .into_iter()
        .filter_map(|issue| {
            let point = issue.location.coordinates()?;
            Some(Cluster::new(issue, point))
        })
        .collect()
}

/// Members of every cluster, cluster by cluster in discovery order
pub fn flatten(clusters: Vec<Cluster>) -> Vec<IssueReport> {
    clusters.into_iter().flat_map(Cluster::into_members).collect()
}
