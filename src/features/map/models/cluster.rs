use serde::Serialize;

use crate::features::issues::models::{Coordinates, IssueReport};

/// One map marker: a seed issue plus every issue folded into it.
///
/// Always holds at least one member. Rebuilt from scratch on every recompute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    members: Vec<IssueReport>,
    /// Marker position; the seed's location
    centroid: Coordinates,
}

impl Cluster {
    pub fn new(seed: IssueReport, centroid: Coordinates) -> Self {
        Self {
            members: vec![seed],
            centroid,
        }
    }

    pub(crate) fn push(&mut self, member: IssueReport) {
        self.members.push(member);
    }

    /// Members in discovery order; the seed comes first
    pub fn members(&self) -> &[IssueReport] {
        &self.members
    }

    pub fn into_members(self) -> Vec<IssueReport> {
        self.members
    }

    pub fn seed(&self) -> &IssueReport {
        &self.members[0]
    }

    pub fn centroid(&self) -> Coordinates {
        self.centroid
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_cluster(&self) -> bool {
        self.members.len() > 1
    }

    pub fn is_priority_area(&self, min_issues: usize) -> bool {
        self.count() >= min_issues
    }

    pub fn title(&self) -> String {
        if self.is_cluster() {
            format!("{} Issues in Area", self.count())
        } else {
            self.seed().title.clone()
        }
    }

    pub fn summary(&self) -> Option<String> {
        if self.is_cluster() {
            Some("Multiple issues reported in this location".to_string())
        } else {
            self.seed().description.clone()
        }
    }

    pub fn member_ids(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.id.as_str()).collect()
    }
}
