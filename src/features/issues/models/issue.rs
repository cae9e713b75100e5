use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::IssueLocation;

/// Issue category as offered by the reporting form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Pothole,
    Streetlight,
    Trash,
    Water,
    Traffic,
    /// Also absorbs category tokens this build does not know about
    #[serde(other)]
    Other,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 6] = [
        IssueCategory::Pothole,
        IssueCategory::Streetlight,
        IssueCategory::Trash,
        IssueCategory::Water,
        IssueCategory::Traffic,
        IssueCategory::Other,
    ];

    /// Label shown next to the category checkbox and in the map legend
    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::Pothole => "Potholes",
            IssueCategory::Streetlight => "Street Lights",
            IssueCategory::Trash => "Trash/Sanitation",
            IssueCategory::Water => "Water Issues",
            IssueCategory::Traffic => "Traffic Signals",
            IssueCategory::Other => "Other Issues",
        }
    }
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueCategory::Pothole => write!(f, "pothole"),
            IssueCategory::Streetlight => write!(f, "streetlight"),
            IssueCategory::Trash => write!(f, "trash"),
            IssueCategory::Water => write!(f, "water"),
            IssueCategory::Traffic => write!(f, "traffic"),
            IssueCategory::Other => write!(f, "other"),
        }
    }
}

/// Issue lifecycle status; transitions are applied by the staff workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    Submitted,
    Acknowledged,
    InProgress,
    Resolved,
    Closed,
    Rejected,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 6] = [
        IssueStatus::Submitted,
        IssueStatus::Acknowledged,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
        IssueStatus::Closed,
        IssueStatus::Rejected,
    ];

    /// Submitted, acknowledged and in-progress issues still need work
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            IssueStatus::Submitted | IssueStatus::Acknowledged | IssueStatus::InProgress
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Submitted => "Submitted",
            IssueStatus::Acknowledged => "Acknowledged",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
            IssueStatus::Closed => "Closed",
            IssueStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueStatus::Submitted => write!(f, "submitted"),
            IssueStatus::Acknowledged => write!(f, "acknowledged"),
            IssueStatus::InProgress => write!(f, "in-progress"),
            IssueStatus::Resolved => write!(f, "resolved"),
            IssueStatus::Closed => write!(f, "closed"),
            IssueStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Priority picked by the reporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssuePriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl std::fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssuePriority::Low => write!(f, "low"),
            IssuePriority::Medium => write!(f, "medium"),
            IssuePriority::High => write!(f, "high"),
            IssuePriority::Urgent => write!(f, "urgent"),
        }
    }
}

/// A geotagged issue report. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueReport {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: IssueCategory,
    pub status: IssueStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<IssuePriority>,
    pub location: IssueLocation,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_by: Option<String>,
    #[serde(default)]
    pub votes: u32,
}

impl IssueReport {
    /// Missing priority is treated as normal
    pub fn effective_priority(&self) -> IssuePriority {
        self.priority.unwrap_or(IssuePriority::Medium)
    }
}
