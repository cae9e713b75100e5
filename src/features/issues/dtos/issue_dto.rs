use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::issues::models::{
    IssueCategory, IssueLocation, IssuePriority, IssueReport, IssueStatus,
};
use crate::shared::constants::ISSUE_ID_PREFIX;

/// Submission produced by the issue-reporting form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateIssueReport {
    /// Client-assigned id; generated when absent
    #[validate(regex(
        path = "*crate::shared::validation::ISSUE_ID_REGEX",
        message = "Issue id must look like ISS-001"
    ))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub category: IssueCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<IssuePriority>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub lng: f64,

    #[validate(length(max = 256, message = "Address must not exceed 256 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[validate(range(min = 0.0, message = "Accuracy must not be negative"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_meters: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_by: Option<String>,
}

impl CreateIssueReport {
    /// Validate the submission and turn it into a freshly submitted issue
    pub fn into_issue(self, submitted_at: DateTime<Utc>) -> Result<IssueReport> {
        self.validate()?;

        // NaN slips through range checks
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(AppError::Validation(
                "Coordinates must be finite numbers".to_string(),
            ));
        }

        if self.title.trim().is_empty() {
            return Err(AppError::Validation("Title must not be blank".to_string()));
        }

        let id = self.id.unwrap_or_else(generate_issue_id);

        Ok(IssueReport {
            id,
            title: self.title.trim().to_string(),
            description: self.description.filter(|d| !d.trim().is_empty()),
            category: self.category,
            status: IssueStatus::Submitted,
            priority: self.priority,
            location: IssueLocation {
                lat: Some(self.lat),
                lng: Some(self.lng),
                address: self.address,
                accuracy_meters: self.accuracy_meters,
            },
            created_at: submitted_at,
            updated_at: None,
            resolved_at: None,
            reported_by: self.reported_by,
            votes: 0,
        })
    }
}

fn generate_issue_id() -> String {
    let simple = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{}-{}", ISSUE_ID_PREFIX, &simple[..8])
}
