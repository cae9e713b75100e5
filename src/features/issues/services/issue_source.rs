use std::fs;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};

use crate::core::error::{AppError, Result};
use crate::features::issues::models::{
    IssueCategory, IssueLocation, IssuePriority, IssueReport, IssueStatus,
};

/// Where the map gets its issue snapshot from.
///
/// In a real deployment this would be a query result; the portal ships with
/// an in-memory demo set and a JSON file loader.
pub trait IssueSource {
    /// Short name used in log lines
    fn name(&self) -> &str;

    fn load_issues(&self) -> Result<Vec<IssueReport>>;

    fn find_issue(&self, id: &str) -> Result<IssueReport> {
        self.load_issues()?
            .into_iter()
            .find(|issue| issue.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Issue {} not found", id)))
    }
}

/// Issue list held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueSource {
    issues: Vec<IssueReport>,
}

impl InMemoryIssueSource {
    pub fn new(issues: Vec<IssueReport>) -> Self {
        Self { issues }
    }

    /// The six-issue lower Manhattan dataset the portal demos with
    pub fn demo() -> Self {
        Self::new(demo_issues())
    }
}

impl IssueSource for InMemoryIssueSource {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn load_issues(&self) -> Result<Vec<IssueReport>> {
        Ok(self.issues.clone())
    }
}

/// Issue list stored as a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileIssueSource {
    path: PathBuf,
}

impl JsonFileIssueSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IssueSource for JsonFileIssueSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn load_issues(&self) -> Result<Vec<IssueReport>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            tracing::error!("Failed to read issues file {}: {:?}", self.path.display(), e);
            AppError::Io(e)
        })?;

        let issues: Vec<IssueReport> = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Failed to parse issues file {}: {}", self.path.display(), e);
            AppError::Json(e)
        })?;

        tracing::debug!(
            "Loaded {} issues from {}",
            issues.len(),
            self.path.display()
        );

        Ok(issues)
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_issue(
    id: &str,
    (title, description, reported_by): (&str, &str, &str),
    category: IssueCategory,
    status: IssueStatus,
    priority: IssuePriority,
    (lat, lng, address): (f64, f64, &str),
    (day, hour, minute): (u32, u32, u32),
    votes: u32,
) -> IssueReport {
    IssueReport {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        category,
        status,
        priority: Some(priority),
        location: IssueLocation::new(lat, lng).with_address(address),
        created_at: Utc
            .with_ymd_and_hms(2025, 1, day, hour, minute, 0)
            .single()
            .unwrap_or_default(),
        updated_at: None,
        resolved_at: None,
        reported_by: Some(reported_by.to_string()),
        votes,
    }
}

fn demo_issues() -> Vec<IssueReport> {
    let mut traffic = demo_issue(
        "ISS-005",
        (
            "Traffic light malfunction",
            "Traffic light stuck on red in all directions, causing major traffic delays during rush hour.",
            "Robert Wilson",
        ),
        IssueCategory::Traffic,
        IssueStatus::Resolved,
        IssuePriority::High,
        (40.7140, -74.0050, "Broadway & 5th Street"),
        (7, 16, 30),
        31,
    );
    traffic.resolved_at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 15, 0).single();

    vec![
        demo_issue(
            "ISS-001",
            (
                "Large pothole on Main Street",
                "Deep pothole causing vehicle damage near intersection with Oak Avenue. Multiple cars have reported tire damage.",
                "John Smith",
            ),
            IssueCategory::Pothole,
            IssueStatus::Submitted,
            IssuePriority::High,
            (40.7130, -74.0058, "Main Street & Oak Avenue"),
            (10, 8, 30),
            12,
        ),
        demo_issue(
            "ISS-002",
            (
                "Broken streetlight",
                "Street light has been out for 3 days, creating safety hazard for pedestrians during evening hours.",
                "Sarah Johnson",
            ),
            IssueCategory::Streetlight,
            IssueStatus::Acknowledged,
            IssuePriority::Medium,
            (40.7125, -74.0065, "Pine Street near Community Center"),
            (9, 19, 15),
            8,
        ),
        demo_issue(
            "ISS-003",
            (
                "Overflowing trash bins",
                "Multiple trash bins overflowing for over a week. Attracting pests and creating unsanitary conditions.",
                "Mike Davis",
            ),
            IssueCategory::Trash,
            IssueStatus::InProgress,
            IssuePriority::High,
            (40.7135, -74.0055, "Central Park Entrance"),
            (8, 14, 20),
            15,
        ),
        demo_issue(
            "ISS-004",
            (
                "Water main leak",
                "Significant water leak causing flooding on sidewalk and potential foundation damage to nearby buildings.",
                "Lisa Chen",
            ),
            IssueCategory::Water,
            IssueStatus::InProgress,
            IssuePriority::Urgent,
            (40.7120, -74.0070, "Elm Street & 2nd Avenue"),
            (11, 6, 45),
            23,
        ),
        traffic,
        demo_issue(
            "ISS-006",
            (
                "Damaged sidewalk",
                "Cracked and uneven sidewalk creating tripping hazard for pedestrians, especially elderly residents.",
                "Emma Thompson",
            ),
            IssueCategory::Other,
            IssueStatus::Submitted,
            IssuePriority::Medium,
            (40.7115, -74.0075, "Maple Avenue near School"),
            (12, 11, 0),
            6,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_source_has_six_issues() {
        let issues = InMemoryIssueSource::demo().load_issues().unwrap();
        assert_eq!(issues.len(), 6);
        assert!(issues.iter().all(|i| i.location.coordinates().is_some()));
        assert_eq!(issues[4].id, "ISS-005");
        assert!(issues[4].resolved_at.is_some());
        assert!(issues.iter().all(|i| i.description.is_some() && i.reported_by.is_some()));
        assert_eq!(issues[3].reported_by.as_deref(), Some("Lisa Chen"));
    }

    #[test]
    fn test_find_issue() {
        let source = InMemoryIssueSource::demo();
        assert_eq!(source.find_issue("ISS-003").unwrap().title, "Overflowing trash bins");
        assert!(matches!(
            source.find_issue("ISS-999"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_json_file_source_round_trips_demo_data() {
        let path = std::env::temp_dir().join(format!(
            "civic-issue-map-{}.json",
            uuid::Uuid::new_v4()
        ));
        let issues = demo_issues();
        fs::write(&path, serde_json::to_string(&issues).unwrap()).unwrap();

        let loaded = JsonFileIssueSource::new(&path).load_issues().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, issues);
    }

    #[test]
    fn test_json_file_source_missing_file() {
        let source = JsonFileIssueSource::new("/nonexistent/civic-issues.json");
        assert!(matches!(source.load_issues(), Err(AppError::Io(_))));
    }
}
