#[cfg(test)]
use chrono::{DateTime, Duration, TimeZone, Utc};

#[cfg(test)]
use fake::{
    faker::{lorem::en::Sentence, name::en::Name},
    Fake,
};

#[cfg(test)]
use crate::features::issues::models::{
    IssueCategory, IssueLocation, IssuePriority, IssueReport, IssueStatus,
};

/// Reference "now" shared by engine tests
#[cfg(test)]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 12, 12, 0, 0).unwrap()
}

/// Issue reported one day before [`fixed_now`] at the given position
#[cfg(test)]
pub fn issue_at(
    id: &str,
    category: IssueCategory,
    status: IssueStatus,
    lat: f64,
    lng: f64,
) -> IssueReport {
    IssueReport {
        id: id.to_string(),
        title: Sentence(2..5).fake(),
        description: Some(Sentence(5..10).fake()),
        category,
        status,
        priority: Some(IssuePriority::Medium),
        location: IssueLocation::new(lat, lng),
        created_at: fixed_now() - Duration::days(1),
        updated_at: None,
        resolved_at: None,
        reported_by: Some(Name().fake()),
        votes: (0u32..40).fake(),
    }
}

/// Submitted pothole at the given position
#[cfg(test)]
pub fn pothole_at(id: &str, lat: f64, lng: f64) -> IssueReport {
    issue_at(id, IssueCategory::Pothole, IssueStatus::Submitted, lat, lng)
}
