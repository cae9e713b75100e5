pub mod dtos;
pub mod models;
pub mod services;

pub use dtos::CreateIssueReport;
pub use models::{Coordinates, IssueCategory, IssueLocation, IssuePriority, IssueReport, IssueStatus};
pub use services::{InMemoryIssueSource, IssueSource, JsonFileIssueSource};
