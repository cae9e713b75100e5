mod issue;
mod location;

pub use issue::{IssueCategory, IssuePriority, IssueReport, IssueStatus};
pub use location::{Coordinates, IssueLocation};
