mod issue_source;

pub use issue_source::{InMemoryIssueSource, IssueSource, JsonFileIssueSource};
