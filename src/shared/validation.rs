use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating issue ids
    /// Uppercase prefix, a hyphen, then alphanumeric segments separated by hyphens
    /// - Valid: "ISS-001", "ISS-7F3A2C", "WTR-2025-14"
    /// - Invalid: "iss-001", "ISS", "ISS-", "ISS--001", "ISS 001"
    pub static ref ISSUE_ID_REGEX: Regex =
        Regex::new(r"^[A-Z]{2,8}(?:-[A-Za-z0-9]+)+$").unwrap();
}
