use std::env;
use std::path::PathBuf;

use crate::features::map::models::DateRange;
use crate::shared::constants::{DEFAULT_CLUSTER_THRESHOLD_DEGREES, PRIORITY_AREA_MIN_ISSUES};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub map: MapConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON file holding the issue list; the built-in demo dataset is used when unset
    pub issues_file: Option<PathBuf>,
}

/// Settings for the map aggregation engine
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Group nearby issues into a single marker
    pub clustering_enabled: bool,
    /// Proximity threshold in raw degree space
    pub cluster_threshold_degrees: f64,
    /// Minimum cluster size that counts as a priority area
    pub priority_area_min_issues: usize,
    /// Date range applied when a session starts
    pub default_date_range: DateRange,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            clustering_enabled: true,
            cluster_threshold_degrees: DEFAULT_CLUSTER_THRESHOLD_DEGREES,
            priority_area_min_issues: PRIORITY_AREA_MIN_ISSUES,
            default_date_range: DateRange::All,
        }
    }
}

impl Config {
    /// Reads the process environment. `.env` is loaded by the binary before
    /// logging starts so `RUST_LOG` from the file takes effect.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            map: MapConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let issues_file = env::var("ISSUES_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { issues_file })
    }
}

impl MapConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let clustering_enabled = match env::var("MAP_CLUSTERING_ENABLED") {
            Ok(raw) => parse_bool(&raw)
                .ok_or_else(|| "MAP_CLUSTERING_ENABLED must be true or false".to_string())?,
            Err(_) => defaults.clustering_enabled,
        };

        let cluster_threshold_degrees = env::var("MAP_CLUSTER_THRESHOLD_DEGREES")
            .unwrap_or_else(|_| defaults.cluster_threshold_degrees.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_CLUSTER_THRESHOLD_DEGREES must be a valid number".to_string())?;

        if !cluster_threshold_degrees.is_finite() || cluster_threshold_degrees <= 0.0 {
            return Err("MAP_CLUSTER_THRESHOLD_DEGREES must be a positive number".to_string());
        }

        let priority_area_min_issues = env::var("MAP_PRIORITY_AREA_MIN_ISSUES")
            .unwrap_or_else(|_| defaults.priority_area_min_issues.to_string())
            .parse::<usize>()
            .map_err(|_| "MAP_PRIORITY_AREA_MIN_ISSUES must be a valid number".to_string())?;

        if priority_area_min_issues == 0 {
            return Err("MAP_PRIORITY_AREA_MIN_ISSUES must be at least 1".to_string());
        }

        // Unknown tokens fall back to "all", same as the filter controls
        let default_date_range = env::var("MAP_DEFAULT_DATE_RANGE")
            .map(|raw| DateRange::from(raw.as_str()))
            .unwrap_or(defaults.default_date_range);

        Ok(Self {
            clustering_enabled,
            cluster_threshold_degrees,
            priority_area_min_issues,
            default_date_range,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
