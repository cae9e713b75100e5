use chrono::{DateTime, Utc};

use crate::core::config::MapConfig;
use crate::core::error::{AppError, Result};
use crate::features::issues::models::IssueReport;
use crate::features::issues::services::IssueSource;
use crate::features::map::models::{Bounds, Cluster, FilterSpec, MapSnapshot};
use crate::features::map::services::{clustering_service, filter_service, stats_service};

/// Source of "now" for the relative date window and recent-activity counters
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Snapshot reflects the current inputs
    Idle,
    /// An input changed and the derived output is being rebuilt
    Recomputing,
}

/// Owns the map inputs and the snapshot derived from them.
///
/// Every mutation recomputes filter -> cluster -> summarize synchronously.
/// Unusable settings are rejected before they are applied, so the previous
/// snapshot stays visible and later edits still recompute.
pub struct MapSession {
    config: MapConfig,
    issues: Vec<IssueReport>,
    filter: FilterSpec,
    clock: Box<dyn Clock>,
    state: SessionState,
    snapshot: MapSnapshot,
    generation: u64,
}

impl MapSession {
    pub fn new(config: MapConfig) -> Result<Self> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: MapConfig, clock: Box<dyn Clock>) -> Result<Self> {
        let filter = FilterSpec::default().with_date_range(config.default_date_range);
        let snapshot = MapSnapshot::empty(clock.now());

        let mut session = Self {
            config,
            issues: Vec::new(),
            filter,
            clock,
            state: SessionState::Idle,
            snapshot,
            generation: 0,
        };
        session.recompute()?;

        Ok(session)
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn issues(&self) -> &[IssueReport] {
        &self.issues
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn snapshot(&self) -> &MapSnapshot {
        &self.snapshot
    }

    /// Number of successful recomputes so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_issues(&mut self, issues: Vec<IssueReport>) -> Result<&MapSnapshot> {
        self.issues = issues;
        self.recompute()
    }

    /// Replace the issue list with a fresh load from `source`.
    ///
    /// A failed load leaves both the issue list and the snapshot untouched.
    pub fn reload(&mut self, source: &dyn IssueSource) -> Result<&MapSnapshot> {
        let issues = source.load_issues().map_err(|e| {
            tracing::error!("Failed to load issues from {}: {}", source.name(), e);
            e
        })?;
        tracing::info!("Loaded {} issues from {}", issues.len(), source.name());

        self.set_issues(issues)
    }

    pub fn set_filter(&mut self, filter: FilterSpec) -> Result<&MapSnapshot> {
        self.filter = filter;
        self.recompute()
    }

    /// Edit the current filter in place, then recompute
    pub fn update_filter(&mut self, edit: impl FnOnce(&mut FilterSpec)) -> Result<&MapSnapshot> {
        edit(&mut self.filter);
        self.recompute()
    }

    pub fn clear_filters(&mut self) -> Result<&MapSnapshot> {
        self.filter.clear();
        self.recompute()
    }

    pub fn set_clustering_enabled(&mut self, enabled: bool) -> Result<&MapSnapshot> {
        self.apply_config(MapConfig {
            clustering_enabled: enabled,
            ..self.config.clone()
        })
    }

    pub fn set_cluster_threshold(&mut self, threshold_degrees: f64) -> Result<&MapSnapshot> {
        self.apply_config(MapConfig {
            cluster_threshold_degrees: threshold_degrees,
            ..self.config.clone()
        })
    }

    /// Clusters currently meeting the priority-area size
    pub fn priority_areas(&self) -> impl Iterator<Item = &Cluster> {
        stats_service::priority_areas(
            &self.snapshot.clusters,
            self.config.priority_area_min_issues,
        )
    }

    pub fn find_cluster(&self, issue_id: &str) -> Result<&Cluster> {
        self.snapshot
            .find_cluster(issue_id)
            .ok_or_else(|| AppError::NotFound(format!("No marker holds issue {}", issue_id)))
    }

    /// Rejected settings leave the config and the snapshot untouched
    fn apply_config(&mut self, config: MapConfig) -> Result<&MapSnapshot> {
        if let Err(e) = validate_config(&config) {
            tracing::warn!("Rejected map settings, keeping previous output: {}", e);
            return Err(e);
        }

        self.config = config;
        self.recompute()
    }

    fn recompute(&mut self) -> Result<&MapSnapshot> {
        self.state = SessionState::Recomputing;
        let outcome = self.build_snapshot();
        self.state = SessionState::Idle;

        match outcome {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.generation += 1;
                Ok(&self.snapshot)
            }
            Err(e) => {
                tracing::warn!("Map recompute skipped, keeping previous output: {}", e);
                Err(e)
            }
        }
    }

    fn build_snapshot(&self) -> Result<MapSnapshot> {
        validate_config(&self.config)?;

        let now = self.clock.now();
        let filtered = filter_service::filter_issues(&self.issues, &self.filter, now);
        let filtered_count = filtered.len();

        let mut plottable = Vec::with_capacity(filtered_count);
        for issue in filtered {
            if issue.location.coordinates().is_some() {
                plottable.push(issue.clone());
            } else {
                tracing::warn!(
                    "Excluding issue {} from the map: missing or malformed location",
                    issue.id
                );
            }
        }
        let excluded_count = filtered_count - plottable.len();

        let clusters = if self.config.clustering_enabled {
            clustering_service::cluster(plottable, self.config.cluster_threshold_degrees)
        } else {
            clustering_service::singletons(plottable)
        };

        // Every plottable issue lands in exactly one cluster
        let stats = stats_service::summarize(
            clusters.iter().flat_map(Cluster::members),
            &clusters,
            self.config.priority_area_min_issues,
            now,
        );

        let bounds = Bounds::from_points(
            clusters
                .iter()
                .flat_map(Cluster::members)
                .filter_map(|m| m.location.coordinates()),
        );

        tracing::debug!(
            "Recomputed map: {} of {} issues matched, {} excluded, {} markers, {} priority areas",
            filtered_count,
            self.issues.len(),
            excluded_count,
            clusters.len(),
            stats.priority_area_count
        );

        Ok(MapSnapshot {
            clusters,
            stats,
            filtered_count,
            excluded_count,
            bounds,
            generated_at: now,
        })
    }
}

fn validate_config(config: &MapConfig) -> Result<()> {
    let threshold = config.cluster_threshold_degrees;
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(AppError::Validation(format!(
            "Cluster threshold must be a positive number of degrees, got {}",
            threshold
        )));
    }

    if config.priority_area_min_issues == 0 {
        return Err(AppError::Validation(
            "Priority area size must be at least 1".to_string(),
        ));
    }

    Ok(())
}
