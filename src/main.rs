use civic_issue_map::core::config::Config;
use civic_issue_map::core::error::AppError;
use civic_issue_map::features::issues::{InMemoryIssueSource, IssueSource, JsonFileIssueSource};
use civic_issue_map::features::map::{MapSession, MapViewDto};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load .env file if exists, ignore if not found
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env().map_err(AppError::Config)?;

    tracing::info!(
        "Map engine: clustering {} (threshold {}°), priority areas at {}+ issues, date range {}",
        if config.map.clustering_enabled { "on" } else { "off" },
        config.map.cluster_threshold_degrees,
        config.map.priority_area_min_issues,
        config.map.default_date_range
    );

    let source: Box<dyn IssueSource> = match &config.app.issues_file {
        Some(path) => {
            let source = JsonFileIssueSource::new(path);
            tracing::info!("Loading issues from {}", source.path().display());
            Box::new(source)
        }
        None => {
            tracing::info!("ISSUES_FILE not set, using the built-in demo issues");
            Box::new(InMemoryIssueSource::demo())
        }
    };

    let mut session = MapSession::new(config.map.clone())?;
    session.reload(source.as_ref())?;

    let view = MapViewDto::from_session(&session);
    tracing::info!(
        "{} markers for {} issues ({} excluded), {} priority areas",
        view.markers.len(),
        view.filtered_count,
        view.excluded_count,
        view.stats.priority_area_count
    );

    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
