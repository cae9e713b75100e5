use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use civic_issue_map::core::config::MapConfig;
use civic_issue_map::features::issues::{
    IssueCategory, IssueLocation, IssueReport, IssueStatus,
};
use civic_issue_map::features::map::services::{
    cluster, distance, flatten, matches, singletons, summarize,
};
use civic_issue_map::features::map::{FilterSpec, FixedClock, MapSession};
use civic_issue_map::shared::constants::{
    DEFAULT_CLUSTER_THRESHOLD_DEGREES, PRIORITY_AREA_MIN_ISSUES,
};

const T: f64 = DEFAULT_CLUSTER_THRESHOLD_DEGREES;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
}

fn arb_category() -> impl Strategy<Value = IssueCategory> {
    prop::sample::select(IssueCategory::ALL.to_vec())
}

fn arb_status() -> impl Strategy<Value = IssueStatus> {
    prop::sample::select(IssueStatus::ALL.to_vec())
}

// Points packed into a few blocks of lower Manhattan so clusters actually form
fn arb_point() -> impl Strategy<Value = (f64, f64)> {
    (40.7100f64..40.7160, -74.0080f64..-74.0020)
}

fn arb_issues(max: usize) -> impl Strategy<Value = Vec<IssueReport>> {
    prop::collection::vec((arb_category(), arb_status(), arb_point(), 0i64..120), 0..max).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (category, status, (lat, lng), days_ago))| IssueReport {
                    id: format!("ISS-{:03}", i),
                    title: format!("Issue {}", i),
                    description: None,
                    category,
                    status,
                    priority: None,
                    location: IssueLocation::new(lat, lng),
                    created_at: now() - Duration::days(days_ago),
                    updated_at: None,
                    resolved_at: None,
                    reported_by: None,
                    votes: 0,
                })
                .collect()
        },
    )
}

fn ids_per_cluster(clusters: &[civic_issue_map::features::map::Cluster]) -> Vec<Vec<String>> {
    clusters
        .iter()
        .map(|c| c.members().iter().map(|m| m.id.clone()).collect())
        .collect()
}

fn session_with(issues: Vec<IssueReport>, clustering_enabled: bool) -> MapSession {
    let config = MapConfig {
        clustering_enabled,
        ..MapConfig::default()
    };
    let mut session = MapSession::with_clock(config, Box::new(FixedClock(now()))).unwrap();
    session.set_issues(issues).unwrap();
    session
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn identity_filter_matches_every_issue(issues in arb_issues(40)) {
        let filter = FilterSpec::default();
        for issue in &issues {
            prop_assert!(matches(issue, &filter, now()));
        }
    }

    #[test]
    fn two_issues_within_threshold_form_one_cluster(
        (lat, lng) in arb_point(),
        d_lat in -0.0007f64..0.0007,
        d_lng in -0.0007f64..0.0007,
    ) {
        let a = IssueReport {
            id: "ISS-A".to_string(),
            title: "A".to_string(),
            description: None,
            category: IssueCategory::Pothole,
            status: IssueStatus::Submitted,
            priority: None,
            location: IssueLocation::new(lat, lng),
            created_at: now(),
            updated_at: None,
            resolved_at: None,
            reported_by: None,
            votes: 0,
        };
        let b = IssueReport {
            id: "ISS-B".to_string(),
            location: IssueLocation::new(lat + d_lat, lng + d_lng),
            ..a.clone()
        };
        let (pa, pb) = match (a.location.coordinates(), b.location.coordinates()) {
            (Some(pa), Some(pb)) => (pa, pb),
            _ => return Err(TestCaseError::reject("generated point out of range")),
        };
        prop_assume!(distance(pa, pb) < T);

        let clusters = cluster(vec![a, b], T);
        prop_assert_eq!(clusters.len(), 1);
        prop_assert_eq!(clusters[0].count(), 2);
        prop_assert!(clusters[0].is_cluster());
    }

    #[test]
    fn reclustering_flattened_output_is_stable(issues in arb_issues(40)) {
        let first = cluster(issues, T);
        let first_ids = ids_per_cluster(&first);

        let second = cluster(flatten(first), T);
        prop_assert_eq!(first_ids, ids_per_cluster(&second));
    }

    #[test]
    fn clusters_partition_the_input(issues in arb_issues(40)) {
        let total = issues.len();
        let clusters = cluster(issues, T);

        let mut seen: Vec<String> = flatten(clusters.clone()).into_iter().map(|i| i.id).collect();
        prop_assert_eq!(seen.len(), total);
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), total);

        for c in &clusters {
            let seed = c.centroid();
            for member in &c.members()[1..] {
                let point = member.location.coordinates().unwrap();
                prop_assert!(distance(seed, point) < T);
            }
            prop_assert_eq!(c.is_cluster(), c.count() > 1);
        }
    }

    #[test]
    fn status_counts_sum_to_filtered_len(
        issues in arb_issues(40),
        statuses in prop::collection::btree_set(arb_status(), 0..3),
    ) {
        let mut session = session_with(issues, true);
        let snapshot = session
            .set_filter(FilterSpec { statuses, ..FilterSpec::default() })
            .unwrap();

        prop_assert_eq!(snapshot.stats.total, snapshot.filtered_count);
        prop_assert_eq!(snapshot.stats.by_status.values().sum::<usize>(), snapshot.filtered_count);
        prop_assert_eq!(snapshot.stats.by_category.values().sum::<usize>(), snapshot.filtered_count);
        prop_assert_eq!(snapshot.plotted_count(), snapshot.filtered_count);
    }

    #[test]
    fn disabled_clustering_yields_one_marker_per_issue(issues in arb_issues(40)) {
        let session = session_with(issues, false);
        let snapshot = session.snapshot();

        prop_assert_eq!(snapshot.clusters.len(), snapshot.filtered_count);
        prop_assert!(snapshot.clusters.iter().all(|c| c.count() == 1 && !c.is_cluster()));
        prop_assert_eq!(snapshot.stats.priority_area_count, 0);
    }

    #[test]
    fn summarize_of_singletons_matches_issue_count(issues in arb_issues(40)) {
        let markers = singletons(issues.clone());
        let stats = summarize(&issues, &markers, PRIORITY_AREA_MIN_ISSUES, now());
        prop_assert_eq!(stats.total, issues.len());
        prop_assert_eq!(stats.active + stats.resolved, issues
            .iter()
            .filter(|i| i.status.is_active() || i.status == IssueStatus::Resolved)
            .count());
    }
}
