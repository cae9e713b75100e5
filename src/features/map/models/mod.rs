mod cluster;
mod filter;
mod snapshot;
mod stats;

pub use cluster::Cluster;
pub use filter::{DateRange, FilterSpec};
pub use snapshot::{Bounds, MapSnapshot};
pub use stats::{RecentActivity, StatsSummary};
