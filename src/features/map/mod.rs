pub mod dtos;
pub mod models;
pub mod services;

pub use dtos::{MapMarkerDto, MapViewDto, MarkerKind};
pub use models::{Bounds, Cluster, DateRange, FilterSpec, MapSnapshot, RecentActivity, StatsSummary};
pub use services::{Clock, FixedClock, MapSession, SessionState, SystemClock};
