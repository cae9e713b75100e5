pub mod clustering_service;
pub mod filter_service;
pub mod geometry;
pub mod map_session;
pub mod stats_service;

pub use clustering_service::{cluster, flatten, singletons};
pub use filter_service::{filter_issues, matches};
pub use geometry::distance;
pub use map_session::{Clock, FixedClock, MapSession, SessionState, SystemClock};
pub use stats_service::{priority_areas, summarize};
