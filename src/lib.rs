//! Map aggregation engine for a civic issue reporting portal.
//!
//! Takes geotagged issue reports and the user's filter selection and produces
//! the markers to draw (single pins or numbered cluster badges) along with the
//! dashboard statistics for the same subset. Everything runs synchronously
//! in-process; rendering, forms and storage live outside this crate.

pub mod core;
pub mod features;
pub mod shared;
