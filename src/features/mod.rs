pub mod issues;
pub mod map;
