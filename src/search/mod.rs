//! Search planning module
//!
//! Selects engines for a request and builds the URLs a caller would fetch.

mod models;
mod planner;

pub use models::*;
pub use planner::SearchPlanner;
