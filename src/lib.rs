//! Search-Engines: a configuration-backed registry of search engines
//!
//! Loads engine descriptors from a JSON or YAML file and builds query URLs
//! for them. No requests are ever sent; callers fetch the URLs themselves.

pub mod config;
pub mod engines;
pub mod search;

pub use config::{ConfigFormat, RegistrySettings};
pub use engines::{EngineDescriptor, EngineLoader, EngineRegistry, LoadError, LoadErrorKind};
pub use search::{PlanError, SearchPlanner, SearchRequest, SearchTarget};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
