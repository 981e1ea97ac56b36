//! Search engine module
//!
//! Engine descriptors, the registry holding them, and the loader that builds
//! the registry from configuration.

mod descriptor;
mod error;
mod loader;
mod registry;

pub use descriptor::EngineDescriptor;
pub use error::{EngineRef, LoadError, LoadErrorKind};
pub use loader::EngineLoader;
pub use registry::EngineRegistry;
