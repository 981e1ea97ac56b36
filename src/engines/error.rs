//! Errors raised while loading engine configuration

use crate::config::ParseError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Identifies the engine record a load error refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineRef {
    /// Zero-based position in the `engines` sequence
    pub index: usize,
    /// Engine name, when the record has one
    pub name: Option<String>,
}

impl fmt::Display for EngineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(ref name) => write!(f, "#{} ({})", self.index, name),
            None => write!(f, "#{}", self.index),
        }
    }
}

/// Failure to build a registry from a configuration source.
///
/// Any variant discards the whole batch: no partially loaded registry is ever produced.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source does not exist or could not be read
    #[error("configuration file '{}' not found or not readable: {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The source was read but is not a valid engine document
    #[error("could not parse configuration '{}': {source}", path.display())]
    SourceMalformed { path: PathBuf, source: ParseError },

    /// A required field is absent or empty in one engine record
    #[error("missing required field '{field}' in engine {engine}")]
    FieldMissing { field: &'static str, engine: EngineRef },
}

/// Coarse category of a [`LoadError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    NotFound,
    Malformed,
    FieldMissing,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::SourceNotFound { .. } => LoadErrorKind::NotFound,
            LoadError::SourceMalformed { .. } => LoadErrorKind::Malformed,
            LoadError::FieldMissing { .. } => LoadErrorKind::FieldMissing,
        }
    }
}
