//! Search request and target models

use serde::Serialize;
use thiserror::Error;

/// A search request as received from a caller
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// The search query string
    pub query: String,
    /// Specific engine to use (case-insensitive name)
    pub engine: Option<String>,
    /// Language code used for filtering and the language parameter
    pub language: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// One engine URL a caller would fetch for a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTarget {
    /// Engine name as configured
    pub engine: String,
    /// Fully built query URL
    pub url: String,
}

/// Errors raised while planning a search
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("search query must not be empty")]
    EmptyQuery,

    #[error("search engine \"{0}\" not found")]
    EngineNotFound(String),

    #[error("no search engines are loaded")]
    NoEngines,
}
