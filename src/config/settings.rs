//! Settings structures for the engine configuration document

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Top-level configuration document (`search_engines.json` / `.yml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    pub engines: Vec<EngineConfig>,
}

/// Individual engine record as written in the configuration file.
///
/// Every field is optional at this layer so that missing required fields can be
/// reported by name instead of surfacing as an opaque parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Engine name (case-insensitive identifier)
    pub name: Option<String>,
    /// Endpoint prefix, e.g. `https://www.google.com/search`
    pub base_url: Option<String>,
    /// Key carrying the search text
    pub query_param: Option<String>,
    /// Key carrying the language code, if the engine has one
    pub lang_param: Option<String>,
    /// Language codes accepted by `lang_param`; `null` reads as empty
    pub supported_languages: Option<Vec<String>>,
}

/// Failure to decode a configuration document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("configuration is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialization format of a configuration source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file extension; anything that isn't YAML is read as JSON
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yml") | Some("yaml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }
}

impl RegistrySettings {
    /// Parse settings from text in the given format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ParseError> {
        let settings: Self = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(settings)
    }

    /// Parse settings from raw bytes, rejecting non UTF-8 input
    pub fn parse_bytes(bytes: Vec<u8>, format: ConfigFormat) -> Result<Self, ParseError> {
        let content = String::from_utf8(bytes)?;
        Self::parse(&content, format)
    }
}
