//! Engine loader for building a registry from a configuration source

use super::descriptor::EngineDescriptor;
use super::error::{EngineRef, LoadError};
use super::registry::EngineRegistry;
use crate::config::{ConfigFormat, EngineConfig, RegistrySettings};
use std::path::Path;
use tracing::{debug, error, info};

/// Name reported for configuration parsed from memory
const INLINE_SOURCE: &str = "<inline>";

/// Loader for initializing engines from configuration
pub struct EngineLoader;

impl EngineLoader {
    /// Load all engines from a configuration file.
    ///
    /// The format is picked from the file extension. A single invalid engine
    /// record fails the whole load.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<EngineRegistry, LoadError> {
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|source| LoadError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = RegistrySettings::parse_bytes(bytes, ConfigFormat::from_path(path))
            .map_err(|source| LoadError::SourceMalformed {
                path: path.to_path_buf(),
                source,
            })?;

        Self::build(settings, path)
    }

    /// Load engines from in-memory configuration text
    pub fn from_content(content: &str, format: ConfigFormat) -> Result<EngineRegistry, LoadError> {
        let origin = Path::new(INLINE_SOURCE);
        let settings = RegistrySettings::parse(content, format).map_err(|source| {
            LoadError::SourceMalformed {
                path: origin.to_path_buf(),
                source,
            }
        })?;

        Self::build(settings, origin)
    }

    /// Load engines, logging any failure and falling back to an empty registry
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> EngineRegistry {
        match Self::load(path) {
            Ok(registry) => registry,
            Err(e) => {
                error!("Failed to load search engines: {}", e);
                EngineRegistry::empty()
            }
        }
    }

    fn build(settings: RegistrySettings, origin: &Path) -> Result<EngineRegistry, LoadError> {
        let engines = settings
            .engines
            .into_iter()
            .enumerate()
            .map(|(index, config)| Self::create_descriptor(index, config))
            .collect::<Result<Vec<_>, _>>()?;

        for engine in &engines {
            debug!(
                "Loaded engine: {} ({}, languages: [{}])",
                engine.name(),
                engine.base_url(),
                engine.supported_languages().join(", ")
            );
        }
        info!(
            "Loaded {} search engines from '{}'",
            engines.len(),
            origin.display()
        );

        Ok(EngineRegistry::new(engines))
    }

    /// Build a descriptor from one engine record, enforcing required fields
    fn create_descriptor(
        index: usize,
        config: EngineConfig,
    ) -> Result<EngineDescriptor, LoadError> {
        let EngineConfig {
            name,
            base_url,
            query_param,
            lang_param,
            supported_languages,
        } = config;

        let name = non_empty(name);
        let engine = EngineRef {
            index,
            name: name.clone(),
        };
        let missing = |field: &'static str| LoadError::FieldMissing {
            field,
            engine: engine.clone(),
        };

        let name = name.ok_or_else(|| missing("name"))?;
        let base_url = non_empty(base_url).ok_or_else(|| missing("base_url"))?;
        let query_param = non_empty(query_param).ok_or_else(|| missing("query_param"))?;

        let mut descriptor = EngineDescriptor::new(name, base_url, query_param)
            .with_languages(supported_languages.unwrap_or_default());
        if let Some(lang_param) = non_empty(lang_param) {
            descriptor = descriptor.with_lang_param(lang_param);
        }

        Ok(descriptor)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseError;
    use crate::engines::LoadErrorKind;

    const ENGINES: &str = r#"{
        "engines": [
            {"name": "Google", "base_url": "https://www.google.com/search", "query_param": "q",
             "lang_param": "hl", "supported_languages": ["en", "ko"]},
            {"name": "Bing", "base_url": "https://www.bing.com/search", "query_param": "q"}
        ]
    }"#;

    #[test]
    fn test_load_from_content() {
        let registry = EngineLoader::from_content(ENGINES, ConfigFormat::Json).unwrap();

        assert_eq!(registry.names(), vec!["Google", "Bing"]);
        let bing = registry.find_by_name("bing").unwrap();
        assert!(bing.lang_param().is_none());
        assert!(bing.supported_languages().is_empty());
    }

    #[test]
    fn test_missing_field_discards_batch() {
        let content = r#"{"engines": [
            {"name": "Google", "base_url": "https://www.google.com/search", "query_param": "q"},
            {"base_url": "https://www.bing.com/search", "query_param": "q"}
        ]}"#;
        let err = EngineLoader::from_content(content, ConfigFormat::Json).unwrap_err();

        match err {
            LoadError::FieldMissing { field, engine } => {
                assert_eq!(field, "name");
                assert_eq!(engine.index, 1);
                assert!(engine.name.is_none());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_required_field_is_missing() {
        let content = r#"{"engines": [{"name": "Google", "base_url": "", "query_param": "q"}]}"#;
        let err = EngineLoader::from_content(content, ConfigFormat::Json).unwrap_err();

        assert_eq!(err.kind(), LoadErrorKind::FieldMissing);
        assert!(err.to_string().contains("base_url"));
        assert!(err.to_string().contains("Google"));
    }

    #[test]
    fn test_empty_lang_param_is_absent() {
        let content = r#"{"engines": [{"name": "Baidu", "base_url": "https://www.baidu.com/s",
            "query_param": "wd", "lang_param": "", "supported_languages": ["zh"]}]}"#;
        let registry = EngineLoader::from_content(content, ConfigFormat::Json).unwrap();

        let baidu = registry.find_by_name("baidu").unwrap();
        assert!(baidu.lang_param().is_none());
        assert_eq!(
            baidu.build_query_url("rust", Some("zh")),
            "https://www.baidu.com/s?wd=rust"
        );
    }

    #[test]
    fn test_null_languages_load_as_empty() {
        let content = r#"{"engines": [{"name": "Daum", "base_url": "https://search.daum.net/search",
            "query_param": "q", "lang_param": null, "supported_languages": null}]}"#;
        let registry = EngineLoader::from_content(content, ConfigFormat::Json).unwrap();

        let daum = registry.find_by_name("daum").unwrap();
        assert!(daum.supported_languages().is_empty());
        assert!(registry.filter_by_language("ko").is_empty());
    }

    #[test]
    fn test_malformed_source() {
        let err = EngineLoader::from_content("{engines: [}", ConfigFormat::Json).unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::Malformed);

        match err {
            LoadError::SourceMalformed { ref path, ref source } => {
                assert_eq!(path, Path::new("<inline>"));
                assert!(matches!(source, ParseError::Json(_)));
            }
            ref other => panic!("unexpected error: {other}"),
        }
        let cause = std::error::Error::source(&err).expect("parse error is kept as source");
        assert!(cause.downcast_ref::<ParseError>().is_some());
    }

    #[test]
    fn test_missing_file() {
        let err = EngineLoader::load("/nonexistent/search_engines.json").unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::NotFound);
    }

    #[test]
    fn test_load_or_empty_on_failure() {
        let registry = EngineLoader::load_or_empty("/nonexistent/search_engines.json");
        assert!(registry.is_empty());
    }
}
