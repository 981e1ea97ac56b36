//! Search planning: choose engines and build their query URLs

use super::models::{PlanError, SearchRequest, SearchTarget};
use crate::engines::{EngineDescriptor, EngineRegistry};
use tracing::{debug, warn};

/// Turns a search request into the engine URLs to query
pub struct SearchPlanner<'a> {
    registry: &'a EngineRegistry,
}

impl<'a> SearchPlanner<'a> {
    pub fn new(registry: &'a EngineRegistry) -> Self {
        Self { registry }
    }

    /// Plan a search.
    ///
    /// A named engine yields exactly one target. Otherwise engines supporting
    /// the requested language are used, falling back to every engine when none
    /// match.
    pub fn plan(&self, request: &SearchRequest) -> Result<Vec<SearchTarget>, PlanError> {
        if request.query.trim().is_empty() {
            return Err(PlanError::EmptyQuery);
        }

        let language = request.language.as_deref().filter(|l| !l.is_empty());
        let engines = self.select_engines(request.engine.as_deref(), language)?;

        if engines.is_empty() {
            return Err(PlanError::NoEngines);
        }

        let targets: Vec<SearchTarget> = engines
            .into_iter()
            .map(|engine| SearchTarget {
                engine: engine.name().to_string(),
                url: engine.build_query_url(&request.query, language),
            })
            .collect();

        debug!("Planned {} search targets for \"{}\"", targets.len(), request.query);
        Ok(targets)
    }

    fn select_engines(
        &self,
        engine: Option<&str>,
        language: Option<&str>,
    ) -> Result<Vec<&'a EngineDescriptor>, PlanError> {
        if let Some(name) = engine {
            return self
                .registry
                .find_by_name(name)
                .map(|engine| vec![engine])
                .ok_or_else(|| PlanError::EngineNotFound(name.to_string()));
        }

        let all = || self.registry.list_all().iter().collect::<Vec<_>>();

        match language {
            Some(language) => {
                let matching = self.registry.filter_by_language(language);
                if matching.is_empty() {
                    warn!(
                        "No search engines found for language code: {}. Falling back to all engines.",
                        language
                    );
                    Ok(all())
                } else {
                    Ok(matching)
                }
            }
            None => Ok(all()),
        }
    }
}
