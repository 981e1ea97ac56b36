//! Engine registry holding all loaded descriptors

use super::descriptor::EngineDescriptor;

/// Ordered, read-only collection of engine descriptors.
///
/// Order is the configuration order and is preserved by every lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineRegistry {
    engines: Vec<EngineDescriptor>,
}

impl EngineRegistry {
    /// Create a registry from descriptors in load order
    pub fn new(engines: Vec<EngineDescriptor>) -> Self {
        Self { engines }
    }

    /// Registry with no engines, used when loading fails
    pub fn empty() -> Self {
        Self::default()
    }

    /// All engines in load order
    pub fn list_all(&self) -> &[EngineDescriptor] {
        &self.engines
    }

    /// Engines listing `language` among their supported languages (exact match)
    pub fn filter_by_language(&self, language: &str) -> Vec<&EngineDescriptor> {
        self.engines
            .iter()
            .filter(|engine| engine.supports_language(language))
            .collect()
    }

    /// Case-insensitive lookup; the first match in load order wins
    pub fn find_by_name(&self, name: &str) -> Option<&EngineDescriptor> {
        let needle = name.to_lowercase();
        self.engines
            .iter()
            .find(|engine| engine.name().to_lowercase() == needle)
    }

    /// Get all engine names
    pub fn names(&self) -> Vec<&str> {
        self.engines.iter().map(|e| e.name()).collect()
    }

    /// Distinct supported languages, in first-seen order
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = Vec::new();
        for language in self.engines.iter().flat_map(|e| e.supported_languages()) {
            if !languages.contains(&language.as_str()) {
                languages.push(language);
            }
        }
        languages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EngineDescriptor> {
        self.engines.iter()
    }

    /// Get number of loaded engines
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

impl FromIterator<EngineDescriptor> for EngineRegistry {
    fn from_iter<I: IntoIterator<Item = EngineDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EngineRegistry {
    type Item = &'a EngineDescriptor;
    type IntoIter = std::slice::Iter<'a, EngineDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.engines.iter()
    }
}
