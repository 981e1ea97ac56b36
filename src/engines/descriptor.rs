//! Engine descriptor: one engine's query URL rules

use serde::Serialize;
use url::form_urlencoded;

/// Immutable description of how to build a query URL for one search engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineDescriptor {
    name: String,
    base_url: String,
    query_param: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    lang_param: Option<String>,
    supported_languages: Vec<String>,
}

impl EngineDescriptor {
    /// Create a descriptor without language support
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        query_param: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            query_param: query_param.into(),
            lang_param: None,
            supported_languages: Vec::new(),
        }
    }

    /// Set the language parameter key
    pub fn with_lang_param(mut self, lang_param: impl Into<String>) -> Self {
        self.lang_param = Some(lang_param.into());
        self
    }

    /// Set the supported language codes, keeping their order
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn query_param(&self) -> &str {
        &self.query_param
    }

    pub fn lang_param(&self) -> Option<&str> {
        self.lang_param.as_deref()
    }

    pub fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    /// Exact, case-sensitive membership test against the configured languages
    pub fn supports_language(&self, language: &str) -> bool {
        self.supported_languages.iter().any(|l| l == language)
    }

    /// Build the full query URL for this engine.
    ///
    /// The query parameter is always emitted first. The language parameter is
    /// appended only when the engine has a `lang_param` and lists `language`
    /// among its supported languages; anything else, including an empty
    /// language, is silently dropped.
    pub fn build_query_url(&self, query: &str, language: Option<&str>) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair(&self.query_param, query);

        let language = language.filter(|l| !l.is_empty());
        if let (Some(lang_param), Some(language)) = (self.lang_param.as_deref(), language) {
            if self.supports_language(language) {
                serializer.append_pair(lang_param, language);
            }
        }

        format!("{}{}{}", self.base_url, self.separator(), serializer.finish())
    }

    /// Separator between `base_url` and the appended parameters
    fn separator(&self) -> &'static str {
        if self.base_url.contains('?') {
            "&"
        } else {
            "?"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn google() -> EngineDescriptor {
        EngineDescriptor::new("Google", "https://www.google.com/search", "q")
            .with_lang_param("hl")
            .with_languages(["en", "ko"])
    }

    fn pairs(url: &str) -> Vec<(String, String)> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_query_and_language() {
        let url = google().build_query_url("hello world", Some("ko"));

        assert_eq!(url, "https://www.google.com/search?q=hello+world&hl=ko");
        assert_eq!(
            pairs(&url),
            vec![
                ("q".to_string(), "hello world".to_string()),
                ("hl".to_string(), "ko".to_string()),
            ]
        );
    }

    #[test]
    fn test_unsupported_language_dropped() {
        let url = google().build_query_url("hello world", Some("fr"));
        assert_eq!(url, "https://www.google.com/search?q=hello+world");
    }

    #[test]
    fn test_language_match_is_case_sensitive() {
        let url = google().build_query_url("rust", Some("KO"));
        assert_eq!(pairs(&url).len(), 1);
    }

    #[test]
    fn test_no_lang_param() {
        let engine = EngineDescriptor::new("Bing", "https://www.bing.com/search", "q")
            .with_languages(["en"]);
        let url = engine.build_query_url("rust", Some("en"));

        assert_eq!(url, "https://www.bing.com/search?q=rust");
    }

    #[test]
    fn test_no_language_requested() {
        let url = google().build_query_url("rust", None);
        assert_eq!(url, "https://www.google.com/search?q=rust");
    }

    #[test]
    fn test_encoding_reserved_and_unicode() {
        let engine = google();
        for query in ["안녕하세요", "a&b=c", "100% #1 ?x/y", ""] {
            let url = engine.build_query_url(query, Some("ko"));
            assert_eq!(pairs(&url)[0], ("q".to_string(), query.to_string()));
        }

        let url = engine.build_query_url("a&b=c", None);
        assert_eq!(url, "https://www.google.com/search?q=a%26b%3Dc");
    }

    #[test]
    fn test_base_url_with_existing_query() {
        let naver = EngineDescriptor::new(
            "Naver",
            "https://search.naver.com/search.naver?ie=utf8",
            "query",
        );
        let url = naver.build_query_url("날씨", None);

        assert!(url.starts_with("https://search.naver.com/search.naver?ie=utf8&query="));
        assert_eq!(pairs(&url)[1], ("query".to_string(), "날씨".to_string()));
    }

    #[test]
    fn test_empty_language_is_no_language() {
        let engine = EngineDescriptor::new("G", "https://g.example/search", "q")
            .with_lang_param("hl")
            .with_languages(["", "en"]);

        assert_eq!(
            engine.build_query_url("x", Some("")),
            "https://g.example/search?q=x"
        );
        assert_eq!(
            engine.build_query_url("x", Some("en")),
            "https://g.example/search?q=x&hl=en"
        );
    }
}
