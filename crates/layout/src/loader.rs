//! Loading of layout sources into raw documents.

use crate::compositor::compose;
use crate::document::{DocumentFormat, LayoutDocument};
use crate::error::LayoutError;
use crate::resolved::ResolvedLayout;
use deckle_resource::{FilesystemResourceProvider, SearchPathResourceProvider};
use deckle_traits::{InMemoryResourceProvider, ResourceProvider};
use std::path::Path;
use std::sync::Arc;

/// Layout presets compiled into the crate, by source name.
pub const BUNDLED_PRESETS: [(&str, &str); 2] = [
    ("hand.yml", include_str!("../layouts/hand.yml")),
    ("playing-card.yml", include_str!("../layouts/playing-card.yml")),
];

/// A provider serving [`BUNDLED_PRESETS`] from memory.
pub fn bundled_presets() -> InMemoryResourceProvider {
    BUNDLED_PRESETS
        .iter()
        .fold(InMemoryResourceProvider::new(), |presets, (name, text)| presets.with(*name, *text))
}

/// Reads layout sources through a [`ResourceProvider`].
#[derive(Debug, Clone)]
pub struct LayoutLoader {
    provider: Arc<dyn ResourceProvider>,
}

impl Default for LayoutLoader {
    fn default() -> Self {
        Self::with_working_dir(".")
    }
}

impl LayoutLoader {
    /// Reads sources from `provider` only.
    pub fn new(provider: Arc<dyn ResourceProvider>) -> Self {
        Self { provider }
    }

    /// Reads sources from `provider`, falling back to the bundled presets.
    pub fn with_presets(provider: Arc<dyn ResourceProvider>) -> Self {
        let search = SearchPathResourceProvider::new()
            .then(provider)
            .then(Arc::new(bundled_presets()));
        Self::new(Arc::new(search))
    }

    /// Sources are looked up under `working_dir` first, then among the bundled presets.
    pub fn with_working_dir(working_dir: impl AsRef<Path>) -> Self {
        Self::with_presets(Arc::new(FilesystemResourceProvider::new(working_dir)))
    }

    /// Like [`LayoutLoader::with_working_dir`], with `presets_dir` searched
    /// before the bundled presets.
    pub fn with_search_path(working_dir: impl AsRef<Path>, presets_dir: impl AsRef<Path>) -> Self {
        let local = SearchPathResourceProvider::new()
            .then(Arc::new(FilesystemResourceProvider::new(working_dir)))
            .then(Arc::new(FilesystemResourceProvider::confined(presets_dir)));
        Self::with_presets(Arc::new(local))
    }

    /// Loads every source in order.
    ///
    /// A source that cannot be found is logged and skipped. A source that is
    /// found but cannot be read or parsed aborts the load.
    pub fn load<S: AsRef<str>>(&self, sources: &[S]) -> Result<Vec<LayoutDocument>, LayoutError> {
        let mut documents = Vec::with_capacity(sources.len());
        for source in sources {
            match self.load_one(source.as_ref()) {
                Ok(document) => documents.push(document),
                Err(err @ LayoutError::MissingSource { .. }) => log::error!("{}", err),
                Err(err) => return Err(err),
            }
        }
        Ok(documents)
    }

    /// Loads a single source; a missing source is `LayoutError::MissingSource`.
    pub fn load_one(&self, source: &str) -> Result<LayoutDocument, LayoutError> {
        let bytes = self.provider.load(source).map_err(|e| {
            if e.is_not_found() {
                LayoutError::MissingSource {
                    path: source.to_string(),
                }
            } else {
                LayoutError::Resource(e)
            }
        })?;
        let text = std::str::from_utf8(&bytes)
            .map_err(|e| LayoutError::malformed(source, format!("invalid UTF-8: {}", e)))?;
        let document = LayoutDocument::parse(source, text, DocumentFormat::from_source(source))?;
        log::debug!("Loaded {} layout entries from '{}'", document.len(), source);
        Ok(document)
    }

    /// Loads and composes `sources` into the deck's layout table.
    pub fn resolve<S: AsRef<str>>(&self, sources: &[S]) -> Result<ResolvedLayout, LayoutError> {
        if !sources.is_empty() {
            let names: Vec<&str> = sources.iter().map(AsRef::as_ref).collect();
            log::info!("Using layout(s): {}", names.join(", "));
        }
        let documents = self.load(sources)?;
        compose(&documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckle_types::AttributeValue;
    use std::fs;
    use tempfile::tempdir;

    fn loader(provider: InMemoryResourceProvider) -> LayoutLoader {
        LayoutLoader::new(Arc::new(provider))
    }

    #[test]
    fn test_missing_source_is_skipped() {
        let _ = env_logger::builder().is_test(true).try_init();
        let loader = loader(InMemoryResourceProvider::new().with("a.json", r#"{"frame": {"x": 1}}"#));

        let documents = loader.load(&["missing.json", "a.json"]).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].source(), "a.json");
        assert!(matches!(
            loader.load_one("missing.json"),
            Err(LayoutError::MissingSource { .. })
        ));
    }

    #[test]
    fn test_malformed_source_aborts() {
        let loader = loader(
            InMemoryResourceProvider::new()
                .with("good.json", "{}")
                .with("bad.json", "{ oops"),
        );
        let err = loader.load(&["good.json", "bad.json"]).unwrap_err();
        assert!(matches!(err, LayoutError::MalformedDocument { ref path, .. } if path == "bad.json"));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let loader = loader(InMemoryResourceProvider::new().with("bin.json", vec![0xff, 0xfe]));
        assert!(matches!(
            loader.load_one("bin.json"),
            Err(LayoutError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn test_empty_source_is_empty_document() {
        let loader = loader(InMemoryResourceProvider::new().with("empty.json", ""));
        let documents = loader.load(&["empty.json"]).unwrap();
        assert_eq!(documents.len(), 1);
        assert!(documents[0].is_empty());
    }

    #[test]
    fn test_resolve_composes_in_order() {
        let loader = loader(
            InMemoryResourceProvider::new()
                .with("a.json", r#"{"title": {"x": 100}, "frame": {"x": 1}}"#)
                .with("b.toml", "[title]\nx = 300\n"),
        );
        let layout = loader.resolve(&["a.json", "b.toml"]).unwrap();
        assert_eq!(layout.value_of("title", "x").unwrap(), Some(&AttributeValue::Number(300.0)));
        assert_eq!(layout.names().collect::<Vec<_>>(), vec!["title", "frame"]);
    }

    #[test]
    fn test_bundled_presets_resolve_from_memory() {
        let loader = LayoutLoader::new(Arc::new(bundled_presets()));
        let layout = loader.resolve(&["playing-card.yml", "hand.yml"]).unwrap();
        assert!(layout.contains("cut"));
        assert_eq!(layout.value_of("lower_left", "x").unwrap(), Some(&AttributeValue::Number(75.0)));
        // hand.yml's title replaced playing-card.yml's.
        assert_eq!(layout.value_of("title", "height").unwrap(), Some(&AttributeValue::Number(125.0)));
        assert_eq!(layout.value_of("title", "align").unwrap(), None);
    }

    #[test]
    fn test_presets_do_not_depend_on_the_filesystem() {
        let dir = tempdir().unwrap();
        let loader = LayoutLoader::with_search_path(dir.path().join("gone"), dir.path().join("also-gone"));
        let layout = loader.resolve(&["hand.yml"]).unwrap();
        assert_eq!(layout.value_of("frame", "width").unwrap(), Some(&AttributeValue::Number(749.0)));
        assert_eq!(layout.value_of("rules", "y").unwrap(), Some(&AttributeValue::Number(658.0)));
    }

    #[test]
    fn test_preset_dir_overrides_bundled_presets() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("presets")).unwrap();
        fs::write(dir.path().join("presets/hand.yml"), "frame:\n  x: 5\n").unwrap();

        let loader = LayoutLoader::with_search_path(dir.path(), dir.path().join("presets"));
        let hand = loader.resolve(&["hand.yml"]).unwrap();
        assert_eq!(hand.len(), 1);
        assert_eq!(hand.value_of("frame", "x").unwrap(), Some(&AttributeValue::Number(5.0)));

        let card = loader.resolve(&["playing-card.yml"]).unwrap();
        assert!(card.contains("safe"));
    }
}
