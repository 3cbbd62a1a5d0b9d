use deckle_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::sync::Arc;

/// Tries each provider in order and returns the first resource found.
///
/// Only `NotFound` moves the search on to the next provider. Any other failure
/// means the resource exists but could not be read, and is returned as-is.
#[derive(Debug, Default)]
pub struct SearchPathResourceProvider {
    providers: Vec<Arc<dyn ResourceProvider>>,
}

impl SearchPathResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a provider; it is searched after all previously added ones.
    pub fn then(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl ResourceProvider for SearchPathResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        for provider in &self.providers {
            match provider.load(path) {
                Ok(data) => {
                    log::debug!("Resolved '{}' via {}", path, provider.name());
                    return Ok(data);
                }
                Err(e) if e.is_not_found() => continue,
                Err(e) => return Err(e),
            }
        }
        Err(ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.providers.iter().any(|p| p.exists(path))
    }

    fn name(&self) -> &'static str {
        "SearchPathResourceProvider"
    }
}
