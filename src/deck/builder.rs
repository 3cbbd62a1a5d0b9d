use super::Deck;
use super::config::DeckConfig;
use crate::error::DeckError;
use deckle_layout::LayoutLoader;
use deckle_resource::FilesystemResourceProvider;
use deckle_traits::{Canvas, ResourceProvider};
use deckle_types::Size;
use std::path::PathBuf;
use std::sync::Arc;

/// A builder for creating a [`Deck`].
#[derive(Debug)]
pub struct DeckBuilder {
    size: Size,
    card_count: usize,
    config_file: String,
    layouts: Vec<String>,
    resource_root: PathBuf,
    preset_dir: Option<PathBuf>,
    provider: Option<Arc<dyn ResourceProvider>>,
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self {
            size: Size::new(825.0, 1125.0),
            card_count: 1,
            config_file: "config.json".to_string(),
            layouts: Vec::new(),
            resource_root: PathBuf::from("."),
            preset_dir: None,
            provider: None,
        }
    }
}

impl DeckBuilder {
    /// Creates a builder for a single 825x1125 card with no layouts.
    pub fn new() -> Self { Default::default() }

    /// Sets the size of every card, in pixels.
    pub fn with_size(mut self, width: f64, height: f64) -> Self { self.size = Size::new(width, height); self }

    pub fn with_cards(mut self, count: usize) -> Self { self.card_count = count; self }

    /// Sets the config file name. A missing file is not an error.
    pub fn with_config_file(mut self, path: impl Into<String>) -> Self { self.config_file = path.into(); self }

    /// Appends one layout source. Later sources redefine earlier entries.
    pub fn with_layout(mut self, source: impl Into<String>) -> Self { self.layouts.push(source.into()); self }

    /// Replaces the list of layout sources.
    pub fn with_layouts<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layouts = sources.into_iter().map(Into::into).collect();
        self
    }

    /// Directory that config and layout paths are resolved against.
    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self { self.resource_root = root.into(); self }

    /// Directory searched for layouts not found under the resource root,
    /// ahead of the bundled presets.
    pub fn with_preset_dir(mut self, dir: impl Into<PathBuf>) -> Self { self.preset_dir = Some(dir.into()); self }

    /// Reads config and layouts from `provider` instead of the filesystem.
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self { self.provider = Some(provider); self }

    /// Consumes the builder: loads the config, resolves every layout source,
    /// then creates one canvas per card with `make_card`.
    ///
    /// Any layout error (circular extends, malformed document) aborts the build.
    pub fn build<C, F>(self, mut make_card: F) -> Result<Deck<C>, DeckError>
    where
        C: Canvas,
        F: FnMut(usize, Size) -> C,
    {
        log::info!(
            "Building {} {}x{} cards",
            self.card_count,
            self.size.width,
            self.size.height
        );

        let (config_provider, loader): (Arc<dyn ResourceProvider>, LayoutLoader) = match self.provider {
            Some(provider) => (provider.clone(), LayoutLoader::with_presets(provider)),
            None => {
                let loader = match &self.preset_dir {
                    Some(dir) => LayoutLoader::with_search_path(&self.resource_root, dir),
                    None => LayoutLoader::with_working_dir(&self.resource_root),
                };
                (Arc::new(FilesystemResourceProvider::new(&self.resource_root)), loader)
            }
        };

        let config = DeckConfig::load(config_provider.as_ref(), &self.config_file)?;
        let layout = loader.resolve(self.layouts.as_slice())?;

        let cards = (0..self.card_count).map(|i| make_card(i, self.size)).collect();
        Ok(Deck::new(self.size, cards, config, layout))
    }
}
