//! Deck sessions.
//!
//! - [`DeckBuilder`]: Fluent builder that loads configuration and layouts
//! - [`Deck`]: A set of cards that accepts layout-aware drawing calls
//! - [`DeckConfig`]: Per-deck settings read from an optional config file
//!
//! # Example
//!
//! ```ignore
//! use deckle::{DeckBuilder, RectOptions};
//!
//! let mut deck = DeckBuilder::new()
//!     .with_cards(3)
//!     .with_layout("custom-layout.json")
//!     .build(|_, size| MyCanvas::new(size))?;
//!
//! deck.rect(&RectOptions::new().with_layout("frame"))?;
//! deck.rect(&RectOptions::new().with_layout("frame").with_x(150.0))?;
//! ```

mod builder;
pub mod config;
mod draw;
pub mod range;

pub use builder::DeckBuilder;
pub use config::{ConfigError, DeckConfig};
pub use draw::{RectOptions, TextOptions};
pub use range::{CardRange, RangeError};

use crate::error::DeckError;
use deckle_layout::ResolvedLayout;
use deckle_traits::Canvas;
use deckle_types::{Geometry, Rect, Size};

/// A set of equally sized cards plus the layout and configuration they share.
///
/// The layout table is fully resolved when the deck is built and is never
/// modified afterwards.
#[derive(Debug)]
pub struct Deck<C> {
    size: Size,
    cards: Vec<C>,
    config: DeckConfig,
    layout: ResolvedLayout,
}

impl<C: Canvas> Deck<C> {
    pub(crate) fn new(size: Size, cards: Vec<C>, config: DeckConfig, layout: ResolvedLayout) -> Self {
        Self {
            size,
            cards,
            config,
            layout,
        }
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&C> {
        self.cards.get(index)
    }

    pub fn into_cards(self) -> Vec<C> {
        self.cards
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn layout(&self) -> &ResolvedLayout {
        &self.layout
    }

    /// Converts inches to pixels at the configured DPI.
    pub fn inches(&self, n: f64) -> f64 {
        n * self.config.dpi
    }

    /// Resolves the geometry of one drawing call.
    ///
    /// Explicit fields win, then the named layout entry, then the defaults
    /// (origin, full card size).
    pub fn layoutify(&self, layout: Option<&str>, geometry: Geometry) -> Result<Rect, DeckError> {
        let mut geometry = geometry;
        if let Some(entry) = layout {
            self.layout.fill_geometry(entry, &mut geometry)?;
        }
        Ok(geometry.resolve(self.size))
    }

    fn for_each_card<F>(&mut self, range: &CardRange, mut draw: F) -> Result<(), DeckError>
    where
        F: FnMut(&mut C) -> Result<(), deckle_traits::CanvasError>,
    {
        let indices = range.indices(self.cards.len())?;
        for card in &mut self.cards[indices] {
            draw(card)?;
        }
        Ok(())
    }
}

/// Describes where a drawing call lands, for log messages.
fn location(layout: Option<&str>, geometry: &Geometry) -> String {
    match layout {
        Some(name) => name.to_string(),
        None => format!(
            "@ {},{}",
            geometry.x.unwrap_or(0.0),
            geometry.y.unwrap_or(0.0)
        ),
    }
}
