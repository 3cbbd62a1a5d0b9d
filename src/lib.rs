//! Deckle: declarative card decks with inheritable layouts.
//!
//! Layout resolution lives in `deckle-layout`; this crate ties it to deck
//! sessions, configuration and the [`Canvas`] drawing seam.

pub mod deck;
pub mod error;

pub use deck::{CardRange, ConfigError, Deck, DeckBuilder, DeckConfig, RangeError, RectOptions, TextOptions};
pub use error::DeckError;

pub use deckle_layout::{LayoutError, LayoutLoader, ResolvedLayout};
pub use deckle_traits::{Canvas, CanvasError, RectSpec, TextSpec};
pub use deckle_types::{AttributeMap, AttributeValue, Geometry, Rect, Size};
