// src/error.rs
use crate::deck::{ConfigError, RangeError};
use deckle_layout::LayoutError;
use deckle_traits::CanvasError;
use thiserror::Error;

/// The error type for building decks and issuing drawing calls.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Configuration failed: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid range: {0}")]
    Range(#[from] RangeError),

    #[error("Drawing failed: {0}")]
    Canvas(#[from] CanvasError),
}
