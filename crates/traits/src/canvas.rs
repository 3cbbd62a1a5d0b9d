//! The drawing seam.
//!
//! Deckle never rasterizes anything itself. Every drawing call is reduced to a
//! fully resolved spec and handed to one `Canvas` per card.

use deckle_types::Rect;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Canvas error: {0}")]
pub struct CanvasError(pub String);

/// A rounded rectangle with every field resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RectSpec {
    pub bounds: Rect,
    pub x_radius: f64,
    pub y_radius: f64,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
}

/// A block of text with every field resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub content: String,
    pub bounds: Rect,
    pub font: Option<String>,
    pub color: String,
    /// Outline color for debugging text extents, from the deck configuration.
    pub hint: Option<String>,
}

/// A single card surface that accepts resolved drawing operations.
pub trait Canvas {
    fn draw_rect(&mut self, spec: &RectSpec) -> Result<(), CanvasError>;

    fn draw_text(&mut self, spec: &TextSpec) -> Result<(), CanvasError>;
}
