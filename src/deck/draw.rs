//! Layout-aware drawing calls.

use super::range::CardRange;
use super::{Deck, location};
use crate::error::DeckError;
use deckle_traits::{Canvas, RectSpec, TextSpec};
use deckle_types::Geometry;

/// Options for [`Deck::rect`].
#[derive(Debug, Clone, PartialEq)]
pub struct RectOptions {
    pub range: CardRange,
    pub layout: Option<String>,
    pub geometry: Geometry,
    /// When set, overrides both `x_radius` and `y_radius`.
    pub radius: Option<f64>,
    pub x_radius: f64,
    pub y_radius: f64,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
}

impl Default for RectOptions {
    fn default() -> Self {
        Self {
            range: CardRange::All,
            layout: None,
            geometry: Geometry::default(),
            radius: None,
            x_radius: 0.0,
            y_radius: 0.0,
            fill_color: "#0000".to_string(),
            stroke_color: "black".to_string(),
            stroke_width: 2.0,
        }
    }
}

impl RectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, range: impl Into<CardRange>) -> Self {
        self.range = range.into();
        self
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.geometry.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.geometry.y = Some(y);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = color.into();
        self
    }

    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    fn radii(&self) -> (f64, f64) {
        match self.radius {
            Some(r) => (r, r),
            None => (self.x_radius, self.y_radius),
        }
    }
}

/// Options for [`Deck::text`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    pub range: CardRange,
    pub layout: Option<String>,
    pub geometry: Geometry,
    pub content: String,
    pub font: Option<String>,
    pub color: String,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            range: CardRange::All,
            layout: None,
            geometry: Geometry::default(),
            content: String::new(),
            font: None,
            color: "black".to_string(),
        }
    }
}

impl TextOptions {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_range(mut self, range: impl Into<CardRange>) -> Self {
        self.range = range.into();
        self
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

impl<C: Canvas> Deck<C> {
    /// Draws a rounded rectangle on every card in `options.range`.
    pub fn rect(&mut self, options: &RectOptions) -> Result<(), DeckError> {
        let bounds = self.layoutify(options.layout.as_deref(), options.geometry)?;
        let (x_radius, y_radius) = options.radii();
        let spec = RectSpec {
            bounds,
            x_radius,
            y_radius,
            fill_color: self.config.resolve_color(&options.fill_color),
            stroke_color: self.config.resolve_color(&options.stroke_color),
            stroke_width: options.stroke_width,
        };
        log::debug!(
            "rect {} on cards {}",
            location(options.layout.as_deref(), &options.geometry),
            options.range
        );
        self.for_each_card(&options.range, |card| card.draw_rect(&spec))
    }

    /// Draws text on every card in `options.range`.
    pub fn text(&mut self, options: &TextOptions) -> Result<(), DeckError> {
        let bounds = self.layoutify(options.layout.as_deref(), options.geometry)?;
        let spec = TextSpec {
            content: options.content.clone(),
            bounds,
            font: options.font.clone(),
            color: self.config.resolve_color(&options.color),
            hint: self.config.text_hint().map(|hint| self.config.resolve_color(hint)),
        };
        log::debug!(
            "text {} on cards {}",
            location(options.layout.as_deref(), &options.geometry),
            options.range
        );
        self.for_each_card(&options.range, |card| card.draw_text(&spec))
    }
}
