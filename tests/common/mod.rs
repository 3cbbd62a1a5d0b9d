pub mod fixtures;

use deckle::{Canvas, CanvasError, RectSpec, Size, TextSpec};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawn {
    Rect(RectSpec),
    Text(TextSpec),
}

/// A canvas that records what it is asked to draw.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub index: usize,
    pub size: Size,
    pub drawn: Vec<Drawn>,
}

impl RecordingCanvas {
    pub fn new(index: usize, size: Size) -> Self {
        Self {
            index,
            size,
            drawn: Vec::new(),
        }
    }

    pub fn rects(&self) -> Vec<&RectSpec> {
        self.drawn
            .iter()
            .filter_map(|d| match d {
                Drawn::Rect(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&TextSpec> {
        self.drawn
            .iter()
            .filter_map(|d| match d {
                Drawn::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_rect(&mut self, spec: &RectSpec) -> Result<(), CanvasError> {
        self.drawn.push(Drawn::Rect(spec.clone()));
        Ok(())
    }

    fn draw_text(&mut self, spec: &TextSpec) -> Result<(), CanvasError> {
        self.drawn.push(Drawn::Text(spec.clone()));
        Ok(())
    }
}

/// A canvas whose every operation fails.
#[derive(Debug, Default)]
pub struct FailingCanvas;

impl Canvas for FailingCanvas {
    fn draw_rect(&mut self, _spec: &RectSpec) -> Result<(), CanvasError> {
        Err(CanvasError("surface lost".to_string()))
    }

    fn draw_text(&mut self, _spec: &TextSpec) -> Result<(), CanvasError> {
        Err(CanvasError("surface lost".to_string()))
    }
}

/// Writes a JSON layout document into `dir`.
pub fn write_json(dir: &Path, name: &str, document: &Value) -> std::io::Result<()> {
    fs::write(dir.join(name), serde_json::to_string_pretty(document)?)
}
