pub mod canvas;
pub mod resource;

pub use canvas::{Canvas, CanvasError, RectSpec, TextSpec};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
