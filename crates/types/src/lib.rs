pub mod geometry;
pub mod value;

pub use geometry::{Geometry, Rect, Size};
pub use value::{AttributeMap, AttributeValue};
