//! Layout documents and their `extends` resolution.
//!
//! A deck's layout is built once from an ordered list of sources:
//!
//! 1. [`LayoutLoader`] reads each source (working directory first, bundled
//!    presets second) into a [`LayoutDocument`];
//! 2. [`compose`] flattens every entry of each document with an
//!    [`ExtendsResolver`], then lets later documents replace earlier entries;
//! 3. the resulting [`ResolvedLayout`] answers per-entry, per-attribute lookups.

pub mod compositor;
pub mod document;
pub mod error;
pub mod loader;
pub mod resolved;
pub mod resolver;
pub mod value;

pub use compositor::{compose, resolve_document};
pub use document::{DocumentFormat, EXTENDS_KEY, LayoutDocument, LayoutEntry};
pub use error::LayoutError;
pub use loader::{BUNDLED_PRESETS, LayoutLoader, bundled_presets};
pub use resolved::ResolvedLayout;
pub use resolver::ExtendsResolver;
pub use value::{Adjustment, RawValue, Sign, parse_adjustment};
