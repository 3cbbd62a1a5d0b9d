//! Resource providers for deckle.
//!
//! ## Available Providers
//!
//! - [`FilesystemResourceProvider`]: Loads sources from the local filesystem
//! - [`SearchPathResourceProvider`]: Tries several providers in order, first hit wins
//!
//! The in-memory provider from deckle-traits is re-exported for convenience.

mod filesystem;
mod search;

pub use filesystem::FilesystemResourceProvider;
pub use search::SearchPathResourceProvider;

pub use deckle_traits::InMemoryResourceProvider;
