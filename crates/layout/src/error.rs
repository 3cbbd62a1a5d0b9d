use deckle_traits::ResourceError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid layout: circular extends with '{key}'")]
    CircularExtends { key: String },

    #[error("Layout entry '{entry}' extends '{parent}', which is not defined in the same document")]
    UnknownParent { entry: String, parent: String },

    #[error("Layout entry '{entry}' adjusts '{attribute}' relatively, but no parent defines it")]
    RelativeWithoutBase { entry: String, attribute: String },

    #[error("Layout entry '{entry}' adjusts '{attribute}' relatively, but the inherited value is a {found}, not a number")]
    NonNumericBase {
        entry: String,
        attribute: String,
        found: &'static str,
    },

    #[error("Layout file not found: {path}")]
    MissingSource { path: String },

    #[error("Malformed layout document '{path}': {message}")]
    MalformedDocument { path: String, message: String },

    #[error("Unknown layout entry: '{0}'")]
    UnknownEntry(String),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
}

impl LayoutError {
    pub fn circular_extends(key: impl Into<String>) -> Self {
        Self::CircularExtends { key: key.into() }
    }

    pub fn unknown_parent(entry: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::UnknownParent {
            entry: entry.into(),
            parent: parent.into(),
        }
    }

    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unknown_entry(name: impl Into<String>) -> Self {
        Self::UnknownEntry(name.into())
    }
}
