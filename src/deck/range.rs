use std::fmt;
use std::ops::{Range, RangeInclusive};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("{range} is outside of deck range of 0..{len}")]
    OutOfDeck { range: String, len: usize },
}

/// Selects the cards a drawing call applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CardRange {
    #[default]
    All,
    Index(usize),
    /// Half-open, like `Range`.
    Span(Range<usize>),
}

impl CardRange {
    /// The card indices selected in a deck of `len` cards.
    pub fn indices(&self, len: usize) -> Result<Range<usize>, RangeError> {
        let selected = match self {
            CardRange::All => 0..len,
            CardRange::Index(i) => *i..i.saturating_add(1),
            CardRange::Span(span) => span.clone(),
        };
        // A reversed span selects nothing.
        let selected = selected.start.min(selected.end)..selected.end;
        if selected.end > len {
            return Err(RangeError::OutOfDeck {
                range: self.to_string(),
                len,
            });
        }
        Ok(selected)
    }
}

impl fmt::Display for CardRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardRange::All => write!(f, "all"),
            CardRange::Index(i) => write!(f, "{}", i),
            CardRange::Span(span) => write!(f, "{}..{}", span.start, span.end),
        }
    }
}

impl From<usize> for CardRange {
    fn from(index: usize) -> Self {
        CardRange::Index(index)
    }
}

impl From<Range<usize>> for CardRange {
    fn from(span: Range<usize>) -> Self {
        CardRange::Span(span)
    }
}

impl From<RangeInclusive<usize>> for CardRange {
    fn from(span: RangeInclusive<usize>) -> Self {
        CardRange::Span(*span.start()..span.end().saturating_add(1))
    }
}
