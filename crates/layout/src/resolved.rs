//! The read-only lookup surface over a composed layout.

use crate::error::LayoutError;
use deckle_types::{AttributeMap, AttributeValue, Geometry};
use indexmap::IndexMap;
use serde::Serialize;

/// The fully flattened entry table of a deck.
///
/// Built once by [`compose`](crate::compose) and never mutated afterwards.
/// No entry contains `extends` or an unapplied relative adjustment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedLayout {
    entries: IndexMap<String, AttributeMap>,
}

impl ResolvedLayout {
    pub(crate) fn from_entries(entries: IndexMap<String, AttributeMap>) -> Self {
        Self { entries }
    }

    /// All attributes of an entry. An entry with no attributes yields an
    /// empty map; an unknown entry is an error.
    pub fn attributes_for(&self, entry: &str) -> Result<&AttributeMap, LayoutError> {
        self.entries
            .get(entry)
            .ok_or_else(|| LayoutError::unknown_entry(entry))
    }

    /// A single attribute. `Ok(None)` when the entry exists but does not set
    /// the attribute, or sets it to null.
    pub fn value_of(&self, entry: &str, attribute: &str) -> Result<Option<&AttributeValue>, LayoutError> {
        Ok(self
            .attributes_for(entry)?
            .get(attribute)
            .filter(|v| !v.is_null()))
    }

    /// Several attributes at once, in the order requested.
    pub fn values_of(
        &self,
        entry: &str,
        attributes: &[&str],
    ) -> Result<Vec<Option<&AttributeValue>>, LayoutError> {
        let map = self.attributes_for(entry)?;
        Ok(attributes
            .iter()
            .map(|name| map.get(*name).filter(|v| !v.is_null()))
            .collect())
    }

    /// Fills the omitted fields of `geometry` from the entry's numeric attributes.
    pub fn fill_geometry(&self, entry: &str, geometry: &mut Geometry) -> Result<(), LayoutError> {
        geometry.fill_from(self.attributes_for(entry)?);
        Ok(())
    }

    pub fn get(&self, entry: &str) -> Option<&AttributeMap> {
        self.entries.get(entry)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains_key(entry)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeMap)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
