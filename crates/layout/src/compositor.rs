//! Folding of several documents into one `ResolvedLayout`.
//!
//! Two precedence rules meet here and are kept apart on purpose:
//! sibling parents merge attribute by attribute inside the resolver, while
//! documents replace each other entry by entry in this module.

use crate::document::LayoutDocument;
use crate::error::LayoutError;
use crate::resolved::ResolvedLayout;
use crate::resolver::ExtendsResolver;
use deckle_types::AttributeMap;
use indexmap::IndexMap;

/// Resolves every entry of `document`, using only that document to look up parents.
pub fn resolve_document(document: &LayoutDocument) -> Result<IndexMap<String, AttributeMap>, LayoutError> {
    let mut resolver = ExtendsResolver::new(document);
    let mut resolved = IndexMap::with_capacity(document.len());
    for name in document.names() {
        let attributes = resolver.resolve(name)?;
        resolved.insert(name.to_string(), attributes);
    }
    Ok(resolved)
}

/// Resolves each document on its own, then folds them left to right.
///
/// An entry defined again by a later document entirely replaces the earlier
/// definition. Any error aborts the whole composition.
pub fn compose<'d, I>(documents: I) -> Result<ResolvedLayout, LayoutError>
where
    I: IntoIterator<Item = &'d LayoutDocument>,
{
    let mut entries = IndexMap::new();
    for document in documents {
        let local = resolve_document(document)?;
        log::debug!(
            "Composing {} layout entries from '{}'",
            local.len(),
            document.source()
        );
        replace_entries(&mut entries, local, document.source());
    }
    Ok(ResolvedLayout::from_entries(entries))
}

fn replace_entries(
    running: &mut IndexMap<String, AttributeMap>,
    incoming: IndexMap<String, AttributeMap>,
    source: &str,
) {
    for (name, attributes) in incoming {
        if running.insert(name.clone(), attributes).is_some() {
            log::debug!("Layout entry '{}' redefined by '{}'", name, source);
        }
    }
}
