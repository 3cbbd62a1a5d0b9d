//! Flattening of `extends` chains within a single document.
//!
//! Resolution of an entry:
//! 1. every parent is resolved recursively, in listed order;
//! 2. the parents are folded left to right, a later parent overriding an
//!    earlier one attribute by attribute;
//! 3. the entry's own attributes are laid on top. Literals overwrite, while
//!    relative adjustments combine with the inherited number.
//!
//! The `visiting` set holds the entries on the current resolution path. A key
//! is added before its parents are resolved and removed once they are, so
//! any cycle is caught the first time a key repeats on a path, while two
//! branches that share an ancestor remain legal. This departs on purpose from
//! a visited set shared across sibling branches, which would reject a diamond
//! whose shared ancestor itself extends another entry.

use crate::document::{LayoutDocument, LayoutEntry};
use crate::error::LayoutError;
use crate::value::RawValue;
use deckle_types::{AttributeMap, AttributeValue};
use std::collections::{HashMap, HashSet};

pub struct ExtendsResolver<'a> {
    document: &'a LayoutDocument,
    resolved: HashMap<String, AttributeMap>,
}

impl<'a> ExtendsResolver<'a> {
    pub fn new(document: &'a LayoutDocument) -> Self {
        Self {
            document,
            resolved: HashMap::new(),
        }
    }

    /// Resolves `key` with a fresh, empty visiting set.
    pub fn resolve(&mut self, key: &str) -> Result<AttributeMap, LayoutError> {
        let mut visiting = HashSet::new();
        self.resolve_with(key, &mut visiting)
    }

    /// Resolves `key`, failing if it is already in `visiting`.
    ///
    /// On success `visiting` is left as it was passed in.
    pub fn resolve_with(
        &mut self,
        key: &str,
        visiting: &mut HashSet<String>,
    ) -> Result<AttributeMap, LayoutError> {
        if visiting.contains(key) {
            return Err(LayoutError::circular_extends(key));
        }
        if let Some(done) = self.resolved.get(key) {
            return Ok(done.clone());
        }

        let document = self.document;
        let entry = document
            .get(key)
            .ok_or_else(|| LayoutError::unknown_entry(key))?;

        visiting.insert(key.to_string());
        let inherited = self.inherit(key, entry, visiting);
        visiting.remove(key);

        let flattened = overlay(key, inherited?, entry)?;
        log::debug!(
            "Resolved layout entry '{}' from '{}' ({} attributes)",
            key,
            document.source(),
            flattened.len()
        );
        self.resolved.insert(key.to_string(), flattened.clone());
        Ok(flattened)
    }

    /// Number of entries flattened so far.
    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    fn inherit(
        &mut self,
        key: &str,
        entry: &LayoutEntry,
        visiting: &mut HashSet<String>,
    ) -> Result<AttributeMap, LayoutError> {
        let mut accumulated = AttributeMap::new();
        for parent in entry.parents() {
            if !self.document.contains(parent) {
                return Err(LayoutError::unknown_parent(key, parent));
            }
            let from_parent = self.resolve_with(parent, visiting)?;
            merge_siblings(&mut accumulated, from_parent);
        }
        Ok(accumulated)
    }
}

/// Folds a later sibling's attributes into the accumulator; the later sibling wins.
fn merge_siblings(accumulated: &mut AttributeMap, later: AttributeMap) {
    for (name, value) in later {
        accumulated.insert(name, value);
    }
}

/// Lays the entry's own attributes over what it inherited.
fn overlay(
    key: &str,
    mut inherited: AttributeMap,
    entry: &LayoutEntry,
) -> Result<AttributeMap, LayoutError> {
    for (name, raw) in &entry.attributes {
        let value = match raw {
            RawValue::Literal(value) => value.clone(),
            RawValue::Relative(adjustment) => match inherited.get(name) {
                Some(AttributeValue::Number(base)) => AttributeValue::Number(adjustment.apply(*base)),
                None | Some(AttributeValue::Null) => {
                    return Err(LayoutError::RelativeWithoutBase {
                        entry: key.to_string(),
                        attribute: name.clone(),
                    });
                }
                Some(other) => {
                    return Err(LayoutError::NonNumericBase {
                        entry: key.to_string(),
                        attribute: name.clone(),
                        found: other.kind(),
                    });
                }
            },
        };
        inherited.insert(name.clone(), value);
    }
    Ok(inherited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Adjustment, Sign};

    fn num(n: f64) -> RawValue {
        RawValue::Literal(AttributeValue::Number(n))
    }

    fn plus(n: f64) -> RawValue {
        RawValue::Relative(Adjustment { sign: Sign::Plus, magnitude: n })
    }

    fn minus(n: f64) -> RawValue {
        RawValue::Relative(Adjustment { sign: Sign::Minus, magnitude: n })
    }

    #[test]
    fn test_base_entry_is_returned_unchanged() {
        let doc = LayoutDocument::new("t").with_entry("frame", LayoutEntry::new().with("x", num(38.0)));
        let resolved = ExtendsResolver::new(&doc).resolve("frame").unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved["x"], AttributeValue::Number(38.0));
    }

    #[test]
    fn test_child_overrides_parent() {
        let doc = LayoutDocument::new("t")
            .with_entry("frame", LayoutEntry::new().with("x", num(38.0)).with("y", num(38.0)))
            .with_entry(
                "title",
                LayoutEntry::new()
                    .extending(["frame"])
                    .with("x", num(38.0))
                    .with("y", num(50.0))
                    .with("width", num(100.0)),
            );
        let resolved = ExtendsResolver::new(&doc).resolve("title").unwrap();
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved["x"], AttributeValue::Number(38.0));
        assert_eq!(resolved["y"], AttributeValue::Number(50.0));
        assert_eq!(resolved["width"], AttributeValue::Number(100.0));
    }

    #[test]
    fn test_later_parent_wins_among_siblings() {
        let doc = LayoutDocument::new("t")
            .with_entry(
                "uncle",
                LayoutEntry::new().with("x", num(104.0)).with("y", num(105.0)).with("b", num(106.0)),
            )
            .with_entry(
                "aunt",
                LayoutEntry::new().with("a", num(101.0)).with("b", num(102.0)).with("c", num(103.0)),
            )
            .with_entry(
                "child",
                LayoutEntry::new()
                    .extending(["uncle", "aunt"])
                    .with("a", num(107.0))
                    .with("x", num(108.0)),
            );
        let resolved = ExtendsResolver::new(&doc).resolve("child").unwrap();
        assert_eq!(resolved.len(), 5);
        assert_eq!(resolved["a"], AttributeValue::Number(107.0));
        assert_eq!(resolved["b"], AttributeValue::Number(102.0));
        assert_eq!(resolved["c"], AttributeValue::Number(103.0));
        assert_eq!(resolved["x"], AttributeValue::Number(108.0));
        assert_eq!(resolved["y"], AttributeValue::Number(105.0));
    }

    #[test]
    fn test_relative_adjustments_use_flattened_parent() {
        let doc = LayoutDocument::new("t")
            .with_entry("frame", LayoutEntry::new().with("x", num(38.0)).with("y", num(38.0)))
            .with_entry("inner", LayoutEntry::new().extending(["frame"]).with("x", plus(10.0)))
            .with_entry(
                "innermost",
                LayoutEntry::new().extending(["inner"]).with("x", plus(5.0)).with("y", minus(8.0)),
            );
        let resolved = ExtendsResolver::new(&doc).resolve("innermost").unwrap();
        assert_eq!(resolved["x"], AttributeValue::Number(53.0));
        assert_eq!(resolved["y"], AttributeValue::Number(30.0));
    }

    #[test]
    fn test_relative_adjustment_sees_winning_sibling() {
        let doc = LayoutDocument::new("t")
            .with_entry("left", LayoutEntry::new().with("x", num(10.0)))
            .with_entry("right", LayoutEntry::new().with("x", num(500.0)))
            .with_entry("child", LayoutEntry::new().extending(["left", "right"]).with("x", minus(100.0)));
        let resolved = ExtendsResolver::new(&doc).resolve("child").unwrap();
        assert_eq!(resolved["x"], AttributeValue::Number(400.0));
    }

    #[test]
    fn test_relative_without_base_fails() {
        let doc = LayoutDocument::new("t")
            .with_entry("frame", LayoutEntry::new().with("x", num(38.0)))
            .with_entry("title", LayoutEntry::new().extending(["frame"]).with("y", plus(5.0)))
            .with_entry("bare", LayoutEntry::new().with("y", plus(5.0)));
        let mut resolver = ExtendsResolver::new(&doc);
        assert_eq!(
            resolver.resolve("title"),
            Err(LayoutError::RelativeWithoutBase {
                entry: "title".into(),
                attribute: "y".into()
            })
        );
        assert!(matches!(
            resolver.resolve("bare"),
            Err(LayoutError::RelativeWithoutBase { .. })
        ));
    }

    #[test]
    fn test_relative_on_non_numeric_base_fails() {
        let doc = LayoutDocument::new("t")
            .with_entry("frame", LayoutEntry::new().with("x", RawValue::Literal("left".into())))
            .with_entry("title", LayoutEntry::new().extending(["frame"]).with("x", plus(5.0)));
        assert_eq!(
            ExtendsResolver::new(&doc).resolve("title"),
            Err(LayoutError::NonNumericBase {
                entry: "title".into(),
                attribute: "x".into(),
                found: "string"
            })
        );
    }

    #[test]
    fn test_self_reference_is_circular() {
        let doc = LayoutDocument::new("t").with_entry("a", LayoutEntry::new().extending(["a"]));
        assert_eq!(
            ExtendsResolver::new(&doc).resolve("a"),
            Err(LayoutError::circular_extends("a"))
        );
    }

    #[test]
    fn test_two_and_three_cycles_name_first_revisited_key() {
        let two = LayoutDocument::new("t")
            .with_entry("a", LayoutEntry::new().extending(["b"]))
            .with_entry("b", LayoutEntry::new().extending(["a"]));
        assert_eq!(
            ExtendsResolver::new(&two).resolve("a"),
            Err(LayoutError::circular_extends("a"))
        );

        let three = LayoutDocument::new("t")
            .with_entry("a", LayoutEntry::new().extending(["b"]))
            .with_entry("b", LayoutEntry::new().extending(["c"]))
            .with_entry("c", LayoutEntry::new().extending(["a"]));
        assert_eq!(
            ExtendsResolver::new(&three).resolve("b"),
            Err(LayoutError::circular_extends("b"))
        );
    }

    #[test]
    fn test_cycle_reached_through_second_parent() {
        let doc = LayoutDocument::new("t")
            .with_entry("base", LayoutEntry::new().with("x", num(1.0)))
            .with_entry("a", LayoutEntry::new().extending(["base", "b"]))
            .with_entry("b", LayoutEntry::new().extending(["a"]));
        assert_eq!(
            ExtendsResolver::new(&doc).resolve("a"),
            Err(LayoutError::circular_extends("a"))
        );
    }

    #[test]
    fn test_shared_ancestor_is_not_a_cycle() {
        let doc = LayoutDocument::new("t")
            .with_entry("root", LayoutEntry::new().with("x", num(1.0)))
            .with_entry("mid", LayoutEntry::new().extending(["root"]).with("y", num(2.0)))
            .with_entry("left", LayoutEntry::new().extending(["mid"]))
            .with_entry("right", LayoutEntry::new().extending(["mid"]).with("y", plus(1.0)))
            .with_entry("child", LayoutEntry::new().extending(["left", "right"]));
        let resolved = ExtendsResolver::new(&doc).resolve("child").unwrap();
        assert_eq!(resolved["x"], AttributeValue::Number(1.0));
        assert_eq!(resolved["y"], AttributeValue::Number(3.0));
    }

    #[test]
    fn test_unknown_parent_fails() {
        let doc = LayoutDocument::new("t").with_entry("a", LayoutEntry::new().extending(["ghost"]));
        assert_eq!(
            ExtendsResolver::new(&doc).resolve("a"),
            Err(LayoutError::unknown_parent("a", "ghost"))
        );
    }

    #[test]
    fn test_empty_parent_list_keeps_own_attributes() {
        let doc = LayoutDocument::new("t").with_entry(
            "a",
            LayoutEntry::new().extending(Vec::<String>::new()).with("x", num(3.0)),
        );
        let resolved = ExtendsResolver::new(&doc).resolve("a").unwrap();
        assert_eq!(resolved["x"], AttributeValue::Number(3.0));
    }

    #[test]
    fn test_results_are_memoized() {
        let doc = LayoutDocument::new("t")
            .with_entry("frame", LayoutEntry::new().with("x", num(1.0)))
            .with_entry("title", LayoutEntry::new().extending(["frame"]));
        let mut resolver = ExtendsResolver::new(&doc);
        resolver.resolve("title").unwrap();
        assert_eq!(resolver.resolved_count(), 2);
        assert_eq!(resolver.resolve("frame").unwrap()["x"], AttributeValue::Number(1.0));
    }
}
