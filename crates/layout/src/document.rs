//! Raw layout documents: one parsed source, extends not yet resolved.
//!
//! A document is a mapping of entry name to attribute mapping:
//!
//! ```json
//! {
//!   "frame": { "x": 38, "y": 38, "width": 749, "height": 1049 },
//!   "title": { "extends": "frame", "height": 100 },
//!   "blank": null
//! }
//! ```
//!
//! The same document may be written as TOML or YAML; every format is parsed
//! into a JSON value first so the entry rules are shared.

use crate::error::LayoutError;
use crate::value::RawValue;
use deckle_types::AttributeValue;
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;

/// The reserved attribute naming an entry's parents.
pub const EXTENDS_KEY: &str = "extends";

/// The structured-text syntax of a layout source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    #[default]
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Infers the format from a source's extension: `.toml`, `.yml` and
    /// `.yaml` are recognised, anything else is read as JSON.
    pub fn from_source(source: &str) -> Self {
        let ext = Path::new(source)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => DocumentFormat::Toml,
            Some("yml" | "yaml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// One named entry of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutEntry {
    /// `None` for a base entry. `Some(vec![])` is an explicit empty parent list.
    pub extends: Option<Vec<String>>,
    pub attributes: IndexMap<String, RawValue>,
}

impl LayoutEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_base(&self) -> bool {
        self.extends.is_none()
    }

    /// Parent names in listed order; empty for a base entry.
    pub fn parents(&self) -> &[String] {
        self.extends.as_deref().unwrap_or(&[])
    }

    pub fn extending<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extends = Some(parents.into_iter().map(Into::into).collect());
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutDocument {
    source: String,
    entries: IndexMap<String, LayoutEntry>,
}

impl LayoutDocument {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            entries: IndexMap::new(),
        }
    }

    /// Parses `text` in the given format.
    ///
    /// Blank text is an empty document, not an error. So is a YAML document
    /// that is just `null` or `false`.
    pub fn parse(source: &str, text: &str, format: DocumentFormat) -> Result<Self, LayoutError> {
        if text.trim().is_empty() {
            return Ok(Self::new(source));
        }
        let value: Value = match format {
            DocumentFormat::Json => {
                serde_json::from_str(text).map_err(|e| LayoutError::malformed(source, e.to_string()))?
            }
            DocumentFormat::Toml => {
                toml::from_str(text).map_err(|e| LayoutError::malformed(source, e.to_string()))?
            }
            DocumentFormat::Yaml => {
                match serde_yaml::from_str(text).map_err(|e| LayoutError::malformed(source, e.to_string()))? {
                    Value::Bool(false) => Value::Null,
                    value => value,
                }
            }
        };
        Self::from_value(source, value)
    }

    /// Builds a document from an already-parsed JSON value.
    pub fn from_value(source: &str, value: Value) -> Result<Self, LayoutError> {
        let mut document = Self::new(source);
        let map = match value {
            Value::Null => return Ok(document),
            Value::Object(map) => map,
            other => {
                return Err(LayoutError::malformed(
                    source,
                    format!("expected a mapping of layout entries, found {}", json_kind(&other)),
                ));
            }
        };

        for (name, body) in map {
            let entry = parse_entry(source, &name, body)?;
            document.entries.insert(name, entry);
        }
        Ok(document)
    }

    pub fn with_entry(mut self, name: impl Into<String>, entry: LayoutEntry) -> Self {
        self.insert(name, entry);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: LayoutEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn get(&self, name: &str) -> Option<&LayoutEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LayoutEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_entry(source: &str, name: &str, body: Value) -> Result<LayoutEntry, LayoutError> {
    let attributes = match body {
        Value::Null => return Ok(LayoutEntry::new()),
        Value::Object(attributes) => attributes,
        other => {
            return Err(LayoutError::malformed(
                source,
                format!("entry '{}' must be a mapping, found {}", name, json_kind(&other)),
            ));
        }
    };

    let mut entry = LayoutEntry::new();
    for (key, value) in attributes {
        if key == EXTENDS_KEY {
            entry.extends = Some(parse_extends(source, name, value)?);
            continue;
        }
        let raw = match value {
            Value::String(text) => RawValue::from_text(&text)
                .map_err(|msg| LayoutError::malformed(source, format!("entry '{}', attribute '{}': {}", name, key, msg)))?,
            other => RawValue::Literal(literal(source, name, &key, other)?),
        };
        entry.attributes.insert(key, raw);
    }
    Ok(entry)
}

fn parse_extends(source: &str, name: &str, value: Value) -> Result<Vec<String>, LayoutError> {
    let invalid = |found: &str| {
        LayoutError::malformed(
            source,
            format!("'{}' of entry '{}' must be a name or a list of names, found {}", EXTENDS_KEY, name, found),
        )
    };
    match value {
        Value::String(parent) => Ok(vec![parent]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(parent) => Ok(parent),
                other => Err(invalid(json_kind(&other))),
            })
            .collect(),
        other => Err(invalid(json_kind(&other))),
    }
}

fn literal(source: &str, entry: &str, key: &str, value: Value) -> Result<AttributeValue, LayoutError> {
    Ok(match value {
        Value::Null => AttributeValue::Null,
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => match n.as_f64() {
            Some(n) => AttributeValue::Number(n),
            None => {
                return Err(LayoutError::malformed(
                    source,
                    format!("entry '{}', attribute '{}': number {} is out of range", entry, key, n),
                ));
            }
        },
        Value::String(s) => AttributeValue::Text(s),
        Value::Array(items) => AttributeValue::List(
            items
                .into_iter()
                .map(|item| literal(source, entry, key, item))
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(_) => {
            return Err(LayoutError::malformed(
                source,
                format!("entry '{}', attribute '{}': nested mappings are not supported", entry, key),
            ));
        }
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
