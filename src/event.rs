// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log event data model.
//!
//! Events are produced by the upstream logging pipeline and consumed
//! read-only by sinks. An event is plain, serializable data: a severity
//! level, a message template with a bag of named scalar properties, and a
//! timestamp. Because the property bag can only hold scalar values, an
//! event cannot carry a live reference to a host object; the
//! [`ContextRegistry`](crate::ContextRegistry) exists to bridge that gap.

use crate::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// A scalar value carried in an event's property bag.
///
/// Properties are deliberately restricted to scalars so that events remain
/// serializable end to end. Variant order matters for untagged
/// deserialization: an integer must be tried before a float so `42` decodes
/// as [`PropertyValue::Integer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A boolean scalar.
    Bool(bool),
    /// A signed integer scalar. Context identifiers travel as this variant.
    Integer(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A string scalar.
    String(String),
}

impl PropertyValue {
    /// Returns the integer value, or `None` for any other variant.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(value) => write!(f, "{}", value),
            PropertyValue::Integer(value) => write!(f, "{}", value),
            PropertyValue::Float(value) => write!(f, "{}", value),
            PropertyValue::String(value) => write!(f, "{}", value),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Integer(value.into())
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

/**
One structured log event.

Owned by the upstream pipeline; sinks never mutate it. The builder-style
constructor exists for the pipeline (and tests) to assemble events, after
which the record is read-only through accessors.
*/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    timestamp: DateTime<Utc>,
    level: Level,
    template: String,
    #[serde(default)]
    properties: BTreeMap<String, PropertyValue>,
}

impl LogEvent {
    /// Creates an event at `level` with the given message template,
    /// timestamped now.
    pub fn new(level: Level, template: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            template: template.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Attaches a named scalar property, replacing any previous value under
    /// the same name.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn properties(&self) -> &BTreeMap<String, PropertyValue> {
        &self.properties
    }

    /// Looks up a single property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/*
Boilerplate notes for LogEvent:

Clone: derived, sinks and tests may need to duplicate an event.
PartialEq: derived, enables whole-record assertions in tests. Eq is out
because Float properties carry f64.
Hash/Ord: no meaningful ordering or hashing for log events.
Default: not sensible, an event without a level and template isn't one.
Display: rendering is the formatter's job, not the event's.
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_replace_on_same_name() {
        let event = LogEvent::new(Level::Information, "job {id}")
            .with_property("id", 1)
            .with_property("id", 2);
        assert_eq!(event.property("id"), Some(&PropertyValue::Integer(2)));
        assert_eq!(event.properties().len(), 1);
    }

    #[test]
    fn scalar_kinds_decode_distinctly() {
        let decoded: PropertyValue = serde_json::from_str("42").expect("integer");
        assert_eq!(decoded, PropertyValue::Integer(42));
        let decoded: PropertyValue = serde_json::from_str("4.5").expect("float");
        assert_eq!(decoded, PropertyValue::Float(4.5));
        let decoded: PropertyValue = serde_json::from_str("true").expect("bool");
        assert_eq!(decoded, PropertyValue::Bool(true));
        let decoded: PropertyValue = serde_json::from_str("\"x\"").expect("string");
        assert_eq!(decoded, PropertyValue::String("x".to_string()));
    }

    #[test]
    fn as_integer_rejects_other_scalars() {
        assert_eq!(PropertyValue::Integer(7).as_integer(), Some(7));
        assert_eq!(PropertyValue::Float(7.0).as_integer(), None);
        assert_eq!(PropertyValue::String("7".into()).as_integer(), None);
        assert_eq!(PropertyValue::Bool(true).as_integer(), None);
    }
}
