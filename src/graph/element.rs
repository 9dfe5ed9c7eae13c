//! Elements and connections: the nodes and directed edges of a flow graph.

use super::properties::ElementProperties;
use crate::registry::ElementType;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque unique identifier of a [`FlowElement`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Opaque unique identifier of a [`Connection`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConnectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ConnectionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Top-left anchored canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node in the approval-flow graph.
///
/// The element's type is carried by its [`ElementProperties`] variant; the
/// persisted JSON additionally spells it out as a sibling `type` tag so the
/// properties bag can be parsed against the right record shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowElement {
    pub id: ElementId,
    pub position: Position,
    pub properties: ElementProperties,
}

impl FlowElement {
    pub fn new(id: ElementId, position: Position, properties: ElementProperties) -> Self {
        Self {
            id,
            position,
            properties,
        }
    }

    pub fn kind(&self) -> ElementType {
        self.properties.element_type()
    }

    pub fn name(&self) -> Option<&str> {
        self.properties.name()
    }
}

#[derive(Serialize)]
struct RawElementRef<'a> {
    id: &'a ElementId,
    #[serde(rename = "type")]
    element_type: ElementType,
    position: &'a Position,
    properties: &'a ElementProperties,
}

#[derive(Deserialize)]
struct RawElement {
    id: ElementId,
    #[serde(rename = "type")]
    element_type: ElementType,
    position: Position,
    #[serde(default)]
    properties: serde_json::Value,
}

impl Serialize for FlowElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawElementRef {
            id: &self.id,
            element_type: self.kind(),
            position: &self.position,
            properties: &self.properties,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FlowElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawElement::deserialize(deserializer)?;
        let properties = if raw.properties.is_null() {
            ElementProperties::default_for(raw.element_type)
        } else {
            ElementProperties::from_value(raw.element_type, raw.properties)
                .map_err(D::Error::custom)?
        };
        Ok(FlowElement {
            id: raw.id,
            position: raw.position,
            properties,
        })
    }
}

/// A directed edge between two elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: ConnectionId,
    pub source_id: ElementId,
    pub target_id: ElementId,
    /// Correlates the connection to the action it represents when the graph
    /// is folded back into the backend tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<i64>,
}
