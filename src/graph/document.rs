//! The flow document: one service's approval flow as a flat set of elements
//! and connections.

use super::element::{Connection, ConnectionId, ElementId, FlowElement};
use crate::registry::ElementType;
use serde::{Deserialize, Serialize};

/// Bookkeeping carried alongside a persisted document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    pub service_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

/// The complete in-memory flow graph.
///
/// Owned exclusively by the mutation service; everyone else sees immutable
/// snapshots. Element order only matters as a tie-break for the deterministic
/// auto-layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowDocument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<i64>,
    #[serde(default)]
    pub elements: Vec<FlowElement>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

impl FlowDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn element(&self, id: &ElementId) -> Option<&FlowElement> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn element_mut(&mut self, id: &ElementId) -> Option<&mut FlowElement> {
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    pub fn connection(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| &c.id == id)
    }

    /// Whether a connection with this exact ordered endpoint pair exists.
    pub fn has_connection(&self, source_id: &ElementId, target_id: &ElementId) -> bool {
        self.connections
            .iter()
            .any(|c| &c.source_id == source_id && &c.target_id == target_id)
    }

    /// Connections leaving the given element.
    pub fn outgoing(&self, source_id: &ElementId) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| &c.source_id == source_id)
    }

    pub fn count_of(&self, element_type: ElementType) -> usize {
        self.elements.iter().filter(|e| e.kind() == element_type).count()
    }

    pub fn start_element(&self) -> Option<&FlowElement> {
        self.elements.iter().find(|e| e.kind() == ElementType::Start)
    }

    pub fn approval_steps(&self) -> impl Iterator<Item = &FlowElement> {
        self.elements
            .iter()
            .filter(|e| e.kind() == ElementType::ApprovalStep)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
