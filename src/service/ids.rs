//! Injectable id generation.
//!
//! The service never bakes in an id scheme: tests and conversion round-trips
//! want deterministic ids, the editor wants collision-free random ones.

use crate::graph::{ConnectionId, ElementId};
use crate::registry::ElementType;
use ahash::AHashMap;
use uuid::Uuid;

pub(crate) fn slug(element_type: ElementType) -> &'static str {
    match element_type {
        ElementType::Start => "start",
        ElementType::ApprovalStep => "approval-step",
        ElementType::ActionStep => "action",
        ElementType::ConditionStep => "condition",
        ElementType::ParallelGroup => "parallel-group",
        ElementType::End => "end",
    }
}

/// Produces ids for new elements and connections.
pub trait IdGenerator {
    fn element_id(&mut self, element_type: ElementType) -> ElementId;
    fn connection_id(&mut self) -> ConnectionId;
}

/// Deterministic per-prefix counters (`approval-step-1`, `approval-step-2`,
/// `conn-1`, ...).
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counters: AHashMap<&'static str, u64>,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self, prefix: &'static str) -> String {
        let counter = self.counters.entry(prefix).or_insert(0);
        *counter += 1;
        format!("{prefix}-{counter}")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn element_id(&mut self, element_type: ElementType) -> ElementId {
        ElementId::new(self.next(slug(element_type)))
    }

    fn connection_id(&mut self) -> ConnectionId {
        ConnectionId::new(self.next("conn"))
    }
}

/// Random v4 UUIDs behind the same type slugs.
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn element_id(&mut self, element_type: ElementType) -> ElementId {
        ElementId::new(format!("{}-{}", slug(element_type), Uuid::new_v4()))
    }

    fn connection_id(&mut self) -> ConnectionId {
        ConnectionId::new(format!("conn-{}", Uuid::new_v4()))
    }
}
