//! Static capability table for the element types of an approval flow.
//!
//! Every structural rule the mutation service enforces (who may send or
//! receive connections, how many instances may exist) lives here, in one
//! immutable table built at startup and injected wherever it is needed.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six element types a flow document can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Start,
    ApprovalStep,
    ActionStep,
    ConditionStep,
    ParallelGroup,
    End,
}

impl ElementType {
    /// All element types, in layout-rank order.
    pub const ALL: [ElementType; 6] = [
        ElementType::Start,
        ElementType::ApprovalStep,
        ElementType::ActionStep,
        ElementType::ConditionStep,
        ElementType::ParallelGroup,
        ElementType::End,
    ];

    /// Fixed rank used by the deterministic auto-layout pass
    /// (Start = 0 through End = 5).
    pub fn rank(self) -> usize {
        match self {
            ElementType::Start => 0,
            ElementType::ApprovalStep => 1,
            ElementType::ActionStep => 2,
            ElementType::ConditionStep => 3,
            ElementType::ParallelGroup => 4,
            ElementType::End => 5,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::Start => "start",
            ElementType::ApprovalStep => "approval_step",
            ElementType::ActionStep => "action_step",
            ElementType::ConditionStep => "condition_step",
            ElementType::ParallelGroup => "parallel_group",
            ElementType::End => "end",
        };
        f.write_str(name)
    }
}

/// Structural capabilities of one element type. Immutable, process-wide.
///
/// Display metadata beyond `display_name` (icons, colors) is owned by the UI
/// and deliberately absent here.
#[derive(Debug, Clone, Copy)]
pub struct ElementTypeDescriptor {
    pub element_type: ElementType,
    /// Base for generated default names ("Approval Step 3").
    pub display_name: &'static str,
    pub can_send: bool,
    pub can_receive: bool,
    /// `None` means unbounded.
    pub max_instances: Option<u32>,
}

/// Immutable `ElementType -> ElementTypeDescriptor` lookup, built once and
/// injected into the mutation service.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    table: AHashMap<ElementType, ElementTypeDescriptor>,
}

impl TypeRegistry {
    /// The standard capability table for approval flows.
    pub fn standard() -> Self {
        let descriptors = [
            ElementTypeDescriptor {
                element_type: ElementType::Start,
                display_name: "Start",
                can_send: true,
                can_receive: false,
                max_instances: Some(1),
            },
            ElementTypeDescriptor {
                element_type: ElementType::ApprovalStep,
                display_name: "Approval Step",
                can_send: true,
                can_receive: true,
                max_instances: None,
            },
            ElementTypeDescriptor {
                element_type: ElementType::ActionStep,
                display_name: "Action",
                can_send: true,
                can_receive: true,
                max_instances: None,
            },
            ElementTypeDescriptor {
                element_type: ElementType::ConditionStep,
                display_name: "Condition",
                can_send: true,
                can_receive: true,
                max_instances: None,
            },
            ElementTypeDescriptor {
                element_type: ElementType::ParallelGroup,
                display_name: "Parallel Approval",
                can_send: false,
                can_receive: true,
                max_instances: None,
            },
            ElementTypeDescriptor {
                element_type: ElementType::End,
                display_name: "End",
                can_send: false,
                can_receive: true,
                max_instances: None,
            },
        ];
        Self {
            table: descriptors.into_iter().map(|d| (d.element_type, d)).collect(),
        }
    }

    /// Pure lookup; total over `ElementType`.
    pub fn descriptor(&self, element_type: ElementType) -> &ElementTypeDescriptor {
        &self.table[&element_type]
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
