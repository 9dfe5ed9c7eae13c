//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the kessai crate. Import
//! this module to get access to the core functionality without having to
//! import each type individually.

// Document model
pub use crate::graph::{
    ActionStepProps, ApprovalStepProps, ConditionClause, ConditionKind, ConditionStepProps,
    Connection, ConnectionId, DocumentMetadata, ElementId, ElementProperties, EndAction, EndProps,
    FlowDocument, FlowElement, LogicalOperator, ParallelGroupProps, Position, StartProps, StepType,
};

// Registry and mutation service
pub use crate::registry::{ElementType, ElementTypeDescriptor, TypeRegistry};
pub use crate::service::{
    CommitDebouncer, DocumentSnapshot, ElementUpdate, FlowService, IdGenerator,
    SequentialIdGenerator, SubscriberId, UuidIdGenerator, ValidationReport,
};

// Canvas geometry
pub use crate::viewport::{
    ConnectionPath, MinimapProjection, Point, Rect, Size, Viewport, connection_path,
};

// Conversion and persistence boundary
pub use crate::convert::{graph_to_tree, tree_to_graph};
pub use crate::gateway::PersistenceGateway;
pub use crate::wire::{MasterStepRecord, MasterStepRequest};

// Error types
pub use crate::error::{FlowError, GatewayError};
