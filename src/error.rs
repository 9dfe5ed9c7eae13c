use crate::graph::ElementId;
use crate::registry::ElementType;
use thiserror::Error;

/// Structural errors raised synchronously by mutation calls on the
/// [`FlowService`](crate::service::FlowService).
///
/// Every mutation is validate-then-apply: when one of these is returned the
/// document has not been touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Cannot add another '{element_type}' element: limited to {limit} instance(s)")]
    InstanceLimitExceeded { element_type: ElementType, limit: u32 },

    #[error("The start element cannot be removed")]
    CannotRemoveStart,

    #[error("Element '{id}' not found in the document")]
    ElementNotFound { id: ElementId },

    #[error("Elements of type '{element_type}' cannot be the source of a connection")]
    SendNotAllowed { element_type: ElementType },

    #[error("Elements of type '{element_type}' cannot be the target of a connection")]
    ReceiveNotAllowed { element_type: ElementType },

    #[error("A connection from '{source_id}' to '{target_id}' already exists")]
    DuplicateConnection {
        source_id: ElementId,
        target_id: ElementId,
    },

    #[error("Element '{id}' cannot be connected to itself")]
    SelfConnection { id: ElementId },
}

/// Errors surfaced by a [`PersistenceGateway`](crate::gateway::PersistenceGateway)
/// implementation.
///
/// The core reports these upward as-is: a failed save is a reportable error,
/// never a document rollback.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
