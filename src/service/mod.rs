//! The single authority over a flow document.
//!
//! `FlowService` owns exactly one [`FlowDocument`] and performs every
//! mutation against the injected [`TypeRegistry`] rules. Mutations are
//! validate-then-apply — a failed call leaves the document untouched — and
//! every successful one ends by broadcasting an immutable snapshot to all
//! subscribers, in mutation order, with no batching.
//!
//! The document is held behind an [`Rc`] so snapshots are cheap: a mutation
//! clones the document only when a subscriber still holds the previous
//! snapshot (copy-on-write).

pub mod debounce;
pub mod ids;
pub mod layout;
pub mod validation;

pub use debounce::{CommitDebouncer, DEFAULT_COMMIT_DELAY};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use validation::ValidationReport;

use crate::error::FlowError;
use crate::graph::{
    Connection, ConnectionId, ElementId, ElementProperties, FlowDocument, FlowElement, Position,
};
use crate::registry::{ElementType, TypeRegistry};
use std::rc::Rc;
use tracing::{debug, trace};

/// A shared, immutable view of the document at one point in time.
pub type DocumentSnapshot = Rc<FlowDocument>;

/// Handle returned by [`FlowService::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Partial update applied by [`FlowService::update_element`].
///
/// `properties` replaces the element's record only when the variant matches
/// the element's type; a mismatched variant is ignored rather than silently
/// changing the element's type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementUpdate {
    pub position: Option<Position>,
    pub properties: Option<ElementProperties>,
}

impl ElementUpdate {
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_properties(mut self, properties: impl Into<ElementProperties>) -> Self {
        self.properties = Some(properties.into());
        self
    }
}

struct Subscriber {
    id: SubscriberId,
    callback: Box<dyn FnMut(DocumentSnapshot)>,
}

pub struct FlowService {
    registry: TypeRegistry,
    ids: Box<dyn IdGenerator>,
    document: DocumentSnapshot,
    subscribers: Vec<Subscriber>,
    next_subscriber: u64,
}

impl FlowService {
    pub fn new(registry: TypeRegistry, ids: Box<dyn IdGenerator>) -> Self {
        Self::with_document(registry, ids, FlowDocument::default())
    }

    pub fn with_document(
        registry: TypeRegistry,
        ids: Box<dyn IdGenerator>,
        document: FlowDocument,
    ) -> Self {
        Self {
            registry,
            ids,
            document: Rc::new(document),
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// The current document. Snapshot-holders are unaffected by later
    /// mutations.
    pub fn document(&self) -> &FlowDocument {
        &self.document
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        Rc::clone(&self.document)
    }

    /// Replaces the whole document (the loading flow) and republishes.
    pub fn load(&mut self, document: FlowDocument) {
        debug!(name = %document.name, "loading document");
        self.document = Rc::new(document);
        self.publish();
    }

    /// Adds a new element of the type carried by `properties`.
    ///
    /// A generated default name (`"Approval Step 3"`) is filled in only when
    /// the caller left `name` unset, and an approval step with no sequence
    /// defaults to [`next_sequence_number`](Self::next_sequence_number).
    pub fn add_element(
        &mut self,
        position: Position,
        properties: impl Into<ElementProperties>,
    ) -> Result<FlowElement, FlowError> {
        let mut properties = properties.into();
        let element_type = properties.element_type();
        let descriptor = self.registry.descriptor(element_type);

        let count = self.document.count_of(element_type);
        if let Some(limit) = descriptor.max_instances
            && count as u32 >= limit
        {
            return Err(FlowError::InstanceLimitExceeded {
                element_type,
                limit,
            });
        }

        if properties.name().is_none() {
            properties.set_name(format!("{} {}", descriptor.display_name, count + 1));
        }
        if let Some(props) = properties.as_approval_step_mut()
            && props.seq.is_none()
        {
            props.seq = Some(self.next_sequence_number());
        }

        let id = self.fresh_element_id(element_type);
        let element = FlowElement::new(id, position, properties);
        debug!(element = %element.id, kind = %element_type, "element added");

        Rc::make_mut(&mut self.document).elements.push(element.clone());
        self.publish();
        Ok(element)
    }

    /// Shallow-merges `update` into the element. No-op when the id is
    /// absent.
    pub fn update_element(&mut self, id: &ElementId, update: ElementUpdate) {
        if self.document.element(id).is_none() {
            return;
        }
        let document = Rc::make_mut(&mut self.document);
        if let Some(element) = document.element_mut(id) {
            if let Some(position) = update.position {
                element.position = position;
            }
            if let Some(properties) = update.properties {
                if properties.element_type() == element.kind() {
                    element.properties = properties;
                } else {
                    debug!(element = %id, "ignoring properties update with mismatched type");
                }
            }
        }
        debug!(element = %id, "element updated");
        self.publish();
    }

    /// Removes an element and every connection incident to it. The start
    /// element can never be removed; an absent id is a no-op.
    pub fn remove_element(&mut self, id: &ElementId) -> Result<(), FlowError> {
        let Some(element) = self.document.element(id) else {
            return Ok(());
        };
        if element.kind() == ElementType::Start {
            return Err(FlowError::CannotRemoveStart);
        }

        let document = Rc::make_mut(&mut self.document);
        document.elements.retain(|e| &e.id != id);
        document
            .connections
            .retain(|c| &c.source_id != id && &c.target_id != id);
        debug!(element = %id, "element removed");
        self.publish();
        Ok(())
    }

    /// Connects `source_id` to `target_id`, enforcing the registry's
    /// send/receive capabilities and rejecting duplicates and self-loops.
    pub fn add_connection(
        &mut self,
        source_id: &ElementId,
        target_id: &ElementId,
        action_id: Option<i64>,
    ) -> Result<Connection, FlowError> {
        let source_type = self
            .document
            .element(source_id)
            .map(FlowElement::kind)
            .ok_or_else(|| FlowError::ElementNotFound {
                id: source_id.clone(),
            })?;
        let target_type = self
            .document
            .element(target_id)
            .map(FlowElement::kind)
            .ok_or_else(|| FlowError::ElementNotFound {
                id: target_id.clone(),
            })?;

        if source_id == target_id {
            return Err(FlowError::SelfConnection {
                id: source_id.clone(),
            });
        }
        if !self.registry.descriptor(source_type).can_send {
            return Err(FlowError::SendNotAllowed {
                element_type: source_type,
            });
        }
        if !self.registry.descriptor(target_type).can_receive {
            return Err(FlowError::ReceiveNotAllowed {
                element_type: target_type,
            });
        }
        if self.document.has_connection(source_id, target_id) {
            return Err(FlowError::DuplicateConnection {
                source_id: source_id.clone(),
                target_id: target_id.clone(),
            });
        }

        let connection = Connection {
            id: self.fresh_connection_id(),
            source_id: source_id.clone(),
            target_id: target_id.clone(),
            action_id,
        };
        debug!(connection = %connection.id, source = %source_id, target = %target_id, "connection added");

        Rc::make_mut(&mut self.document)
            .connections
            .push(connection.clone());
        self.publish();
        Ok(connection)
    }

    /// Removes a connection. No-op when the id is absent.
    pub fn remove_connection(&mut self, id: &ConnectionId) {
        if self.document.connection(id).is_none() {
            return;
        }
        Rc::make_mut(&mut self.document)
            .connections
            .retain(|c| &c.id != id);
        debug!(connection = %id, "connection removed");
        self.publish();
    }

    /// Runs the advisory whole-document validation. Never fails, never
    /// mutates.
    pub fn validate(&self) -> ValidationReport {
        validation::validate_document(&self.document)
    }

    /// Applies the deterministic layered layout and republishes.
    pub fn auto_organize(&mut self) {
        layout::auto_organize(Rc::make_mut(&mut self.document));
        debug!("auto-organized elements");
        self.publish();
    }

    /// `max(seq) + 1` over the approval steps, or 1 when there are none.
    pub fn next_sequence_number(&self) -> i64 {
        self.document
            .approval_steps()
            .filter_map(|e| e.properties.as_approval_step().and_then(|p| p.seq))
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Registers a subscriber. The callback immediately receives the current
    /// snapshot, then every subsequent one in mutation order.
    pub fn subscribe(
        &mut self,
        mut callback: impl FnMut(DocumentSnapshot) + 'static,
    ) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        callback(self.snapshot());
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|s| s.id != id);
    }

    fn publish(&mut self) {
        trace!(subscribers = self.subscribers.len(), "publishing snapshot");
        let snapshot = self.snapshot();
        for subscriber in &mut self.subscribers {
            (subscriber.callback)(Rc::clone(&snapshot));
        }
    }

    /// Generated ids must not collide with ids carried in from a converted
    /// backend record.
    fn fresh_element_id(&mut self, element_type: ElementType) -> ElementId {
        loop {
            let id = self.ids.element_id(element_type);
            if self.document.element(&id).is_none() {
                return id;
            }
        }
    }

    fn fresh_connection_id(&mut self) -> ConnectionId {
        loop {
            let id = self.ids.connection_id();
            if self.document.connection(&id).is_none() {
                return id;
            }
        }
    }
}
