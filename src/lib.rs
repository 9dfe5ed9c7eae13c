//! # Kessai - Approval-Flow Graph Engine
//!
//! **Kessai** is the core engine behind a visual approval-workflow designer.
//! A user draws a multi-step approval flow (who approves what, in what order,
//! under what conditions) as a node-and-edge diagram; kessai owns everything
//! with real invariants underneath that canvas:
//!
//! 1. **Graph document model** — elements and directed connections, with
//!    per-type property records instead of an open attribute bag.
//! 2. **Mutation & validation service** — the single authority that creates,
//!    updates, and deletes elements and connections against an injected
//!    capability registry, runs advisory whole-document validation, performs
//!    deterministic auto-layout, and broadcasts immutable snapshots to
//!    observers after every mutation.
//! 3. **Viewport/geometry engine** — pan/zoom state, screen↔canvas
//!    transforms, connection curves, fit-to-content framing, and minimap
//!    projection for the interactive canvas.
//! 4. **Tree↔graph converter** — lossless-enough translation between the
//!    backend's nested "service → steps → actions/conditions/parallel
//!    groups" tree and the flat graph, in both directions.
//!
//! Presentation widgets, HTTP transport, and styling are deliberately out of
//! scope; they are callers of this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use kessai::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // The registry and id generator are injected, so tests can use
//!     // deterministic ids while the editor uses random ones.
//!     let mut service = FlowService::new(
//!         TypeRegistry::standard(),
//!         Box::new(SequentialIdGenerator::new()),
//!     );
//!
//!     // Build a minimal flow: Start -> Approval Step -> End.
//!     let start = service.add_element(Position::new(100.0, 100.0), StartProps::default())?;
//!     let step = service.add_element(
//!         Position::new(100.0, 300.0),
//!         ApprovalStepProps {
//!             status: Some(10),
//!             group: Some(4),
//!             ..ApprovalStepProps::default()
//!         },
//!     )?;
//!     let end = service.add_element(Position::new(100.0, 500.0), EndProps::default())?;
//!
//!     service.add_connection(&start.id, &step.id, None)?;
//!     service.add_connection(&step.id, &end.id, None)?;
//!
//!     // Advisory validation reports problems without blocking edits.
//!     let report = service.validate();
//!     assert!(report.is_valid, "{:?}", report.errors);
//!
//!     // Fold the graph back into the backend's nested tree for saving.
//!     let request = graph_to_tree(service.document(), "SRV-001");
//!     assert_eq!(request.steps.len(), 1);
//!     println!("{}", serde_json::to_string_pretty(&request)?);
//!     Ok(())
//! }
//! ```

pub mod convert;
pub mod error;
pub mod gateway;
pub mod graph;
pub mod prelude;
pub mod registry;
pub mod service;
pub mod viewport;
pub mod wire;
