//! Bidirectional translation between the backend's nested tree and the flat
//! flow graph.
//!
//! Loading goes through [`tree_to_graph`], which synthesizes Start/End
//! elements, a default spatial layout, and deterministic ids so repeated
//! conversions of the same record are stable. Saving goes through
//! [`graph_to_tree`], which folds the graph back into ordered steps with
//! nested children. Both directions are total: incomplete work-in-progress
//! documents convert with defaults instead of failing.

mod from_tree;
mod to_tree;

pub use from_tree::tree_to_graph;
pub use to_tree::graph_to_tree;
