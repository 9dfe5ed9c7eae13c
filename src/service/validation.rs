//! Advisory whole-document validation.
//!
//! Validation is a report, not a gate: the document may legitimately sit in
//! an invalid state mid-edit, so findings are accumulated as human-readable
//! strings and nothing here ever fails or mutates.

use crate::graph::{ElementProperties, FlowDocument, FlowElement};
use crate::registry::ElementType;
use ahash::{AHashMap, AHashSet};

/// The outcome of a [`validate`](crate::service::FlowService::validate) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub(crate) fn validate_document(document: &FlowDocument) -> ValidationReport {
    let mut errors = Vec::new();

    check_start(document, &mut errors);
    check_end(document, &mut errors);
    check_orphans(document, &mut errors);
    for element in &document.elements {
        check_required_fields(element, &mut errors);
    }
    check_duplicate_sequences(document, &mut errors);

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn check_start(document: &FlowDocument, errors: &mut Vec<String>) {
    match document.count_of(ElementType::Start) {
        1 => {}
        0 => errors.push("The flow must contain a start element".to_string()),
        n => errors.push(format!(
            "The flow must contain exactly one start element, found {n}"
        )),
    }
}

fn check_end(document: &FlowDocument, errors: &mut Vec<String>) {
    if document.count_of(ElementType::End) == 0 {
        errors.push("The flow must contain at least one end element".to_string());
    }
}

/// Every non-start element must be the source or target of at least one
/// connection.
fn check_orphans(document: &FlowDocument, errors: &mut Vec<String>) {
    let mut connected = AHashSet::new();
    for connection in &document.connections {
        connected.insert(&connection.source_id);
        connected.insert(&connection.target_id);
    }
    for element in &document.elements {
        if element.kind() != ElementType::Start && !connected.contains(&element.id) {
            errors.push(format!(
                "'{}' is not connected to the flow",
                label(element)
            ));
        }
    }
}

fn check_required_fields(element: &FlowElement, errors: &mut Vec<String>) {
    let name = label(element);
    match &element.properties {
        ElementProperties::Start(_) | ElementProperties::End(_) => {}
        ElementProperties::ApprovalStep(props) => {
            if props.status.is_none() {
                errors.push(format!("'{name}' is missing a status"));
            }
            if props.group.is_none() {
                errors.push(format!("'{name}' is missing an approver group"));
            }
            if props.required_approvals == Some(0) {
                errors.push(format!("'{name}' must require at least one approval"));
            }
        }
        ElementProperties::ActionStep(props) => {
            if props.action.is_none() {
                errors.push(format!("'{name}' is missing an action"));
            }
            if props.to_status.is_none() {
                errors.push(format!("'{name}' is missing a target status"));
            }
        }
        ElementProperties::ConditionStep(props) => {
            if props.condition_logic.is_empty() {
                errors.push(format!("'{name}' has no condition clauses"));
            }
            if props.to_status.is_none() {
                errors.push(format!("'{name}' is missing a target status"));
            }
        }
        ElementProperties::ParallelGroup(props) => {
            if props.parallel_groups.is_empty() {
                errors.push(format!("'{name}' has no approval groups selected"));
            }
        }
    }
}

fn check_duplicate_sequences(document: &FlowDocument, errors: &mut Vec<String>) {
    let mut counts: AHashMap<i64, usize> = AHashMap::new();
    for element in document.approval_steps() {
        if let Some(seq) = element.properties.as_approval_step().and_then(|p| p.seq) {
            *counts.entry(seq).or_insert(0) += 1;
        }
    }
    let mut duplicates: Vec<i64> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(seq, _)| seq)
        .collect();
    duplicates.sort_unstable();
    for seq in duplicates {
        errors.push(format!(
            "Duplicate sequence number {seq}: approval steps must have unique sequences"
        ));
    }
}

fn label(element: &FlowElement) -> &str {
    element.name().unwrap_or(element.id.as_str())
}
