//! Flat graph → backend tree.

use crate::graph::{
    ApprovalStepProps, ElementId, ElementProperties, FlowDocument, FlowElement, StepType,
};
use crate::wire::{
    ActionRequest, ApprovalStepRequest, ConditionRequest, MasterStepRequest, ParallelGroupRequest,
};
use ahash::AHashMap;
use itertools::Itertools;
use tracing::warn;

/// Folds the document's approval steps and their connected children back into
/// the backend's nested request shape.
///
/// This direction is lossy: positions and display names are dropped, and a
/// required numeric field the user never set defaults to `0` so a
/// work-in-progress document still serializes. Child arrays and the optional
/// step fields are emitted only when non-empty. Never fails.
pub fn graph_to_tree(document: &FlowDocument, service_code: &str) -> MasterStepRequest {
    let by_id: AHashMap<&ElementId, &FlowElement> =
        document.elements.iter().map(|e| (&e.id, e)).collect();

    let steps = document
        .approval_steps()
        .enumerate()
        // Unset seq sorts after every set value, stable in insertion order.
        .sorted_by_key(|(index, element)| {
            let seq = element
                .properties
                .as_approval_step()
                .and_then(|p| p.seq)
                .unwrap_or(i64::MAX);
            (seq, *index)
        })
        .map(|(_, element)| step_request(document, element, &by_id))
        .collect();

    MasterStepRequest {
        service_code: service_code.to_string(),
        steps,
    }
}

fn step_request(
    document: &FlowDocument,
    step: &FlowElement,
    by_id: &AHashMap<&ElementId, &FlowElement>,
) -> ApprovalStepRequest {
    let ElementProperties::ApprovalStep(props) = &step.properties else {
        return ApprovalStepRequest::default();
    };

    let mut actions = Vec::new();
    let mut conditions = Vec::new();
    let mut parallel_groups = Vec::new();

    for connection in document.outgoing(&step.id) {
        let Some(target) = by_id.get(&connection.target_id) else {
            continue;
        };
        match &target.properties {
            ElementProperties::ActionStep(action) => actions.push(ActionRequest {
                action: required(action.action, &target.id, "action"),
                to_status: required(action.to_status, &target.id, "to_status"),
                sub_status: action.sub_status,
                active_ind: action.active_ind,
            }),
            ElementProperties::ConditionStep(condition) => conditions.push(ConditionRequest {
                kind: condition.kind,
                condition_logic: condition.condition_logic.clone(),
                to_status: required(condition.to_status, &target.id, "to_status"),
                sub_status: condition.sub_status,
                active_ind: condition.active_ind,
            }),
            ElementProperties::ParallelGroup(group) => parallel_groups.extend(
                group
                    .parallel_groups
                    .iter()
                    .map(|&group| ParallelGroupRequest { group }),
            ),
            // Step-to-step and step-to-end connections carry ordering only.
            ElementProperties::Start(_)
            | ElementProperties::ApprovalStep(_)
            | ElementProperties::End(_) => {}
        }
    }

    ApprovalStepRequest {
        service_type: step_service_type(document, props),
        seq: props.seq.unwrap_or(0),
        step_type: props.step_type.unwrap_or(StepType::Auto),
        status: required(props.status, &step.id, "status"),
        group: required(props.group, &step.id, "group"),
        required_approvals: props.required_approvals,
        priority_approver_groups: non_empty(props.priority_approver_groups.clone()),
        active_ind: props.active_ind,
        actions: non_empty(actions),
        parallel_approval_groups: non_empty(parallel_groups),
        approvalstepcondition_set: non_empty(conditions),
    }
}

fn step_service_type(document: &FlowDocument, props: &ApprovalStepProps) -> i64 {
    props
        .service_type
        .or(document.service_type)
        .unwrap_or_default()
}

fn required(value: Option<i64>, id: &ElementId, field: &str) -> i64 {
    value.unwrap_or_else(|| {
        warn!(element = %id, field, "missing backend id, defaulting to 0");
        0
    })
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() { None } else { Some(values) }
}
