//! Backend tree → flat graph.

use crate::graph::{
    ApprovalStepProps, ActionStepProps, ConditionStepProps, Connection, ConnectionId,
    DocumentMetadata, ElementId, ElementProperties, EndProps, FlowDocument, FlowElement,
    ParallelGroupProps, Position, StartProps,
};
use crate::wire::{ApprovalStepRecord, MasterStepRecord};

const START_POSITION: Position = Position { x: 100.0, y: 100.0 };
const STEP_X: f64 = 100.0;
/// Vertical distance between consecutive steps (and Start/End).
const ROW_SPACING: f64 = 200.0;
/// First child column, measured from the step's x.
const CHILD_OFFSET_X: f64 = 320.0;
const CHILD_SPACING_X: f64 = 260.0;

/// Converts one service record into a flow document with a default layout.
///
/// Element ids derive from the backend's numeric ids (`approval-step-7`,
/// `action-12`, ...) so converting the same record twice reproduces the same
/// id set. A synthetic `End` element is appended after the last step; a
/// service with no steps gets only the `Start` element.
pub fn tree_to_graph(record: &MasterStepRecord) -> FlowDocument {
    let mut document = FlowDocument::new(record.service.name.clone());
    document.service_type = record.steps.first().map(|s| s.service_type);
    document.metadata = Some(DocumentMetadata {
        service_code: record.service.code.clone(),
        ..DocumentMetadata::default()
    });

    let start_id = ElementId::new("start");
    document.elements.push(FlowElement::new(
        start_id.clone(),
        START_POSITION,
        ElementProperties::Start(StartProps {
            name: Some("Start".to_string()),
        }),
    ));

    let mut previous_id = start_id;
    let mut row_y = START_POSITION.y;

    for step in &record.steps {
        row_y += ROW_SPACING;
        let step_id = ElementId::new(format!("approval-step-{}", step.id));
        document.elements.push(FlowElement::new(
            step_id.clone(),
            Position::new(STEP_X, row_y),
            ElementProperties::ApprovalStep(step_props(step)),
        ));
        document
            .connections
            .push(connect(&previous_id, &step_id, None));

        append_children(&mut document, step, &step_id, row_y);
        previous_id = step_id;
    }

    if !record.steps.is_empty() {
        let end_id = ElementId::new("end");
        document.elements.push(FlowElement::new(
            end_id.clone(),
            Position::new(STEP_X, row_y + ROW_SPACING),
            ElementProperties::End(EndProps {
                name: Some("End".to_string()),
                ..EndProps::default()
            }),
        ));
        document
            .connections
            .push(connect(&previous_id, &end_id, None));
    }

    document
}

fn step_props(step: &ApprovalStepRecord) -> ApprovalStepProps {
    ApprovalStepProps {
        name: Some(format!("Approval Step {}", step.seq)),
        service_type: Some(step.service_type),
        seq: Some(step.seq),
        step_type: Some(step.step_type),
        status: Some(step.status),
        group: Some(step.group),
        required_approvals: step.required_approvals,
        priority_approver_groups: step.priority_approver_groups.clone().unwrap_or_default(),
        active_ind: step.active_ind,
    }
}

/// Lays the step's nested actions, conditions, and parallel groups out to the
/// right of the step, one column per child.
fn append_children(
    document: &mut FlowDocument,
    step: &ApprovalStepRecord,
    step_id: &ElementId,
    row_y: f64,
) {
    let mut column = 0usize;
    let child_position = |column: &mut usize| {
        let x = STEP_X + CHILD_OFFSET_X + CHILD_SPACING_X * *column as f64;
        *column += 1;
        Position::new(x, row_y)
    };

    for action in step.actions.iter().flatten() {
        let id = ElementId::new(format!("action-{}", action.id));
        document.elements.push(FlowElement::new(
            id.clone(),
            child_position(&mut column),
            ElementProperties::ActionStep(ActionStepProps {
                name: None,
                action: Some(action.action),
                to_status: Some(action.to_status),
                sub_status: action.sub_status,
                active_ind: action.active_ind,
            }),
        ));
        document
            .connections
            .push(connect(step_id, &id, Some(action.action)));
    }

    for condition in step.approvalstepcondition_set.iter().flatten() {
        let id = ElementId::new(format!("condition-{}", condition.id));
        document.elements.push(FlowElement::new(
            id.clone(),
            child_position(&mut column),
            ElementProperties::ConditionStep(ConditionStepProps {
                name: None,
                kind: condition.kind,
                condition_logic: condition.condition_logic.clone(),
                to_status: Some(condition.to_status),
                sub_status: condition.sub_status,
                active_ind: condition.active_ind,
            }),
        ));
        document.connections.push(connect(step_id, &id, None));
    }

    // All of a step's parallel groups collapse into one canvas element.
    let groups: Vec<i64> = step
        .parallel_approval_groups
        .iter()
        .flatten()
        .map(|g| g.group)
        .collect();
    if !groups.is_empty() {
        let id = ElementId::new(format!("parallel-group-{}", step.id));
        document.elements.push(FlowElement::new(
            id.clone(),
            child_position(&mut column),
            ElementProperties::ParallelGroup(ParallelGroupProps {
                name: None,
                parallel_groups: groups,
            }),
        ));
        document.connections.push(connect(step_id, &id, None));
    }
}

fn connect(source: &ElementId, target: &ElementId, action_id: Option<i64>) -> Connection {
    Connection {
        id: ConnectionId::new(format!("conn-{source}-{target}")),
        source_id: source.clone(),
        target_id: target.clone(),
        action_id,
    }
}
