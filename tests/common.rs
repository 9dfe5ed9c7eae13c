//! Common test utilities for building flow services and backend records.
use kessai::prelude::*;

/// A service with deterministic ids and the standard registry.
#[allow(dead_code)]
pub fn new_service() -> FlowService {
    FlowService::new(
        TypeRegistry::standard(),
        Box::new(SequentialIdGenerator::new()),
    )
}

/// Builds a minimal valid flow: Start -> Approval Step -> End.
///
/// Returns the three element ids in flow order.
#[allow(dead_code)]
pub fn build_minimal_flow(service: &mut FlowService) -> (ElementId, ElementId, ElementId) {
    let start = service
        .add_element(Position::new(100.0, 100.0), StartProps::default())
        .expect("add start");
    let step = service
        .add_element(
            Position::new(100.0, 300.0),
            ApprovalStepProps {
                status: Some(10),
                group: Some(4),
                ..ApprovalStepProps::default()
            },
        )
        .expect("add step");
    let end = service
        .add_element(Position::new(100.0, 500.0), EndProps::default())
        .expect("add end");

    service
        .add_connection(&start.id, &step.id, None)
        .expect("connect start -> step");
    service
        .add_connection(&step.id, &end.id, None)
        .expect("connect step -> end");

    (start.id, step.id, end.id)
}

/// A two-step backend record with actions, a condition, and parallel groups.
#[allow(dead_code)]
pub fn sample_record() -> MasterStepRecord {
    use kessai::wire::{
        ActionRecord, ApprovalStepRecord, ConditionRecord, ParallelGroupRecord, ServiceRecord,
    };

    MasterStepRecord {
        service: ServiceRecord {
            id: 7,
            code: "SRV-001".to_string(),
            name: "Purchase Approval".to_string(),
            name_ara: String::new(),
        },
        steps: vec![
            ApprovalStepRecord {
                id: 11,
                service_type: 3,
                seq: 1,
                step_type: StepType::ActionBased,
                status: 10,
                group: 4,
                required_approvals: Some(2),
                priority_approver_groups: Some(vec![4, 5]),
                active_ind: true,
                actions: Some(vec![
                    ActionRecord {
                        id: 21,
                        action: 1,
                        to_status: 11,
                        sub_status: None,
                        active_ind: true,
                    },
                    ActionRecord {
                        id: 22,
                        action: 2,
                        to_status: 12,
                        sub_status: Some(3),
                        active_ind: true,
                    },
                ]),
                parallel_approval_groups: Some(vec![
                    ParallelGroupRecord { id: 41, group: 4 },
                    ParallelGroupRecord { id: 42, group: 5 },
                ]),
                approvalstepcondition_set: Some(vec![ConditionRecord {
                    id: 31,
                    kind: ConditionKind::Condition,
                    condition_logic: vec![ConditionClause {
                        field: "amount".to_string(),
                        operation: "gt".to_string(),
                        value: serde_json::json!(10000),
                        logical_operator: None,
                    }],
                    to_status: 13,
                    sub_status: None,
                    active_ind: true,
                }]),
            },
            ApprovalStepRecord {
                id: 12,
                service_type: 3,
                seq: 2,
                step_type: StepType::Auto,
                status: 20,
                group: 6,
                required_approvals: None,
                priority_approver_groups: None,
                active_ind: true,
                actions: Some(vec![ActionRecord {
                    id: 23,
                    action: 1,
                    to_status: 21,
                    sub_status: None,
                    active_ind: true,
                }]),
                parallel_approval_groups: None,
                approvalstepcondition_set: None,
            },
        ],
    }
}
