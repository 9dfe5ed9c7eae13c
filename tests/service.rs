//! Mutation and validation rules of the flow service.
mod common;
use common::*;
use kessai::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn second_start_element_is_rejected() {
    let mut service = new_service();
    service
        .add_element(Position::new(100.0, 100.0), StartProps::default())
        .expect("first start");

    let err = service
        .add_element(Position::new(200.0, 100.0), StartProps::default())
        .unwrap_err();
    assert_eq!(
        err,
        FlowError::InstanceLimitExceeded {
            element_type: ElementType::Start,
            limit: 1
        }
    );
    assert_eq!(service.document().count_of(ElementType::Start), 1);
}

#[test]
fn start_element_cannot_be_removed() {
    let mut service = new_service();
    let (start, step, _) = build_minimal_flow(&mut service);

    assert_eq!(
        service.remove_element(&start).unwrap_err(),
        FlowError::CannotRemoveStart
    );
    // Still protected after other elements go away.
    service.remove_element(&step).unwrap();
    assert_eq!(
        service.remove_element(&start).unwrap_err(),
        FlowError::CannotRemoveStart
    );
}

#[test]
fn removing_an_absent_element_is_a_noop() {
    let mut service = new_service();
    build_minimal_flow(&mut service);
    let before = service.snapshot();

    service.remove_element(&ElementId::new("ghost")).unwrap();
    assert_eq!(*before, *service.document());
}

#[test]
fn removing_an_element_cascades_to_its_connections() {
    let mut service = new_service();
    let (_, step, _) = build_minimal_flow(&mut service);
    assert_eq!(service.document().connections.len(), 2);

    service.remove_element(&step).unwrap();
    assert!(service.document().connections.is_empty());
}

#[test]
fn duplicate_connection_is_rejected() {
    let mut service = new_service();
    let (start, step, _) = build_minimal_flow(&mut service);

    let err = service.add_connection(&start, &step, None).unwrap_err();
    assert_eq!(
        err,
        FlowError::DuplicateConnection {
            source_id: start,
            target_id: step,
        }
    );
}

#[test]
fn end_element_cannot_send_connections() {
    let mut service = new_service();
    let (_, step, end) = build_minimal_flow(&mut service);

    let err = service.add_connection(&end, &step, None).unwrap_err();
    assert_eq!(
        err,
        FlowError::SendNotAllowed {
            element_type: ElementType::End
        }
    );
}

#[test]
fn start_element_cannot_receive_connections() {
    let mut service = new_service();
    let (start, step, _) = build_minimal_flow(&mut service);

    let err = service.add_connection(&step, &start, None).unwrap_err();
    assert_eq!(
        err,
        FlowError::ReceiveNotAllowed {
            element_type: ElementType::Start
        }
    );
}

#[test]
fn self_connections_are_rejected() {
    let mut service = new_service();
    let (_, step, _) = build_minimal_flow(&mut service);

    let err = service.add_connection(&step, &step, None).unwrap_err();
    assert_eq!(err, FlowError::SelfConnection { id: step });
}

#[test]
fn connecting_unknown_elements_fails() {
    let mut service = new_service();
    let (start, _, _) = build_minimal_flow(&mut service);
    let ghost = ElementId::new("ghost");

    let err = service.add_connection(&start, &ghost, None).unwrap_err();
    assert_eq!(err, FlowError::ElementNotFound { id: ghost });
}

#[test]
fn generated_names_count_per_type_and_caller_wins() {
    let mut service = new_service();
    let first = service
        .add_element(Position::default(), ApprovalStepProps::default())
        .unwrap();
    let second = service
        .add_element(Position::default(), ApprovalStepProps::default())
        .unwrap();
    let named = service
        .add_element(
            Position::default(),
            ApprovalStepProps {
                name: Some("Finance Review".to_string()),
                ..ApprovalStepProps::default()
            },
        )
        .unwrap();

    assert_eq!(first.name(), Some("Approval Step 1"));
    assert_eq!(second.name(), Some("Approval Step 2"));
    assert_eq!(named.name(), Some("Finance Review"));
}

#[test]
fn sequence_numbers_default_from_the_counter() {
    let mut service = new_service();
    assert_eq!(service.next_sequence_number(), 1);

    let step = service
        .add_element(Position::new(200.0, 200.0), ApprovalStepProps::default())
        .unwrap();
    assert_eq!(
        step.properties.as_approval_step().unwrap().seq,
        Some(1),
        "seq defaults to the value returned before insertion"
    );
    assert_eq!(service.next_sequence_number(), 2);
}

#[test]
fn sequence_counter_follows_the_maximum() {
    let mut service = new_service();
    service
        .add_element(
            Position::default(),
            ApprovalStepProps {
                seq: Some(40),
                ..ApprovalStepProps::default()
            },
        )
        .unwrap();
    assert_eq!(service.next_sequence_number(), 41);
}

#[test]
fn update_element_merges_position_and_properties() {
    let mut service = new_service();
    let (_, step, _) = build_minimal_flow(&mut service);

    service.update_element(
        &step,
        ElementUpdate::default()
            .with_position(Position::new(400.0, 250.0))
            .with_properties(ApprovalStepProps {
                status: Some(99),
                group: Some(4),
                ..ApprovalStepProps::default()
            }),
    );

    let element = service.document().element(&step).unwrap();
    assert_eq!(element.position, Position::new(400.0, 250.0));
    assert_eq!(
        element.properties.as_approval_step().unwrap().status,
        Some(99)
    );
}

#[test]
fn update_element_ignores_mismatched_property_variant() {
    let mut service = new_service();
    let (_, step, _) = build_minimal_flow(&mut service);
    let before = service.document().element(&step).unwrap().properties.clone();

    service.update_element(
        &step,
        ElementUpdate::default()
            .with_position(Position::new(7.0, 7.0))
            .with_properties(EndProps::default()),
    );

    let element = service.document().element(&step).unwrap();
    assert_eq!(element.kind(), ElementType::ApprovalStep);
    assert_eq!(element.properties, before);
    // The position half of the update still applies.
    assert_eq!(element.position, Position::new(7.0, 7.0));
}

#[test]
fn update_element_with_unknown_id_is_a_noop() {
    let mut service = new_service();
    build_minimal_flow(&mut service);
    let published = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&published);
    service.subscribe(move |_| *counter.borrow_mut() += 1);
    assert_eq!(*published.borrow(), 1); // current value on subscribe

    service.update_element(
        &ElementId::new("ghost"),
        ElementUpdate::default().with_position(Position::default()),
    );
    assert_eq!(*published.borrow(), 1, "no snapshot published for a no-op");
}

#[test]
fn remove_connection_noop_when_absent() {
    let mut service = new_service();
    build_minimal_flow(&mut service);
    let before = service.document().connections.len();

    service.remove_connection(&ConnectionId::new("ghost"));
    assert_eq!(service.document().connections.len(), before);
}

#[test]
fn validate_reports_missing_start_and_end() {
    let service = new_service();
    let report = service.validate();
    assert!(!report.is_valid);
    assert!(report.errors.iter().any(|e| e.contains("start element")));
    assert!(report.errors.iter().any(|e| e.contains("end element")));
}

#[test]
fn validate_reports_orphans() {
    let mut service = new_service();
    build_minimal_flow(&mut service);
    service
        .add_element(Position::default(), ActionStepProps::default())
        .unwrap();

    let report = service.validate();
    assert!(!report.is_valid);
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("not connected to the flow"))
    );
}

#[test]
fn validate_reports_missing_required_fields() {
    let mut service = new_service();
    let (_, step, _end) = build_minimal_flow(&mut service);
    let action = service
        .add_element(Position::default(), ActionStepProps::default())
        .unwrap();
    service.add_connection(&step, &action.id, None).unwrap();
    // Clear the step's status to trip the approval-step rule too.
    service.update_element(
        &step,
        ElementUpdate::default().with_properties(ApprovalStepProps {
            group: Some(4),
            ..ApprovalStepProps::default()
        }),
    );

    let report = service.validate();
    assert!(!report.is_valid);
    assert!(report.errors.iter().any(|e| e.contains("missing a status")));
    assert!(report.errors.iter().any(|e| e.contains("missing an action")));
}

#[test]
fn validate_flags_duplicate_sequences() {
    let mut service = new_service();
    build_minimal_flow(&mut service);
    service
        .add_element(
            Position::default(),
            ApprovalStepProps {
                seq: Some(1),
                status: Some(1),
                group: Some(1),
                ..ApprovalStepProps::default()
            },
        )
        .unwrap();

    let report = service.validate();
    assert!(!report.is_valid);
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("Duplicate sequence number 1"))
    );
}

#[test]
fn validate_never_mutates() {
    let mut service = new_service();
    build_minimal_flow(&mut service);
    let before = service.snapshot();
    let _ = service.validate();
    assert_eq!(*before, *service.document());
}

#[test]
fn auto_organize_rows_by_rank_and_seq() {
    let mut service = new_service();
    let (start, step, end) = build_minimal_flow(&mut service);
    let later = service
        .add_element(
            Position::new(999.0, 999.0),
            ApprovalStepProps {
                seq: Some(0),
                status: Some(1),
                group: Some(1),
                ..ApprovalStepProps::default()
            },
        )
        .unwrap();

    service.auto_organize();
    let position = |id: &ElementId| service.document().element(id).unwrap().position;

    assert_eq!(position(&start), Position::new(100.0, 100.0));
    // seq 0 sorts ahead of the minimal flow's seq 1.
    assert_eq!(position(&later.id), Position::new(100.0, 400.0));
    assert_eq!(position(&step), Position::new(350.0, 400.0));
    assert_eq!(position(&end), Position::new(100.0, 1600.0));
}

#[test]
fn subscribers_get_current_value_then_every_mutation() {
    let mut service = new_service();
    let counts: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&counts);
    let subscription = service.subscribe(move |snapshot| {
        sink.borrow_mut().push(snapshot.elements.len());
    });

    build_minimal_flow(&mut service); // 3 adds + 2 connections = 5 snapshots

    // Initial snapshot (0 elements), then one per mutation.
    assert_eq!(*counts.borrow(), vec![0, 1, 2, 3, 3, 3]);

    service.unsubscribe(subscription);
    service
        .add_element(Position::default(), ActionStepProps::default())
        .unwrap();
    assert_eq!(counts.borrow().len(), 6, "unsubscribed callback stays quiet");
}

#[test]
fn held_snapshots_are_isolated_from_later_mutations() {
    let mut service = new_service();
    build_minimal_flow(&mut service);
    let snapshot = service.snapshot();
    let elements_before = snapshot.elements.len();

    service
        .add_element(Position::default(), ActionStepProps::default())
        .unwrap();

    assert_eq!(snapshot.elements.len(), elements_before);
    assert_eq!(service.document().elements.len(), elements_before + 1);
}

#[test]
fn failed_mutation_leaves_document_untouched_and_unpublished() {
    let mut service = new_service();
    let (start, step, _) = build_minimal_flow(&mut service);
    let published = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&published);
    service.subscribe(move |_| *counter.borrow_mut() += 1);

    let before = service.snapshot();
    assert!(service.add_connection(&start, &step, None).is_err());
    assert_eq!(*before, *service.document());
    assert_eq!(*published.borrow(), 1, "only the subscribe-time snapshot");
}
