//! Deterministic layered auto-layout.
//!
//! Elements are bucketed by their type's fixed rank and laid out on one
//! horizontal row per rank. Approval steps are ordered by ascending sequence
//! (unset sequences last); all other buckets keep insertion order, which
//! makes the pass a pure function of the document.

use crate::graph::FlowDocument;
use crate::registry::ElementType;
use itertools::Itertools;

const ROW_BASE_Y: f64 = 100.0;
const ROW_SPACING: f64 = 300.0;
const COLUMN_BASE_X: f64 = 100.0;
const COLUMN_SPACING: f64 = 250.0;

pub(crate) fn auto_organize(document: &mut FlowDocument) {
    let mut buckets: [Vec<usize>; 6] = Default::default();
    for (index, element) in document.elements.iter().enumerate() {
        buckets[element.kind().rank()].push(index);
    }

    let approval_rank = ElementType::ApprovalStep.rank();
    buckets[approval_rank] = buckets[approval_rank]
        .iter()
        .copied()
        .sorted_by_key(|&index| {
            document.elements[index]
                .properties
                .as_approval_step()
                .and_then(|p| p.seq)
                .unwrap_or(i64::MAX)
        })
        .collect();

    for (rank, bucket) in buckets.iter().enumerate() {
        let y = ROW_BASE_Y + rank as f64 * ROW_SPACING;
        for (column, &index) in bucket.iter().enumerate() {
            let element = &mut document.elements[index];
            element.position.x = COLUMN_BASE_X + column as f64 * COLUMN_SPACING;
            element.position.y = y;
        }
    }
}
