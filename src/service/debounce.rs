//! Debounced property commits.
//!
//! Property-panel edits are committed through a single pending slot with a
//! fixed delay instead of one mutation per keystroke. The slot is keyed by
//! element id: arming a new commit replaces the pending one, and a selection
//! change cancels a commit aimed at the previously selected element so it can
//! never apply to the wrong one. Time is caller-supplied, so the behavior is
//! fully deterministic.

use super::ElementUpdate;
use crate::graph::ElementId;
use std::time::{Duration, Instant};

pub const DEFAULT_COMMIT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
struct PendingCommit {
    element_id: ElementId,
    update: ElementUpdate,
    due: Instant,
}

#[derive(Debug)]
pub struct CommitDebouncer {
    delay: Duration,
    pending: Option<PendingCommit>,
}

impl CommitDebouncer {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_COMMIT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `update` for `element_id`, replacing any pending commit.
    pub fn arm(&mut self, element_id: ElementId, update: ElementUpdate, now: Instant) {
        self.pending = Some(PendingCommit {
            element_id,
            update,
            due: now + self.delay,
        });
    }

    /// Cancels the pending commit unless it targets the newly selected
    /// element.
    pub fn selection_changed(&mut self, selected: Option<&ElementId>) {
        if let Some(pending) = &self.pending
            && Some(&pending.element_id) != selected
        {
            self.pending = None;
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending_element(&self) -> Option<&ElementId> {
        self.pending.as_ref().map(|p| &p.element_id)
    }

    /// Yields the commit once its delay has elapsed. The caller applies it to
    /// the mutation service.
    pub fn poll(&mut self, now: Instant) -> Option<(ElementId, ElementUpdate)> {
        if self.pending.as_ref().is_some_and(|p| now >= p.due) {
            self.flush()
        } else {
            None
        }
    }

    /// Yields the pending commit immediately, elapsed or not.
    pub fn flush(&mut self) -> Option<(ElementId, ElementUpdate)> {
        self.pending.take().map(|p| (p.element_id, p.update))
    }
}

impl Default for CommitDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
