//! Debounced decoration refresh
//!
//! One pending deadline per document. Scheduling again replaces the old
//! deadline, so a burst of edits produces a single refresh.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::model::DocumentId;

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to; clones share the same time
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    deadline: Instant,
    revision: u64,
}

/// Pending refreshes keyed by document
#[derive(Debug)]
pub struct Debouncer<C: Clock> {
    clock: C,
    pending: HashMap<DocumentId, Pending>,
}

impl<C: Clock> Debouncer<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            pending: HashMap::new(),
        }
    }

    /// Schedule a refresh, replacing any pending one for the document
    pub fn schedule(&mut self, document_id: DocumentId, revision: u64, delay_ms: u64) {
        let deadline = self.clock.now() + Duration::from_millis(delay_ms);
        if let Some(old) = self.pending.insert(document_id, Pending { deadline, revision }) {
            tracing::debug!(
                "Rescheduled refresh for doc {} (rev {} -> {})",
                document_id.0,
                old.revision,
                revision
            );
        }
    }

    pub fn cancel(&mut self, document_id: DocumentId) {
        self.pending.remove(&document_id);
    }

    pub fn is_pending(&self, document_id: DocumentId) -> bool {
        self.pending.contains_key(&document_id)
    }

    /// Earliest pending deadline, for hosts that sleep until then
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.deadline).min()
    }

    /// Remove and return every refresh whose deadline has passed,
    /// earliest first
    pub fn take_due(&mut self) -> Vec<(DocumentId, u64)> {
        let now = self.clock.now();
        let mut due: Vec<(Instant, DocumentId, u64)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(id, p)| (p.deadline, *id, p.revision))
            .collect();
        due.sort();

        for (_, id, _) in &due {
            self.pending.remove(id);
        }
        due.into_iter().map(|(_, id, rev)| (id, rev)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(clock.clone());
        debouncer.schedule(DocumentId(1), 4, 150);

        clock.advance(Duration::from_millis(149));
        assert!(debouncer.take_due().is_empty());

        clock.advance(Duration::from_millis(1));
        assert_eq!(debouncer.take_due(), vec![(DocumentId(1), 4)]);
        assert!(!debouncer.is_pending(DocumentId(1)));
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(clock.clone());
        debouncer.schedule(DocumentId(1), 1, 100);
        clock.advance(Duration::from_millis(80));
        debouncer.schedule(DocumentId(1), 2, 100);

        clock.advance(Duration::from_millis(50));
        assert!(debouncer.take_due().is_empty());
        clock.advance(Duration::from_millis(50));
        assert_eq!(debouncer.take_due(), vec![(DocumentId(1), 2)]);
    }

    #[test]
    fn test_cancel() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(clock.clone());
        debouncer.schedule(DocumentId(2), 1, 0);
        debouncer.cancel(DocumentId(2));
        assert!(debouncer.take_due().is_empty());
        assert_eq!(debouncer.next_deadline(), None);
    }
}
