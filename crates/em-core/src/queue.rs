//! FIFO of events waiting to be processed.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::error::CoreError;
use crate::types::EventId;

/// Processing order for recorded events.
///
/// Entries are plain handles: removing one never touches the event it refers
/// to, which stays in the [`Catalog`](crate::Catalog).
#[derive(Debug, Default)]
pub struct ProcessingQueue {
    entries: VecDeque<EventId>,
}

impl ProcessingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handle at the tail.
    pub fn enqueue(&mut self, id: EventId) -> Result<(), CoreError> {
        self.entries
            .try_reserve(1)
            .map_err(CoreError::exhausted("queue entry"))?;
        self.entries.push_back(id);
        Ok(())
    }

    /// Removes entries from the head one at a time as the iterator advances.
    ///
    /// Entries not yet yielded when the iterator is dropped stay queued.
    pub fn drain(&mut self) -> Drain<'_> {
        Drain { queue: self }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Discards every entry without processing it. Returns how many there were.
    pub fn clear(&mut self) -> usize {
        let abandoned = self.entries.len();
        self.entries.clear();
        self.entries.shrink_to_fit();
        abandoned
    }
}

/// Lazy, consuming walk over a [`ProcessingQueue`] in FIFO order.
#[derive(Debug)]
pub struct Drain<'a> {
    queue: &'a mut ProcessingQueue,
}

impl Iterator for Drain<'_> {
    type Item = EventId;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.entries.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Drain<'_> {}

impl FusedIterator for Drain<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<EventId> {
        (0..n).map(EventId::new).collect()
    }

    #[test]
    fn drain_yields_fifo_order() {
        let mut queue = ProcessingQueue::new();
        for id in ids(4) {
            queue.enqueue(id).unwrap();
        }

        let drained: Vec<EventId> = queue.drain().collect();
        assert_eq!(drained, ids(4));
        assert!(queue.is_empty());
    }

    #[test]
    fn drain_is_lazy() {
        let mut queue = ProcessingQueue::new();
        for id in ids(3) {
            queue.enqueue(id).unwrap();
        }

        let mut drain = queue.drain();
        assert_eq!(drain.len(), 3);
        assert_eq!(drain.next(), Some(EventId::new(0)));
        assert_eq!(drain.len(), 2);
        drop(drain);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.drain().next(), Some(EventId::new(1)));
    }

    #[test]
    fn queue_is_reusable_after_drain() {
        let mut queue = ProcessingQueue::new();
        queue.enqueue(EventId::new(0)).unwrap();
        queue.drain().for_each(drop);
        assert!(queue.is_empty());
        assert_eq!(queue.drain().next(), None);

        queue.enqueue(EventId::new(7)).unwrap();
        let drained: Vec<EventId> = queue.drain().collect();
        assert_eq!(drained, [EventId::new(7)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_reports_abandoned_entries() {
        let mut queue = ProcessingQueue::new();
        assert_eq!(queue.clear(), 0);

        for id in ids(5) {
            queue.enqueue(id).unwrap();
        }
        assert_eq!(queue.clear(), 5);
        assert!(queue.is_empty());
    }
}
