//! The owning context for a single run: catalog plus processing queue.

use crate::catalog::Catalog;
use crate::error::CoreError;
use crate::event::{Attribute, Event};
use crate::queue::{Drain, ProcessingQueue};
use crate::types::EventId;

/// An event being entered that has not been committed yet.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub date: String,
    pub base_cost: f32,
    /// In entry order.
    pub attributes: Vec<Attribute>,
}

impl EventDraft {
    pub fn new(name: impl Into<String>, date: impl Into<String>, base_cost: f32) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            base_cost,
            attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, cost: f32) -> Self {
        self.attributes.push(Attribute::new(name, cost));
        self
    }
}

/// What [`Session::close`] released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Teardown {
    pub events_released: usize,
    pub attributes_released: usize,
    /// Queue entries dropped without being processed.
    pub queue_abandoned: usize,
}

/// Catalog and queue, kept consistent with each other.
///
/// Every committed event is added to the catalog and enqueued exactly once.
/// Processing only consumes queue entries.
#[derive(Debug, Default)]
pub struct Session {
    catalog: Catalog,
    queue: ProcessingQueue,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn queue(&self) -> &ProcessingQueue {
        &self.queue
    }

    /// True if an already committed event has this exact date.
    pub fn has_date_clash(&self, date: &str) -> bool {
        self.catalog.has_date_clash(date)
    }

    /// Records the draft in the catalog and enqueues it for processing.
    pub fn commit(&mut self, draft: EventDraft) -> Result<EventId, CoreError> {
        let EventDraft {
            name,
            date,
            base_cost,
            attributes,
        } = draft;

        let id = self.catalog.add_event(name, date, base_cost)?;
        for attribute in attributes {
            self.catalog.add_attribute(id, attribute.name, attribute.cost)?;
        }
        self.queue.enqueue(id)?;

        tracing::debug!(%id, queued = self.queue.len(), "event committed");
        Ok(id)
    }

    /// Drains the queue in FIFO order, resolving each entry to its event.
    pub fn process(&mut self) -> ProcessDrain<'_> {
        ProcessDrain {
            catalog: &self.catalog,
            drain: self.queue.drain(),
        }
    }

    /// Drops any unprocessed queue entries, then releases every event.
    pub fn close(mut self) -> Teardown {
        let queue_abandoned = self.queue.clear();
        let teardown = Teardown {
            events_released: self.catalog.len(),
            attributes_released: self.catalog.attribute_count(),
            queue_abandoned,
        };
        drop(self);
        tracing::debug!(?teardown, "session closed");
        teardown
    }
}

/// Iterator returned by [`Session::process`].
#[derive(Debug)]
pub struct ProcessDrain<'a> {
    catalog: &'a Catalog,
    drain: Drain<'a>,
}

impl<'a> Iterator for ProcessDrain<'a> {
    type Item = (EventId, &'a Event);

    fn next(&mut self) -> Option<Self::Item> {
        let catalog = self.catalog;
        self.drain.by_ref().find_map(|id| match catalog.get(id) {
            Ok(event) => Some((id, event)),
            Err(err) => {
                tracing::warn!(%err, "skipping queue entry");
                None
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.drain.size_hint().1)
    }
}
