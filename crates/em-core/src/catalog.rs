//! The event catalog: every event recorded during a session.

use crate::error::CoreError;
use crate::event::{Attribute, Event};
use crate::types::EventId;

/// Owns all events, handing out [`EventId`] handles.
///
/// Events live in an arena in insertion order and are presented newest
/// first. Nothing is ever removed individually, so handles stay valid until
/// the catalog itself is dropped.
#[derive(Debug, Default)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new event with no attributes and returns its handle.
    ///
    /// Names and dates are stored as given. Duplicate names and dates are
    /// allowed; use [`Self::has_date_clash`] beforehand to warn about the
    /// latter.
    pub fn add_event(
        &mut self,
        name: impl Into<String>,
        date: impl Into<String>,
        base_cost: f32,
    ) -> Result<EventId, CoreError> {
        self.events
            .try_reserve(1)
            .map_err(CoreError::exhausted("event"))?;
        let id = EventId::new(self.events.len());
        self.events.push(Event::new(name, date, base_cost));
        tracing::debug!(%id, "event added to catalog");
        Ok(id)
    }

    /// Returns true if any recorded event has exactly this date string.
    pub fn has_date_clash(&self, date: &str) -> bool {
        self.events.iter().any(|event| event.date == date)
    }

    /// Base cost plus all attribute costs of the given event.
    pub fn estimate_cost(&self, id: EventId) -> Result<f32, CoreError> {
        self.get(id).map(Event::estimated_cost)
    }

    /// Events, most recently added first.
    pub fn list_events(
        &self,
    ) -> impl DoubleEndedIterator<Item = (EventId, &Event)> + ExactSizeIterator {
        self.events
            .iter()
            .enumerate()
            .rev()
            .map(|(index, event)| (EventId::new(index), event))
    }

    /// Attaches an attribute to an event. It is listed before older ones.
    pub fn add_attribute(
        &mut self,
        id: EventId,
        name: impl Into<String>,
        cost: f32,
    ) -> Result<(), CoreError> {
        let event = self
            .events
            .get_mut(id.index())
            .ok_or(CoreError::UnknownEvent(id))?;
        event.push_attribute(Attribute::new(name, cost))
    }

    pub fn get(&self, id: EventId) -> Result<&Event, CoreError> {
        self.events
            .get(id.index())
            .ok_or(CoreError::UnknownEvent(id))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of attributes across all events.
    pub(crate) fn attribute_count(&self) -> usize {
        self.events.iter().map(Event::attribute_count).sum()
    }
}
