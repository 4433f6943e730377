//! Events and the cost attributes attached to them.

use crate::error::CoreError;

/// A named cost component of an event (catering, decorations, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub cost: f32,
}

impl Attribute {
    pub fn new(name: impl Into<String>, cost: f32) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

/// A user-defined occasion with a date and a base cost.
///
/// The date is kept exactly as entered (`DD-MM-YYYY` by convention); clash
/// detection compares it as a plain string.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub date: String,
    pub base_cost: f32,
    /// Stored in insertion order, exposed newest first.
    attributes: Vec<Attribute>,
}

impl Event {
    /// Creates an event with no attributes.
    pub fn new(name: impl Into<String>, date: impl Into<String>, base_cost: f32) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            base_cost,
            attributes: Vec::new(),
        }
    }

    /// Attributes, most recently added first.
    pub fn attributes(&self) -> impl DoubleEndedIterator<Item = &Attribute> + ExactSizeIterator {
        self.attributes.iter().rev()
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Base cost plus the cost of every attribute.
    pub fn estimated_cost(&self) -> f32 {
        self.attributes
            .iter()
            .fold(self.base_cost, |total, attribute| total + attribute.cost)
    }

    pub(crate) fn push_attribute(&mut self, attribute: Attribute) -> Result<(), CoreError> {
        self.attributes
            .try_reserve(1)
            .map_err(CoreError::exhausted("attribute"))?;
        self.attributes.push(attribute);
        Ok(())
    }
}
