//! Core domain logic for the event manager.
//!
//! This crate contains the in-memory model for a single session:
//! - Events and their cost attributes
//! - The event catalog, with date clash detection
//! - The processing queue, a FIFO of handles into the catalog
//! - The session that keeps catalog and queue consistent

mod catalog;
mod error;
mod event;
mod queue;
mod session;
mod types;

pub use catalog::Catalog;
pub use error::CoreError;
pub use event::{Attribute, Event};
pub use queue::{Drain, ProcessingQueue};
pub use session::{EventDraft, ProcessDrain, Session, Teardown};
pub use types::{DATE_LIMIT, EventId, NAME_LIMIT, truncate_chars};
