//! Interactive entry of a new event.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use em_core::{Attribute, EventDraft, EventId, Session};

use crate::Config;
use crate::input::Console;

const CLASH_WARNING: &str = "⚠️  Date clash detected! Another event exists on this date.";

/// Prompts for an event and its attributes, then commits and enqueues it.
///
/// A clashing date only produces a warning. If input ends before the event
/// is complete, nothing is recorded and the [`InputError::Closed`] error is
/// returned.
///
/// [`InputError::Closed`]: crate::input::InputError::Closed
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
    config: &Config,
) -> Result<EventId> {
    let name = console.prompt_text("Enter event name: ", "event name", config.name_limit)?;
    let date = console.prompt_text(
        "Enter event date (DD-MM-YYYY): ",
        "event date",
        config.date_limit,
    )?;

    if session.has_date_clash(&date) {
        tracing::info!(%date, "date clash");
        writeln!(console.output(), "{CLASH_WARNING}")?;
    }

    let base_cost = console.prompt_cost("Enter base cost of the event: ")?;
    let mut draft = EventDraft::new(name, date, base_cost);

    let mut question = "Add an attribute? (y/n): ";
    while console.prompt_yes(question)? {
        let attribute = console.prompt_text(
            "Enter attribute name: ",
            "attribute name",
            config.name_limit,
        )?;
        let cost = console.prompt_cost("Enter attribute cost: ")?;
        draft.attributes.push(Attribute::new(attribute, cost));
        question = "Add another attribute? (y/n): ";
    }

    let id = session.commit(draft).context("failed to record event")?;
    writeln!(
        console.output(),
        "✅ Event added successfully and enqueued for processing."
    )?;
    Ok(id)
}
