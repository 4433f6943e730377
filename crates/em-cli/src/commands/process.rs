//! Processing of the event queue.

use std::io::Write;

use anyhow::Result;

use em_core::Session;

/// Drains the queue in the order events were added, printing each one.
///
/// Events stay in the catalog. Returns how many were processed.
pub fn run<W: Write>(writer: &mut W, session: &mut Session) -> Result<usize> {
    if session.queue().is_empty() {
        writeln!(writer, "📭 Queue is empty.")?;
        return Ok(0);
    }

    writeln!(writer)?;
    writeln!(writer, "📦 Processing Events Queue:")?;

    let mut processed = 0;
    for (id, event) in session.process() {
        writeln!(writer, "-> Processing Event: {} on {}", event.name, event.date)?;
        tracing::debug!(%id, "event processed");
        processed += 1;
    }

    writeln!(writer, "✅ All events processed.")?;
    Ok(processed)
}
