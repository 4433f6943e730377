//! Rendering of the event catalog.

use std::io::Write;

use anyhow::Result;

use em_core::Catalog;

/// Prints every event, newest first, with its attributes and total cost.
pub fn run<W: Write>(writer: &mut W, catalog: &Catalog, precision: usize) -> Result<()> {
    if catalog.is_empty() {
        writeln!(writer, "No events to display.")?;
        return Ok(());
    }

    for (_, event) in catalog.list_events() {
        writeln!(writer)?;
        writeln!(writer, "📅 Event: {}", event.name)?;
        writeln!(writer, "   Date: {}", event.date)?;
        writeln!(writer, "   Base Cost: {:.precision$}", event.base_cost)?;
        writeln!(writer, "   Attributes:")?;
        for attribute in event.attributes() {
            writeln!(
                writer,
                "     - {} (Cost: {:.precision$})",
                attribute.name, attribute.cost
            )?;
        }
        writeln!(
            writer,
            "   Estimated Total Cost: {:.precision$}",
            event.estimated_cost()
        )?;
    }

    Ok(())
}
