use std::io::{self, Write};
use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{Cell, CellAlignment, Table};
use stockroom_app::{PartRow, ViewModel};

const QUANTITY_COLUMN: usize = 2;

pub fn render_view<W: Write>(view: &ViewModel, output: &mut W) -> io::Result<()> {
    if let Some(error) = &view.error {
        writeln!(output, "Error: {}", error)?;
    }
    if let Some(message) = &view.message {
        writeln!(output, "{}", message)?;
    }
    if let Some(selected) = &view.selected {
        writeln!(output, "Selected: {} '{}', quantity: {}, location: {}",
            selected.code, selected.name, selected.quantity, selected.location
        )?;
    }

    writeln!(output, "{}", build_table(&view.parts))?;

    if view.parts.is_empty() {
        writeln!(output, "(no parts)")?;
    }

    Ok(())
}

/// Quantities are right aligned.
pub fn build_table(parts: &[PartRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_MARKDOWN)
        .set_header(vec!["Code", "Name", "Quantity", "Location"]);

    if let Some(column) = table.column_mut(QUANTITY_COLUMN) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for part in parts {
        table.add_row(vec![
            Cell::new(part.code),
            Cell::new(&part.name),
            Cell::new(part.quantity),
            Cell::new(&part.location),
        ]);
    }

    table
}
