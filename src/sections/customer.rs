//! Customer and vehicle details block: 3-column label/value grid

use crate::document::{FontStyle, TextAlign};
use crate::layout::page::PageFlow;
use crate::layout::style::StylePalette;
use crate::quote::CustomerProfile;
use crate::sections::{section_heading, SECTION_GAP};

/// Columns in the detail grid
const GRID_COLUMNS: usize = 3;
/// Height of one label/value cell in points
const CELL_HEIGHT: f64 = 24.0;

/// Placeholder for missing profile values
pub const NOT_SPECIFIED: &str = "Not specified";

/// Draw the customer block at the cursor and advance past it.
pub fn render(flow: &mut PageFlow, palette: &StylePalette, customer: &CustomerProfile) {
    let fields = customer.fields();
    let rows = fields.len().div_ceil(GRID_COLUMNS);
    let heading_block = palette.line_advance(palette.heading_size) + 6.0;
    flow.ensure_space(heading_block + rows as f64 * CELL_HEIGHT + SECTION_GAP);

    section_heading(flow, palette, "Customer & Vehicle Details");

    let spec = flow.spec().clone();
    let col_width = spec.content_width() / GRID_COLUMNS as f64;
    let top = flow.cursor();

    for (index, (label, value)) in fields.iter().enumerate() {
        let col = index % GRID_COLUMNS;
        let row = index / GRID_COLUMNS;
        let x = spec.margin_left + col as f64 * col_width;
        let y = top + row as f64 * CELL_HEIGHT;

        flow.text(x, y, label, 7.0, FontStyle::Regular, palette.muted, TextAlign::Left);
        let display = value.as_deref().unwrap_or(NOT_SPECIFIED);
        flow.text(
            x,
            y + 9.5,
            display,
            palette.body_size,
            FontStyle::Regular,
            palette.text,
            TextAlign::Left,
        );
    }

    flow.advance_to(top + rows as f64 * CELL_HEIGHT + SECTION_GAP);
}
