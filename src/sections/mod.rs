//! Section renderers for the comparison report
//!
//! Every renderer draws at the flow cursor, calls `ensure_space` before its
//! large blocks (never mid-row), and leaves the cursor just below its own
//! content.

pub mod comparison;
pub mod customer;
pub mod detail;
pub mod header;
pub mod recommendation;
pub mod summary;

use crate::document::{FontStyle, TextAlign};
use crate::layout::page::PageFlow;
use crate::layout::style::StylePalette;

/// Vertical gap between sections, in points
pub(crate) const SECTION_GAP: f64 = 14.0;

/// Draw a section heading at the cursor and advance past it
pub(crate) fn section_heading(flow: &mut PageFlow, palette: &StylePalette, title: &str) {
    let x = flow.spec().margin_left;
    let y = flow.cursor();
    let size = palette.heading_size;

    flow.text(x, y, title, size, FontStyle::Bold, palette.primary, TextAlign::Left);
    let rule_y = y + palette.line_advance(size);
    flow.line(
        x,
        rule_y,
        flow.spec().content_right(),
        rule_y,
        palette.primary,
        1.0,
    );
    flow.advance_to(rule_y + 6.0);
}
