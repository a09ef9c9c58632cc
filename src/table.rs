//! Generic labeled-grid renderer
//!
//! Draws a header row plus body rows at a caller-given origin and returns
//! the bottom y coordinate. Styling is data-driven: cell alignment follows
//! the column's semantic kind and the highlighted "best" row is a single
//! index supplied by the caller. The engine never branches on positional
//! cell indices.

use crate::document::{FontStyle, Rgb, TextAlign};
use crate::layout::font::metrics_for;
use crate::layout::page::PageFlow;
use crate::layout::style::{ColumnKind, StylePalette};

/// Horizontal cell padding in points
const CELL_PAD_X: f64 = 4.0;
/// Vertical cell padding in points
const CELL_PAD_Y: f64 = 3.0;

/// One column of a table
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(header: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            header: header.into(),
            kind,
        }
    }
}

/// Column-width plan
#[derive(Debug, Clone)]
pub enum ColumnWidths {
    /// Split the given available width equally across all columns
    EqualSplit(f64),
    /// Explicit per-column widths, in column order
    Explicit(Vec<f64>),
}

/// Declarative description of a table
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub columns: Vec<Column>,
    pub widths: ColumnWidths,

    /// Body row receiving the best-quote highlight (bg + bold + accent,
    /// uniformly across every cell of the row)
    pub highlight_row: Option<usize>,

    /// Whether the engine may request a page break before a row that does
    /// not fit. Side-by-side sub-tables set this false; their caller has
    /// already reserved the space.
    pub breakable: bool,
}

impl TableSpec {
    pub fn new(columns: Vec<Column>, widths: ColumnWidths) -> Self {
        Self {
            columns,
            widths,
            highlight_row: None,
            breakable: true,
        }
    }

    pub fn with_highlight(mut self, row: Option<usize>) -> Self {
        self.highlight_row = row;
        self
    }

    pub fn unbreakable(mut self) -> Self {
        self.breakable = false;
        self
    }

    fn resolved_widths(&self) -> Vec<f64> {
        match &self.widths {
            ColumnWidths::EqualSplit(available) => {
                let w = available / self.columns.len().max(1) as f64;
                vec![w; self.columns.len()]
            }
            ColumnWidths::Explicit(widths) => widths.clone(),
        }
    }
}

/// Height the header row will occupy
pub fn header_height(palette: &StylePalette) -> f64 {
    palette.line_advance(palette.table_header_size) + 2.0 * CELL_PAD_Y
}

/// Height one body row will occupy, accounting for cell wrapping
pub fn row_height(palette: &StylePalette, spec: &TableSpec, cells: &[String], bold: bool) -> f64 {
    let widths = spec.resolved_widths();
    let style = if bold { FontStyle::Bold } else { FontStyle::Regular };
    let metrics = metrics_for(style);

    let mut max_lines = 1usize;
    for (cell, width) in cells.iter().zip(&widths) {
        let lines = metrics
            .wrap(cell, palette.body_size, (width - 2.0 * CELL_PAD_X).max(1.0))
            .len();
        max_lines = max_lines.max(lines);
    }
    max_lines as f64 * palette.line_advance(palette.body_size) + 2.0 * CELL_PAD_Y
}

/// Draw the table with its top-left corner at (x, y).
///
/// Returns the y just below the last row. When `spec.breakable`, a row that
/// would cross the bottom margin triggers a page break first; the table
/// continues at the top margin of the new page.
pub fn draw_table(
    flow: &mut PageFlow,
    palette: &StylePalette,
    spec: &TableSpec,
    rows: &[Vec<String>],
    x: f64,
    y: f64,
) -> f64 {
    let widths = spec.resolved_widths();
    let total_width: f64 = widths.iter().sum();
    let mut cursor = y;

    // Header row
    let head_h = header_height(palette);
    if spec.breakable && !flow.fits(cursor, head_h) {
        cursor = flow.start_page();
    }
    flow.fill_rect(x, cursor, total_width, head_h, palette.primary);
    let mut cell_x = x;
    for (column, width) in spec.columns.iter().zip(&widths) {
        flow.text(
            cell_x + width / 2.0,
            cursor + CELL_PAD_Y,
            &column.header,
            palette.table_header_size,
            FontStyle::Bold,
            palette.light,
            TextAlign::Center,
        );
        cell_x += width;
    }
    cursor += head_h;

    // Body rows
    for (row_index, cells) in rows.iter().enumerate() {
        let highlighted = spec.highlight_row == Some(row_index);
        let row_h = row_height(palette, spec, cells, highlighted);

        if spec.breakable && !flow.fits(cursor, row_h) {
            cursor = flow.start_page();
        }

        if highlighted {
            flow.fill_rect(x, cursor, total_width, row_h, palette.highlight_bg);
        } else if row_index % 2 == 1 {
            flow.fill_rect(x, cursor, total_width, row_h, palette.row_alt);
        }

        let (style, color) = if highlighted {
            (FontStyle::Bold, palette.accent)
        } else {
            (FontStyle::Regular, palette.text)
        };

        let mut cell_x = x;
        for ((cell, column), width) in cells.iter().zip(&spec.columns).zip(&widths) {
            draw_cell(
                flow, palette, cell, column.kind, style, color, cell_x, cursor, *width,
            );
            cell_x += width;
        }

        cursor += row_h;
    }

    flow.line(x, cursor, x + total_width, cursor, palette.border, 0.5);
    cursor
}

#[allow(clippy::too_many_arguments)]
fn draw_cell(
    flow: &mut PageFlow,
    palette: &StylePalette,
    cell: &str,
    kind: ColumnKind,
    style: FontStyle,
    color: Rgb,
    x: f64,
    y: f64,
    width: f64,
) {
    let inner = (width - 2.0 * CELL_PAD_X).max(1.0);
    let align = kind.alignment();
    let anchor = match align {
        TextAlign::Left => x + CELL_PAD_X,
        TextAlign::Center => x + width / 2.0,
        TextAlign::Right => x + width - CELL_PAD_X,
    };

    let lines = metrics_for(style).wrap(cell, palette.body_size, inner);
    let mut line_y = y + CELL_PAD_Y;
    for line in &lines {
        flow.text(anchor, line_y, line, palette.body_size, style, color, align);
        line_y += palette.line_advance(palette.body_size);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;
    use crate::layout::page::PageSpec;

    fn make_flow() -> PageFlow {
        PageFlow::new(PageSpec::default(), "Test".to_string(), Local::now())
    }

    fn simple_spec(columns: usize, available: f64) -> TableSpec {
        let cols = (0..columns)
            .map(|i| Column::new(format!("Col {}", i + 1), ColumnKind::Label))
            .collect();
        TableSpec::new(cols, ColumnWidths::EqualSplit(available))
    }

    #[test]
    fn test_equal_split_widths() {
        let spec = simple_spec(4, 400.0);
        assert_eq!(spec.resolved_widths(), vec![100.0; 4]);
    }

    #[test]
    fn test_returns_bottom_below_origin() {
        let mut flow = make_flow();
        let palette = StylePalette::default();
        let spec = simple_spec(2, 300.0);
        let rows = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ];
        let bottom = draw_table(&mut flow, &palette, &spec, &rows, 40.0, 100.0);
        let expected = 100.0
            + header_height(&palette)
            + 2.0 * row_height(&palette, &spec, &rows[0], false);
        assert!((bottom - expected).abs() < 1e-9);
    }

    #[test]
    fn test_highlighted_row_styles_every_cell() {
        let mut flow = make_flow();
        let palette = StylePalette::default();
        let spec = simple_spec(3, 450.0).with_highlight(Some(1));
        let rows = vec![
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["best 1".to_string(), "best 2".to_string(), "best 3".to_string()],
        ];
        draw_table(&mut flow, &palette, &spec, &rows, 40.0, 100.0);

        let doc = flow.finalize(&palette);
        let highlighted: Vec<_> = doc.pages[0]
            .texts()
            .filter(|t| t.text.starts_with("best"))
            .collect();
        assert_eq!(highlighted.len(), 3);
        for t in highlighted {
            assert_eq!(t.style, FontStyle::Bold);
            assert_eq!(t.color, palette.accent);
        }
    }

    #[test]
    fn test_header_row_is_bold_centered_and_larger() {
        let mut flow = make_flow();
        let palette = StylePalette::default();
        let spec = simple_spec(2, 300.0);
        draw_table(&mut flow, &palette, &spec, &[], 40.0, 100.0);

        let doc = flow.finalize(&palette);
        let headers: Vec<_> = doc.pages[0]
            .texts()
            .filter(|t| t.text.starts_with("Col"))
            .collect();
        assert_eq!(headers.len(), 2);
        for t in headers {
            assert_eq!(t.style, FontStyle::Bold);
            assert_eq!(t.align, crate::document::TextAlign::Center);
            assert!(t.size > palette.body_size);
            assert_eq!(t.color, palette.light);
        }
    }

    #[test]
    fn test_long_cell_grows_row_height() {
        let palette = StylePalette::default();
        let spec = simple_spec(2, 160.0);
        let short = vec!["a".to_string(), "b".to_string()];
        let long = vec![
            "Engine protection cover for flood and water ingress damage".to_string(),
            "b".to_string(),
        ];
        assert!(
            row_height(&palette, &spec, &long, false)
                > row_height(&palette, &spec, &short, false)
        );
    }

    #[test]
    fn test_breakable_table_breaks_before_overflowing_row() {
        let mut flow = make_flow();
        let palette = StylePalette::default();
        let spec = simple_spec(2, 300.0);
        let rows: Vec<Vec<String>> = (0..80)
            .map(|i| vec![format!("row {}", i), "x".to_string()])
            .collect();

        draw_table(&mut flow, &palette, &spec, &rows, 40.0, 100.0);
        assert!(flow.page_number() > 1, "80 rows must span multiple pages");
    }

    #[test]
    fn test_unbreakable_table_never_breaks() {
        let mut flow = make_flow();
        let palette = StylePalette::default();
        let spec = simple_spec(2, 300.0).unbreakable();
        let rows: Vec<Vec<String>> = (0..80)
            .map(|i| vec![format!("row {}", i), "x".to_string()])
            .collect();

        draw_table(&mut flow, &palette, &spec, &rows, 40.0, 100.0);
        assert_eq!(flow.page_number(), 1);
    }

    #[test]
    fn test_zebra_striping_on_odd_rows() {
        let mut flow = make_flow();
        let palette = StylePalette::default();
        let spec = simple_spec(1, 200.0);
        let rows: Vec<Vec<String>> = (0..4).map(|i| vec![format!("r{}", i)]).collect();
        draw_table(&mut flow, &palette, &spec, &rows, 40.0, 100.0);

        let doc = flow.finalize(&palette);
        let alt_fills = doc.pages[0]
            .ops
            .iter()
            .filter(|op| {
                matches!(op, crate::document::DrawOp::FillRect { color, .. } if *color == palette.row_alt)
            })
            .count();
        assert_eq!(alt_fills, 2);
    }
}
