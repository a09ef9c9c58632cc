//! Quote comparison view: side-by-side or wide table
//!
//! The layout mode is a hard rule driven by printable page width: up to
//! three quotes render side by side (one column per quote); more than three
//! render as one wide table with a row per quote.

use std::cmp::Ordering;

use crate::document::{FontStyle, TextAlign};
use crate::format::{format_inr, format_pct};
use crate::layout::page::PageFlow;
use crate::layout::style::{ColumnKind, StylePalette};
use crate::metrics::best_quote_index;
use crate::quote::Quote;
use crate::sections::{section_heading, SECTION_GAP};
use crate::table::{draw_table, header_height, row_height, Column, ColumnWidths, TableSpec};

/// Width of the fixed row-label column in side-by-side mode
const LABEL_COL_WIDTH: f64 = 100.0;
/// Cell padding used by the hand-drawn side-by-side grid
const GRID_PAD_Y: f64 = 3.0;

/// Layout mode of the comparison view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonMode {
    /// One column per quote; 1-3 quotes
    SideBySide,
    /// One wide table row per quote; more than 3 quotes
    Table,
}

impl ComparisonMode {
    /// Mode for a quote count; `None` means the section is skipped entirely
    pub fn for_count(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1..=3 => Some(ComparisonMode::SideBySide),
            _ => Some(ComparisonMode::Table),
        }
    }
}

/// Display order shared by both modes: the accepted quote first, the rest
/// ascending by total premium. Stable for equal premiums.
pub fn comparison_order(quotes: &[Quote]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..quotes.len()).collect();
    order.sort_by(|&a, &b| {
        let qa = &quotes[a];
        let qb = &quotes[b];
        qb.accepted
            .cmp(&qa.accepted)
            .then_with(|| {
                qa.total_premium
                    .partial_cmp(&qb.total_premium)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.cmp(&b))
    });
    order
}

/// Comparison field labels, in row order
const FIELD_LABELS: [&str; 11] = [
    "Coverage Type",
    "Policy Term",
    "IDV",
    "NCB %",
    "OD Premium",
    "NCB Amount",
    "OD after NCB",
    "Third Party",
    "Add-ons Premium",
    "GST",
    "Total Premium",
];

fn field_values(quote: &Quote) -> [String; 11] {
    [
        quote.coverage_type.as_str().to_string(),
        quote.policy_duration_label.clone(),
        format_inr(quote.idv),
        format_pct(quote.ncb_discount),
        format_inr(quote.od_amount),
        format_inr(quote.ncb_discount_amount),
        format_inr(quote.od_amount_after_ncb),
        format_inr(quote.third_party_amount),
        format_inr(quote.add_ons_premium),
        format_inr(quote.gst_amount),
        format_inr(quote.total_premium),
    ]
}

fn provider_label(quote: &Quote) -> String {
    if quote.accepted {
        format!("{} (Accepted)", quote.insurance_company)
    } else {
        quote.insurance_company.clone()
    }
}

/// Draw the comparison view for a non-empty quote set and advance the
/// cursor. Callers skip this section when the set is empty.
pub fn render(flow: &mut PageFlow, palette: &StylePalette, quotes: &[Quote]) {
    let Some(mode) = ComparisonMode::for_count(quotes.len()) else {
        return;
    };

    match mode {
        ComparisonMode::SideBySide => render_side_by_side(flow, palette, quotes),
        ComparisonMode::Table => render_table(flow, palette, quotes),
    }
}

fn render_side_by_side(flow: &mut PageFlow, palette: &StylePalette, quotes: &[Quote]) {
    let order = comparison_order(quotes);
    let spec = flow.spec().clone();
    let quote_col = (spec.content_width() - LABEL_COL_WIDTH) / quotes.len() as f64;
    let line = palette.line_advance(palette.body_size);

    // Header height follows the longest wrapped insurer name
    let head_metrics = crate::layout::font::metrics_for(FontStyle::Bold);
    let head_lines = order
        .iter()
        .map(|&i| {
            head_metrics
                .wrap(&provider_label(&quotes[i]), palette.table_header_size, quote_col - 8.0)
                .len()
        })
        .max()
        .unwrap_or(1);
    let head_h =
        head_lines as f64 * palette.line_advance(palette.table_header_size) + 2.0 * GRID_PAD_Y;
    let row_h = line + 2.0 * GRID_PAD_Y;
    let grid_height = head_h + FIELD_LABELS.len() as f64 * row_h;

    let heading_block = palette.line_advance(palette.heading_size) + 6.0;
    flow.ensure_space(heading_block + grid_height + SECTION_GAP);
    section_heading(flow, palette, "Quote Comparison");

    let left = spec.margin_left;
    let total_width = LABEL_COL_WIDTH + quote_col * quotes.len() as f64;
    let top = flow.cursor();

    // Header row: label column stays blank, one column per quote
    flow.fill_rect(left, top, total_width, head_h, palette.primary);
    for (slot, &index) in order.iter().enumerate() {
        let x = left + LABEL_COL_WIDTH + slot as f64 * quote_col;
        let label = provider_label(&quotes[index]);
        let lines = head_metrics.wrap(&label, palette.table_header_size, quote_col - 8.0);
        let mut line_y = top + GRID_PAD_Y;
        for l in &lines {
            flow.text(
                x + quote_col / 2.0,
                line_y,
                l,
                palette.table_header_size,
                FontStyle::Bold,
                palette.light,
                TextAlign::Center,
            );
            line_y += palette.line_advance(palette.table_header_size);
        }
    }

    // One row per comparison field; the total premium row is accented
    let values: Vec<[String; 11]> = order.iter().map(|&i| field_values(&quotes[i])).collect();
    let total_row = FIELD_LABELS.len() - 1;
    let mut y = top + head_h;

    for (row, label) in FIELD_LABELS.iter().enumerate() {
        let is_total = row == total_row;
        if is_total {
            flow.fill_rect(left, y, total_width, row_h, palette.highlight_bg);
        } else if row % 2 == 1 {
            flow.fill_rect(left, y, total_width, row_h, palette.row_alt);
        }

        let (style, color) = if is_total {
            (FontStyle::Bold, palette.accent)
        } else {
            (FontStyle::Regular, palette.text)
        };

        flow.text(
            left + 4.0,
            y + GRID_PAD_Y,
            label,
            palette.body_size,
            style,
            if is_total { palette.accent } else { palette.muted },
            TextAlign::Left,
        );
        for (slot, vals) in values.iter().enumerate() {
            let x = left + LABEL_COL_WIDTH + slot as f64 * quote_col;
            flow.text(
                x + quote_col / 2.0,
                y + GRID_PAD_Y,
                &vals[row],
                palette.body_size,
                style,
                color,
                TextAlign::Center,
            );
        }
        y += row_h;
    }

    flow.line(left, y, left + total_width, y, palette.border, 0.5);
    flow.advance_to(y + SECTION_GAP);
}

fn render_table(flow: &mut PageFlow, palette: &StylePalette, quotes: &[Quote]) {
    let order = comparison_order(quotes);
    let best = best_quote_index(quotes);
    let highlight = order.iter().position(|&i| i == best);

    let spec = flow.spec().clone();
    let content = spec.content_width();
    let numeric_width = (content - 78.0 - 50.0 - 40.0) / 9.0;
    let mut widths = vec![78.0, 50.0, 40.0];
    widths.extend(std::iter::repeat(numeric_width).take(9));

    let columns = vec![
        Column::new("Insurer", ColumnKind::Label),
        Column::new("Coverage", ColumnKind::Text),
        Column::new("Term", ColumnKind::Text),
        Column::new("IDV", ColumnKind::Currency),
        Column::new("NCB %", ColumnKind::Percentage),
        Column::new("OD", ColumnKind::Currency),
        Column::new("NCB Amt", ColumnKind::Currency),
        Column::new("OD after NCB", ColumnKind::Currency),
        Column::new("Third Party", ColumnKind::Currency),
        Column::new("Add-ons", ColumnKind::Currency),
        Column::new("GST", ColumnKind::Currency),
        Column::new("Total", ColumnKind::Currency),
    ];
    let table = TableSpec::new(columns, ColumnWidths::Explicit(widths)).with_highlight(highlight);

    let rows: Vec<Vec<String>> = order
        .iter()
        .map(|&i| {
            let quote = &quotes[i];
            let mut row = vec![provider_label(quote)];
            row.extend(field_values(quote));
            row
        })
        .collect();

    // Reserve the heading plus at least the header and first row together
    let heading_block = palette.line_advance(palette.heading_size) + 6.0;
    let first_rows = header_height(palette)
        + rows
            .first()
            .map(|r| row_height(palette, &table, r, false))
            .unwrap_or(0.0);
    flow.ensure_space(heading_block + first_rows);
    section_heading(flow, palette, "Quote Comparison");

    let bottom = draw_table(flow, palette, &table, &rows, spec.margin_left, flow.cursor());
    flow.advance_to(bottom + SECTION_GAP);
}
