//! Per-quote breakdown blocks
//!
//! Each quote gets a provider banner, a premium-breakdown table and a
//! coverage-details table side by side, and a bundled add-ons listing. The
//! two sub-tables routinely differ in height; the cursor advances by the
//! taller of the two.

use crate::document::{FontStyle, TextAlign};
use crate::format::{format_inr, format_pct};
use crate::layout::page::PageFlow;
use crate::layout::style::{ColumnKind, StylePalette};
use crate::quote::Quote;
use crate::sections::{section_heading, SECTION_GAP};
use crate::table::{draw_table, header_height, row_height, Column, ColumnWidths, TableSpec};

/// Height of the provider banner in points
const BANNER_HEIGHT: f64 = 18.0;
/// Gap between the two sub-tables in points
const TABLE_GAP: f64 = 12.0;
/// Columns in the bundled add-ons listing
const ADD_ON_COLUMNS: usize = 3;

/// Draw a breakdown block for every quote, in input order.
pub fn render(flow: &mut PageFlow, palette: &StylePalette, quotes: &[Quote]) {
    if quotes.is_empty() {
        return;
    }

    let heading_block = palette.line_advance(palette.heading_size) + 6.0;
    flow.ensure_space(heading_block + BANNER_HEIGHT + 60.0);
    section_heading(flow, palette, "Quote Breakdown");

    for (index, quote) in quotes.iter().enumerate() {
        render_quote_block(flow, palette, index, quote);
    }
}

fn render_quote_block(flow: &mut PageFlow, palette: &StylePalette, index: usize, quote: &Quote) {
    let spec = flow.spec().clone();
    let half_width = (spec.content_width() - TABLE_GAP) / 2.0;

    let premium_rows = premium_rows(quote);
    let premium_table = TableSpec::new(
        vec![
            Column::new("Premium Breakdown", ColumnKind::Label),
            Column::new("Amount", ColumnKind::Currency),
        ],
        ColumnWidths::Explicit(vec![half_width * 0.62, half_width * 0.38]),
    )
    .with_highlight(Some(premium_rows.len() - 1))
    .unbreakable();

    let coverage_rows = coverage_rows(quote);
    let coverage_table = TableSpec::new(
        vec![
            Column::new("Coverage Details", ColumnKind::Label),
            Column::new("Value", ColumnKind::Text),
        ],
        ColumnWidths::Explicit(vec![half_width * 0.5, half_width * 0.5]),
    )
    .unbreakable();

    // The whole block must fit: the sub-tables never break internally
    let left_height = table_height(palette, &premium_table, &premium_rows);
    let right_height = table_height(palette, &coverage_table, &coverage_rows);
    let block_height = BANNER_HEIGHT + 4.0 + left_height.max(right_height);
    flow.ensure_space(block_height);

    // Provider banner
    let top = flow.cursor();
    flow.fill_rect(
        spec.margin_left,
        top,
        spec.content_width(),
        BANNER_HEIGHT,
        palette.neutral,
    );
    let banner_label = if quote.accepted {
        format!("{}. {} (Accepted)", index + 1, quote.insurance_company)
    } else {
        format!("{}. {}", index + 1, quote.insurance_company)
    };
    flow.text(
        spec.margin_left + 6.0,
        top + 4.0,
        &banner_label,
        9.5,
        FontStyle::Bold,
        palette.light,
        TextAlign::Left,
    );

    // Side-by-side sub-tables; cursor advances by the taller one
    let tables_top = top + BANNER_HEIGHT + 4.0;
    let left_bottom = draw_table(
        flow,
        palette,
        &premium_table,
        &premium_rows,
        spec.margin_left,
        tables_top,
    );
    let right_bottom = draw_table(
        flow,
        palette,
        &coverage_table,
        &coverage_rows,
        spec.margin_left + half_width + TABLE_GAP,
        tables_top,
    );
    flow.advance_to(left_bottom.max(right_bottom) + 6.0);

    render_bundled_add_ons(flow, palette, quote);
    flow.advance(SECTION_GAP);
}

fn table_height(palette: &StylePalette, spec: &TableSpec, rows: &[Vec<String>]) -> f64 {
    let mut height = header_height(palette);
    for (i, row) in rows.iter().enumerate() {
        let highlighted = spec.highlight_row == Some(i);
        height += row_height(palette, spec, row, highlighted);
    }
    height
}

/// Premium breakdown rows: OD through total, with itemized premium add-ons
fn premium_rows(quote: &Quote) -> Vec<Vec<String>> {
    let mut rows = vec![
        vec!["OD Premium".to_string(), format_inr(quote.od_amount)],
        vec![
            format!("NCB Discount ({})", format_pct(quote.ncb_discount)),
            format!("- {}", format_inr(quote.ncb_discount_amount)),
        ],
        vec![
            "OD after NCB".to_string(),
            format_inr(quote.od_amount_after_ncb),
        ],
        vec![
            "Third Party Premium".to_string(),
            format_inr(quote.third_party_amount),
        ],
    ];

    for (_, add_on) in quote.premium_add_ons() {
        rows.push(vec![add_on.description.clone(), format_inr(add_on.amount)]);
    }

    let taxable = quote.od_amount_after_ncb + quote.third_party_amount + quote.add_ons_premium;
    rows.push(vec!["Taxable Subtotal".to_string(), format_inr(taxable)]);
    rows.push(vec!["GST".to_string(), format_inr(quote.gst_amount)]);
    rows.push(vec![
        "Total Premium".to_string(),
        format_inr(quote.total_premium),
    ]);
    rows
}

fn coverage_rows(quote: &Quote) -> Vec<Vec<String>> {
    vec![
        vec![
            "Policy Term".to_string(),
            quote.policy_duration_label.clone(),
        ],
        vec![
            "Coverage Type".to_string(),
            quote.coverage_type.as_str().to_string(),
        ],
        vec!["IDV".to_string(), format_inr(quote.idv)],
    ]
}

/// Bundled (included / zero-amount) add-ons in a fixed 3-column text grid
fn render_bundled_add_ons(flow: &mut PageFlow, palette: &StylePalette, quote: &Quote) {
    let bundled: Vec<&str> = quote
        .bundled_add_ons()
        .map(|(_, a)| a.description.as_str())
        .collect();
    if bundled.is_empty() {
        return;
    }

    let spec = flow.spec().clone();
    let line = palette.line_advance(palette.body_size);
    let rows = bundled.len().div_ceil(ADD_ON_COLUMNS);
    flow.ensure_space(line + rows as f64 * line);

    let top = flow.cursor();
    flow.text(
        spec.margin_left,
        top,
        "Included Add-ons",
        palette.body_size,
        FontStyle::Bold,
        palette.text,
        TextAlign::Left,
    );

    let col_width = spec.content_width() / ADD_ON_COLUMNS as f64;
    for (i, description) in bundled.iter().enumerate() {
        let col = i % ADD_ON_COLUMNS;
        let row = i / ADD_ON_COLUMNS;
        flow.text(
            spec.margin_left + col as f64 * col_width,
            top + line + row as f64 * line,
            &format!("- {}", description),
            palette.body_size,
            FontStyle::Regular,
            palette.muted,
            TextAlign::Left,
        );
    }

    flow.advance_to(top + line + rows as f64 * line);
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;
    use crate::layout::page::PageSpec;
    use crate::quote::fixtures;

    fn make_flow() -> PageFlow {
        PageFlow::new(PageSpec::default(), "Test".to_string(), Local::now())
    }

    #[test]
    fn test_premium_rows_order_and_total_last() {
        let quote = fixtures::quote_with_add_ons("Acme General", 11_600.0);
        let rows = premium_rows(&quote);
        assert_eq!(rows[0][0], "OD Premium");
        assert!(rows[1][0].starts_with("NCB Discount"));
        assert!(rows[1][1].starts_with("- "));
        // Paid add-on is itemized, bundled one is not
        assert!(rows.iter().any(|r| r[0] == "Zero Depreciation"));
        assert!(!rows.iter().any(|r| r[0] == "Roadside Assistance"));
        assert_eq!(rows.last().unwrap()[0], "Total Premium");
    }

    #[test]
    fn test_taxable_subtotal_precedes_gst() {
        let quote = fixtures::quote("Acme General", 11_600.0);
        let rows = premium_rows(&quote);
        let taxable = rows.iter().position(|r| r[0] == "Taxable Subtotal").unwrap();
        let gst = rows.iter().position(|r| r[0] == "GST").unwrap();
        assert_eq!(gst, taxable + 1);
        // 6400 + 2500 + 1200
        assert_eq!(rows[taxable][1], "Rs. 10,100");
    }

    #[test]
    fn test_banner_marks_accepted_quote() {
        let quotes = vec![
            fixtures::quote("Alpha Assurance", 10_000.0),
            fixtures::accepted_quote("Beta General", 12_000.0),
        ];
        let palette = StylePalette::default();
        let mut flow = make_flow();
        render(&mut flow, &palette, &quotes);

        let doc = flow.finalize(&palette);
        assert!(doc.contains_text("1. Alpha Assurance"));
        assert!(doc.contains_text("2. Beta General (Accepted)"));
    }

    #[test]
    fn test_cursor_advances_by_taller_sub_table() {
        // With add-ons the premium table outgrows the 3-row coverage table
        let quote = fixtures::quote_with_add_ons("Acme General", 11_600.0);
        let palette = StylePalette::default();

        let premium = premium_rows(&quote);
        let coverage = coverage_rows(&quote);
        let spec_w = 200.0;
        let premium_table = TableSpec::new(
            vec![
                Column::new("Premium Breakdown", ColumnKind::Label),
                Column::new("Amount", ColumnKind::Currency),
            ],
            ColumnWidths::EqualSplit(spec_w),
        )
        .with_highlight(Some(premium.len() - 1));
        let coverage_table = TableSpec::new(
            vec![
                Column::new("Coverage Details", ColumnKind::Label),
                Column::new("Value", ColumnKind::Text),
            ],
            ColumnWidths::EqualSplit(spec_w),
        );

        let left = table_height(&palette, &premium_table, &premium);
        let right = table_height(&palette, &coverage_table, &coverage);
        assert!(left > right);
    }

    #[test]
    fn test_bundled_add_ons_listed() {
        let quotes = vec![fixtures::quote_with_add_ons("Acme General", 11_600.0)];
        let palette = StylePalette::default();
        let mut flow = make_flow();
        render(&mut flow, &palette, &quotes);

        let doc = flow.finalize(&palette);
        assert!(doc.contains_text("Included Add-ons"));
        assert!(doc.contains_text("- Roadside Assistance"));
    }

    #[test]
    fn test_total_row_highlighted_in_premium_table() {
        let quotes = vec![fixtures::quote("Acme General", 11_600.0)];
        let palette = StylePalette::default();
        let mut flow = make_flow();
        render(&mut flow, &palette, &quotes);

        let doc = flow.finalize(&palette);
        let total = doc.pages[0]
            .texts()
            .find(|t| t.text == "Total Premium")
            .expect("total row label");
        assert_eq!(total.style, FontStyle::Bold);
        assert_eq!(total.color, palette.accent);
    }

    #[test]
    fn test_many_quotes_flow_across_pages() {
        let quotes: Vec<_> = (0..10)
            .map(|i| fixtures::quote(&format!("Insurer {}", i), 10_000.0 + i as f64))
            .collect();
        let palette = StylePalette::default();
        let mut flow = make_flow();
        render(&mut flow, &palette, &quotes);
        assert!(flow.page_number() > 1);
    }
}
