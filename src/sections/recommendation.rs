//! Recommendation callout
//!
//! A single highlighted panel naming the best quote and what choosing it
//! saves against the most expensive option. The assembler only invokes this
//! section when more than one quote is present.

use crate::document::{FontStyle, TextAlign};
use crate::format::{format_inr, format_pct};
use crate::layout::page::PageFlow;
use crate::layout::style::StylePalette;
use crate::metrics::QuoteMetrics;
use crate::quote::Quote;
use crate::sections::{section_heading, SECTION_GAP};

/// Height of the callout panel in points
const PANEL_HEIGHT: f64 = 74.0;
/// Width of the accent bar on the panel's left edge
const BAR_WIDTH: f64 = 4.0;

/// Draw the recommendation callout for the best quote.
pub fn render(
    flow: &mut PageFlow,
    palette: &StylePalette,
    quotes: &[Quote],
    metrics: &QuoteMetrics,
) {
    let best = &quotes[metrics.best_index];

    let heading_block = palette.line_advance(palette.heading_size) + 6.0;
    flow.ensure_space(heading_block + PANEL_HEIGHT + SECTION_GAP);
    section_heading(flow, palette, "Our Recommendation");

    let spec = flow.spec().clone();
    let top = flow.cursor();
    flow.fill_rect(
        spec.margin_left,
        top,
        spec.content_width(),
        PANEL_HEIGHT,
        palette.highlight_bg,
    );
    flow.fill_rect(spec.margin_left, top, BAR_WIDTH, PANEL_HEIGHT, palette.accent);

    let text_x = spec.margin_left + BAR_WIDTH + 10.0;
    let provider = if best.accepted {
        format!("{} (Accepted)", best.insurance_company)
    } else {
        best.insurance_company.clone()
    };
    flow.text(
        text_x,
        top + 8.0,
        &provider,
        palette.heading_size,
        FontStyle::Bold,
        palette.accent,
        TextAlign::Left,
    );
    flow.text(
        text_x,
        top + 26.0,
        &format!(
            "{} cover for {} at {} total premium",
            best.coverage_type.as_str(),
            best.policy_duration_label,
            format_inr(best.total_premium)
        ),
        palette.body_size,
        FontStyle::Regular,
        palette.text,
        TextAlign::Left,
    );
    flow.text(
        text_x,
        top + 40.0,
        &format!(
            "IDV {}  |  NCB {}  |  OD after NCB {}",
            format_inr(best.idv),
            format_pct(best.ncb_discount),
            format_inr(best.od_amount_after_ncb)
        ),
        palette.body_size,
        FontStyle::Regular,
        palette.neutral,
        TextAlign::Left,
    );

    let saved = metrics.max_premium - best.total_premium;
    let closing = if saved > 0.0 {
        format!(
            "Choosing this quote saves {} against the most expensive option.",
            format_inr(saved)
        )
    } else {
        "All compared quotes carry the same total premium.".to_string()
    };
    flow.text(
        text_x,
        top + 56.0,
        &closing,
        palette.body_size,
        FontStyle::Bold,
        palette.text,
        TextAlign::Left,
    );

    flow.advance_to(top + PANEL_HEIGHT + SECTION_GAP);
}
