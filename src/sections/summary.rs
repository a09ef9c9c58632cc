//! Executive summary: metric cards, three per row
//!
//! Rendered only for a non-empty quote set; the assembler gates on the
//! aggregated metrics being present.

use crate::document::{FontStyle, Rgb, TextAlign};
use crate::format::{format_inr, format_pct};
use crate::layout::page::PageFlow;
use crate::layout::style::StylePalette;
use crate::metrics::QuoteMetrics;
use crate::sections::{section_heading, SECTION_GAP};

/// Cards per row
const CARDS_PER_ROW: usize = 3;
/// Fixed card height in points
const CARD_HEIGHT: f64 = 56.0;
/// Gap between cards in points
const CARD_GAP: f64 = 8.0;

struct Card {
    headline: String,
    label: &'static str,
    subtext: &'static str,
    /// Favorable metrics use the accent color, neutral ones the neutral color
    favorable: bool,
}

fn cards(metrics: &QuoteMetrics) -> Vec<Card> {
    vec![
        Card {
            headline: format_inr(metrics.best_premium),
            label: "Best Premium",
            subtext: "Lowest quote in this comparison",
            favorable: true,
        },
        Card {
            headline: format_inr(metrics.savings),
            label: "Potential Savings",
            subtext: "Best vs. costliest quote",
            favorable: true,
        },
        Card {
            headline: format_pct(metrics.max_ncb),
            label: "Maximum NCB",
            subtext: "Highest no-claim bonus offered",
            favorable: true,
        },
        Card {
            headline: format_inr(metrics.avg_premium),
            label: "Average Premium",
            subtext: "Mean across all quotes",
            favorable: false,
        },
        Card {
            headline: format_inr(metrics.avg_idv),
            label: "Average IDV",
            subtext: "Mean insured declared value",
            favorable: false,
        },
        Card {
            headline: metrics.quote_count.to_string(),
            label: "Quotes Compared",
            subtext: "Insurers in this report",
            favorable: false,
        },
    ]
}

/// Draw the executive summary cards and advance the cursor.
pub fn render(flow: &mut PageFlow, palette: &StylePalette, metrics: &QuoteMetrics) {
    let cards = cards(metrics);
    let rows = cards.len().div_ceil(CARDS_PER_ROW);
    let heading_block = palette.line_advance(palette.heading_size) + 6.0;
    let grid_height = rows as f64 * CARD_HEIGHT + (rows - 1) as f64 * CARD_GAP;
    flow.ensure_space(heading_block + grid_height + SECTION_GAP);

    section_heading(flow, palette, "Executive Summary");

    let spec = flow.spec().clone();
    let card_width =
        (spec.content_width() - (CARDS_PER_ROW - 1) as f64 * CARD_GAP) / CARDS_PER_ROW as f64;
    let top = flow.cursor();

    for (index, card) in cards.iter().enumerate() {
        let col = index % CARDS_PER_ROW;
        let row = index / CARDS_PER_ROW;
        let x = spec.margin_left + col as f64 * (card_width + CARD_GAP);
        let y = top + row as f64 * (CARD_HEIGHT + CARD_GAP);
        let tone = if card.favorable { palette.accent } else { palette.neutral };
        draw_card(flow, palette, card, tone, x, y, card_width);
    }

    flow.advance_to(top + grid_height + SECTION_GAP);
}

fn draw_card(
    flow: &mut PageFlow,
    palette: &StylePalette,
    card: &Card,
    tone: Rgb,
    x: f64,
    y: f64,
    width: f64,
) {
    flow.fill_rect(x, y, width, CARD_HEIGHT, palette.row_alt);
    flow.fill_rect(x, y, width, 3.0, tone);

    let center = x + width / 2.0;
    flow.text(center, y + 10.0, &card.headline, 13.0, FontStyle::Bold, tone, TextAlign::Center);
    flow.text(
        center,
        y + 28.0,
        card.label,
        8.0,
        FontStyle::Bold,
        palette.text,
        TextAlign::Center,
    );
    flow.text(
        center,
        y + 40.0,
        card.subtext,
        6.5,
        FontStyle::Regular,
        palette.muted,
        TextAlign::Center,
    );
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;
    use crate::layout::page::PageSpec;
    use crate::metrics::aggregate;
    use crate::quote::fixtures;

    fn make_flow() -> PageFlow {
        PageFlow::new(PageSpec::default(), "Test".to_string(), Local::now())
    }

    #[test]
    fn test_renders_six_cards_with_values() {
        let palette = StylePalette::default();
        let metrics = aggregate(&fixtures::four_quote_set()).unwrap();
        let mut flow = make_flow();
        render(&mut flow, &palette, &metrics);

        let doc = flow.finalize(&palette);
        for needle in [
            "Executive Summary",
            "Best Premium",
            "Potential Savings",
            "Maximum NCB",
            "Average Premium",
            "Average IDV",
            "Quotes Compared",
        ] {
            assert!(doc.pages[0].contains_text(needle), "missing {:?}", needle);
        }
        assert!(doc.pages[0].contains_text("Rs. 9,000"));
        assert!(doc.pages[0].contains_text("Rs. 6,000"));
    }

    #[test]
    fn test_favorable_cards_use_accent_color() {
        let palette = StylePalette::default();
        let metrics = aggregate(&fixtures::four_quote_set()).unwrap();
        let mut flow = make_flow();
        render(&mut flow, &palette, &metrics);

        let doc = flow.finalize(&palette);
        let best = doc.pages[0]
            .texts()
            .find(|t| t.text == "Rs. 9,000")
            .expect("best premium headline");
        assert_eq!(best.color, palette.accent);

        let avg = doc.pages[0]
            .texts()
            .find(|t| t.text == "Rs. 11,500")
            .expect("average premium headline");
        assert_eq!(avg.color, palette.neutral);
    }
}
