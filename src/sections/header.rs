//! Report header banner: page 1 only

use crate::document::{FontStyle, TextAlign};
use crate::layout::page::PageFlow;
use crate::layout::style::StylePalette;

/// Brand name printed in the banner
pub const BRAND_NAME: &str = "PolicyLens";

/// Brand tagline printed under the name
pub const TAGLINE: &str = "Compare smarter. Insure better.";

/// Fixed banner height in points
pub const BANNER_HEIGHT: f64 = 64.0;

/// Draw the full-bleed brand banner with the report title and generation
/// timestamp, then place the cursor below it.
pub fn render(flow: &mut PageFlow, palette: &StylePalette, title: &str) {
    let spec = flow.spec().clone();
    let stamp = format!(
        "Generated {}",
        flow.generated_at().format("%d %b %Y %H:%M")
    );

    flow.fill_rect(0.0, 0.0, spec.page_width, BANNER_HEIGHT, palette.primary);

    flow.text(
        spec.margin_left,
        14.0,
        BRAND_NAME,
        18.0,
        FontStyle::Bold,
        palette.light,
        TextAlign::Left,
    );
    flow.text(
        spec.margin_left,
        38.0,
        TAGLINE,
        8.0,
        FontStyle::Oblique,
        palette.light,
        TextAlign::Left,
    );

    flow.text(
        spec.content_right(),
        18.0,
        title,
        11.0,
        FontStyle::Bold,
        palette.light,
        TextAlign::Right,
    );
    flow.text(
        spec.content_right(),
        36.0,
        &stamp,
        7.5,
        FontStyle::Regular,
        palette.light,
        TextAlign::Right,
    );

    flow.advance_to(BANNER_HEIGHT + 16.0);
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;
    use crate::layout::page::PageSpec;

    #[test]
    fn test_header_draws_brand_title_and_timestamp() {
        let palette = StylePalette::default();
        let mut flow = PageFlow::new(PageSpec::default(), "Report".to_string(), Local::now());
        render(&mut flow, &palette, "Quote Comparison Report");

        assert!(flow.cursor() > BANNER_HEIGHT);
        let doc = flow.finalize(&palette);
        assert!(doc.pages[0].contains_text(BRAND_NAME));
        assert!(doc.pages[0].contains_text(TAGLINE));
        assert!(doc.pages[0].contains_text("Quote Comparison Report"));
        assert!(doc.pages[0].contains_text("Generated "));
    }

    #[test]
    fn test_banner_spans_full_page_width() {
        let palette = StylePalette::default();
        let mut flow = PageFlow::new(PageSpec::default(), "Report".to_string(), Local::now());
        render(&mut flow, &palette, "Quote Comparison Report");

        let doc = flow.finalize(&palette);
        let banner = doc.pages[0].ops.iter().find_map(|op| match op {
            crate::document::DrawOp::FillRect { x, width, height, .. } => {
                Some((*x, *width, *height))
            }
            _ => None,
        });
        assert_eq!(banner, Some((0.0, 595.28, BANNER_HEIGHT)));
    }
}
