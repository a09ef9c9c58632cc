//! Page geometry and the page-flow state machine
//!
//! `PageFlow` owns the vertical cursor and the growing page list. Sections
//! draw through it at explicit coordinates and move the cursor with
//! `advance`/`advance_to`; `ensure_space` is the only operation that starts
//! a new page. `finalize` consumes the flow, so the type system rules out
//! drawing after the footers are stamped.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::document::{Document, DrawOp, FontStyle, Page, Rgb, TextAlign, TextOp};
use crate::layout::font::metrics_for;
use crate::layout::style::StylePalette;

/// Fixed page size and margins, in points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    pub page_width: f64,
    pub page_height: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub margin_right: f64,
}

impl Default for PageSpec {
    /// A4 portrait with 40pt margins
    fn default() -> Self {
        Self {
            page_width: 595.28,
            page_height: 841.89,
            margin_top: 40.0,
            margin_bottom: 40.0,
            margin_left: 40.0,
            margin_right: 40.0,
        }
    }
}

impl PageSpec {
    /// Width of the printable area
    pub fn content_width(&self) -> f64 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Right edge of the printable area
    pub fn content_right(&self) -> f64 {
        self.page_width - self.margin_right
    }

    /// Lowest y a block may extend to before a page break is required
    pub fn printable_bottom(&self) -> f64 {
        self.page_height - self.margin_bottom
    }
}

/// Vertical cursor and page list for one document in progress
#[derive(Debug, Clone)]
pub struct PageFlow {
    spec: PageSpec,
    title: String,
    generated_at: DateTime<Local>,
    pages: Vec<Page>,
    cursor_y: f64,
}

impl PageFlow {
    /// Start a document: page 1, cursor at the top margin
    pub fn new(spec: PageSpec, title: String, generated_at: DateTime<Local>) -> Self {
        let cursor_y = spec.margin_top;
        Self {
            spec,
            title,
            generated_at,
            pages: vec![Page::default()],
            cursor_y,
        }
    }

    pub fn spec(&self) -> &PageSpec {
        &self.spec
    }

    /// Current cursor position (top-down)
    pub fn cursor(&self) -> f64 {
        self.cursor_y
    }

    /// 1-based index of the page currently being drawn
    pub fn page_number(&self) -> usize {
        self.pages.len()
    }

    pub fn generated_at(&self) -> DateTime<Local> {
        self.generated_at
    }

    /// Whether a block of `required` height starting at `y` fits above the
    /// bottom margin
    pub fn fits(&self, y: f64, required: f64) -> bool {
        y + required <= self.spec.printable_bottom()
    }

    /// Start a new page if `required` height does not fit at the cursor.
    /// Returns the (possibly reset) cursor position.
    pub fn ensure_space(&mut self, required: f64) -> f64 {
        if !self.fits(self.cursor_y, required) {
            self.start_page();
        }
        self.cursor_y
    }

    /// Unconditionally start a new page; cursor resets to the top margin.
    /// Returns the new cursor position.
    pub fn start_page(&mut self) -> f64 {
        self.pages.push(Page::default());
        self.cursor_y = self.spec.margin_top;
        log::debug!("page break -> page {}", self.pages.len());
        self.cursor_y
    }

    /// Move the cursor down; never breaks the page
    pub fn advance(&mut self, amount: f64) {
        self.cursor_y += amount;
    }

    /// Place the cursor at an absolute y; never breaks the page
    pub fn advance_to(&mut self, y: f64) {
        self.cursor_y = y;
    }

    fn push(&mut self, op: DrawOp) {
        // pages is never empty; new() seeds page 1
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    /// Filled rectangle with top-left corner at (x, y)
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb) {
        self.push(DrawOp::FillRect { x, y, width, height, color });
    }

    /// Stroked line segment
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb, width: f64) {
        self.push(DrawOp::Line { x1, y1, x2, y2, color, width });
    }

    /// Single text run anchored at x per `align`, glyph-box top at y
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        size: f64,
        style: FontStyle,
        color: Rgb,
        align: TextAlign,
    ) {
        self.push(DrawOp::Text(TextOp {
            x,
            y,
            text: text.to_string(),
            size,
            style,
            color,
            align,
        }));
    }

    /// Left-aligned wrapped text block. Lines are spaced by `line_advance`.
    /// Returns the y just below the last line.
    #[allow(clippy::too_many_arguments)]
    pub fn text_wrapped(
        &mut self,
        x: f64,
        y: f64,
        max_width: f64,
        text: &str,
        size: f64,
        style: FontStyle,
        color: Rgb,
        line_advance: f64,
    ) -> f64 {
        let lines = metrics_for(style).wrap(text, size, max_width);
        let mut line_y = y;
        for line in &lines {
            self.text(x, line_y, line, size, style, color, TextAlign::Left);
            line_y += line_advance;
        }
        line_y
    }

    /// Stamp the footer on every page and return the finished document.
    ///
    /// Runs exactly once, after all content is drawn, so "Page i of N" sees
    /// the true page count. Consuming `self` makes further drawing
    /// impossible.
    pub fn finalize(mut self, palette: &StylePalette) -> Document {
        let total = self.pages.len();
        let spec = self.spec.clone();
        let rule_y = spec.printable_bottom() + 4.0;
        let text_y = rule_y + 4.0;
        let stamp = format!("Generated {}", self.generated_at.format("%d %b %Y %H:%M"));

        for (index, page) in self.pages.iter_mut().enumerate() {
            page.ops.push(DrawOp::Line {
                x1: spec.margin_left,
                y1: rule_y,
                x2: spec.content_right(),
                y2: rule_y,
                color: palette.border,
                width: 0.5,
            });

            let mut footer_text = |x: f64, text: String, align: TextAlign| {
                page.ops.push(DrawOp::Text(TextOp {
                    x,
                    y: text_y,
                    text,
                    size: palette.footer_size,
                    style: FontStyle::Regular,
                    color: palette.muted,
                    align,
                }));
            };

            footer_text(spec.margin_left, self.title.clone(), TextAlign::Left);
            footer_text(
                spec.page_width / 2.0,
                "Confidential".to_string(),
                TextAlign::Center,
            );
            footer_text(
                spec.content_right(),
                format!("Page {} of {}", index + 1, total),
                TextAlign::Right,
            );
            page.ops.push(DrawOp::Text(TextOp {
                x: spec.margin_left,
                y: text_y + palette.footer_size + 2.0,
                text: stamp.clone(),
                size: palette.footer_size - 1.0,
                style: FontStyle::Regular,
                color: palette.muted,
                align: TextAlign::Left,
            }));
        }

        log::debug!("finalized document with {} page(s)", total);

        Document {
            title: self.title,
            generated_at: self.generated_at,
            page_width: spec.page_width,
            page_height: spec.page_height,
            pages: self.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_flow() -> PageFlow {
        PageFlow::new(PageSpec::default(), "Test Report".to_string(), Local::now())
    }

    #[test]
    fn test_initial_state() {
        let flow = make_flow();
        assert_eq!(flow.page_number(), 1);
        assert_eq!(flow.cursor(), PageSpec::default().margin_top);
    }

    #[test]
    fn test_ensure_space_noop_when_fits() {
        let mut flow = make_flow();
        flow.ensure_space(100.0);
        assert_eq!(flow.page_number(), 1);
    }

    #[test]
    fn test_ensure_space_breaks_when_block_overflows() {
        let mut flow = make_flow();
        let spec = flow.spec().clone();
        flow.advance_to(spec.printable_bottom() - 50.0);
        let y = flow.ensure_space(100.0);
        assert_eq!(flow.page_number(), 2);
        assert_eq!(y, spec.margin_top);
    }

    #[test]
    fn test_advance_never_breaks() {
        let mut flow = make_flow();
        flow.advance(10_000.0);
        assert_eq!(flow.page_number(), 1);
    }

    #[test]
    fn test_ops_land_on_current_page() {
        let mut flow = make_flow();
        flow.text(
            40.0,
            40.0,
            "first page",
            9.0,
            FontStyle::Regular,
            Rgb::new(0, 0, 0),
            TextAlign::Left,
        );
        flow.start_page();
        flow.text(
            40.0,
            40.0,
            "second page",
            9.0,
            FontStyle::Regular,
            Rgb::new(0, 0, 0),
            TextAlign::Left,
        );

        let doc = flow.finalize(&StylePalette::default());
        assert!(doc.pages[0].contains_text("first page"));
        assert!(!doc.pages[0].contains_text("second page"));
        assert!(doc.pages[1].contains_text("second page"));
    }

    #[test]
    fn test_finalize_stamps_correct_page_numbers() {
        let mut flow = make_flow();
        flow.start_page();
        flow.start_page();
        let doc = flow.finalize(&StylePalette::default());

        assert_eq!(doc.page_count(), 3);
        for (i, page) in doc.pages.iter().enumerate() {
            let label = format!("Page {} of 3", i + 1);
            assert!(page.contains_text(&label), "missing {:?}", label);
            assert!(page.contains_text("Confidential"));
            assert!(page.contains_text("Test Report"));
            assert!(page.contains_text("Generated "));
        }
    }

    #[test]
    fn test_text_wrapped_returns_bottom_and_emits_lines() {
        let mut flow = make_flow();
        let bottom = flow.text_wrapped(
            40.0,
            40.0,
            80.0,
            "Engine protection cover for flood damage",
            8.5,
            FontStyle::Regular,
            Rgb::new(0, 0, 0),
            11.0,
        );
        let doc = flow.finalize(&StylePalette::default());
        let line_count = doc.pages[0]
            .texts()
            .filter(|t| t.y < 200.0 && t.size == 8.5)
            .count();
        assert!(line_count >= 2);
        assert_eq!(bottom, 40.0 + 11.0 * line_count as f64);
    }
}
