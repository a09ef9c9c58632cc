//! PDF backend
//!
//! Serializes a finished `Document` into PDF bytes. This is the only module
//! that knows about PDF coordinates: the display list is top-down, PDF is
//! bottom-up, so every y flips against the page height here. Text uses the
//! three standard Helvetica Type1 faces, so nothing is embedded and output
//! stays small.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::document::{Document, DrawOp, FontStyle, TextAlign};
use crate::layout::font::metrics_for;

/// Fraction of the font size between the top of the glyph box and the
/// baseline, for Helvetica
const BASELINE_RATIO: f64 = 0.72;

fn font_name(style: FontStyle) -> Name<'static> {
    match style {
        FontStyle::Regular => Name(b"F1"),
        FontStyle::Bold => Name(b"F2"),
        FontStyle::Oblique => Name(b"F3"),
    }
}

/// Map text to WinAnsi bytes. ASCII and Latin-1 pass through, anything
/// outside becomes '?'.
fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E => c as u8,
            0xA0..=0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}

fn render_page_content(doc: &Document, ops: &[DrawOp]) -> Content {
    let mut content = Content::new();
    let height = doc.page_height;

    for op in ops {
        match op {
            DrawOp::FillRect { x, y, width, height: h, color } => {
                content.save_state();
                content.set_fill_rgb(
                    color.r as f32 / 255.0,
                    color.g as f32 / 255.0,
                    color.b as f32 / 255.0,
                );
                content.rect(
                    *x as f32,
                    (height - (y + h)) as f32,
                    *width as f32,
                    *h as f32,
                );
                content.fill_nonzero();
                content.restore_state();
            }
            DrawOp::Line { x1, y1, x2, y2, color, width } => {
                content.save_state();
                content.set_line_width(*width as f32);
                content.set_stroke_rgb(
                    color.r as f32 / 255.0,
                    color.g as f32 / 255.0,
                    color.b as f32 / 255.0,
                );
                content.move_to(*x1 as f32, (height - y1) as f32);
                content.line_to(*x2 as f32, (height - y2) as f32);
                content.stroke();
                content.restore_state();
            }
            DrawOp::Text(text_op) => {
                let measured = metrics_for(text_op.style).measure(&text_op.text, text_op.size);
                let anchor_x = match text_op.align {
                    TextAlign::Left => text_op.x,
                    TextAlign::Center => text_op.x - measured / 2.0,
                    TextAlign::Right => text_op.x - measured,
                };
                let baseline_y = height - (text_op.y + BASELINE_RATIO * text_op.size);

                content.save_state();
                content.set_fill_rgb(
                    text_op.color.r as f32 / 255.0,
                    text_op.color.g as f32 / 255.0,
                    text_op.color.b as f32 / 255.0,
                );
                content
                    .begin_text()
                    .set_font(font_name(text_op.style), text_op.size as f32)
                    .next_line(anchor_x as f32, baseline_y as f32)
                    .show(Str(&to_winansi(&text_op.text)))
                    .end_text();
                content.restore_state();
            }
        }
    }

    content
}

/// Serialize a document to PDF bytes.
pub fn render_pdf(doc: &Document) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let info_id = alloc();

    let regular_id = alloc();
    let bold_id = alloc();
    let oblique_id = alloc();
    pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));
    pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));
    pdf.type1_font(oblique_id)
        .base_font(Name(b"Helvetica-Oblique"));

    let page_count = doc.pages.len();
    let page_ids: Vec<Ref> = (0..page_count).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..page_count).map(|_| alloc()).collect();

    for (page, content_id) in doc.pages.iter().zip(&content_ids) {
        let content = render_page_content(doc, &page.ops);
        pdf.stream(*content_id, &content.finish());
    }

    for (page_id, content_id) in page_ids.iter().zip(&content_ids) {
        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(
            0.0,
            0.0,
            doc.page_width as f32,
            doc.page_height as f32,
        ))
        .parent(pages_id)
        .contents(*content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), regular_id);
        fonts.pair(Name(b"F2"), bold_id);
        fonts.pair(Name(b"F3"), oblique_id);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(page_count as i32);
    pdf.document_info(info_id).title(TextStr(&doc.title));

    log::debug!("serialized {} page(s) to pdf", page_count);
    pdf.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::generate_comparison_report;
    use crate::quote::fixtures;

    #[test]
    fn test_winansi_passthrough_and_replacement() {
        assert_eq!(to_winansi("Rs. 1,200"), b"Rs. 1,200".to_vec());
        assert_eq!(to_winansi("caf\u{e9}"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(to_winansi("\u{20B9}500"), b"?500".to_vec());
    }

    #[test]
    fn test_output_is_a_pdf() {
        let doc = generate_comparison_report(&fixtures::four_quote_set(), &fixtures::customer())
            .expect("report generation");
        let bytes = render_pdf(&doc);
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.ends_with(b"%%EOF\n") || bytes.ends_with(b"%%EOF"));
    }

    #[test]
    fn test_every_page_gets_a_content_stream() {
        let empty = generate_comparison_report(&[], &fixtures::customer())
            .expect("report generation");
        let full = generate_comparison_report(&fixtures::four_quote_set(), &fixtures::customer())
            .expect("report generation");
        assert!(full.page_count() >= empty.page_count());
        assert!(render_pdf(&full).len() > render_pdf(&empty).len());
    }
}
