//! Static metric tables for the base-14 Helvetica family
//!
//! Widths are the standard AFM advance widths in 1/1000 em, covering the
//! printable ASCII range 0x20..=0x7E (index = codepoint - 32). Non-ASCII
//! characters fall back to an average width. Oblique shares the regular
//! advance widths.

use crate::document::FontStyle;

/// Advance-width table for one face of the family
pub struct FontMetrics {
    widths: [u16; 95],
    /// Fallback for codepoints outside 0x20..=0x7E
    average_width: u16,
}

impl FontMetrics {
    /// Measured width of a string in points at the given font size
    pub fn measure(&self, text: &str, size: f64) -> f64 {
        let units: u32 = text
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32] as u32
                } else {
                    self.average_width as u32
                }
            })
            .sum();
        units as f64 / 1000.0 * size
    }

    /// Greedy word-wrap of `text` into lines no wider than `max_width` points.
    ///
    /// A single word wider than the line is placed on its own line rather
    /// than split. Always returns at least one line (possibly empty).
    pub fn wrap(&self, text: &str, size: f64, max_width: f64) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return vec![String::new()];
        }

        let space = self.measure(" ", size);
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in words {
            let word_width = self.measure(word, size);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            }
        }
        lines.push(current);
        lines
    }
}

/// Metric table for a font style. Oblique uses the regular widths.
pub fn metrics_for(style: FontStyle) -> &'static FontMetrics {
    match style {
        FontStyle::Regular | FontStyle::Oblique => &HELVETICA,
        FontStyle::Bold => &HELVETICA_BOLD,
    }
}

/// Helvetica (regular) AFM advance widths
static HELVETICA: FontMetrics = FontMetrics {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
         278,  278,  355,  556,  556,  889,  667,  191,  333,  333,  389,  584,  278,  333,  278,  278,
        // 0-9
         556,  556,  556,  556,  556,  556,  556,  556,  556,  556,
        // :     ;     <     =     >     ?     @
         278,  278,  584,  584,  584,  556, 1015,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
         667,  667,  722,  722,  667,  611,  778,  722,  278,  500,  667,  556,  833,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
         722,  778,  667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,
        // [     \     ]     ^     _     `
         278,  278,  278,  469,  556,  333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
         556,  556,  500,  556,  556,  278,  556,  556,  222,  222,  500,  222,  833,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
         556,  556,  556,  556,  333,  500,  278,  556,  500,  722,  500,  500,  500,
        // {     |     }     ~
         334,  260,  334,  584,
    ],
    average_width: 513,
};

/// Helvetica-Bold AFM advance widths
static HELVETICA_BOLD: FontMetrics = FontMetrics {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
         278,  333,  474,  556,  556,  889,  722,  238,  333,  333,  389,  584,  278,  333,  278,  278,
        // 0-9
         556,  556,  556,  556,  556,  556,  556,  556,  556,  556,
        // :     ;     <     =     >     ?     @
         333,  333,  584,  584,  584,  611,  975,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
         722,  722,  722,  722,  667,  611,  778,  722,  278,  556,  722,  611,  833,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
         722,  778,  667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,
        // [     \     ]     ^     _     `
         333,  278,  333,  584,  556,  333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
         556,  611,  556,  611,  556,  333,  611,  611,  278,  278,  556,  278,  889,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
         611,  611,  611,  611,  389,  556,  333,  611,  556,  778,  556,  556,  500,
        // {     |     }     ~
         389,  280,  389,  584,
    ],
    average_width: 546,
};
