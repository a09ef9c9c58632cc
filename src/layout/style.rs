//! Shared style palette and semantic column roles
//!
//! Conditional styling is declared here rather than branched on positional
//! indices at the call sites: cell alignment is a function of the column's
//! semantic role, and row highlighting is a single predicate supplied by the
//! caller of the table engine.

use serde::{Deserialize, Serialize};

use crate::document::{Rgb, TextAlign};

/// Semantic role of a table column, driving its cell alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Row labels and descriptions; left-aligned
    Label,
    /// Free text values; left-aligned
    Text,
    /// Rupee amounts; right-aligned
    Currency,
    /// Percentages; centered
    Percentage,
    /// Other numerics (years, counts); centered
    Numeric,
}

impl ColumnKind {
    /// Alignment policy for body cells of this column kind
    pub fn alignment(&self) -> TextAlign {
        match self {
            ColumnKind::Label | ColumnKind::Text => TextAlign::Left,
            ColumnKind::Currency => TextAlign::Right,
            ColumnKind::Percentage | ColumnKind::Numeric => TextAlign::Center,
        }
    }
}

/// Color and type palette shared by every section renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePalette {
    /// Brand banner and table header fill
    pub primary: Rgb,
    /// Favorable metrics, best-quote highlight text, total rows
    pub accent: Rgb,
    /// Light fill behind the highlighted best row
    pub highlight_bg: Rgb,
    /// Alternating body-row fill
    pub row_alt: Rgb,
    /// Neutral metric cards and secondary chrome
    pub neutral: Rgb,
    /// Body text
    pub text: Rgb,
    /// De-emphasized text (subtexts, footers)
    pub muted: Rgb,
    /// Text on dark fills
    pub light: Rgb,
    /// Hairline rules and card borders
    pub border: Rgb,

    /// Body font size in points
    pub body_size: f64,
    /// Table header font size in points (fixed, larger than body)
    pub table_header_size: f64,
    /// Section heading font size in points
    pub heading_size: f64,
    /// Footer font size in points
    pub footer_size: f64,
    /// Line height multiplier applied to font sizes
    pub line_height: f64,
}

impl Default for StylePalette {
    fn default() -> Self {
        Self {
            primary: Rgb::new(31, 58, 95),
            accent: Rgb::new(21, 115, 71),
            highlight_bg: Rgb::new(223, 240, 230),
            row_alt: Rgb::new(243, 245, 248),
            neutral: Rgb::new(90, 99, 112),
            text: Rgb::new(33, 37, 41),
            muted: Rgb::new(120, 128, 138),
            light: Rgb::new(255, 255, 255),
            border: Rgb::new(208, 213, 221),
            body_size: 8.5,
            table_header_size: 9.5,
            heading_size: 12.0,
            footer_size: 7.0,
            line_height: 1.35,
        }
    }
}

impl StylePalette {
    /// Line advance in points for a given font size
    pub fn line_advance(&self, size: f64) -> f64 {
        size * self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_policy_by_column_kind() {
        assert_eq!(ColumnKind::Label.alignment(), TextAlign::Left);
        assert_eq!(ColumnKind::Text.alignment(), TextAlign::Left);
        assert_eq!(ColumnKind::Currency.alignment(), TextAlign::Right);
        assert_eq!(ColumnKind::Percentage.alignment(), TextAlign::Center);
        assert_eq!(ColumnKind::Numeric.alignment(), TextAlign::Center);
    }

    #[test]
    fn test_header_font_larger_than_body() {
        let palette = StylePalette::default();
        assert!(palette.table_header_size > palette.body_size);
    }
}
