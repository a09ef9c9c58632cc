//! Write-once document output model
//!
//! A finished report is an ordered list of pages, each an ordered list of
//! draw operations in top-down page coordinates (y grows downward from the
//! top edge, in points). The model is backend-neutral; `pdf.rs` flips the
//! coordinates when serializing.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Font weight/slant selector within the Helvetica family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontStyle {
    Regular,
    Bold,
    Oblique,
}

/// Horizontal anchoring of a text run relative to its x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A positioned text run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOp {
    /// Anchor x; interpretation depends on `align`
    pub x: f64,
    /// Top of the glyph box in top-down coordinates
    pub y: f64,
    pub text: String,
    pub size: f64,
    pub style: FontStyle,
    pub color: Rgb,
    pub align: TextAlign,
}

/// A single draw operation on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    /// Filled axis-aligned rectangle; (x, y) is the top-left corner
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
    },
    /// Stroked line segment
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgb,
        width: f64,
    },
    Text(TextOp),
}

/// One page of the finished document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Iterate the text runs on this page in draw order
    pub fn texts(&self) -> impl Iterator<Item = &TextOp> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Whether any text run on this page contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.text.contains(needle))
    }
}

/// A complete, immutable report document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Report title, also stamped into every footer
    pub title: String,

    /// Generation timestamp shown in the header and footers
    pub generated_at: DateTime<Local>,

    /// Page width in points
    pub page_width: f64,

    /// Page height in points
    pub page_height: f64,

    /// Pages in order
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether any page contains `needle` in a text run
    pub fn contains_text(&self, needle: &str) -> bool {
        self.pages.iter().any(|p| p.contains_text(needle))
    }
}
