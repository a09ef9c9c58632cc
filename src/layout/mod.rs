//! Layout substrate: fonts, styles, and page flow

pub mod font;
pub mod page;
pub mod style;

pub use font::{metrics_for, FontMetrics};
pub use page::{PageFlow, PageSpec};
pub use style::{ColumnKind, StylePalette};
