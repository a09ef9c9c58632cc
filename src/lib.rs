//! Quote Report - Motor insurance quote comparison report generator
//!
//! This library provides:
//! - Quote and customer profile data models with input validation
//! - Summary metrics over a quote set (best premium, savings, averages)
//! - A paginated document composer (banner, summary cards, comparison
//!   views, per-quote breakdowns, recommendation)
//! - A PDF backend over the backend-neutral display list

pub mod assembler;
pub mod document;
pub mod error;
pub mod format;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod quote;
pub mod sections;
pub mod table;

// Re-export commonly used types
pub use assembler::{generate_comparison_report, ReportAssembler, REPORT_TITLE};
pub use document::Document;
pub use error::GenerationFailed;
pub use metrics::{aggregate, QuoteMetrics};
pub use pdf::render_pdf;
pub use quote::{CustomerProfile, Quote};
