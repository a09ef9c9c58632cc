//! Report assembly
//!
//! `ReportAssembler` strings the sections together into a finished
//! `Document`: banner, customer grid, executive summary, comparison view,
//! per-quote breakdowns, recommendation. Validation happens up front, so a
//! malformed quote fails generation before anything is drawn. Quote-driven
//! sections are skipped for an empty quote set and the recommendation needs
//! at least two quotes to compare.

use chrono::{DateTime, Local};

use crate::document::Document;
use crate::error::GenerationFailed;
use crate::layout::page::{PageFlow, PageSpec};
use crate::layout::style::StylePalette;
use crate::metrics::aggregate;
use crate::quote::{CustomerProfile, Quote};
use crate::sections;

/// Title used for every comparison report
pub const REPORT_TITLE: &str = "Motor Insurance Quote Comparison Report";

/// Builds comparison reports with a fixed palette and page geometry
#[derive(Debug, Clone)]
pub struct ReportAssembler {
    palette: StylePalette,
    page_spec: PageSpec,
    generated_at: Option<DateTime<Local>>,
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self {
            palette: StylePalette::default(),
            page_spec: PageSpec::default(),
            generated_at: None,
        }
    }
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the generation timestamp instead of reading the wall clock.
    pub fn with_generated_at(mut self, at: DateTime<Local>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Assemble the full report document.
    ///
    /// All quotes are validated before any drawing happens; the first
    /// malformed quote aborts the run.
    pub fn assemble(
        &self,
        quotes: &[Quote],
        customer: &CustomerProfile,
    ) -> Result<Document, GenerationFailed> {
        for quote in quotes {
            quote.validate()?;
        }

        let generated_at = self.generated_at.unwrap_or_else(Local::now);
        let mut flow = PageFlow::new(
            self.page_spec.clone(),
            REPORT_TITLE.to_string(),
            generated_at,
        );

        log::info!(
            "assembling comparison report for {} quote(s)",
            quotes.len()
        );

        sections::header::render(&mut flow, &self.palette, REPORT_TITLE);
        sections::customer::render(&mut flow, &self.palette, customer);

        if let Some(metrics) = aggregate(quotes) {
            sections::summary::render(&mut flow, &self.palette, &metrics);
            sections::comparison::render(&mut flow, &self.palette, quotes);
            sections::detail::render(&mut flow, &self.palette, quotes);
            if quotes.len() > 1 {
                sections::recommendation::render(&mut flow, &self.palette, quotes, &metrics);
            }
        }

        Ok(flow.finalize(&self.palette))
    }
}

/// Build a comparison report with default styling and the current time.
pub fn generate_comparison_report(
    quotes: &[Quote],
    customer: &CustomerProfile,
) -> Result<Document, GenerationFailed> {
    ReportAssembler::new().assemble(quotes, customer)
}
