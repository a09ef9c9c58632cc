//! Error type raised by report generation
//!
//! The assembler is the only place that produces `GenerationFailed`; section
//! renderers and the table engine draw into an in-memory page buffer and
//! cannot fail on their own. An empty quote set is not an error; the
//! quote-dependent sections are simply skipped.

use thiserror::Error;

/// Report generation failed; no document was produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationFailed {
    /// A quote carried a non-finite or negative numeric field, or an NCB
    /// percentage outside 0-50. Names the offending quote and field.
    #[error("malformed quote from {provider}: invalid {field}")]
    MalformedQuote {
        provider: String,
        field: &'static str,
    },
}
