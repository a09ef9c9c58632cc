//! Summary statistics computed over a quote set
//!
//! Metrics are recomputed fresh on every generation and never persisted.
//! The best-quote rule is uniform everywhere a "best" is needed (executive
//! summary card, comparison highlight, recommendation): the accepted quote
//! if present, otherwise the minimum total premium, first in input order on
//! ties.

use serde::{Deserialize, Serialize};

use crate::quote::Quote;

/// Aggregate metrics for a non-empty quote set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteMetrics {
    /// Number of quotes in the set
    pub quote_count: usize,

    /// Lowest total premium in the set
    pub best_premium: f64,

    /// Highest total premium in the set
    pub max_premium: f64,

    /// Mean total premium, rounded to the nearest whole rupee
    pub avg_premium: f64,

    /// Spread between the highest and lowest premium
    pub savings: f64,

    /// Mean insured declared value, rounded to the nearest whole rupee
    pub avg_idv: f64,

    /// Highest NCB percentage in the set (stored precision, not rounded)
    pub max_ncb: f64,

    /// Index into the input slice of the best quote
    pub best_index: usize,
}

/// Compute metrics over a quote set.
///
/// Returns `None` for an empty slice; callers gate the quote-dependent
/// sections on this rather than treating it as an error.
pub fn aggregate(quotes: &[Quote]) -> Option<QuoteMetrics> {
    if quotes.is_empty() {
        return None;
    }

    let premiums: Vec<f64> = quotes.iter().map(|q| q.total_premium).collect();
    let best_premium = premiums.iter().copied().fold(f64::INFINITY, f64::min);
    let max_premium = premiums.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg_premium = (premiums.iter().sum::<f64>() / quotes.len() as f64).round();
    let avg_idv = (quotes.iter().map(|q| q.idv).sum::<f64>() / quotes.len() as f64).round();
    let max_ncb = quotes
        .iter()
        .map(|q| q.ncb_discount)
        .fold(f64::NEG_INFINITY, f64::max);

    Some(QuoteMetrics {
        quote_count: quotes.len(),
        best_premium,
        max_premium,
        avg_premium,
        savings: max_premium - best_premium,
        avg_idv,
        max_ncb,
        best_index: best_quote_index(quotes),
    })
}

/// Index of the best quote: accepted first, else minimum premium, first on
/// ties. Defined only for non-empty input; returns 0 for a single quote.
pub fn best_quote_index(quotes: &[Quote]) -> usize {
    if let Some(idx) = quotes.iter().position(|q| q.accepted) {
        return idx;
    }

    let mut best = 0;
    for (i, quote) in quotes.iter().enumerate().skip(1) {
        // Strict comparison keeps the first quote on ties
        if quote.total_premium < quotes[best].total_premium {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::quote::fixtures;

    #[test]
    fn test_aggregate_empty_is_none() {
        assert!(aggregate(&[]).is_none());
    }

    #[test]
    fn test_savings_is_max_minus_min() {
        let quotes = fixtures::four_quote_set();
        let metrics = aggregate(&quotes).unwrap();
        assert_relative_eq!(metrics.best_premium, 9_000.0);
        assert_relative_eq!(metrics.max_premium, 15_000.0);
        assert_relative_eq!(metrics.savings, 6_000.0);
        assert!(metrics.savings >= 0.0);
    }

    #[test]
    fn test_accepted_quote_wins_over_cheaper() {
        let mut quotes = vec![
            fixtures::quote("Alpha Assurance", 8_000.0),
            fixtures::quote("Beta General", 12_000.0),
        ];
        quotes[1].accepted = true;
        assert_eq!(best_quote_index(&quotes), 1);
    }

    #[test]
    fn test_four_quote_scenario_best_is_accepted() {
        let quotes = fixtures::four_quote_set();
        let metrics = aggregate(&quotes).unwrap();
        assert_eq!(metrics.best_index, 3);
        assert_eq!(quotes[metrics.best_index].insurance_company, "Delta Insurance");
    }

    #[test]
    fn test_tie_break_prefers_first_in_input_order() {
        let quotes = vec![
            fixtures::quote("Alpha Assurance", 10_000.0),
            fixtures::quote("Beta General", 10_000.0),
        ];
        assert_eq!(best_quote_index(&quotes), 0);
    }

    #[test]
    fn test_avg_premium_rounds_to_whole_rupee() {
        let quotes = vec![
            fixtures::quote("Alpha Assurance", 10_000.0),
            fixtures::quote("Beta General", 10_001.0),
        ];
        let metrics = aggregate(&quotes).unwrap();
        // 10000.5 rounds away from zero
        assert_relative_eq!(metrics.avg_premium, 10_001.0);
    }

    #[test]
    fn test_max_ncb_keeps_stored_precision() {
        let mut quotes = fixtures::four_quote_set();
        quotes[1].ncb_discount = 32.5;
        let metrics = aggregate(&quotes).unwrap();
        assert_relative_eq!(metrics.max_ncb, 32.5);
    }

    #[test]
    fn test_single_quote_metrics() {
        let quotes = vec![fixtures::quote("Alpha Assurance", 11_000.0)];
        let metrics = aggregate(&quotes).unwrap();
        assert_eq!(metrics.quote_count, 1);
        assert_relative_eq!(metrics.savings, 0.0);
        assert_eq!(metrics.best_index, 0);
    }
}
