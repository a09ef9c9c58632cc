//! Display formatting for currency and percentage values
//!
//! Amounts are formatted with Indian digit grouping (lakh/crore style:
//! 12,34,567). The rupee sign is not part of the WinAnsi character set used by
//! the base-14 PDF fonts, so amounts carry a "Rs." prefix instead.

/// Format a rupee amount with Indian digit grouping, e.g. `Rs. 12,34,567`.
///
/// The amount is rounded to the nearest whole rupee. Negative amounts keep
/// their sign ahead of the prefix digits.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = group_indian(&digits);
    if negative {
        format!("Rs. -{}", grouped)
    } else {
        format!("Rs. {}", grouped)
    }
}

/// Format a percentage with up to one decimal place, e.g. `25%` or `12.5%`.
pub fn format_pct(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Indian grouping: last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
