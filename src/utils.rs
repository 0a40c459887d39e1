//! Shared helpers: label abbreviation and value formatting.

use crate::host::{FontSpec, TextMeasurer};

/// Caps a label at `max_chars` characters, replacing the tail with three
/// dots. Labels at or under the cap come back unchanged, which also makes
/// the operation idempotent.
pub fn abbreviate(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = label.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Shortens a label until it renders within `budget` pixels, using the
/// measurer's character hit-testing rather than a fixed character count.
pub fn abbreviate_to_width(
    label: &str,
    font: &FontSpec,
    budget: f64,
    measurer: &dyn TextMeasurer,
) -> String {
    if measurer.width(font, label) <= budget {
        return label.to_string();
    }
    let mut cut = measurer
        .char_index_at(font, label, budget)
        .min(label.chars().count());
    loop {
        let keep = cut.saturating_sub(3);
        let mut candidate: String = label.chars().take(keep).collect();
        candidate.push_str("...");
        if keep == 0 || measurer.width(font, &candidate) <= budget {
            return candidate;
        }
        cut = keep;
    }
}

/// Formats a correlation value with the configured number of decimal
/// places; NaN means "no value" and renders as `N/A`.
pub fn format_correlation_value(value: f64, decimal_places: usize) -> String {
    if value.is_nan() {
        "N/A".to_string()
    } else {
        format!("{value:.decimal_places$}")
    }
}
