//! Human-readable canopy area summary.

use std::path::Path;

use canopy_map_analytics_models::CanopyAreaSummary;

use crate::GenerateError;

/// Formats an unsigned count with thousands separators.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a square-foot total with thousands separators, rounded to whole
/// feet.
#[must_use]
pub fn format_sq_ft(total: f64) -> String {
    // Totals are non-negative by construction; municipal inventories are
    // far below the 2^53 integer range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = total.round().max(0.0) as u64;
    format_count(rounded)
}

/// Renders the summary as display text.
#[must_use]
pub fn summary_text(summary: &CanopyAreaSummary) -> String {
    let mut text = format!(
        "Total canopy area: {} sq ft\n",
        format_sq_ft(summary.total_sq_ft)
    );
    text.push_str(&format!(
        "Measured trees: {} of {}\n",
        format_count(summary.measured_count),
        format_count(summary.tree_count)
    ));
    if summary.missing_width > 0 {
        text.push_str(&format!(
            "Missing canopy width: {}\n",
            format_count(summary.missing_width)
        ));
    }
    if summary.invalid_width > 0 {
        text.push_str(&format!(
            "Negative canopy width (ignored): {}\n",
            format_count(summary.invalid_width)
        ));
    }
    text
}

/// Writes the summary text file.
///
/// # Errors
///
/// Returns [`GenerateError`] if the file cannot be written.
pub fn write_summary(path: &Path, summary: &CanopyAreaSummary) -> Result<(), GenerateError> {
    std::fs::write(path, summary_text(summary))?;
    log::info!("Summary written: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn rounds_square_feet_to_whole_numbers() {
        assert_eq!(format_sq_ft(392.699), "393");
        assert_eq!(format_sq_ft(1_234_567.4), "1,234,567");
    }

    #[test]
    fn summary_text_includes_total_and_counts() {
        let summary = CanopyAreaSummary {
            tree_count: 1300,
            measured_count: 1234,
            missing_width: 66,
            invalid_width: 0,
            total_sq_ft: 2_500_000.7,
        };
        let text = summary_text(&summary);
        assert!(text.contains("Total canopy area: 2,500,001 sq ft"));
        assert!(text.contains("Measured trees: 1,234 of 1,300"));
        assert!(text.contains("Missing canopy width: 66"));
        assert!(!text.contains("Negative"));
    }
}
