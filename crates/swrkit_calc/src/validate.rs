//! Optional screening of inputs and computed dimensions.
//!
//! The dimension pipeline computes through without bounds checks; screening
//! is a separate pass so the default pipeline output stays reproducible.
//! Callers decide what to do with the findings.

use crate::spec::{
    EnumIssueSeverity, SpecDerivedOpening, SpecOpening, SpecValidationIssue,
};

fn issue(n_idx_row: usize, severity: EnumIssueSeverity, message: String) -> SpecValidationIssue {
    SpecValidationIssue {
        n_idx_row,
        severity,
        message,
    }
}

/// Screen raw input rows.
///
/// Error findings: quantity below one, non-positive (or non-finite) overall
/// width/height. These make every downstream area non-physical and should be
/// rejected before computation.
pub fn screen_openings(openings: &[SpecOpening]) -> Vec<SpecValidationIssue> {
    let mut l_issues = Vec::new();
    for (n_idx_row, opening) in openings.iter().enumerate() {
        if opening.qty < 1 {
            l_issues.push(issue(
                n_idx_row,
                EnumIssueSeverity::Error,
                format!("Qty must be >= 1 (found {})", opening.qty),
            ));
        }
        if !(opening.width_overall_in > 0.0) {
            l_issues.push(issue(
                n_idx_row,
                EnumIssueSeverity::Error,
                format!(
                    "Overall Width in must be > 0 (found {})",
                    opening.width_overall_in
                ),
            ));
        }
        if !(opening.height_overall_in > 0.0) {
            l_issues.push(issue(
                n_idx_row,
                EnumIssueSeverity::Error,
                format!(
                    "Overall Height in must be > 0 (found {})",
                    opening.height_overall_in
                ),
            ));
        }
    }
    l_issues
}

/// Screen derived openings for non-physical frame/glass dimensions.
///
/// Warning findings only: the computed values are kept as-is, matching the
/// compute-through behavior of the pipeline.
pub fn screen_derived(openings: &[SpecDerivedOpening]) -> Vec<SpecValidationIssue> {
    let mut l_issues = Vec::new();
    for (n_idx_row, opening) in openings.iter().enumerate() {
        let l_checks = [
            (
                opening.width_swr_mm,
                "SWR width",
                "joint clearances meet or exceed the overall width",
            ),
            (
                opening.height_swr_mm,
                "SWR height",
                "joint clearances meet or exceed the overall height",
            ),
            (
                opening.width_glass_mm,
                "glass width",
                "glass offset leaves no glass on the width axis",
            ),
            (
                opening.height_glass_mm,
                "glass height",
                "glass offset leaves no glass on the height axis",
            ),
        ];
        for (n_value_mm, txt_field, txt_cause) in l_checks {
            if !(n_value_mm > 0.0) {
                l_issues.push(issue(
                    n_idx_row,
                    EnumIssueSeverity::Warning,
                    format!("{txt_field} computes to {n_value_mm:.3} mm; {txt_cause}"),
                ));
            }
        }
    }
    l_issues
}
