//! Shared cutlist specification models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conf::{
    N_GLASS_CUTTING_TOLERANCE_IN_DEFAULT, N_JOINT_BOTTOM_IN_DEFAULT, N_JOINT_LEFT_IN_DEFAULT,
    N_JOINT_RIGHT_IN_DEFAULT, N_JOINT_TOP_IN_DEFAULT,
};

////////////////////////////////////////////////////////////////////////////////
// #region InputModels

/// One input row describing a window/storefront opening.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecOpening {
    /// User-defined category label.
    pub tag: String,
    /// Overall rough-opening width in inches.
    pub width_overall_in: f64,
    /// Overall rough-opening height in inches.
    pub height_overall_in: f64,
    /// Number of identical openings.
    pub qty: u32,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ConfigurationModels

/// SWR system-type selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnumSystemType {
    /// Insulated-glass system.
    #[serde(rename = "SWR-IG")]
    Ig,
    /// Vacuum-insulated-glass system.
    #[serde(rename = "SWR-VIG")]
    Vig,
    /// Plain single-lite system.
    #[serde(rename = "SWR")]
    Plain,
    /// User-specified glass offset, no fixed profile.
    Custom,
}

impl EnumSystemType {
    /// Order-form label for the system type.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ig => "SWR-IG",
            Self::Vig => "SWR-VIG",
            Self::Plain => "SWR",
            Self::Custom => "Custom",
        }
    }
}

/// Frame finish selection. Cosmetic only; never consumed by computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnumFinish {
    /// Unfinished mill aluminum.
    #[default]
    #[serde(rename = "Mil Finish")]
    MilFinish,
    /// Clear anodized.
    #[serde(rename = "Clear Anodized")]
    ClearAnodized,
    /// Black anodized.
    #[serde(rename = "Black Anodized")]
    BlackAnodized,
    /// Painted.
    Painted,
}

/// Installation joint clearances in inches, one per side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecJointClearances {
    /// Top joint clearance.
    pub top: f64,
    /// Bottom joint clearance.
    pub bottom: f64,
    /// Left joint clearance.
    pub left: f64,
    /// Right joint clearance.
    pub right: f64,
}

impl Default for SpecJointClearances {
    fn default() -> Self {
        Self {
            top: N_JOINT_TOP_IN_DEFAULT,
            bottom: N_JOINT_BOTTOM_IN_DEFAULT,
            left: N_JOINT_LEFT_IN_DEFAULT,
            right: N_JOINT_RIGHT_IN_DEFAULT,
        }
    }
}

/// Resolved system profile: the constants fed into the dimension pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecSystemProfile {
    /// Selected system type.
    pub system_type: EnumSystemType,
    /// Glass offset in inches, subtracted twice per axis.
    pub glass_offset_in: f64,
    /// Extrusion profile number; absent for `Custom`.
    pub profile_number: Option<String>,
}

impl SpecSystemProfile {
    /// Combined part number, `"{system}-{profile}"`; bare system label when
    /// no profile number is resolved.
    pub fn part_number(&self) -> String {
        match &self.profile_number {
            Some(txt_profile) => format!("{}-{}", self.system_type.label(), txt_profile),
            None => self.system_type.label().to_string(),
        }
    }
}

fn default_glass_cutting_tolerance_in() -> f64 {
    N_GLASS_CUTTING_TOLERANCE_IN_DEFAULT
}

/// Immutable configuration for one report-generation run.
///
/// Collected once (job file, not ambient session state) and passed into the
/// pipeline explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecRunConfig {
    /// System-type selection.
    pub system_type: EnumSystemType,
    /// User-entered glass offset in inches; read only for `Custom`.
    #[serde(default)]
    pub glass_offset_custom_in: Option<f64>,
    /// Frame finish (cosmetic).
    #[serde(default)]
    pub finish: EnumFinish,
    /// Glass cutting tolerance in inches (carried, never consumed).
    #[serde(default = "default_glass_cutting_tolerance_in")]
    pub glass_cutting_tolerance_in: f64,
    /// Installation joint clearances.
    #[serde(default)]
    pub joints: SpecJointClearances,
    /// Project name stamped on every report.
    #[serde(default)]
    pub project_name: String,
    /// Project number stamped on every report.
    #[serde(default)]
    pub project_number: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DerivedModels

/// Per-opening pipeline output. Computed once per row, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDerivedOpening {
    /// Category label carried from the input row.
    pub tag: String,
    /// Overall width in inches.
    pub width_overall_in: f64,
    /// Overall height in inches.
    pub height_overall_in: f64,
    /// Quantity carried from the input row.
    pub qty: u32,
    /// Overall width in millimeters.
    pub width_overall_mm: f64,
    /// Overall height in millimeters.
    pub height_overall_mm: f64,
    /// Area of one opening in square feet, from overall dimensions.
    pub area_unit_ft2: f64,
    /// Unit area multiplied by quantity.
    pub area_total_ft2: f64,
    /// Frame (SWR) width in millimeters.
    pub width_swr_mm: f64,
    /// Frame (SWR) height in millimeters.
    pub height_swr_mm: f64,
    /// Frame (SWR) width in inches.
    pub width_swr_in: f64,
    /// Frame (SWR) height in inches.
    pub height_swr_in: f64,
    /// Glass width in millimeters.
    pub width_glass_mm: f64,
    /// Glass height in millimeters.
    pub height_glass_mm: f64,
    /// Glass width in inches.
    pub width_glass_in: f64,
    /// Glass height in inches.
    pub height_glass_in: f64,
    /// Doubled quantity: each opening yields a pair of cuts per axis.
    pub qty_doubled: u64,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region AggregationModels

/// One cross-tabulation row of the aggregated cut list.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecCutAggregationRow {
    /// Finished frame length in inches used as the grouping key.
    pub length_finished_in: f64,
    /// Doubled cut counts, aligned with [`SpecCutAggregation::tags`].
    pub counts_by_tag: Vec<u64>,
    /// Sum of all tag columns in this row.
    pub total_qty: u64,
}

/// Aggregated cut list: one row per distinct finished length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecCutAggregation {
    /// Distinct tags in first-appearance order; fixes the column layout.
    pub tags: Vec<String>,
    /// Aggregation rows in canonical key order.
    pub rows: Vec<SpecCutAggregationRow>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportTableModels

/// Normalized report cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank value.
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
}

/// Column role, used downstream to select number formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumColumnKind {
    /// Free text.
    Text,
    /// Whole-number counts and indexes.
    Integer,
    /// Physical measurements and areas.
    Decimal,
}

/// One report column: header text plus its role.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecReportColumn {
    /// Header text.
    pub name: String,
    /// Column role.
    pub kind: EnumColumnKind,
}

/// The shared "columns + rows" shape every view builder produces.
///
/// Invariant: every row holds exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecReportTable {
    /// Column headers in output order.
    pub columns: Vec<SpecReportColumn>,
    /// Data rows in output order.
    pub rows: Vec<Vec<EnumCellValue>>,
}

impl SpecReportTable {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// One tag's cut detail table, rendered as its own sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecTagDetailSheet {
    /// The tag this sheet covers.
    pub tag: String,
    /// Detail rows for every opening carrying the tag.
    pub table: SpecReportTable,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ValidationModels

/// Severity of one screening finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumIssueSeverity {
    /// Result is non-physical but computation proceeds regardless.
    Warning,
    /// Input is unusable and should be rejected before computation.
    Error,
}

/// One per-row screening finding.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecValidationIssue {
    /// Zero-based input row index.
    pub n_idx_row: usize,
    /// Finding severity.
    pub severity: EnumIssueSeverity,
    /// User-facing description.
    pub message: String,
}

impl fmt::Display for SpecValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.n_idx_row + 1, self.message)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
