//! Workbook specification models.

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification mapped onto `rust_xlsxwriter::Format` at write
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Horizontal alignment.
    pub align: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,
    /// Number format code.
    pub num_format: Option<String>,
}

impl SpecCellFormat {
    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.clone().or_else(|| self.align.clone()),
            border: other.border.or(self.border),
            num_format: other.num_format.clone().or_else(|| self.num_format.clone()),
        }
    }
}

/// Format presets by column role.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecReportFormats {
    /// Body format for text columns and the stamp block.
    pub text: SpecCellFormat,
    /// Header row format.
    pub header: SpecCellFormat,
    /// Body format for integer columns.
    pub integer: SpecCellFormat,
    /// Body format for decimal columns.
    pub decimal: SpecCellFormat,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Project stamp block written above every report table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecWorkbookStamp {
    /// Project name value.
    pub project_name: String,
    /// Project number value.
    pub project_number: String,
    /// Generation timestamp, already formatted.
    pub created_at: String,
}

/// Autofit rule for column width inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumAutofitColumnsRule {
    /// Disable autofit.
    None,
    /// Infer width from header cells only (default).
    #[default]
    Header,
    /// Infer width from both header and body cells.
    All,
}

/// Per-sheet write options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetWriteOptions {
    /// Autofit width inference rule.
    pub rule_autofit: EnumAutofitColumnsRule,
    /// Minimum final column width.
    pub width_cell_min: usize,
    /// Maximum final column width.
    pub width_cell_max: usize,
    /// Width padding added after inference.
    pub width_cell_padding: usize,
}

impl Default for SpecSheetWriteOptions {
    fn default() -> Self {
        Self {
            rule_autofit: EnumAutofitColumnsRule::Header,
            width_cell_min: 8,
            width_cell_max: 60,
            width_cell_padding: 2,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-workbook write report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecWriteReport {
    /// Actual sheet names written, in order.
    pub sheets: Vec<String>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecWriteReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
