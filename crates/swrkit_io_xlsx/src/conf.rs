//! Workbook layout constants and default format presets.

use crate::spec::{SpecCellFormat, SpecReportFormats};

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// First stamp row (the `Project Name:` label cell).
pub const N_ROW_STAMP_START: usize = 6;
/// Stamp label column.
pub const N_COL_STAMP_LABEL: usize = 0;
/// Stamp value column.
pub const N_COL_STAMP_VALUE: usize = 1;
/// Row index where the data table header is written.
pub const N_ROW_TABLE_START: usize = 12;
/// Stamp labels, written top to bottom from `N_ROW_STAMP_START`.
pub const TUP_STAMP_LABELS: [&str; 3] = ["Project Name:", "Project Number:", "Date Created:"];
/// Timestamp format for the `Date Created:` stamp value.
pub const FMT_STAMP_CREATED_AT: &str = "%Y-%m-%d %H:%M:%S";

/// Build the default format presets used by [`crate::writer::ReportWorkbook`].
pub fn derive_default_report_formats() -> SpecReportFormats {
    let fmt_base = SpecCellFormat {
        font_name: Some("Calibri".to_string()),
        font_size: Some(11),
        ..Default::default()
    };

    SpecReportFormats {
        text: fmt_base.clone(),
        header: fmt_base.merge(&SpecCellFormat {
            bold: Some(true),
            align: Some("center".to_string()),
            border: Some(1),
            ..Default::default()
        }),
        integer: fmt_base.merge(&SpecCellFormat {
            num_format: Some("0".to_string()),
            ..Default::default()
        }),
        decimal: fmt_base.merge(&SpecCellFormat {
            num_format: Some("0.000".to_string()),
            ..Default::default()
        }),
    }
}
