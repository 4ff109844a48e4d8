//! `swrkit_io_xlsx` v1:
//! XLSX rendering kernel for stamped cutlist reports.
//!
//! Architecture:
//! - `conf`   : layout constants and default format presets
//! - `spec`   : formats/options/report models
//! - `util`   : pure helper functions
//! - `writer` : workbook writer kernel

pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    FMT_STAMP_CREATED_AT, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
    N_ROW_TABLE_START, TUP_EXCEL_ILLEGAL, TUP_STAMP_LABELS, derive_default_report_formats,
};
pub use spec::{
    EnumAutofitColumnsRule, SpecCellFormat, SpecReportFormats, SpecSheetWriteOptions,
    SpecWorkbookStamp, SpecWriteReport,
};
pub use util::{cast_col_num, cast_row_num, estimate_width_len, sanitize_sheet_name};
pub use writer::ReportWorkbook;
