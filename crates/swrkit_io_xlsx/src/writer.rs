//! Report workbook writer kernel.

use std::collections::BTreeSet;
use std::path::PathBuf;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};

use swrkit_calc::spec::{EnumCellValue, EnumColumnKind, SpecReportTable};

use crate::conf::{
    N_COL_STAMP_LABEL, N_COL_STAMP_VALUE, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX,
    N_NROWS_EXCEL_MAX, N_ROW_STAMP_START, N_ROW_TABLE_START, TUP_STAMP_LABELS,
    derive_default_report_formats,
};
use crate::spec::{
    EnumAutofitColumnsRule, SpecCellFormat, SpecReportFormats, SpecSheetWriteOptions,
    SpecWorkbookStamp, SpecWriteReport,
};
use crate::util::{cast_col_num, cast_row_num, estimate_width_len, sanitize_sheet_name};

/// Stateful workbook writer for stamped report sheets.
///
/// Every sheet carries the project stamp block in its top-left corner and
/// one data table starting at [`N_ROW_TABLE_START`].
pub struct ReportWorkbook {
    path_file_out: PathBuf,
    workbook: Workbook,
    formats: SpecReportFormats,
    set_sheet_names_existing: BTreeSet<String>,
    report: SpecWriteReport,
    if_closed: bool,
}

impl ReportWorkbook {
    /// Create a writer bound to an output path and explicit format presets.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn new(path_file_out: PathBuf, formats: SpecReportFormats) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            formats,
            set_sheet_names_existing: BTreeSet::new(),
            report: SpecWriteReport::default(),
            if_closed: false,
        }
    }

    /// Create a writer with the default format presets.
    pub fn with_default_formats(path_file_out: PathBuf) -> Self {
        Self::new(path_file_out, derive_default_report_formats())
    }

    /// Return output file path as string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Return immutable snapshot of the write report.
    pub fn report(&self) -> SpecWriteReport {
        self.report.clone()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), String> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook
            .save(&self.path_file_out)
            .map_err(derive_xlsx_error_text)?;
        self.if_closed = true;
        Ok(())
    }

    /// Write one stamped report sheet.
    ///
    /// The requested sheet name is sanitized and de-duplicated against the
    /// sheets already in the workbook; the actual name used is recorded in
    /// the write report.
    pub fn write_report_sheet(
        &mut self,
        sheet_name: &str,
        stamp: &SpecWorkbookStamp,
        table: &SpecReportTable,
        options: &SpecSheetWriteOptions,
    ) -> Result<(), String> {
        if self.if_closed {
            return Err("Cannot write after close().".to_string());
        }
        validate_table_shape(table)?;

        let sheet_name_unique =
            self.derive_unique_sheet_name(&sanitize_sheet_name(sheet_name, "_"));
        if sheet_name_unique != sheet_name {
            self.report.warn(format!(
                "Sheet name `{sheet_name}` was written as `{sheet_name_unique}`."
            ));
        }
        let fmt_text = derive_rust_xlsx_format(&self.formats.text);
        let fmt_header = derive_rust_xlsx_format(&self.formats.header);
        let l_fmt_body_by_col: Vec<Format> = table
            .columns
            .iter()
            .map(|col| {
                derive_rust_xlsx_format(match col.kind {
                    EnumColumnKind::Text => &self.formats.text,
                    EnumColumnKind::Integer => &self.formats.integer,
                    EnumColumnKind::Decimal => &self.formats.decimal,
                })
            })
            .collect();

        let worksheet = self.workbook.add_worksheet();
        worksheet
            .set_name(&sheet_name_unique)
            .map_err(derive_xlsx_error_text)?;

        write_stamp_block(worksheet, stamp, &fmt_text)?;

        for (n_idx_col, col) in table.columns.iter().enumerate() {
            worksheet
                .write_string_with_format(
                    cast_row_num(N_ROW_TABLE_START)?,
                    cast_col_num(n_idx_col)?,
                    &col.name,
                    &fmt_header,
                )
                .map_err(derive_xlsx_error_text)?;
        }

        let if_autofit = !matches!(options.rule_autofit, EnumAutofitColumnsRule::None);
        let mut l_width_by_col = vec![0usize; table.width()];
        if if_autofit {
            for (n_idx_col, col) in table.columns.iter().enumerate() {
                l_width_by_col[n_idx_col] = col.name.chars().count();
            }
        }

        for (n_idx_row, row) in table.rows.iter().enumerate() {
            for (n_idx_col, value) in row.iter().enumerate() {
                if if_autofit && matches!(options.rule_autofit, EnumAutofitColumnsRule::All) {
                    l_width_by_col[n_idx_col] = usize::max(
                        l_width_by_col[n_idx_col],
                        estimate_width_len(value, table.columns[n_idx_col].kind),
                    );
                }
                write_cell_with_format(
                    worksheet,
                    N_ROW_TABLE_START + 1 + n_idx_row,
                    n_idx_col,
                    value,
                    &l_fmt_body_by_col[n_idx_col],
                )?;
            }
        }

        if if_autofit && !l_width_by_col.is_empty() {
            let n_min = usize::max(1, options.width_cell_min);
            let n_max = usize::min(255, usize::max(n_min, options.width_cell_max));
            for (n_idx_col, n_width_recorded) in l_width_by_col.iter().enumerate() {
                let n_width_final = usize::min(
                    n_max,
                    usize::max(n_min, n_width_recorded + options.width_cell_padding),
                );
                worksheet
                    .set_column_width(cast_col_num(n_idx_col)?, n_width_final as f64)
                    .map_err(derive_xlsx_error_text)?;
            }
        }

        self.report.sheets.push(sheet_name_unique);
        Ok(())
    }

    fn derive_unique_sheet_name(&mut self, name: &str) -> String {
        if !self.set_sheet_names_existing.contains(name) {
            self.set_sheet_names_existing.insert(name.to_string());
            return name.to_string();
        }

        let base_name: String = name
            .chars()
            .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
            .collect();

        let mut n_idx = 2usize;
        loop {
            let candidate: String = format!("{base_name}__{n_idx}")
                .chars()
                .take(N_LEN_EXCEL_SHEET_NAME_MAX)
                .collect();
            if !self.set_sheet_names_existing.contains(&candidate) {
                self.set_sheet_names_existing.insert(candidate.clone());
                return candidate;
            }
            n_idx += 1;
        }
    }
}

fn validate_table_shape(table: &SpecReportTable) -> Result<(), String> {
    if table.width() > N_NCOLS_EXCEL_MAX {
        return Err(format!(
            "Table has {} columns; Excel allows at most {N_NCOLS_EXCEL_MAX}.",
            table.width()
        ));
    }
    if N_ROW_TABLE_START + 1 + table.height() > N_NROWS_EXCEL_MAX {
        return Err(format!(
            "Table has {} rows; it does not fit one worksheet.",
            table.height()
        ));
    }
    for (n_idx_row, row) in table.rows.iter().enumerate() {
        if row.len() != table.width() {
            return Err(format!(
                "Row {n_idx_row} has {} cells; expected {}.",
                row.len(),
                table.width()
            ));
        }
    }
    Ok(())
}

fn write_stamp_block(
    worksheet: &mut Worksheet,
    stamp: &SpecWorkbookStamp,
    fmt_text: &Format,
) -> Result<(), String> {
    let l_values = [
        stamp.project_name.as_str(),
        stamp.project_number.as_str(),
        stamp.created_at.as_str(),
    ];
    for (n_idx, txt_label) in TUP_STAMP_LABELS.iter().enumerate() {
        let n_row = cast_row_num(N_ROW_STAMP_START + n_idx)?;
        worksheet
            .write_string_with_format(n_row, cast_col_num(N_COL_STAMP_LABEL)?, *txt_label, fmt_text)
            .map_err(derive_xlsx_error_text)?;
        worksheet
            .write_string_with_format(
                n_row,
                cast_col_num(N_COL_STAMP_VALUE)?,
                l_values[n_idx],
                fmt_text,
            )
            .map_err(derive_xlsx_error_text)?;
    }
    Ok(())
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: &Format,
) -> Result<(), String> {
    match value {
        EnumCellValue::None => {
            worksheet
                .write_blank(cast_row_num(row_idx)?, cast_col_num(col_idx)?, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::String(val) => {
            worksheet
                .write_string_with_format(
                    cast_row_num(row_idx)?,
                    cast_col_num(col_idx)?,
                    val,
                    format,
                )
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Number(val) => {
            worksheet
                .write_number_with_format(
                    cast_row_num(row_idx)?,
                    cast_col_num(col_idx)?,
                    *val,
                    format,
                )
                .map_err(derive_xlsx_error_text)?;
        }
    }
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.clone());
    }
    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        5 => FormatBorder::Thick,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use swrkit_calc::spec::{
        EnumCellValue, EnumColumnKind, SpecReportColumn, SpecReportTable,
    };

    use super::ReportWorkbook;
    use crate::spec::{SpecSheetWriteOptions, SpecWorkbookStamp};

    struct TestDir {
        path: PathBuf,
    }

    impl TestDir {
        fn new() -> Self {
            let n = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock")
                .as_nanos();
            let path = std::env::temp_dir().join(format!("swrkit_xlsx_test_{n}"));
            std::fs::create_dir_all(&path).expect("create test dir");
            Self { path }
        }

        fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TestDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    fn table_fixture() -> SpecReportTable {
        SpecReportTable {
            columns: vec![
                SpecReportColumn {
                    name: "Item".to_string(),
                    kind: EnumColumnKind::Integer,
                },
                SpecReportColumn {
                    name: "Position".to_string(),
                    kind: EnumColumnKind::Text,
                },
                SpecReportColumn {
                    name: "Length (mm)".to_string(),
                    kind: EnumColumnKind::Decimal,
                },
            ],
            rows: vec![
                vec![
                    EnumCellValue::Number(1.0),
                    EnumCellValue::String("left".to_string()),
                    EnumCellValue::Number(1003.3),
                ],
                vec![
                    EnumCellValue::Number(1.0),
                    EnumCellValue::None,
                    EnumCellValue::Number(1508.125),
                ],
            ],
        }
    }

    fn stamp_fixture() -> SpecWorkbookStamp {
        SpecWorkbookStamp {
            project_name: "Tower Lobby".to_string(),
            project_number: "P-1024".to_string(),
            created_at: "2026-01-02 03:04:05".to_string(),
        }
    }

    #[test]
    fn write_report_sheet_smoke_and_unique_names() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("report.xlsx");
        let mut workbook = ReportWorkbook::with_default_formats(path_file.clone());

        let options = SpecSheetWriteOptions::default();
        workbook
            .write_report_sheet("Sheet1", &stamp_fixture(), &table_fixture(), &options)
            .expect("first sheet");
        workbook
            .write_report_sheet("Sheet1", &stamp_fixture(), &table_fixture(), &options)
            .expect("second sheet");

        workbook.close().expect("close");
        workbook.close().expect("close is idempotent");

        assert!(path_file.exists());
        let report = workbook.report();
        assert_eq!(
            report.sheets,
            vec!["Sheet1".to_string(), "Sheet1__2".to_string()]
        );
    }

    #[test]
    fn sheet_names_are_sanitized_before_write() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("tags.xlsx");
        let mut workbook = ReportWorkbook::with_default_formats(path_file);

        workbook
            .write_report_sheet(
                "A/B",
                &stamp_fixture(),
                &table_fixture(),
                &SpecSheetWriteOptions::default(),
            )
            .expect("sanitized sheet");

        let report = workbook.report();
        assert_eq!(report.sheets, vec!["A_B".to_string()]);
        assert_eq!(report.warnings.len(), 1);
        workbook.close().expect("close");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("bad.xlsx");
        let mut workbook = ReportWorkbook::with_default_formats(path_file);

        let mut table = table_fixture();
        table.rows[1].pop();

        let err = workbook
            .write_report_sheet(
                "Sheet1",
                &stamp_fixture(),
                &table,
                &SpecSheetWriteOptions::default(),
            )
            .expect_err("ragged row");
        assert!(err.contains("expected 3"));
    }

    #[test]
    fn writes_after_close_are_rejected() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("closed.xlsx");
        let mut workbook = ReportWorkbook::with_default_formats(path_file);
        workbook
            .write_report_sheet(
                "Sheet1",
                &stamp_fixture(),
                &table_fixture(),
                &SpecSheetWriteOptions::default(),
            )
            .expect("write");
        workbook.close().expect("close");

        let err = workbook
            .write_report_sheet(
                "Sheet2",
                &stamp_fixture(),
                &table_fixture(),
                &SpecSheetWriteOptions::default(),
            )
            .expect_err("write after close");
        assert!(err.contains("close"));
    }
}
