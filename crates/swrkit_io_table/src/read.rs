//! CSV ingest for the openings table.

use std::path::Path;

use polars::prelude::{AnyValue, Column, CsvReadOptions, DataFrame, SerReader};

use swrkit_calc::spec::SpecOpening;

use crate::spec::TableReadError;

/// Required input column headers, in template order.
pub const TUP_COLS_REQUIRED: [&str; 4] = ["Tag", "Overall Width in", "Overall Height in", "Qty"];

const COL_TAG: &str = "Tag";
const COL_WIDTH: &str = "Overall Width in";
const COL_HEIGHT: &str = "Overall Height in";
const COL_QTY: &str = "Qty";

/// Read one openings table from a CSV file.
///
/// All required columns are checked before any row is converted; extra
/// columns are ignored and row order is preserved. A header-only file yields
/// an empty sequence.
pub fn read_openings_csv(path_file_in: &Path) -> Result<Vec<SpecOpening>, TableReadError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path_file_in.to_path_buf()))
        .map_err(|err| TableReadError::Read {
            path: path_file_in.to_path_buf(),
            message: err.to_string(),
        })?
        .finish()
        .map_err(|err| TableReadError::Read {
            path: path_file_in.to_path_buf(),
            message: err.to_string(),
        })?;
    derive_openings_from_dataframe(&df)
}

/// Convert an in-memory DataFrame into the opening sequence.
pub fn derive_openings_from_dataframe(
    df: &DataFrame,
) -> Result<Vec<SpecOpening>, TableReadError> {
    for name_col in TUP_COLS_REQUIRED {
        if df.column(name_col).is_err() {
            return Err(TableReadError::MissingColumn {
                name_col: name_col.to_string(),
            });
        }
    }

    let col_tag = derive_column(df, COL_TAG)?;
    let col_width = derive_column(df, COL_WIDTH)?;
    let col_height = derive_column(df, COL_HEIGHT)?;
    let col_qty = derive_column(df, COL_QTY)?;

    let mut l_openings = Vec::with_capacity(df.height());
    for n_idx_row in 0..df.height() {
        l_openings.push(SpecOpening {
            tag: derive_text_cell(col_tag, n_idx_row, COL_TAG)?,
            width_overall_in: derive_number_cell(col_width, n_idx_row, COL_WIDTH)?,
            height_overall_in: derive_number_cell(col_height, n_idx_row, COL_HEIGHT)?,
            qty: derive_qty_cell(col_qty, n_idx_row, COL_QTY)?,
        });
    }
    Ok(l_openings)
}

fn derive_column<'a>(df: &'a DataFrame, name_col: &str) -> Result<&'a Column, TableReadError> {
    df.column(name_col).map_err(|_| TableReadError::MissingColumn {
        name_col: name_col.to_string(),
    })
}

fn derive_any_value<'a>(
    col: &'a Column,
    n_idx_row: usize,
    name_col: &str,
) -> Result<AnyValue<'a>, TableReadError> {
    col.get(n_idx_row).map_err(|err| TableReadError::InvalidCell {
        n_idx_row,
        name_col: name_col.to_string(),
        message: format!("Failed to access cell value: {err}"),
    })
}

fn invalid_cell(n_idx_row: usize, name_col: &str, message: String) -> TableReadError {
    TableReadError::InvalidCell {
        n_idx_row,
        name_col: name_col.to_string(),
        message,
    }
}

fn derive_f64_from_any_value(value: &AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::UInt8(val) => Some(f64::from(*val)),
        AnyValue::UInt16(val) => Some(f64::from(*val)),
        AnyValue::UInt32(val) => Some(f64::from(*val)),
        AnyValue::UInt64(val) => Some(*val as f64),
        AnyValue::Int8(val) => Some(f64::from(*val)),
        AnyValue::Int16(val) => Some(f64::from(*val)),
        AnyValue::Int32(val) => Some(f64::from(*val)),
        AnyValue::Int64(val) => Some(*val as f64),
        AnyValue::Int128(val) => Some(*val as f64),
        AnyValue::Float32(val) => Some(f64::from(*val)),
        AnyValue::Float64(val) => Some(*val),
        AnyValue::String(val) => val.trim().parse::<f64>().ok(),
        AnyValue::StringOwned(val) => val.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Text cell: label columns keep whatever the reader inferred, stringified.
fn derive_text_cell(
    col: &Column,
    n_idx_row: usize,
    name_col: &str,
) -> Result<String, TableReadError> {
    match derive_any_value(col, n_idx_row, name_col)? {
        AnyValue::Null => Err(invalid_cell(
            n_idx_row,
            name_col,
            "missing value".to_string(),
        )),
        AnyValue::String(val) => Ok(val.to_string()),
        AnyValue::StringOwned(val) => Ok(val.to_string()),
        value => Ok(value.to_string()),
    }
}

fn derive_number_cell(
    col: &Column,
    n_idx_row: usize,
    name_col: &str,
) -> Result<f64, TableReadError> {
    let value = derive_any_value(col, n_idx_row, name_col)?;
    if matches!(value, AnyValue::Null) {
        return Err(invalid_cell(
            n_idx_row,
            name_col,
            "missing value".to_string(),
        ));
    }
    derive_f64_from_any_value(&value).ok_or_else(|| {
        invalid_cell(n_idx_row, name_col, format!("not a number: {value}"))
    })
}

fn derive_qty_cell(
    col: &Column,
    n_idx_row: usize,
    name_col: &str,
) -> Result<u32, TableReadError> {
    let n_value = derive_number_cell(col, n_idx_row, name_col)?;
    if !n_value.is_finite() || n_value.fract() != 0.0 {
        return Err(invalid_cell(
            n_idx_row,
            name_col,
            format!("Qty must be a whole number (found {n_value})"),
        ));
    }
    if n_value < 0.0 || n_value > f64::from(u32::MAX) {
        return Err(invalid_cell(
            n_idx_row,
            name_col,
            format!("Qty is out of range (found {n_value})"),
        ));
    }
    Ok(n_value as u32)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::read_openings_csv;
    use crate::spec::TableReadError;

    struct TestDir {
        path: PathBuf,
    }

    impl TestDir {
        fn new() -> Self {
            let n = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock")
                .as_nanos();
            let path = std::env::temp_dir().join(format!("swrkit_table_test_{n}"));
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

    fn write_csv(path: &Path, txt: &str) {
        std::fs::write(path, txt).expect("write csv");
    }

    #[test]
    fn read_openings_smoke_basic() {
        let tmp = TestDir::new();
        let path_csv = tmp.path().join("openings.csv");
        write_csv(
            &path_csv,
            "Tag,Overall Width in,Overall Height in,Qty\nA,40,60,2\nB,30.5,50.25,1\n",
        );

        let l_openings = read_openings_csv(&path_csv).expect("read openings");

        assert_eq!(l_openings.len(), 2);
        assert_eq!(l_openings[0].tag, "A");
        assert_eq!(l_openings[0].qty, 2);
        assert_eq!(l_openings[1].width_overall_in, 30.5);
        assert_eq!(l_openings[1].height_overall_in, 50.25);
    }

    #[test]
    fn extra_columns_are_ignored_and_order_preserved() {
        let tmp = TestDir::new();
        let path_csv = tmp.path().join("openings.csv");
        write_csv(
            &path_csv,
            "Tag,Overall Width in,Overall Height in,Qty,Note\nZ,10,20,1,last\nA,11,21,2,first\n",
        );

        let l_openings = read_openings_csv(&path_csv).expect("read openings");

        assert_eq!(l_openings[0].tag, "Z");
        assert_eq!(l_openings[1].tag, "A");
    }

    #[test]
    fn missing_required_column_is_reported_by_name() {
        let tmp = TestDir::new();
        let path_csv = tmp.path().join("openings.csv");
        write_csv(&path_csv, "Tag,Overall Width in,Overall Height in\nA,40,60\n");

        let err = read_openings_csv(&path_csv).expect_err("missing column");

        assert!(
            matches!(err, TableReadError::MissingColumn { ref name_col } if name_col == "Qty"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn header_only_file_yields_empty_sequence() {
        let tmp = TestDir::new();
        let path_csv = tmp.path().join("openings.csv");
        write_csv(&path_csv, "Tag,Overall Width in,Overall Height in,Qty\n");

        let l_openings = read_openings_csv(&path_csv).expect("read openings");

        assert!(l_openings.is_empty());
    }

    #[test]
    fn blank_dimension_cell_is_an_invalid_cell_error() {
        let tmp = TestDir::new();
        let path_csv = tmp.path().join("openings.csv");
        write_csv(
            &path_csv,
            "Tag,Overall Width in,Overall Height in,Qty\nA,,60,2\n",
        );

        let err = read_openings_csv(&path_csv).expect_err("blank cell");

        assert!(matches!(
            err,
            TableReadError::InvalidCell { n_idx_row: 0, ref name_col, .. }
                if name_col == "Overall Width in"
        ));
    }

    #[test]
    fn fractional_qty_is_rejected() {
        let tmp = TestDir::new();
        let path_csv = tmp.path().join("openings.csv");
        write_csv(
            &path_csv,
            "Tag,Overall Width in,Overall Height in,Qty\nA,40,60,2.5\n",
        );

        let err = read_openings_csv(&path_csv).expect_err("fractional qty");

        assert!(matches!(
            err,
            TableReadError::InvalidCell { ref name_col, .. } if name_col == "Qty"
        ));
    }

    #[test]
    fn numeric_tags_are_kept_as_text_labels() {
        let tmp = TestDir::new();
        let path_csv = tmp.path().join("openings.csv");
        write_csv(
            &path_csv,
            "Tag,Overall Width in,Overall Height in,Qty\n101,40,60,2\n",
        );

        let l_openings = read_openings_csv(&path_csv).expect("read openings");

        assert_eq!(l_openings[0].tag, "101");
    }
}
