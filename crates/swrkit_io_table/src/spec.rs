//! Table ingest error types.

use std::fmt;
use std::path::PathBuf;

/// Errors raised while reading the openings table.
#[derive(Debug)]
pub enum TableReadError {
    /// CSV open/parse failure.
    Read {
        /// Input file that failed to read.
        path: PathBuf,
        /// Underlying reader error text.
        message: String,
    },
    /// A required column is absent from the input.
    MissingColumn {
        /// Header name of the missing column.
        name_col: String,
    },
    /// A cell could not be converted to the required type.
    InvalidCell {
        /// Zero-based data row index.
        n_idx_row: usize,
        /// Header name of the offending column.
        name_col: String,
        /// User-facing description.
        message: String,
    },
}

impl fmt::Display for TableReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, message } => {
                write!(
                    f,
                    "Failed to read openings table {}: {message}",
                    path.display()
                )
            }
            Self::MissingColumn { name_col } => {
                write!(f, "Required column `{name_col}` is missing from the input table.")
            }
            Self::InvalidCell {
                n_idx_row,
                name_col,
                message,
            } => {
                write!(
                    f,
                    "Invalid value in column `{name_col}`, row {}: {message}",
                    n_idx_row + 1
                )
            }
        }
    }
}

impl std::error::Error for TableReadError {}
