//! `swrkit_io_table` v1:
//! CSV ingest kernel for the openings table.
//!
//! Architecture:
//! - `spec` : error types
//! - `read` : CSV/DataFrame conversion into opening rows

pub mod read;
pub mod spec;

pub use read::{TUP_COLS_REQUIRED, derive_openings_from_dataframe, read_openings_csv};
pub use spec::TableReadError;
