//! `swrkit_calc` v1:
//! Pure calculation kernel for SWR cutlist generation.
//!
//! Architecture:
//! - `conf`      : constants and system-type presets
//! - `spec`      : models/options/issues
//! - `convert`   : unit conversion helpers
//! - `derive`    : per-opening dimension pipeline
//! - `aggregate` : finished-length cut aggregation
//! - `view`      : report-row builders
//! - `validate`  : optional input/result screening
//! - `report`    : run report model

pub mod aggregate;
pub mod conf;
pub mod convert;
pub mod derive;
pub mod report;
pub mod spec;
pub mod validate;
pub mod view;

pub use aggregate::{aggregate_cuts, derive_finished_length_keys, derive_tag_order};
pub use conf::derive_system_profile;
pub use convert::{convert_in_to_mm, convert_mm_to_in, convert_sqin_to_sqft};
pub use derive::{derive_opening, derive_openings};
pub use report::{ReportRun, ReportRunBuilder};
pub use spec::{
    EnumCellValue, EnumColumnKind, EnumFinish, EnumIssueSeverity, EnumSystemType,
    SpecCutAggregation, SpecCutAggregationRow, SpecDerivedOpening, SpecJointClearances,
    SpecOpening, SpecReportColumn, SpecReportTable, SpecRunConfig, SpecSystemProfile,
    SpecTagDetailSheet, SpecValidationIssue,
};
pub use validate::{screen_derived, screen_openings};
pub use view::{
    build_view_agg_cut, build_view_full_table, build_view_glass, build_view_tag_details,
    derive_tag_detail_columns,
};
