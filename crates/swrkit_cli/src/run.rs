//! End-to-end run orchestration: ingest, screen, derive, aggregate, render.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{info, warn};

use swrkit_calc::aggregate::aggregate_cuts;
use swrkit_calc::conf::derive_system_profile;
use swrkit_calc::derive::derive_openings;
use swrkit_calc::report::{ReportRun, ReportRunBuilder};
use swrkit_calc::spec::{
    EnumIssueSeverity, SpecReportTable, SpecValidationIssue,
};
use swrkit_calc::validate::{screen_derived, screen_openings};
use swrkit_calc::view::{
    build_view_agg_cut, build_view_full_table, build_view_glass, build_view_tag_details,
    derive_tag_detail_columns,
};
use swrkit_io_table::read::read_openings_csv;
use swrkit_io_table::spec::TableReadError;
use swrkit_io_xlsx::conf::FMT_STAMP_CREATED_AT;
use swrkit_io_xlsx::spec::{SpecSheetWriteOptions, SpecWorkbookStamp};
use swrkit_io_xlsx::writer::ReportWorkbook;

use crate::cli::CliArgs;
use crate::config::{ConfigError, load_run_config};

/// Glass order workbook file name.
pub const FILE_GLASS: &str = "Glass.xlsx";
/// Aggregated cut workbook file name.
pub const FILE_AGG_CUT: &str = "AggCutOnly.xlsx";
/// Per-tag detail workbook file name.
pub const FILE_TAG_DETAILS: &str = "TagDetails.xlsx";
/// Full working table workbook file name.
pub const FILE_SWR_TABLE: &str = "SWR_table.xlsx";

/// Top-level run failure.
#[derive(Debug)]
pub enum RunError {
    /// Configuration could not be loaded.
    Config(ConfigError),
    /// Openings table could not be read.
    Table(TableReadError),
    /// Input (or, under `--strict`, the computed result) failed screening.
    Screen(Vec<SpecValidationIssue>),
    /// Output directory initialization failed.
    OutDirInit {
        /// Directory that failed initialization.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// A workbook could not be written.
    Write {
        /// Workbook file name.
        file: String,
        /// Writer error text.
        message: String,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Table(err) => write!(f, "{err}"),
            Self::Screen(l_issues) => {
                write!(f, "Input rejected by the validation screen:")?;
                for issue in l_issues {
                    write!(f, "\n  {issue}")?;
                }
                Ok(())
            }
            Self::OutDirInit { path, message } => {
                write!(
                    f,
                    "Failed to initialize output directory {}: {message}",
                    path.display()
                )
            }
            Self::Write { file, message } => {
                write!(f, "Failed to write {file}: {message}")
            }
        }
    }
}

impl std::error::Error for RunError {}

impl From<ConfigError> for RunError {
    fn from(value: ConfigError) -> Self {
        RunError::Config(value)
    }
}

impl From<TableReadError> for RunError {
    fn from(value: TableReadError) -> Self {
        RunError::Table(value)
    }
}

fn write_workbook(
    path_dir_out: &Path,
    name_file: &str,
    l_sheets: &[(String, SpecReportTable)],
    stamp: &SpecWorkbookStamp,
    options: &SpecSheetWriteOptions,
) -> Result<u64, RunError> {
    let mut workbook = ReportWorkbook::with_default_formats(path_dir_out.join(name_file));
    for (name_sheet, table) in l_sheets {
        workbook
            .write_report_sheet(name_sheet, stamp, table, options)
            .map_err(|message| RunError::Write {
                file: name_file.to_string(),
                message,
            })?;
    }
    workbook.close().map_err(|message| RunError::Write {
        file: name_file.to_string(),
        message,
    })?;
    info!("Wrote {}", workbook.file_out());
    Ok(l_sheets.len() as u64)
}

/// Run the full pipeline for one job.
pub fn run(args: &CliArgs) -> Result<ReportRun, RunError> {
    let config = load_run_config(&args.config)?;
    let profile = derive_system_profile(config.system_type, config.glass_offset_custom_in);
    info!(
        "Using a glass offset of {} in for system type {} (part number {}, tolerance {} in)",
        profile.glass_offset_in,
        config.system_type.label(),
        profile.part_number(),
        config.glass_cutting_tolerance_in
    );

    let l_openings = read_openings_csv(&args.input)?;
    info!(
        "Read {} opening rows from {}",
        l_openings.len(),
        args.input.display()
    );

    let l_issues_input = screen_openings(&l_openings);
    let l_errors: Vec<SpecValidationIssue> = l_issues_input
        .iter()
        .filter(|issue| issue.severity == EnumIssueSeverity::Error)
        .cloned()
        .collect();
    if !l_errors.is_empty() {
        return Err(RunError::Screen(l_errors));
    }

    let mut builder_report = ReportRunBuilder::default();

    let l_derived = derive_openings(&l_openings, &config);
    let l_issues_derived = screen_derived(&l_derived);
    for issue in &l_issues_derived {
        warn!("{issue}");
        builder_report.add_warning(issue.to_string());
    }
    if args.strict && !l_issues_derived.is_empty() {
        return Err(RunError::Screen(l_issues_derived));
    }

    let aggregation = aggregate_cuts(&l_derived);

    fs::create_dir_all(&args.out_dir).map_err(|err| RunError::OutDirInit {
        path: args.out_dir.clone(),
        message: err.to_string(),
    })?;

    let stamp = SpecWorkbookStamp {
        project_name: config.project_name.clone(),
        project_number: config.project_number.clone(),
        created_at: Local::now().format(FMT_STAMP_CREATED_AT).to_string(),
    };
    let options = SpecSheetWriteOptions::default();

    let mut n_sheets: u64 = 0;
    n_sheets += write_workbook(
        &args.out_dir,
        FILE_GLASS,
        &[("Sheet1".to_string(), build_view_glass(&l_derived))],
        &stamp,
        &options,
    )?;
    n_sheets += write_workbook(
        &args.out_dir,
        FILE_AGG_CUT,
        &[(
            "Sheet1".to_string(),
            build_view_agg_cut(&aggregation, &profile),
        )],
        &stamp,
        &options,
    )?;

    // One sheet per tag; an empty input still produces a well-formed
    // header-only workbook.
    let mut l_sheets_tag: Vec<(String, SpecReportTable)> = build_view_tag_details(&l_derived)
        .into_iter()
        .map(|sheet| (sheet.tag, sheet.table))
        .collect();
    if l_sheets_tag.is_empty() {
        l_sheets_tag.push((
            "Sheet1".to_string(),
            SpecReportTable {
                columns: derive_tag_detail_columns(),
                rows: vec![],
            },
        ));
    }
    n_sheets += write_workbook(&args.out_dir, FILE_TAG_DETAILS, &l_sheets_tag, &stamp, &options)?;

    n_sheets += write_workbook(
        &args.out_dir,
        FILE_SWR_TABLE,
        &[("Sheet1".to_string(), build_view_full_table(&l_derived))],
        &stamp,
        &options,
    )?;

    builder_report.cnt_openings = l_derived.len() as u64;
    builder_report.cnt_tags = aggregation.tags.len() as u64;
    builder_report.cnt_keys_cut = aggregation.rows.len() as u64;
    builder_report.add_sheets(n_sheets);
    let report = builder_report.build();
    info!("{report}");
    Ok(report)
}
