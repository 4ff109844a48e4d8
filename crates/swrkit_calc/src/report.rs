//! Run report model and mutable builder.

use std::collections::BTreeMap;
use std::fmt;

/// Aggregate counters and diagnostics for one report-generation run.
#[derive(Debug, Default, Clone)]
pub struct ReportRun {
    /// Number of opening rows fed through the pipeline.
    pub cnt_openings: u64,
    /// Number of distinct tags observed.
    pub cnt_tags: u64,
    /// Number of finished-length aggregation keys.
    pub cnt_keys_cut: u64,
    /// Number of worksheet writes across all workbooks.
    pub cnt_sheets: u64,
    /// Non-fatal warnings collected during the run.
    pub warnings: Vec<String>,
}

impl ReportRun {
    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_openings".to_string(), self.cnt_openings);
        dict_counts.insert("cnt_tags".to_string(), self.cnt_tags);
        dict_counts.insert("cnt_keys_cut".to_string(), self.cnt_keys_cut);
        dict_counts.insert("cnt_sheets".to_string(), self.cnt_sheets);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} openings={} tags={} cut_keys={} sheets={} warnings={}",
            dict_counts["cnt_openings"],
            dict_counts["cnt_tags"],
            dict_counts["cnt_keys_cut"],
            dict_counts["cnt_sheets"],
            dict_counts["cnt_warnings"]
        )
    }
}

impl fmt::Display for ReportRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[SWR]"))
    }
}

/// Mutable accumulator for run statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportRunBuilder {
    /// See [`ReportRun::cnt_openings`].
    pub cnt_openings: u64,
    /// See [`ReportRun::cnt_tags`].
    pub cnt_tags: u64,
    /// See [`ReportRun::cnt_keys_cut`].
    pub cnt_keys_cut: u64,
    /// See [`ReportRun::cnt_sheets`].
    pub cnt_sheets: u64,
    /// See [`ReportRun::warnings`].
    pub warnings: Vec<String>,
}

impl ReportRunBuilder {
    /// Add warning message.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Increment the written-sheet count by `value`.
    pub fn add_sheets(&mut self, value: u64) {
        self.cnt_sheets += value;
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportRun {
        ReportRun {
            cnt_openings: self.cnt_openings,
            cnt_tags: self.cnt_tags,
            cnt_keys_cut: self.cnt_keys_cut,
            cnt_sheets: self.cnt_sheets,
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReportRun;

    #[test]
    fn report_run_to_dict_and_format_stay_in_sync() {
        let report = ReportRun {
            cnt_openings: 3,
            cnt_tags: 2,
            cnt_keys_cut: 5,
            cnt_sheets: 5,
            warnings: vec!["w".to_string()],
        };

        let dict_counts = report.to_dict();
        assert_eq!(dict_counts["cnt_openings"], 3);
        assert_eq!(dict_counts["cnt_tags"], 2);
        assert_eq!(dict_counts["cnt_keys_cut"], 5);
        assert_eq!(dict_counts["cnt_sheets"], 5);
        assert_eq!(dict_counts["cnt_warnings"], 1);

        let txt = report.format("[SWR]");
        assert_eq!(txt, "[SWR] openings=3 tags=2 cut_keys=5 sheets=5 warnings=1");
        assert_eq!(report.to_string(), txt);
    }
}
