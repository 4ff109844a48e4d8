//! Stateless helpers for the workbook writer.

use swrkit_calc::spec::{EnumCellValue, EnumColumnKind};

use crate::conf::{N_LEN_EXCEL_SHEET_NAME_MAX, TUP_EXCEL_ILLEGAL};

/// Replace illegal sheet-name characters and clamp to the Excel length
/// limit. An empty result falls back to `Sheet1`.
pub fn sanitize_sheet_name(name: &str, replacement: &str) -> String {
    let mut txt_name = name.to_string();
    for txt_illegal in TUP_EXCEL_ILLEGAL {
        txt_name = txt_name.replace(txt_illegal, replacement);
    }
    let txt_name: String = txt_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect();
    if txt_name.is_empty() {
        "Sheet1".to_string()
    } else {
        txt_name
    }
}

/// Estimate displayed width units for one cell value under its column role.
pub fn estimate_width_len(value: &EnumCellValue, kind: EnumColumnKind) -> usize {
    match value {
        EnumCellValue::None => 0,
        EnumCellValue::String(s) => s.chars().count(),
        EnumCellValue::Number(n) => match kind {
            EnumColumnKind::Integer => (*n as i64).to_string().len(),
            EnumColumnKind::Decimal => format!("{n:.3}").len(),
            EnumColumnKind::Text => n.to_string().len(),
        },
    }
}

/// Cast to the writer's row index type.
pub fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

/// Cast to the writer's column index type.
pub fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_illegal_characters_and_clamps_length() {
        assert_eq!(sanitize_sheet_name("A/B:C", "_"), "A_B_C");
        assert_eq!(sanitize_sheet_name("plain", "_"), "plain");
        assert_eq!(sanitize_sheet_name("", "_"), "Sheet1");

        let txt_long = "x".repeat(64);
        assert_eq!(sanitize_sheet_name(&txt_long, "_").chars().count(), 31);
    }

    #[test]
    fn width_estimate_follows_column_role() {
        assert_eq!(
            estimate_width_len(&EnumCellValue::String("Totals".to_string()), EnumColumnKind::Text),
            6
        );
        assert_eq!(
            estimate_width_len(&EnumCellValue::Number(39.5), EnumColumnKind::Decimal),
            "39.500".len()
        );
        assert_eq!(
            estimate_width_len(&EnumCellValue::Number(4.0), EnumColumnKind::Integer),
            1
        );
        assert_eq!(estimate_width_len(&EnumCellValue::None, EnumColumnKind::Text), 0);
    }
}
