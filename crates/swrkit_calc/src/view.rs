//! Report-row builders.
//!
//! Four pure, presentation-independent transforms from the derived opening
//! sequence (and the cut aggregation) into the report table shapes. All four
//! share [`SpecReportTable`] so the writer needs exactly one code path.

use crate::aggregate::derive_tag_order;
use crate::conf::{TUP_CUT_POSITIONS, TXT_MITER_MARKER};
use crate::convert::convert_sqin_to_sqft;
use crate::spec::{
    EnumCellValue, EnumColumnKind, SpecCutAggregation, SpecDerivedOpening, SpecReportColumn,
    SpecReportTable, SpecSystemProfile, SpecTagDetailSheet,
};

fn column(name: &str, kind: EnumColumnKind) -> SpecReportColumn {
    SpecReportColumn {
        name: name.to_string(),
        kind,
    }
}

/// Glass order view: one row per opening plus a trailing totals row.
///
/// The per-unit area is recomputed from the glass dimensions, not carried
/// over from the overall-dimension area.
pub fn build_view_glass(openings: &[SpecDerivedOpening]) -> SpecReportTable {
    let columns = vec![
        column("Item", EnumColumnKind::Integer),
        column("Glass Width in", EnumColumnKind::Decimal),
        column("Glass Height in", EnumColumnKind::Decimal),
        column("Area Each (ft²)", EnumColumnKind::Decimal),
        column("Qty", EnumColumnKind::Integer),
        column("Area Total (ft²)", EnumColumnKind::Decimal),
    ];

    let mut l_rows: Vec<Vec<EnumCellValue>> = Vec::with_capacity(openings.len() + 1);
    let mut n_qty_sum: u64 = 0;
    let mut n_area_total_sum = 0.0;
    for (n_idx, opening) in openings.iter().enumerate() {
        let n_area_each_ft2 =
            convert_sqin_to_sqft(opening.width_glass_in * opening.height_glass_in);
        let n_area_total_ft2 = n_area_each_ft2 * f64::from(opening.qty);
        n_qty_sum += u64::from(opening.qty);
        n_area_total_sum += n_area_total_ft2;

        l_rows.push(vec![
            EnumCellValue::Number((n_idx + 1) as f64),
            EnumCellValue::Number(opening.width_glass_in),
            EnumCellValue::Number(opening.height_glass_in),
            EnumCellValue::Number(n_area_each_ft2),
            EnumCellValue::Number(f64::from(opening.qty)),
            EnumCellValue::Number(n_area_total_ft2),
        ]);
    }

    l_rows.push(vec![
        EnumCellValue::String("Totals".to_string()),
        EnumCellValue::None,
        EnumCellValue::None,
        EnumCellValue::None,
        EnumCellValue::Number(n_qty_sum as f64),
        EnumCellValue::Number(n_area_total_sum),
    ]);

    SpecReportTable {
        columns,
        rows: l_rows,
    }
}

/// Aggregated cut view: the cross tabulation with the part number and miter
/// marker constant columns prepended to every row.
pub fn build_view_agg_cut(
    aggregation: &SpecCutAggregation,
    profile: &SpecSystemProfile,
) -> SpecReportTable {
    let mut columns = vec![
        column("Finished Length in", EnumColumnKind::Decimal),
        column("Part #", EnumColumnKind::Text),
        column("Miter", EnumColumnKind::Text),
    ];
    for tag in &aggregation.tags {
        columns.push(column(tag, EnumColumnKind::Integer));
    }
    columns.push(column("Total QTY", EnumColumnKind::Integer));

    let txt_part_number = profile.part_number();
    let l_rows: Vec<Vec<EnumCellValue>> = aggregation
        .rows
        .iter()
        .map(|row| {
            let mut l_cells = vec![
                EnumCellValue::Number(row.length_finished_in),
                EnumCellValue::String(txt_part_number.clone()),
                EnumCellValue::String(TXT_MITER_MARKER.to_string()),
            ];
            for n_count in &row.counts_by_tag {
                l_cells.push(EnumCellValue::Number(*n_count as f64));
            }
            l_cells.push(EnumCellValue::Number(row.total_qty as f64));
            l_cells
        })
        .collect();

    SpecReportTable {
        columns,
        rows: l_rows,
    }
}

/// Column set shared by every tag detail sheet.
pub fn derive_tag_detail_columns() -> Vec<SpecReportColumn> {
    vec![
        column("Item", EnumColumnKind::Integer),
        column("Position", EnumColumnKind::Text),
        column("Quantity", EnumColumnKind::Integer),
        column("Length (mm)", EnumColumnKind::Decimal),
        column("Length (inch)", EnumColumnKind::Decimal),
    ]
}

/// Per-tag cut detail sheets: four position rows per opening, quantities
/// doubled, item index 1-based in original input order.
pub fn build_view_tag_details(openings: &[SpecDerivedOpening]) -> Vec<SpecTagDetailSheet> {
    derive_tag_order(openings)
        .into_iter()
        .map(|tag| {
            let mut l_rows: Vec<Vec<EnumCellValue>> = Vec::new();
            for (n_idx_item, opening) in openings
                .iter()
                .enumerate()
                .filter(|(_, opening)| opening.tag == tag)
            {
                for (n_idx_pos, txt_position) in TUP_CUT_POSITIONS.iter().enumerate() {
                    let (n_len_mm, n_len_in) = if n_idx_pos < 2 {
                        (opening.width_swr_mm, opening.width_swr_in)
                    } else {
                        (opening.height_swr_mm, opening.height_swr_in)
                    };
                    l_rows.push(vec![
                        EnumCellValue::Number((n_idx_item + 1) as f64),
                        EnumCellValue::String((*txt_position).to_string()),
                        EnumCellValue::Number(opening.qty_doubled as f64),
                        EnumCellValue::Number(n_len_mm),
                        EnumCellValue::Number(n_len_in),
                    ]);
                }
            }
            SpecTagDetailSheet {
                tag,
                table: SpecReportTable {
                    columns: derive_tag_detail_columns(),
                    rows: l_rows,
                },
            }
        })
        .collect()
}

/// Full working table view: passthrough of every computed field in creation
/// order, for audit.
pub fn build_view_full_table(openings: &[SpecDerivedOpening]) -> SpecReportTable {
    let columns = vec![
        column("Tag", EnumColumnKind::Text),
        column("Overall Width in", EnumColumnKind::Decimal),
        column("Overall Height in", EnumColumnKind::Decimal),
        column("Qty", EnumColumnKind::Integer),
        column("Overall Width mm", EnumColumnKind::Decimal),
        column("Overall Height mm", EnumColumnKind::Decimal),
        column("Unit Area ft²", EnumColumnKind::Decimal),
        column("Total Area ft²", EnumColumnKind::Decimal),
        column("SWR Width mm", EnumColumnKind::Decimal),
        column("SWR Height mm", EnumColumnKind::Decimal),
        column("SWR Width in", EnumColumnKind::Decimal),
        column("SWR Height in", EnumColumnKind::Decimal),
        column("Glass Width mm", EnumColumnKind::Decimal),
        column("Glass Height mm", EnumColumnKind::Decimal),
        column("Glass Width in", EnumColumnKind::Decimal),
        column("Glass Height in", EnumColumnKind::Decimal),
        column("Qty x 2", EnumColumnKind::Integer),
    ];

    let l_rows: Vec<Vec<EnumCellValue>> = openings
        .iter()
        .map(|opening| {
            vec![
                EnumCellValue::String(opening.tag.clone()),
                EnumCellValue::Number(opening.width_overall_in),
                EnumCellValue::Number(opening.height_overall_in),
                EnumCellValue::Number(f64::from(opening.qty)),
                EnumCellValue::Number(opening.width_overall_mm),
                EnumCellValue::Number(opening.height_overall_mm),
                EnumCellValue::Number(opening.area_unit_ft2),
                EnumCellValue::Number(opening.area_total_ft2),
                EnumCellValue::Number(opening.width_swr_mm),
                EnumCellValue::Number(opening.height_swr_mm),
                EnumCellValue::Number(opening.width_swr_in),
                EnumCellValue::Number(opening.height_swr_in),
                EnumCellValue::Number(opening.width_glass_mm),
                EnumCellValue::Number(opening.height_glass_mm),
                EnumCellValue::Number(opening.width_glass_in),
                EnumCellValue::Number(opening.height_glass_in),
                EnumCellValue::Number(opening.qty_doubled as f64),
            ]
        })
        .collect();

    SpecReportTable {
        columns,
        rows: l_rows,
    }
}
