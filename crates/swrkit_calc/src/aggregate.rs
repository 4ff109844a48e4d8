//! Finished-length cut aggregation.

use std::cmp::Ordering;

use crate::spec::{SpecCutAggregation, SpecCutAggregationRow, SpecDerivedOpening};

/// Distinct tags in first-appearance order.
///
/// The result fixes the column layout of the aggregation before any counting
/// starts; columns never grow mid-computation.
pub fn derive_tag_order(openings: &[SpecDerivedOpening]) -> Vec<String> {
    let mut l_tags: Vec<String> = Vec::new();
    for opening in openings {
        if !l_tags.iter().any(|tag| *tag == opening.tag) {
            l_tags.push(opening.tag.clone());
        }
    }
    l_tags
}

/// Group one axis's finished lengths, summing raw quantities, and order the
/// keys by descending total quantity with ascending-length tie order.
fn derive_axis_key_order(l_pairs_len_qty: &[(f64, u32)]) -> Vec<f64> {
    let mut l_keys: Vec<f64> = Vec::new();
    let mut l_totals: Vec<u64> = Vec::new();
    for (n_len, n_qty) in l_pairs_len_qty {
        match l_keys.iter().position(|key| key == n_len) {
            Some(n_idx) => l_totals[n_idx] += u64::from(*n_qty),
            None => {
                l_keys.push(*n_len);
                l_totals.push(u64::from(*n_qty));
            }
        }
    }

    let mut l_grouped: Vec<(f64, u64)> = l_keys.into_iter().zip(l_totals).collect();
    l_grouped.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    // Stable, so equal totals keep the ascending-length order set above.
    l_grouped.sort_by(|a, b| b.1.cmp(&a.1));
    l_grouped.into_iter().map(|(n_len, _)| n_len).collect()
}

/// Canonical finished-length key list: the union of distinct frame widths
/// and frame heights, width keys first, de-duplicated preserving first-seen
/// order.
pub fn derive_finished_length_keys(openings: &[SpecDerivedOpening]) -> Vec<f64> {
    let l_pairs_width: Vec<(f64, u32)> = openings
        .iter()
        .map(|opening| (opening.width_swr_in, opening.qty))
        .collect();
    let l_pairs_height: Vec<(f64, u32)> = openings
        .iter()
        .map(|opening| (opening.height_swr_in, opening.qty))
        .collect();

    let mut l_keys_finished: Vec<f64> = Vec::new();
    for n_key in derive_axis_key_order(&l_pairs_width)
        .into_iter()
        .chain(derive_axis_key_order(&l_pairs_height))
    {
        if !l_keys_finished.iter().any(|key| *key == n_key) {
            l_keys_finished.push(n_key);
        }
    }
    l_keys_finished
}

/// Cross-tabulate doubled cut quantities by finished length and tag.
///
/// Each opening contributes `2 * qty` to the key matching its frame width
/// and, independently, to the key matching its frame height; a square
/// opening accumulates both contributions into the same key. Key equality is
/// exact: frame dimensions merge into one row only when bit-identical.
pub fn aggregate_cuts(openings: &[SpecDerivedOpening]) -> SpecCutAggregation {
    let l_tags = derive_tag_order(openings);
    let l_keys = derive_finished_length_keys(openings);

    let mut l_rows: Vec<SpecCutAggregationRow> = l_keys
        .iter()
        .map(|n_key| SpecCutAggregationRow {
            length_finished_in: *n_key,
            counts_by_tag: vec![0; l_tags.len()],
            total_qty: 0,
        })
        .collect();

    for opening in openings {
        let Some(n_idx_tag) = l_tags.iter().position(|tag| *tag == opening.tag) else {
            continue;
        };
        for n_len_axis in [opening.width_swr_in, opening.height_swr_in] {
            if let Some(row) = l_rows
                .iter_mut()
                .find(|row| row.length_finished_in == n_len_axis)
            {
                row.counts_by_tag[n_idx_tag] += opening.qty_doubled;
            }
        }
    }

    for row in &mut l_rows {
        row.total_qty = row.counts_by_tag.iter().sum();
    }

    SpecCutAggregation {
        tags: l_tags,
        rows: l_rows,
    }
}
