//! Per-opening dimension pipeline.

use crate::conf::derive_system_profile;
use crate::convert::{convert_in_to_mm, convert_mm_to_in, convert_sqin_to_sqft};
use crate::spec::{SpecDerivedOpening, SpecJointClearances, SpecOpening, SpecRunConfig};

/// Compute every derived measurement for one opening.
///
/// Joint clearances are converted to millimeters independently per side
/// before subtraction, so rounding matches per-field conversion. Frame and
/// glass dimensions are not bounds-checked and compute negative when the
/// clearances or offset exceed the overall size; see
/// [`crate::validate::screen_derived`].
pub fn derive_opening(
    opening: &SpecOpening,
    joints: &SpecJointClearances,
    n_glass_offset_in: f64,
) -> SpecDerivedOpening {
    let n_width_overall_mm = convert_in_to_mm(opening.width_overall_in);
    let n_height_overall_mm = convert_in_to_mm(opening.height_overall_in);

    let n_area_unit_ft2 =
        convert_sqin_to_sqft(opening.width_overall_in * opening.height_overall_in);
    let n_area_total_ft2 = n_area_unit_ft2 * f64::from(opening.qty);

    let n_joint_top_mm = convert_in_to_mm(joints.top);
    let n_joint_bottom_mm = convert_in_to_mm(joints.bottom);
    let n_joint_left_mm = convert_in_to_mm(joints.left);
    let n_joint_right_mm = convert_in_to_mm(joints.right);

    let n_width_swr_mm = n_width_overall_mm - n_joint_left_mm - n_joint_right_mm;
    let n_height_swr_mm = n_height_overall_mm - n_joint_top_mm - n_joint_bottom_mm;
    let n_width_swr_in = convert_mm_to_in(n_width_swr_mm);
    let n_height_swr_in = convert_mm_to_in(n_height_swr_mm);

    // The offset is converted once and removed from both edges of each axis.
    let n_glass_offset_mm = convert_in_to_mm(n_glass_offset_in);
    let n_width_glass_mm = n_width_swr_mm - 2.0 * n_glass_offset_mm;
    let n_height_glass_mm = n_height_swr_mm - 2.0 * n_glass_offset_mm;
    let n_width_glass_in = convert_mm_to_in(n_width_glass_mm);
    let n_height_glass_in = convert_mm_to_in(n_height_glass_mm);

    SpecDerivedOpening {
        tag: opening.tag.clone(),
        width_overall_in: opening.width_overall_in,
        height_overall_in: opening.height_overall_in,
        qty: opening.qty,
        width_overall_mm: n_width_overall_mm,
        height_overall_mm: n_height_overall_mm,
        area_unit_ft2: n_area_unit_ft2,
        area_total_ft2: n_area_total_ft2,
        width_swr_mm: n_width_swr_mm,
        height_swr_mm: n_height_swr_mm,
        width_swr_in: n_width_swr_in,
        height_swr_in: n_height_swr_in,
        width_glass_mm: n_width_glass_mm,
        height_glass_mm: n_height_glass_mm,
        width_glass_in: n_width_glass_in,
        height_glass_in: n_height_glass_in,
        qty_doubled: u64::from(opening.qty) * 2,
    }
}

/// Derive the full ordered sequence for one run configuration.
///
/// The system profile is resolved once; row order is preserved.
pub fn derive_openings(
    openings: &[SpecOpening],
    config: &SpecRunConfig,
) -> Vec<SpecDerivedOpening> {
    let profile = derive_system_profile(config.system_type, config.glass_offset_custom_in);
    openings
        .iter()
        .map(|opening| derive_opening(opening, &config.joints, profile.glass_offset_in))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::EnumSystemType;

    const N_EPS: f64 = 1e-9;

    fn joints_reference() -> SpecJointClearances {
        SpecJointClearances {
            top: 0.5,
            bottom: 0.125,
            left: 0.25,
            right: 0.25,
        }
    }

    #[test]
    fn ig_reference_opening_derives_expected_dimensions() {
        let opening = SpecOpening {
            tag: "A".to_string(),
            width_overall_in: 40.0,
            height_overall_in: 60.0,
            qty: 2,
        };

        let derived = derive_opening(&opening, &joints_reference(), 11.1125);

        assert!((derived.width_overall_mm - 1016.0).abs() < N_EPS);
        assert!((derived.height_overall_mm - 1524.0).abs() < N_EPS);
        assert!((derived.width_swr_in - 39.5).abs() < N_EPS);
        assert!((derived.height_swr_in - 59.375).abs() < N_EPS);
        assert!((derived.width_glass_in - 17.275).abs() < N_EPS);
        assert!((derived.height_glass_in - 37.15).abs() < N_EPS);
        assert!((derived.area_unit_ft2 - 2400.0 / 144.0).abs() < N_EPS);
        assert!((derived.area_total_ft2 - 2.0 * 2400.0 / 144.0).abs() < N_EPS);
        assert_eq!(derived.qty_doubled, 4);
    }

    #[test]
    fn oversized_clearances_compute_through_to_negative_dimensions() {
        let opening = SpecOpening {
            tag: "N".to_string(),
            width_overall_in: 10.0,
            height_overall_in: 10.0,
            qty: 1,
        };
        let joints = SpecJointClearances {
            top: 6.0,
            bottom: 6.0,
            left: 0.0,
            right: 0.0,
        };

        let derived = derive_opening(&opening, &joints, 11.1125);

        assert!(derived.height_swr_mm < 0.0);
        assert!(derived.width_glass_mm < 0.0);
    }

    #[test]
    fn derive_openings_resolves_profile_once_and_keeps_order() {
        let config = SpecRunConfig {
            system_type: EnumSystemType::Ig,
            glass_offset_custom_in: None,
            finish: Default::default(),
            glass_cutting_tolerance_in: 0.625,
            joints: joints_reference(),
            project_name: String::new(),
            project_number: String::new(),
        };
        let l_openings = vec![
            SpecOpening {
                tag: "A".to_string(),
                width_overall_in: 40.0,
                height_overall_in: 60.0,
                qty: 2,
            },
            SpecOpening {
                tag: "B".to_string(),
                width_overall_in: 30.0,
                height_overall_in: 50.0,
                qty: 1,
            },
        ];

        let l_derived = derive_openings(&l_openings, &config);

        assert_eq!(l_derived.len(), 2);
        assert_eq!(l_derived[0].tag, "A");
        assert_eq!(l_derived[1].tag, "B");
        assert!((l_derived[1].width_swr_in - 29.5).abs() < N_EPS);
    }
}
