//! Cutlist constants and system-type presets.

use crate::spec::{EnumSystemType, SpecSystemProfile};

/// Millimeters per inch.
pub const N_MM_PER_INCH: f64 = 25.4;
/// Square inches per square foot.
pub const N_SQIN_PER_SQFT: f64 = 144.0;

/// Miter indicator written to every aggregated cut row.
pub const TXT_MITER_MARKER: &str = "**";
/// Cut positions emitted per opening in the tag detail view. The first two
/// carry the frame width, the last two the frame height.
pub const TUP_CUT_POSITIONS: [&str; 4] = ["left", "right", "top", "bottom"];

/// Default glass cutting tolerance in inches (carried, never consumed).
pub const N_GLASS_CUTTING_TOLERANCE_IN_DEFAULT: f64 = 0.625;
/// Default top joint clearance in inches.
pub const N_JOINT_TOP_IN_DEFAULT: f64 = 0.5;
/// Default bottom joint clearance in inches.
pub const N_JOINT_BOTTOM_IN_DEFAULT: f64 = 0.125;
/// Default left joint clearance in inches.
pub const N_JOINT_LEFT_IN_DEFAULT: f64 = 0.25;
/// Default right joint clearance in inches.
pub const N_JOINT_RIGHT_IN_DEFAULT: f64 = 0.25;

/// Glass offset preset shared by the IG and VIG systems, in inches.
pub const N_GLASS_OFFSET_IN_IG: f64 = 11.1125;
/// Glass offset preset for the plain SWR system, in inches.
pub const N_GLASS_OFFSET_IN_PLAIN: f64 = 7.571;

/// Extrusion profile number for the IG system.
pub const TXT_PROFILE_IG: &str = "03003";
/// Extrusion profile number for the VIG system.
pub const TXT_PROFILE_VIG: &str = "03004";
/// Extrusion profile number for the plain SWR system.
pub const TXT_PROFILE_PLAIN: &str = "03002";

/// Resolve a system-type selection into its fixed glass offset and profile
/// number, or accept the user-entered offset for `Custom`.
///
/// An unresolved custom offset defaults to 0.0; there are no error
/// conditions.
pub fn derive_system_profile(
    system_type: EnumSystemType,
    glass_offset_custom_in: Option<f64>,
) -> SpecSystemProfile {
    match system_type {
        EnumSystemType::Ig => SpecSystemProfile {
            system_type,
            glass_offset_in: N_GLASS_OFFSET_IN_IG,
            profile_number: Some(TXT_PROFILE_IG.to_string()),
        },
        EnumSystemType::Vig => SpecSystemProfile {
            system_type,
            glass_offset_in: N_GLASS_OFFSET_IN_IG,
            profile_number: Some(TXT_PROFILE_VIG.to_string()),
        },
        EnumSystemType::Plain => SpecSystemProfile {
            system_type,
            glass_offset_in: N_GLASS_OFFSET_IN_PLAIN,
            profile_number: Some(TXT_PROFILE_PLAIN.to_string()),
        },
        EnumSystemType::Custom => SpecSystemProfile {
            system_type,
            glass_offset_in: glass_offset_custom_in.unwrap_or(0.0),
            profile_number: None,
        },
    }
}
