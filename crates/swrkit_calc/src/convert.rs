//! Unit conversion helpers.
//!
//! All conversions are pure; `convert_in_to_mm` / `convert_mm_to_in` form an
//! exact inverse pair at floating-point precision.

use crate::conf::{N_MM_PER_INCH, N_SQIN_PER_SQFT};

/// Convert inches to millimeters.
pub fn convert_in_to_mm(n_in: f64) -> f64 {
    n_in * N_MM_PER_INCH
}

/// Convert millimeters to inches.
pub fn convert_mm_to_in(n_mm: f64) -> f64 {
    n_mm / N_MM_PER_INCH
}

/// Convert square inches to square feet.
pub fn convert_sqin_to_sqft(n_sqin: f64) -> f64 {
    n_sqin / N_SQIN_PER_SQFT
}
