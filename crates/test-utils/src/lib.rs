//! Shared test utilities for the espa-geoloc workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Approximate-equality assertion macros
//! - Space definition fixtures for representative scenes
//! - Stub projection providers (identity, call-counting, failing)
//! - Test data path helpers
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod paths;
pub mod stubs;

pub use fixtures::*;
pub use paths::*;
pub use stubs::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of coordinate pairs.
///
/// ```ignore
/// use test_utils::assert_coords_approx_eq;
///
/// assert_coords_approx_eq!((1.0001, 2.0001), (1.0, 2.0), 0.001);
/// ```
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($x1:expr, $y1:expr), ($x2:expr, $y2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($x1, $x2, $epsilon);
        $crate::assert_approx_eq!($y1, $y2, $epsilon);
    }};
}

/// Approximate equality of two geodetic coordinates, compared in degrees.
#[macro_export]
macro_rules! assert_geo_approx_eq {
    ($left:expr, $right:expr, $epsilon_deg:expr) => {{
        let (l_lon, l_lat) = $left.to_degrees();
        let (r_lon, r_lat) = $right.to_degrees();
        $crate::assert_coords_approx_eq!((l_lon, l_lat), (r_lon, r_lat), $epsilon_deg);
    }};
}
