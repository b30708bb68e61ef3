//! Space definitions for representative scenes.
//!
//! Angular parameter slots are in decimal degrees, the way a metadata
//! reader hands them over.

use espa_common::space::spheroid;
use espa_common::{ProjectionCode, SpaceDef};

/// MODIS sphere radius in meters.
pub const MODIS_SPHERE_RADIUS: f64 = 6371007.181;

/// Landsat-style UTM zone 13N scene on WGS 84, 30 m pixels.
pub fn utm_scene() -> SpaceDef {
    SpaceDef::new(
        ProjectionCode::Utm,
        (399_000.0, 4_500_000.0),
        (30.0, 30.0),
        7801,
        7621,
    )
    .with_zone(13)
}

/// The UTM scene rotated by `degrees` counter-clockwise.
pub fn rotated_scene(degrees: f64) -> SpaceDef {
    utm_scene().with_orientation(degrees.to_radians())
}

/// Antarctic polar stereographic scene with the pole inside the footprint.
pub fn polar_scene() -> SpaceDef {
    SpaceDef::new(
        ProjectionCode::PolarStereographic,
        (-300_000.0, 300_000.0),
        (240.0, 240.0),
        2500,
        2500,
    )
    .with_param(4, 0.0)
    .with_param(5, -71.0)
}

/// CONUS Albers tile on GRS 1980.
pub fn albers_scene() -> SpaceDef {
    SpaceDef::new(
        ProjectionCode::Albers,
        (-2_265_585.0, 3_164_805.0),
        (30.0, 30.0),
        5000,
        5000,
    )
    .with_spheroid(spheroid::GRS80)
    .with_param(2, 29.5)
    .with_param(3, 45.5)
    .with_param(4, -96.0)
    .with_param(5, 23.0)
}

/// MODIS h08v05 sinusoidal tile on the MODIS sphere.
pub fn sinusoidal_tile() -> SpaceDef {
    SpaceDef::new(
        ProjectionCode::Sinusoidal,
        (-11_119_505.196667, 4_447_802.078667),
        (463.312716528, 463.312716528),
        2400,
        2400,
    )
    .with_spheroid(spheroid::FROM_PARAMETERS)
    .with_param(0, MODIS_SPHERE_RADIUS)
}

/// A 2x2 geographic scene: UL corner at 100°W 40°N, half-degree pixels.
pub fn affine_2x2() -> SpaceDef {
    SpaceDef::new(ProjectionCode::Geographic, (-100.0, 40.0), (0.5, 0.5), 2, 2)
}

/// A scene for the stub providers, whose map units are radians.
pub fn stub_scene() -> SpaceDef {
    SpaceDef::new(
        ProjectionCode::Geographic,
        ((-100.0f64).to_radians(), 40.0f64.to_radians()),
        (1.0e-4, 1.0e-4),
        100,
        120,
    )
}

/// JSON metadata for a Landsat L1 scene with a CENTER grid origin.
pub const LANDSAT_METADATA_JSON: &str = r#"{
    "projection": {
        "projection": "UTM",
        "datum": "WGS84",
        "units": "meters",
        "grid_origin": "CENTER",
        "ul_corner": [399015.0, 4499985.0],
        "lr_corner": [627615.0, 4265985.0],
        "utm_zone": 13
    },
    "orientation_angle": 0.0,
    "bands": [
        {
            "name": "band1",
            "product": "L1TP",
            "nlines": 7801,
            "nsamps": 7621,
            "pixel_size": [30.0, 30.0]
        },
        {
            "name": "band8",
            "product": "L1TP",
            "nlines": 15601,
            "nsamps": 15241,
            "pixel_size": [15.0, 15.0]
        }
    ]
}"#;

/// JSON metadata for a MODIS sinusoidal tile with no datum.
pub const MODIS_METADATA_JSON: &str = r#"{
    "projection": {
        "projection": "SIN",
        "units": "meters",
        "grid_origin": "UL",
        "ul_corner": [-11119505.196667, 4447802.078667],
        "sin_params": {
            "sphere_radius": 6371007.181,
            "central_meridian": 0.0,
            "false_easting": 0.0,
            "false_northing": 0.0
        }
    },
    "bands": [
        {
            "name": "sur_refl_b01",
            "product": "MOD09GA",
            "nlines": 2400,
            "nsamps": 2400,
            "pixel_size": [463.312716528, 463.312716528]
        }
    ]
}"#;
