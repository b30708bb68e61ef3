//! Space definition: the spatial reference of a raster scene.

use crate::MapCoord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of projection parameter slots.
pub const NPROJ_PARAM: usize = 15;

/// Largest projection number accepted by setup.
pub const MAX_PROJECTION_CODE: i32 = 99;

/// Spheroid codes used in a space definition.
pub mod spheroid {
    /// Clarke 1866 (NAD27 datum).
    pub const CLARKE_1866: i32 = 0;
    /// GRS 1980 (NAD83 datum).
    pub const GRS80: i32 = 8;
    /// WGS 84.
    pub const WGS84: i32 = 12;
    /// Axes are taken from projection parameter slots 0 and 1.
    pub const FROM_PARAMETERS: i32 = -1;
}

/// GCTP projection numbers.
///
/// The five named projections are the ones the geolocation engine knows
/// how to prepare. Any other number is carried through as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ProjectionCode {
    /// Geographic lat/lon (0)
    Geographic,
    /// Universal Transverse Mercator (1)
    Utm,
    /// Albers Conical Equal Area (3)
    Albers,
    /// Polar Stereographic (6)
    PolarStereographic,
    /// Sinusoidal (16)
    Sinusoidal,
    /// Any other projection number, valid or not
    Other(i32),
}

impl ProjectionCode {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ProjectionCode::Geographic,
            1 => ProjectionCode::Utm,
            3 => ProjectionCode::Albers,
            6 => ProjectionCode::PolarStereographic,
            16 => ProjectionCode::Sinusoidal,
            other => ProjectionCode::Other(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ProjectionCode::Geographic => 0,
            ProjectionCode::Utm => 1,
            ProjectionCode::Albers => 3,
            ProjectionCode::PolarStereographic => 6,
            ProjectionCode::Sinusoidal => 16,
            ProjectionCode::Other(code) => *code,
        }
    }

    /// Whether the number lies in the range a provider could know about.
    pub fn is_in_range(&self) -> bool {
        (0..=MAX_PROJECTION_CODE).contains(&self.code())
    }
}

impl From<i32> for ProjectionCode {
    fn from(code: i32) -> Self {
        ProjectionCode::from_code(code)
    }
}

impl From<ProjectionCode> for i32 {
    fn from(code: ProjectionCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ProjectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionCode::Geographic => write!(f, "GEO"),
            ProjectionCode::Utm => write!(f, "UTM"),
            ProjectionCode::Albers => write!(f, "ALBERS"),
            ProjectionCode::PolarStereographic => write!(f, "PS"),
            ProjectionCode::Sinusoidal => write!(f, "SIN"),
            ProjectionCode::Other(code) => write!(f, "projection {}", code),
        }
    }
}

/// Spatial reference of a raster scene.
///
/// `ul_corner` is the map coordinate of the outer upper-left corner of the
/// upper-left pixel, never its center. Products whose grid origin is the
/// pixel center must be shifted by half a pixel before building this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceDef {
    /// Projection number
    pub projection: ProjectionCode,
    /// Projection parameters, decimal degrees for angular slots
    pub params: [f64; NPROJ_PARAM],
    /// Pixel size (x, y) in map units, both positive
    pub pixel_size: [f64; 2],
    /// Outer UL corner of the UL pixel in map units
    pub ul_corner: MapCoord,
    /// Number of lines in the image
    pub lines: usize,
    /// Number of samples per line
    pub samples: usize,
    /// Zone number for zoned projections (UTM), negative south
    #[serde(default)]
    pub zone: i32,
    /// Spheroid code
    pub spheroid: i32,
    /// Rotation of the pixel grid relative to map north (radians, CCW positive)
    #[serde(default)]
    pub orientation_angle: f64,
}

impl SpaceDef {
    /// North-up space definition on WGS 84 with all parameters zeroed.
    pub fn new(
        projection: ProjectionCode,
        ul_corner: (f64, f64),
        pixel_size: (f64, f64),
        lines: usize,
        samples: usize,
    ) -> Self {
        Self {
            projection,
            params: [0.0; NPROJ_PARAM],
            pixel_size: [pixel_size.0, pixel_size.1],
            ul_corner: MapCoord::new(ul_corner.0, ul_corner.1),
            lines,
            samples,
            zone: 0,
            spheroid: spheroid::WGS84,
            orientation_angle: 0.0,
        }
    }

    pub fn with_zone(mut self, zone: i32) -> Self {
        self.zone = zone;
        self
    }

    pub fn with_spheroid(mut self, spheroid: i32) -> Self {
        self.spheroid = spheroid;
        self
    }

    pub fn with_param(mut self, slot: usize, value: f64) -> Self {
        self.params[slot] = value;
        self
    }

    pub fn with_orientation(mut self, radians: f64) -> Self {
        self.orientation_angle = radians;
        self
    }

    pub fn pixel_size_x(&self) -> f64 {
        self.pixel_size[0]
    }

    pub fn pixel_size_y(&self) -> f64 {
        self.pixel_size[1]
    }
}
