//! Building a [`SpaceDef`] from product metadata.
//!
//! Product metadata describes the grid the way the producer wrote it: the
//! corner may be a pixel center, angles are in degrees, and the datum is a
//! name. This module normalizes all of that into a space definition.

use std::path::Path;

use espa_common::space::spheroid;
use espa_common::{GeolocError, GeolocResult, MapCoord, ProjectionCode, SpaceDef, NPROJ_PARAM};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Projection section of the product metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInfo {
    /// "GEO", "UTM", "PS", "ALBERS" or "SIN"
    pub projection: String,
    /// "WGS84", "NAD27", "NAD83", or absent for a sphere
    #[serde(default)]
    pub datum: Option<String>,
    /// "UL" or "CENTER"
    pub grid_origin: String,
    /// (x, y) of the upper-left pixel, corner or center per `grid_origin`
    pub ul_corner: [f64; 2],
    #[serde(default)]
    pub utm_zone: Option<i32>,
    #[serde(default)]
    pub ps_params: Option<PolarParams>,
    #[serde(default)]
    pub albers_params: Option<AlbersParams>,
    #[serde(default)]
    pub sin_params: Option<SinusoidalParams>,
}

/// Polar stereographic parameters, angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarParams {
    pub longitude_pole: f64,
    pub latitude_true_scale: f64,
    #[serde(default)]
    pub false_easting: f64,
    #[serde(default)]
    pub false_northing: f64,
}

/// Albers equal-area conic parameters, angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbersParams {
    pub standard_parallel1: f64,
    pub standard_parallel2: f64,
    pub central_meridian: f64,
    pub origin_latitude: f64,
    #[serde(default)]
    pub false_easting: f64,
    #[serde(default)]
    pub false_northing: f64,
}

/// Sinusoidal parameters, angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinusoidalParams {
    pub sphere_radius: f64,
    pub central_meridian: f64,
    #[serde(default)]
    pub false_easting: f64,
    #[serde(default)]
    pub false_northing: f64,
}

/// Per-band grid description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandInfo {
    pub name: String,
    pub product: String,
    pub nlines: usize,
    pub nsamps: usize,
    /// (x, y) pixel size in map units
    pub pixel_size: [f64; 2],
}

/// The metadata a space definition is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeolocMetadata {
    pub projection: ProjectionInfo,
    /// Grid rotation in degrees, counter-clockwise positive
    #[serde(default)]
    pub orientation_angle: f64,
    pub bands: Vec<BandInfo>,
}

impl GeolocMetadata {
    pub fn from_json(json: &str) -> GeolocResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> GeolocResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// The band whose grid defines the scene: `band1` of a Level-1 product,
    /// or the only band when there is just one.
    pub fn reference_band(&self) -> GeolocResult<&BandInfo> {
        if let Some(band) = self
            .bands
            .iter()
            .find(|b| b.name == "band1" && b.product.starts_with("L1"))
        {
            return Ok(band);
        }
        match self.bands.as_slice() {
            [only] => Ok(only),
            _ => Err(GeolocError::validation(
                "band1 not found in the metadata bands",
            )),
        }
    }

    /// Build the space definition for this product.
    pub fn space_def(&self) -> GeolocResult<SpaceDef> {
        let band = self.reference_band()?;
        let proj = &self.projection;
        let [px, py] = band.pixel_size;

        let ul = match proj.grid_origin.as_str() {
            "UL" => MapCoord::new(proj.ul_corner[0], proj.ul_corner[1]),
            "CENTER" => MapCoord::new(proj.ul_corner[0] - 0.5 * px, proj.ul_corner[1] + 0.5 * py),
            other => {
                return Err(GeolocError::validation(format!(
                    "unsupported grid origin: {}",
                    other
                )))
            }
        };

        let (code, zone, params) = projection_params(proj)?;
        let spheroid = spheroid_code(proj.datum.as_deref(), code)?;

        debug!(
            band = %band.name,
            projection = %code,
            zone,
            spheroid,
            grid_origin = %proj.grid_origin,
            "space definition from metadata"
        );

        Ok(SpaceDef {
            projection: code,
            params,
            pixel_size: [px, py],
            ul_corner: ul,
            lines: band.nlines,
            samples: band.nsamps,
            zone,
            spheroid,
            orientation_angle: self.orientation_angle.to_radians(),
        })
    }
}

fn projection_params(
    proj: &ProjectionInfo,
) -> GeolocResult<(ProjectionCode, i32, [f64; NPROJ_PARAM])> {
    let mut params = [0.0; NPROJ_PARAM];

    let result = match proj.projection.as_str() {
        "GEO" => (ProjectionCode::Geographic, 0, params),
        "UTM" => {
            let zone = proj
                .utm_zone
                .ok_or_else(|| GeolocError::validation("UTM projection without a zone"))?;
            (ProjectionCode::Utm, zone, params)
        }
        "PS" => {
            let ps = proj
                .ps_params
                .as_ref()
                .ok_or_else(|| GeolocError::validation("PS projection without parameters"))?;
            params[4] = ps.longitude_pole;
            params[5] = ps.latitude_true_scale;
            params[6] = ps.false_easting;
            params[7] = ps.false_northing;
            (ProjectionCode::PolarStereographic, 0, params)
        }
        "ALBERS" => {
            let albers = proj
                .albers_params
                .as_ref()
                .ok_or_else(|| GeolocError::validation("ALBERS projection without parameters"))?;
            params[2] = albers.standard_parallel1;
            params[3] = albers.standard_parallel2;
            params[4] = albers.central_meridian;
            params[5] = albers.origin_latitude;
            params[6] = albers.false_easting;
            params[7] = albers.false_northing;
            (ProjectionCode::Albers, 0, params)
        }
        "SIN" => {
            let sin = proj
                .sin_params
                .as_ref()
                .ok_or_else(|| GeolocError::validation("SIN projection without parameters"))?;
            params[0] = sin.sphere_radius;
            params[4] = sin.central_meridian;
            params[6] = sin.false_easting;
            params[7] = sin.false_northing;
            (ProjectionCode::Sinusoidal, 0, params)
        }
        other => {
            return Err(GeolocError::validation(format!(
                "unsupported projection type: {}",
                other
            )))
        }
    };
    Ok(result)
}

fn spheroid_code(datum: Option<&str>, code: ProjectionCode) -> GeolocResult<i32> {
    match datum {
        Some("WGS84") => Ok(spheroid::WGS84),
        Some("NAD27") => Ok(spheroid::CLARKE_1866),
        Some("NAD83") => Ok(spheroid::GRS80),
        None if code == ProjectionCode::Sinusoidal => Ok(spheroid::FROM_PARAMETERS),
        None => Err(GeolocError::validation(format!(
            "{} projection requires a datum",
            code
        ))),
        Some(other) => Err(GeolocError::validation(format!(
            "unsupported datum: {}",
            other
        ))),
    }
}
