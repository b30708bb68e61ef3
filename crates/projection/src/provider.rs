//! Projection provider: turns a projection request into bound transforms.
//!
//! A geolocation context never calls projection math directly. It asks a
//! [`ProjectionProvider`] for a forward and an inverse transform once at
//! setup, then owns the returned boxes for the rest of its life.

use espa_common::{ProjectionCode, NPROJ_PARAM};
use tracing::debug;

use crate::albers::AlbersEqualArea;
use crate::error::{ProjectionError, Result};
use crate::geographic::Geographic;
use crate::polar::PolarStereographic;
use crate::sinusoidal::Sinusoidal;
use crate::utm::TransverseMercator;

/// Everything a provider needs to initialize a transform.
///
/// Angular parameter slots are packed DMS at this point.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRequest {
    pub code: ProjectionCode,
    pub zone: i32,
    pub params: [f64; NPROJ_PARAM],
    pub spheroid: i32,
}

impl ProjectionRequest {
    pub fn new(code: ProjectionCode, zone: i32, params: [f64; NPROJ_PARAM], spheroid: i32) -> Self {
        Self {
            code,
            zone,
            params,
            spheroid,
        }
    }
}

/// Geodetic (radians) to map coordinates.
pub trait ForwardTransform: Send + Sync {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)>;
}

/// Map coordinates to geodetic (radians).
pub trait InverseTransform: Send + Sync {
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)>;
}

/// Source of forward/inverse transforms for a projection request.
pub trait ProjectionProvider {
    fn forward_init(&self, request: &ProjectionRequest) -> Result<Box<dyn ForwardTransform>>;
    fn inverse_init(&self, request: &ProjectionRequest) -> Result<Box<dyn InverseTransform>>;
}

/// One prepared projection of each supported kind.
#[derive(Debug, Clone)]
pub enum Projection {
    Geographic(Geographic),
    Utm(TransverseMercator),
    Albers(AlbersEqualArea),
    PolarStereographic(PolarStereographic),
    Sinusoidal(Sinusoidal),
}

impl Projection {
    pub fn from_request(request: &ProjectionRequest) -> Result<Self> {
        let projection = match request.code {
            ProjectionCode::Geographic => Projection::Geographic(Geographic),
            ProjectionCode::Utm => Projection::Utm(TransverseMercator::from_request(request)?),
            ProjectionCode::Albers => Projection::Albers(AlbersEqualArea::from_request(request)?),
            ProjectionCode::PolarStereographic => {
                Projection::PolarStereographic(PolarStereographic::from_request(request)?)
            }
            ProjectionCode::Sinusoidal => {
                Projection::Sinusoidal(Sinusoidal::from_request(request)?)
            }
            other => return Err(ProjectionError::Unsupported(other)),
        };
        Ok(projection)
    }

    pub fn code(&self) -> ProjectionCode {
        match self {
            Projection::Geographic(_) => ProjectionCode::Geographic,
            Projection::Utm(_) => ProjectionCode::Utm,
            Projection::Albers(_) => ProjectionCode::Albers,
            Projection::PolarStereographic(_) => ProjectionCode::PolarStereographic,
            Projection::Sinusoidal(_) => ProjectionCode::Sinusoidal,
        }
    }
}

impl ForwardTransform for Projection {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        match self {
            Projection::Geographic(p) => p.forward(lon, lat),
            Projection::Utm(p) => p.forward(lon, lat),
            Projection::Albers(p) => p.forward(lon, lat),
            Projection::PolarStereographic(p) => p.forward(lon, lat),
            Projection::Sinusoidal(p) => p.forward(lon, lat),
        }
    }
}

impl InverseTransform for Projection {
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        match self {
            Projection::Geographic(p) => p.inverse(x, y),
            Projection::Utm(p) => p.inverse(x, y),
            Projection::Albers(p) => p.inverse(x, y),
            Projection::PolarStereographic(p) => p.inverse(x, y),
            Projection::Sinusoidal(p) => p.inverse(x, y),
        }
    }
}

/// The provider backed by this crate's projection implementations.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl ProjectionProvider for BuiltinProvider {
    fn forward_init(&self, request: &ProjectionRequest) -> Result<Box<dyn ForwardTransform>> {
        let projection = Projection::from_request(request)?;
        debug!(projection = %request.code, zone = request.zone, spheroid = request.spheroid, "forward transform ready");
        Ok(Box::new(projection))
    }

    fn inverse_init(&self, request: &ProjectionRequest) -> Result<Box<dyn InverseTransform>> {
        let projection = Projection::from_request(request)?;
        debug!(projection = %request.code, zone = request.zone, spheroid = request.spheroid, "inverse transform ready");
        Ok(Box::new(projection))
    }
}
