//! Cartographic projections and the packed-DMS angle codec.
//!
//! Implements the projections from scratch without external dependencies,
//! following the GCTP formulations.

pub mod albers;
pub mod dms;
pub mod error;
pub mod geographic;
mod math;
pub mod polar;
pub mod provider;
pub mod sinusoidal;
pub mod spheroid;
pub mod utm;

pub use albers::AlbersEqualArea;
pub use dms::{
    decimal_to_dms, degree_part, minute_part, packed_dms_to_degrees, packed_dms_to_radians,
    second_part, to_packed_dms, validate_dms, AngleError, AngleKind, AngleUnit, Dms,
};
pub use error::{ProjectionError, Result};
pub use geographic::Geographic;
pub use polar::PolarStereographic;
pub use provider::{
    BuiltinProvider, ForwardTransform, InverseTransform, Projection, ProjectionProvider,
    ProjectionRequest,
};
pub use sinusoidal::Sinusoidal;
pub use spheroid::Ellipsoid;
pub use utm::TransverseMercator;
