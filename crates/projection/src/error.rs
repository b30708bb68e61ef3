//! Error types for the projection provider.

use espa_common::ProjectionCode;
use thiserror::Error;

use crate::dms::AngleError;

/// Errors raised while building or running a projection transform.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// The provider has no implementation for this projection number.
    #[error("unsupported projection: {0}")]
    Unsupported(ProjectionCode),

    /// Zone number outside ±1..=60.
    #[error("illegal zone number: {0}")]
    IllegalZone(i32),

    /// Spheroid code not in the table, or parameter axes unusable.
    #[error("illegal spheroid: {0}")]
    IllegalSpheroid(String),

    /// A projection parameter makes the projection undefined.
    #[error("invalid projection parameter: {0}")]
    InvalidParameter(String),

    /// A packed-DMS parameter could not be decoded.
    #[error(transparent)]
    Angle(#[from] AngleError),

    /// An iterative series did not converge.
    #[error("{0} failed to converge")]
    NoConvergence(&'static str),

    /// The coordinate lies outside the projection's valid domain.
    #[error("point outside projection domain: {0}")]
    OutOfDomain(String),
}

impl ProjectionError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create an OutOfDomain error.
    pub fn out_of_domain(msg: impl Into<String>) -> Self {
        Self::OutOfDomain(msg.into())
    }
}

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;
