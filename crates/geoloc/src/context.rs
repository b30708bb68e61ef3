//! Geolocation context setup.
//!
//! A [`Geoloc`] binds one [`SpaceDef`] to the forward and inverse transforms
//! of a projection provider. It is built once per scene and never changes
//! afterwards; a new scene needs a new context.

use std::fmt;

use espa_common::{GeolocError, GeolocResult, ProjectionCode, SpaceDef};
use projection::dms::{to_packed_dms, AngleKind, AngleUnit};
use projection::{
    BuiltinProvider, ForwardTransform, InverseTransform, ProjectionProvider, ProjectionRequest,
};
use tracing::{debug, warn};

/// Parameter slots that carry angles for each projection, and what they hold.
fn angular_slots(code: ProjectionCode) -> &'static [(usize, AngleKind)] {
    match code {
        ProjectionCode::PolarStereographic => &[(4, AngleKind::Longitude), (5, AngleKind::Latitude)],
        ProjectionCode::Albers => &[
            (2, AngleKind::Latitude),
            (3, AngleKind::Latitude),
            (4, AngleKind::Longitude),
            (5, AngleKind::Latitude),
        ],
        ProjectionCode::Sinusoidal => &[(4, AngleKind::Longitude)],
        _ => &[],
    }
}

/// A scene's spatial reference bound to its projection transforms.
pub struct Geoloc {
    pub(crate) def: SpaceDef,
    pub(crate) request: ProjectionRequest,
    pub(crate) sin_orien: f64,
    pub(crate) cos_orien: f64,
    pub(crate) forward: Box<dyn ForwardTransform>,
    pub(crate) inverse: Box<dyn InverseTransform>,
}

impl Geoloc {
    /// Set up a context with the built-in projections.
    pub fn setup(def: &SpaceDef) -> GeolocResult<Self> {
        Self::setup_with_provider(def, &BuiltinProvider)
    }

    /// Set up a context whose transforms come from `provider`.
    ///
    /// Fails with `Validation` for a malformed definition, `Range` when an
    /// angular parameter cannot be packed, and `ProviderInit` when either
    /// transform cannot be built. No context exists after a failure.
    pub fn setup_with_provider<P>(def: &SpaceDef, provider: &P) -> GeolocResult<Self>
    where
        P: ProjectionProvider + ?Sized,
    {
        validate(def)?;

        let request = projection_request(def)?;
        debug!(
            projection = %def.projection,
            zone = def.zone,
            spheroid = def.spheroid,
            params = ?request.params,
            "initializing projection transforms"
        );

        let forward = provider.forward_init(&request).map_err(|e| {
            warn!(projection = %def.projection, error = %e, "forward transform init failed");
            GeolocError::provider_init(format!("forward {}: {}", def.projection, e))
        })?;
        let inverse = provider.inverse_init(&request).map_err(|e| {
            warn!(projection = %def.projection, error = %e, "inverse transform init failed");
            GeolocError::provider_init(format!("inverse {}: {}", def.projection, e))
        })?;

        let (sin_orien, cos_orien) = def.orientation_angle.sin_cos();

        Ok(Self {
            def: def.clone(),
            request,
            sin_orien,
            cos_orien,
            forward,
            inverse,
        })
    }

    /// The space definition this context was built from, as given.
    pub fn space_def(&self) -> &SpaceDef {
        &self.def
    }

    /// The request handed to the provider, angular slots in packed DMS.
    pub fn request(&self) -> &ProjectionRequest {
        &self.request
    }

    pub fn sin_orientation(&self) -> f64 {
        self.sin_orien
    }

    pub fn cos_orientation(&self) -> f64 {
        self.cos_orien
    }
}

impl fmt::Debug for Geoloc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Geoloc")
            .field("def", &self.def)
            .field("request", &self.request)
            .field("sin_orien", &self.sin_orien)
            .field("cos_orien", &self.cos_orien)
            .finish_non_exhaustive()
    }
}

fn validate(def: &SpaceDef) -> GeolocResult<()> {
    if def.lines < 1 {
        return Err(GeolocError::validation(format!(
            "invalid number of lines: {}",
            def.lines
        )));
    }
    if def.samples < 1 {
        return Err(GeolocError::validation(format!(
            "invalid number of samples: {}",
            def.samples
        )));
    }
    // Negated comparison also rejects NaN
    if !(def.pixel_size_x() > 0.0) || !(def.pixel_size_y() > 0.0) {
        return Err(GeolocError::validation(format!(
            "invalid pixel size: {} x {}",
            def.pixel_size_x(),
            def.pixel_size_y()
        )));
    }
    if !def.projection.is_in_range() {
        return Err(GeolocError::validation(format!(
            "invalid projection code: {}",
            def.projection.code()
        )));
    }
    Ok(())
}

/// Copy the definition's projection fields into a provider request, packing
/// the angular slots. Every other slot passes through untouched.
fn projection_request(def: &SpaceDef) -> GeolocResult<ProjectionRequest> {
    let mut params = def.params;
    for &(slot, kind) in angular_slots(def.projection) {
        params[slot] = to_packed_dms(def.params[slot], AngleUnit::Degrees, kind).map_err(|e| {
            warn!(projection = %def.projection, slot, error = %e, "angular parameter rejected");
            GeolocError::from(e)
        })?;
    }
    Ok(ProjectionRequest::new(
        def.projection,
        def.zone,
        params,
        def.spheroid,
    ))
}
