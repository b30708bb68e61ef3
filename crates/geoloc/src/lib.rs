//! Scene geolocation.
//!
//! A [`Geoloc`] context ties a scene's [`SpaceDef`] to projection
//! transforms and maps between image coordinates (line, sample) and
//! geodetic coordinates (lon, lat):
//!
//! ```text
//! image (line, sample) <-> map (x, y) <-> geodetic (lon, lat)
//!        affine + rotation      projection provider
//! ```
//!
//! ```ignore
//! let def = GeolocMetadata::from_path("scene.json")?.space_def()?;
//! let geoloc = Geoloc::setup(&def)?;
//! let bounds = geoloc.compute_bounds(def.lines, def.samples)?;
//! ```

pub mod bounds;
pub mod context;
pub mod info;
pub mod mapping;

pub use bounds::SceneCorners;
pub use context::Geoloc;
pub use info::{AlbersParams, BandInfo, GeolocMetadata, PolarParams, ProjectionInfo, SinusoidalParams};

pub use espa_common::{
    GeoBounds, GeoCoord, GeolocError, GeolocResult, ImgCoord, MapCoord, ProjectionCode, SpaceDef,
};
pub use projection::{BuiltinProvider, ProjectionProvider};
