//! Common types shared by the geolocation crates.

pub mod bbox;
pub mod coords;
pub mod error;
pub mod space;

pub use bbox::GeoBounds;
pub use coords::{GeoCoord, ImgCoord, MapCoord};
pub use error::{GeolocError, GeolocResult};
pub use space::{ProjectionCode, SpaceDef, MAX_PROJECTION_CODE, NPROJ_PARAM};
