//! Coordinate types exchanged with the geolocation context.
//!
//! Every coordinate carries a fill flag. A fill coordinate is "no value":
//! mapping calls short-circuit on it without touching the projection.

use serde::{Deserialize, Serialize};

/// Geodetic coordinate, longitude and latitude in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoord {
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub is_fill: bool,
}

impl GeoCoord {
    /// Geodetic coordinate from radians.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            is_fill: false,
        }
    }

    /// Geodetic coordinate from decimal degrees.
    pub fn from_degrees(lon_deg: f64, lat_deg: f64) -> Self {
        Self::new(lon_deg.to_radians(), lat_deg.to_radians())
    }

    /// The fill sentinel.
    pub fn fill() -> Self {
        Self {
            lon: 0.0,
            lat: 0.0,
            is_fill: true,
        }
    }

    /// (lon, lat) in decimal degrees.
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.lon.to_degrees(), self.lat.to_degrees())
    }
}

/// Map projection coordinate in projected units (meters for most projections).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCoord {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub is_fill: bool,
}

impl MapCoord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, is_fill: false }
    }

    pub fn fill() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            is_fill: true,
        }
    }
}

/// Image coordinate in fractional pixels.
///
/// (0.0, 0.0) is the outer upper-left corner of the upper-left pixel.
/// Lines grow downward, samples grow to the right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImgCoord {
    pub line: f64,
    pub sample: f64,
    #[serde(default)]
    pub is_fill: bool,
}

impl ImgCoord {
    pub fn new(line: f64, sample: f64) -> Self {
        Self {
            line,
            sample,
            is_fill: false,
        }
    }

    pub fn fill() -> Self {
        Self {
            line: 0.0,
            sample: 0.0,
            is_fill: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_round_trip() {
        let geo = GeoCoord::from_degrees(-97.5, 38.25);
        let (lon, lat) = geo.to_degrees();
        assert!((lon + 97.5).abs() < 1e-12);
        assert!((lat - 38.25).abs() < 1e-12);
        assert!(!geo.is_fill);
    }

    #[test]
    fn test_fill_flag_defaults_to_false_in_json() {
        let img: ImgCoord = serde_json::from_str(r#"{"line": 1.5, "sample": 2.0}"#).unwrap();
        assert!(!img.is_fill);
        assert_eq!(img.line, 1.5);
    }
}
