//! Degree / minute / second angle handling.
//!
//! Projection parameters that carry angles are handed to the provider in
//! packed DMS form: a single number `sign * (deg * 1e6 + min * 1e3 + sec)`,
//! e.g. `-45°30'27"` packs to `-45030027.0`. Inside the crate the
//! explicit [`Dms`] structure is used and packing happens only at the
//! provider boundary.

use std::fmt;

use espa_common::GeolocError;
use thiserror::Error;

/// Packed DMS envelope for latitudes.
pub const MAX_LAT_DMS: f64 = 90_000_000.0;
/// Packed DMS envelope for longitudes.
pub const MAX_LON_DMS: f64 = 180_000_000.0;
/// Upper (exclusive) bound for angles that are neither latitude nor longitude.
pub const MAX_OTHER_DMS: f64 = 360_000_000.0;

const MAX_MINUTE_FIELD: f64 = 60_060.0;
const MAX_SECOND_FIELD: f64 = 60.0;

// Seconds at or above this carry into the next minute.
const SECOND_CARRY: f64 = 59.999;

/// Unit of a decimal angle handed to [`decimal_to_dms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Minutes,
    Seconds,
}

impl AngleUnit {
    fn to_degrees(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value,
            AngleUnit::Minutes => value / 60.0,
            AngleUnit::Seconds => value / 3600.0,
        }
    }
}

/// What an angle is used for, which decides its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleKind {
    /// -90..=90 degrees
    Latitude,
    /// -180..=180 degrees
    Longitude,
    /// 0..360 degrees
    Other,
}

impl fmt::Display for AngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleKind::Latitude => write!(f, "latitude"),
            AngleKind::Longitude => write!(f, "longitude"),
            AngleKind::Other => write!(f, "angle"),
        }
    }
}

/// Angle codec failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AngleError {
    #[error("{kind} {value} converts to packed DMS {packed}, which is out of range")]
    OutOfRange {
        value: f64,
        packed: f64,
        kind: AngleKind,
    },

    #[error("illegal packed DMS {field} field in {packed}")]
    InvalidField { field: &'static str, packed: f64 },
}

impl From<AngleError> for GeolocError {
    fn from(err: AngleError) -> Self {
        GeolocError::range(err.to_string())
    }
}

/// An angle split into sign, degrees, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub negative: bool,
    pub degrees: u32,
    /// 0..=59
    pub minutes: u32,
    /// 0.0..60.0, in steps of 0.001
    pub seconds: f64,
}

impl Dms {
    /// Split a decimal-degree angle, carrying seconds into minutes and
    /// minutes into degrees so neither field ever reads 60.
    pub fn from_degrees(angle: f64) -> Self {
        Self {
            negative: angle < 0.0,
            degrees: degree_part(angle).unsigned_abs(),
            minutes: minute_part(angle),
            seconds: second_part(angle),
        }
    }

    /// Decode a packed DMS value.
    pub fn from_packed(packed: f64) -> Result<Self, AngleError> {
        let magnitude = packed.abs();

        let degrees = (magnitude / 1_000_000.0).trunc();
        if degrees > 360.0 {
            return Err(AngleError::InvalidField {
                field: "degrees",
                packed,
            });
        }

        let rest = magnitude - degrees * 1_000_000.0;
        let minutes = (rest / 1000.0).trunc();
        if minutes > 60.0 {
            return Err(AngleError::InvalidField {
                field: "minutes",
                packed,
            });
        }

        let seconds = rest - minutes * 1000.0;
        if seconds > 60.0 {
            return Err(AngleError::InvalidField {
                field: "seconds",
                packed,
            });
        }

        Ok(Self {
            negative: packed < 0.0,
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds,
        })
    }

    pub fn to_packed(&self) -> f64 {
        let magnitude =
            self.degrees as f64 * 1_000_000.0 + self.minutes as f64 * 1000.0 + self.seconds;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    pub fn to_degrees(&self) -> f64 {
        let magnitude =
            self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

fn split(angle: f64) -> (i32, i32, f64) {
    let magnitude = angle.abs();
    let degrees = magnitude.trunc();
    let total_minutes = (magnitude - degrees) * 60.0;
    let minutes = total_minutes.trunc();
    let seconds = (total_minutes - minutes) * 60.0;
    (degrees as i32, minutes as i32, seconds)
}

/// Signed integer degrees of a decimal-degree angle, after carry.
pub fn degree_part(angle: f64) -> i32 {
    let (mut degrees, mut minutes, seconds) = split(angle);
    if seconds >= SECOND_CARRY {
        minutes += 1;
    }
    if minutes >= 60 {
        degrees += 1;
    }
    if angle < 0.0 {
        -degrees
    } else {
        degrees
    }
}

/// Integer minutes (0..=59) of a decimal-degree angle, after carry.
pub fn minute_part(angle: f64) -> u32 {
    let (_, mut minutes, seconds) = split(angle);
    if seconds >= SECOND_CARRY {
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
    }
    minutes as u32
}

/// Seconds of a decimal-degree angle rounded to 0.001, after carry.
pub fn second_part(angle: f64) -> f64 {
    let (_, _, mut seconds) = split(angle);
    if seconds >= SECOND_CARRY {
        seconds -= 60.0;
    }
    let rounded = (seconds * 1000.0).round() / 1000.0;
    if rounded <= 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Convert a decimal angle to packed DMS.
pub fn decimal_to_dms(value: f64, unit: AngleUnit) -> f64 {
    Dms::from_degrees(unit.to_degrees(value)).to_packed()
}

/// Check a packed DMS value against the envelope for its kind and against
/// the positional minute and second fields.
pub fn validate_dms(packed: f64, kind: AngleKind) -> bool {
    let in_envelope = match kind {
        AngleKind::Latitude => (-MAX_LAT_DMS..=MAX_LAT_DMS).contains(&packed),
        AngleKind::Longitude => (-MAX_LON_DMS..=MAX_LON_DMS).contains(&packed),
        AngleKind::Other => (0.0..MAX_OTHER_DMS).contains(&packed),
    };
    if !in_envelope {
        return false;
    }

    let minute_field = packed - (packed / 1_000_000.0).trunc() * 1_000_000.0;
    if minute_field.abs() > MAX_MINUTE_FIELD {
        return false;
    }

    let second_field = packed - (packed / 1000.0).trunc() * 1000.0;
    second_field.abs() <= MAX_SECOND_FIELD
}

/// Convert a decimal angle to packed DMS and range-check the result.
pub fn to_packed_dms(value: f64, unit: AngleUnit, kind: AngleKind) -> Result<f64, AngleError> {
    let packed = decimal_to_dms(value, unit);
    if !validate_dms(packed, kind) {
        return Err(AngleError::OutOfRange {
            value,
            packed,
            kind,
        });
    }
    Ok(packed)
}

/// Decode a packed DMS value to decimal degrees.
pub fn packed_dms_to_degrees(packed: f64) -> Result<f64, AngleError> {
    Dms::from_packed(packed).map(|dms| dms.to_degrees())
}

/// Decode a packed DMS value to radians.
pub fn packed_dms_to_radians(packed: f64) -> Result<f64, AngleError> {
    packed_dms_to_degrees(packed).map(f64::to_radians)
}
