//! Series and iteration helpers shared by the projection implementations.
//!
//! Formulas follow Snyder, "Map Projections--A Working Manual" (USGS
//! Professional Paper 1395).

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{ProjectionError, Result};

pub(crate) const HALF_PI: f64 = FRAC_PI_2;
pub(crate) const TWO_PI: f64 = 2.0 * PI;
pub(crate) const EPSLN: f64 = 1.0e-10;

/// Wrap a longitude into [-π, π].
pub(crate) fn adjust_lon(lon: f64) -> f64 {
    if lon.abs() <= PI {
        return lon;
    }
    let wrapped = (lon + PI).rem_euclid(TWO_PI) - PI;
    // rem_euclid maps +π onto -π; keep the caller's side of the seam
    if wrapped == -PI && lon > 0.0 {
        PI
    } else {
        wrapped
    }
}

/// asin that tolerates arguments a rounding error past ±1.
pub(crate) fn asinz(value: f64) -> f64 {
    value.clamp(-1.0, 1.0).asin()
}

pub(crate) fn e0fn(es: f64) -> f64 {
    1.0 - 0.25 * es * (1.0 + es / 16.0 * (3.0 + 1.25 * es))
}

pub(crate) fn e1fn(es: f64) -> f64 {
    0.375 * es * (1.0 + 0.25 * es * (1.0 + 0.46875 * es))
}

pub(crate) fn e2fn(es: f64) -> f64 {
    0.05859375 * es * es * (1.0 + 0.75 * es)
}

pub(crate) fn e3fn(es: f64) -> f64 {
    es * es * es * (35.0 / 3072.0)
}

/// e4 constant for the polar stereographic projection.
pub(crate) fn e4fn(e: f64) -> f64 {
    let con = 1.0 + e;
    let com = 1.0 - e;
    (con.powf(con) * com.powf(com)).sqrt()
}

/// Distance along a meridian from the equator to `phi`, per unit semimajor axis.
pub(crate) fn mlfn(e0: f64, e1: f64, e2: f64, e3: f64, phi: f64) -> f64 {
    e0 * phi - e1 * (2.0 * phi).sin() + e2 * (4.0 * phi).sin() - e3 * (6.0 * phi).sin()
}

/// Small m: radius of a parallel divided by the semimajor axis.
pub(crate) fn msfnz(e: f64, sinphi: f64, cosphi: f64) -> f64 {
    let con = e * sinphi;
    cosphi / (1.0 - con * con).sqrt()
}

/// Small q used by the equal-area projections.
pub(crate) fn qsfnz(e: f64, sinphi: f64) -> f64 {
    if e > 1.0e-7 {
        let con = e * sinphi;
        (1.0 - e * e) * (sinphi / (1.0 - con * con) - (0.5 / e) * ((1.0 - con) / (1.0 + con)).ln())
    } else {
        2.0 * sinphi
    }
}

/// Small t used by the conformal projections.
pub(crate) fn tsfnz(e: f64, phi: f64, sinphi: f64) -> f64 {
    let con = e * sinphi;
    let com = 0.5 * e;
    (0.5 * (HALF_PI - phi)).tan() / ((1.0 - con) / (1.0 + con)).powf(com)
}

/// Latitude from small q, for the inverse Albers projection.
pub(crate) fn phi1z(e: f64, qs: f64) -> Result<f64> {
    let mut phi = asinz(0.5 * qs);
    if e < EPSLN {
        return Ok(phi);
    }

    let es = e * e;
    for _ in 0..25 {
        let (sinpi, cospi) = phi.sin_cos();
        let con = e * sinpi;
        let com = 1.0 - con * con;
        let dphi = 0.5 * com * com / cospi
            * (qs / (1.0 - es) - sinpi / com + 0.5 / e * ((1.0 - con) / (1.0 + con)).ln());
        phi += dphi;
        if dphi.abs() <= 1e-7 {
            return Ok(phi);
        }
    }
    Err(ProjectionError::NoConvergence("phi1z"))
}

/// Latitude from small t, for the inverse conformal projections.
pub(crate) fn phi2z(e: f64, ts: f64) -> Result<f64> {
    let half_e = 0.5 * e;
    let mut phi = HALF_PI - 2.0 * ts.atan();
    for _ in 0..=15 {
        let con = e * phi.sin();
        let dphi = HALF_PI - 2.0 * (ts * ((1.0 - con) / (1.0 + con)).powf(half_e)).atan() - phi;
        phi += dphi;
        if dphi.abs() <= EPSLN {
            return Ok(phi);
        }
    }
    Err(ProjectionError::NoConvergence("phi2z"))
}
