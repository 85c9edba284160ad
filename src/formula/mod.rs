//! The uniform evaluation contract every projection formula honors
//!
//! Each projection is a bundle of four pure functions sharing one meaning
//! of the parameter set: forward easting, forward northing, inverse
//! latitude, inverse longitude. The bundle is constructed once (as a
//! `const`) and reused for unboundedly many point evaluations; no per-call
//! allocation, no shared mutable state, no I/O. Evaluating many points or
//! many projections in parallel is purely the caller's scheduling
//! decision.

use crate::Error;
use crate::Tolerances;

pub mod guards;

pub mod azimuthal;
pub mod conic;
pub mod cylindrical;
pub mod miscellaneous;
pub mod modified;
pub mod pseudocylindrical;

/// Projection parameters, immutable per evaluation call. Linear quantities
/// (`r`, `x_0`, `y_0`) share one unit; angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    /// Radius of the spherical Earth model.
    pub r: f64,
    /// First standard parallel.
    pub lat_1: f64,
    /// Second standard parallel (conic families).
    pub lat_2: f64,
    /// Central meridian.
    pub lon_0: f64,
    /// False easting.
    pub x_0: f64,
    /// False northing.
    pub y_0: f64,
    /// Per-family shape or perspective-distance factor.
    pub c: f64,
}

impl Default for Parameters {
    fn default() -> Parameters {
        Parameters {
            r: 1.,
            lat_1: 0.,
            lat_2: 0.,
            lon_0: 0.,
            x_0: 0.,
            y_0: 0.,
            c: 0.,
        }
    }
}

/// Forward equation: (lat, lon) in degrees to one planar coordinate.
pub type FwdFn = fn(f64, f64, &Parameters, &Tolerances) -> Result<f64, Error>;

/// Inverse equation: (x, y) to one geographic coordinate in degrees.
pub type InvFn = fn(f64, f64, &Parameters, &Tolerances) -> Result<f64, Error>;

/// An immutable bundle of four function references constructed at build
/// time. The single level of indirection through the function pointers is
/// all the dynamic dispatch the crate has.
#[derive(Clone, Copy, Debug)]
pub struct Formula {
    pub name: &'static str,
    pub fwd_x: FwdFn,
    pub fwd_y: FwdFn,
    pub inv_lat: InvFn,
    pub inv_lon: InvFn,
}

impl Formula {
    /// Project (lat, lon), both in degrees, to planar (x, y).
    pub fn forward(
        &self,
        lat: f64,
        lon: f64,
        params: &Parameters,
        tol: &Tolerances,
    ) -> Result<(f64, f64), Error> {
        let x = (self.fwd_x)(lat, lon, params, tol)?;
        let y = (self.fwd_y)(lat, lon, params, tol)?;
        Ok((x, y))
    }

    /// Recover (lat, lon), in degrees, from planar (x, y).
    pub fn inverse(
        &self,
        x: f64,
        y: f64,
        params: &Parameters,
        tol: &Tolerances,
    ) -> Result<(f64, f64), Error> {
        let lat = (self.inv_lat)(x, y, params, tol)?;
        let lon = (self.inv_lon)(x, y, params, tol)?;
        Ok((lat, lon))
    }
}

// ----- T E S T S ---------------------------------------------------------------------
