//! *Forward and inverse map projection formulas on a spherical Earth model.*
//!
//! A projection is a bundle of four pure functions sharing one parameter
//! set: forward easting, forward northing, inverse latitude and inverse
//! longitude. All angles at the public boundary are in degrees; internally
//! everything is converted to radians by division with [`math::angular::RO`].
//!
//! The heavy lifting sits in [`math`]: a Newton-Raphson root finder for
//! implicitly defined auxiliary angles, a 2×2 Gauss-Newton solver for
//! projections without a closed-form inverse, numerical quadrature for the
//! incomplete elliptic integral of the first kind, and a closed-form real
//! quartic solver. The [`formula`] module holds the evaluation contract and
//! one exemplar formula per algorithmic pattern.
//!
//! ```
//! use planisphere::formula::cylindrical::EQC;
//! use planisphere::formula::Parameters;
//! use planisphere::Tolerances;
//!
//! let p = Parameters::default();
//! let tol = Tolerances::DEFAULT;
//! let (x, y) = EQC.forward(45., 90., &p, &tol)?;
//! let (lat, lon) = EQC.inverse(x, y, &p, &tol)?;
//! assert!((lat - 45.).abs() < 1e-12 && (lon - 90.).abs() < 1e-12);
//! # Ok::<(), planisphere::Error>(())
//! ```

use thiserror::Error;

pub mod formula;
pub mod math;

pub use formula::Formula;
pub use formula::Parameters;

/// Preamble for formula modules: everything a projection implementation
/// needs, in one import.
pub mod authoring {
    pub use crate::formula::guards::*;
    pub use crate::formula::FwdFn;
    pub use crate::formula::InvFn;
    pub use crate::formula::Formula;
    pub use crate::formula::Parameters;
    pub use crate::math::angular::red_lon0;
    pub use crate::math::angular::RO;
    pub use crate::Error;
    pub use crate::Tolerances;
    pub use log::warn;
    pub use std::f64::consts::FRAC_PI_2;
    pub use std::f64::consts::PI;
}

/// The error taxonomy shared by every formula: deterministic math-domain
/// violations, never retried and never silently swallowed. Each variant
/// names the formula, the offending quantity and its numeric value, so a
/// failure on one point/projection pair is diagnosable in isolation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A supplied or computed planar coordinate exceeds `max_float`.
    #[error("{formula}: overflow: |{quantity}| = {value:e} exceeds the configured ceiling")]
    Overflow {
        formula: &'static str,
        quantity: &'static str,
        value: f64,
    },

    /// A transcendental argument lies outside its domain beyond the
    /// permitted rounding slack, or a computed latitude/longitude
    /// exceeds ±90°/±180°.
    #[error("{formula}: {quantity} = {value} is outside its valid domain")]
    Domain {
        formula: &'static str,
        quantity: &'static str,
        value: f64,
    },

    /// A divisor's magnitude is below `min_float`.
    #[error("{formula}: near-zero divisor {quantity} = {value:e}")]
    ZeroDivision {
        formula: &'static str,
        quantity: &'static str,
        value: f64,
    },
}

/// Process-wide numeric tolerances, fixed at startup and passed (cheaply,
/// by reference) into every formula call. Never mutable global state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    /// Smallest safe divisor magnitude.
    pub min_float: f64,
    /// Overflow ceiling for planar coordinates.
    pub max_float: f64,
    /// Permitted slack for trig arguments marginally outside [-1, 1],
    /// and for the back-substitution match of quartic root selection.
    pub argument_round_error: f64,
    /// Tolerance for "this angle is effectively zero/singular".
    pub max_angular_diff: f64,
    /// Iteration cap for the Newton-Raphson root finder.
    pub max_nr_iterations: u32,
    /// Convergence tolerance for the Newton-Raphson root finder.
    pub max_nr_error: f64,
}

impl Tolerances {
    pub const DEFAULT: Tolerances = Tolerances {
        min_float: 1.0e-15,
        max_float: 1.0e15,
        argument_round_error: 1.0e-5,
        max_angular_diff: 1.0e-8,
        max_nr_iterations: 20,
        max_nr_error: 1.0e-10,
    };
}

impl Default for Tolerances {
    fn default() -> Tolerances {
        Tolerances::DEFAULT
    }
}

// ----- T E S T S ---------------------------------------------------------------------
