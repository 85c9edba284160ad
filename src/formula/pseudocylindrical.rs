//! Pseudocylindrical exemplars: Sinusoidal and Mollweide
use crate::authoring::*;
use crate::math::newton_raphson;
use std::f64::consts::SQRT_2;

// ----- S I N U S O I D A L -----------------------------------------------------------

/// Sinusoidal (Sanson-Flamsteed). Equal-area, closed forms both ways; the
/// meridian convergence at the poles needs an explicit branch on the
/// inverse path.
pub const SINU: Formula = Formula {
    name: "sinu",
    fwd_x: sinu_fwd_x,
    fwd_y: sinu_fwd_y,
    inv_lat: sinu_inv_lat,
    inv_lon: sinu_inv_lon,
};

fn sinu_fwd_x(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(SINU.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(SINU.name, lon, tol)?, p.lon_0);
    let x = p.r * (lonr / RO) * (lat / RO).cos() + p.x_0;
    check_planar(SINU.name, "x", x, tol)
}

fn sinu_fwd_y(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(SINU.name, lat, tol)?;
    validated_lon(SINU.name, lon, tol)?;
    let y = p.r * lat / RO + p.y_0;
    check_planar(SINU.name, "y", y, tol)
}

fn sinu_inv_lat(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    check_planar(SINU.name, "x", x, tol)?;
    check_planar(SINU.name, "y", y, tol)?;
    let lat = guarded_div(SINU.name, "r", (y - p.y_0) * RO, p.r, tol)?;
    validated_lat(SINU.name, lat, tol)
}

fn sinu_inv_lon(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = sinu_inv_lat(x, y, p, tol)?;

    // All meridians meet at the poles: the longitude degenerates to the
    // central meridian there
    if 90. - lat.abs() < tol.max_angular_diff {
        return validated_lon(SINU.name, red_lon0(0., -p.lon_0), tol);
    }

    let denom = p.r * (lat / RO).cos();
    let lonr = guarded_div(SINU.name, "r·cos(lat)", (x - p.x_0) * RO, denom, tol)?;
    validated_lon(SINU.name, red_lon0(lonr, -p.lon_0), tol)
}

// ----- M O L L W E I D E -------------------------------------------------------------

/// Mollweide. The auxiliary angle θ satisfies 2θ + sin 2θ = π·sin(lat),
/// solved by Newton-Raphson with the geographic latitude as initial
/// guess; the iteration degenerates at the poles, which are special-cased.
pub const MOLL: Formula = Formula {
    name: "moll",
    fwd_x: moll_fwd_x,
    fwd_y: moll_fwd_y,
    inv_lat: moll_inv_lat,
    inv_lon: moll_inv_lon,
};

// Auxiliary angle θ in radians, for a latitude in degrees.
fn moll_theta(lat: f64, tol: &Tolerances) -> f64 {
    if 90. - lat.abs() < tol.max_angular_diff {
        return FRAC_PI_2.copysign(lat);
    }

    let rhs = PI * (lat / RO).sin();
    newton_raphson(
        |t| 2. * t + (2. * t).sin() - rhs,
        |t| 2. + 2. * (2. * t).cos(),
        lat / RO,
        tol.max_nr_iterations,
        tol.max_nr_error,
    )
    .root
}

fn moll_fwd_x(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(MOLL.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(MOLL.name, lon, tol)?, p.lon_0);
    let theta = moll_theta(lat, tol);
    let x = p.r * (2. * SQRT_2 / PI) * (lonr / RO) * theta.cos() + p.x_0;
    check_planar(MOLL.name, "x", x, tol)
}

fn moll_fwd_y(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(MOLL.name, lat, tol)?;
    validated_lon(MOLL.name, lon, tol)?;
    let y = p.r * SQRT_2 * moll_theta(lat, tol).sin() + p.y_0;
    check_planar(MOLL.name, "y", y, tol)
}

fn moll_inv_lat(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    check_planar(MOLL.name, "x", x, tol)?;
    check_planar(MOLL.name, "y", y, tol)?;
    let sin_theta = guarded_div(MOLL.name, "√2·r", y - p.y_0, SQRT_2 * p.r, tol)?;
    let theta = clamped_asin(MOLL.name, "sin theta", sin_theta, tol)?;
    let sin_lat = (2. * theta + (2. * theta).sin()) / PI;
    let lat = clamped_asin(MOLL.name, "sin lat", sin_lat, tol)? * RO;
    validated_lat(MOLL.name, lat, tol)
}

fn moll_inv_lon(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    check_planar(MOLL.name, "x", x, tol)?;
    check_planar(MOLL.name, "y", y, tol)?;
    let sin_theta = guarded_div(MOLL.name, "√2·r", y - p.y_0, SQRT_2 * p.r, tol)?;
    let theta = clamped_asin(MOLL.name, "sin theta", sin_theta, tol)?;

    // Pole: the bounding ellipse collapses to a point
    if FRAC_PI_2 - theta.abs() < tol.max_angular_diff {
        return validated_lon(MOLL.name, red_lon0(0., -p.lon_0), tol);
    }

    let denom = 2. * SQRT_2 * p.r * theta.cos();
    let lonr = guarded_div(MOLL.name, "2√2·r·cos(theta)", PI * (x - p.x_0) * RO, denom, tol)?;
    validated_lon(MOLL.name, red_lon0(lonr, -p.lon_0), tol)
}

// ----- T E S T S ---------------------------------------------------------------------
