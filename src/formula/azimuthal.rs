//! Azimuthal exemplars: Azimuthal Equidistant (polar aspect) and Lambert
//! Azimuthal Equal-Area (equatorial aspect)
use crate::authoring::*;

// ----- A Z I M U T H A L   E Q U I D I S T A N T -------------------------------------

/// Azimuthal Equidistant, north-polar aspect. The forward radius
/// ρ = R·(90 - lat)/RO is linear in the colatitude and needs no
/// singularity branch; the inverse only branches at the center point.
pub const AEQD: Formula = Formula {
    name: "aeqd",
    fwd_x: aeqd_fwd_x,
    fwd_y: aeqd_fwd_y,
    inv_lat: aeqd_inv_lat,
    inv_lon: aeqd_inv_lon,
};

fn aeqd_fwd_x(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(AEQD.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(AEQD.name, lon, tol)?, p.lon_0);
    let rho = p.r * (90. - lat) / RO;
    let x = rho * (lonr / RO).sin() + p.x_0;
    check_planar(AEQD.name, "x", x, tol)
}

fn aeqd_fwd_y(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(AEQD.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(AEQD.name, lon, tol)?, p.lon_0);
    let rho = p.r * (90. - lat) / RO;
    let y = -rho * (lonr / RO).cos() + p.y_0;
    check_planar(AEQD.name, "y", y, tol)
}

fn aeqd_inv_lat(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    check_planar(AEQD.name, "x", x, tol)?;
    check_planar(AEQD.name, "y", y, tol)?;
    let rho = (x - p.x_0).hypot(y - p.y_0);
    let lat = 90. - guarded_div(AEQD.name, "r", rho * RO, p.r, tol)?;
    validated_lat(AEQD.name, lat, tol)
}

fn aeqd_inv_lon(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    check_planar(AEQD.name, "x", x, tol)?;
    check_planar(AEQD.name, "y", y, tol)?;
    let dx = x - p.x_0;
    let dy = y - p.y_0;

    // The projection center is the pole: every longitude collapses there
    if dx.hypot(dy) * RO < p.r * tol.max_angular_diff {
        return validated_lon(AEQD.name, red_lon0(0., -p.lon_0), tol);
    }

    let lonr = dx.atan2(-dy) * RO;
    validated_lon(AEQD.name, red_lon0(lonr, -p.lon_0), tol)
}

// ----- L A M B E R T   A Z I M U T H A L   E Q U A L - A R E A -----------------------

/// Lambert Azimuthal Equal-Area, equatorial aspect. The antipode of the
/// projection center is unreachable and fails the division guard; the
/// inverse rejects planar points outside the bounding circle of radius 2R.
pub const LAEA: Formula = Formula {
    name: "laea",
    fwd_x: laea_fwd_x,
    fwd_y: laea_fwd_y,
    inv_lat: laea_inv_lat,
    inv_lon: laea_inv_lon,
};

// The area-scaling factor k' = √(2 / (1 + cos lat · cos lonr)).
fn laea_kp(lat: f64, lonr: f64, tol: &Tolerances) -> Result<f64, Error> {
    let denom = 1. + (lat / RO).cos() * (lonr / RO).cos();
    Ok(guarded_div(LAEA.name, "1 + cos(lat)·cos(lon)", 2., denom, tol)?.sqrt())
}

fn laea_fwd_x(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(LAEA.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(LAEA.name, lon, tol)?, p.lon_0);
    let kp = laea_kp(lat, lonr, tol)?;
    let x = p.r * kp * (lat / RO).cos() * (lonr / RO).sin() + p.x_0;
    check_planar(LAEA.name, "x", x, tol)
}

fn laea_fwd_y(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(LAEA.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(LAEA.name, lon, tol)?, p.lon_0);
    let kp = laea_kp(lat, lonr, tol)?;
    let y = p.r * kp * (lat / RO).sin() + p.y_0;
    check_planar(LAEA.name, "y", y, tol)
}

// Angular distance c from the projection center, plus the planar offsets.
fn laea_angular_distance(
    x: f64,
    y: f64,
    p: &Parameters,
    tol: &Tolerances,
) -> Result<(f64, f64, f64, f64), Error> {
    check_planar(LAEA.name, "x", x, tol)?;
    check_planar(LAEA.name, "y", y, tol)?;
    let dx = x - p.x_0;
    let dy = y - p.y_0;
    let rho = dx.hypot(dy);
    let half = guarded_div(LAEA.name, "2r", rho, 2. * p.r, tol)?;
    let c = 2. * clamped_asin(LAEA.name, "rho/(2r)", half, tol)?;
    Ok((dx, dy, rho, c))
}

fn laea_inv_lat(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let (_, dy, rho, c) = laea_angular_distance(x, y, p, tol)?;
    if rho < tol.min_float {
        return Ok(0.);
    }
    let sin_lat = dy * c.sin() / rho;
    let lat = clamped_asin(LAEA.name, "sin lat", sin_lat, tol)? * RO;
    validated_lat(LAEA.name, lat, tol)
}

fn laea_inv_lon(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let (dx, _, rho, c) = laea_angular_distance(x, y, p, tol)?;
    if rho < tol.min_float {
        return validated_lon(LAEA.name, red_lon0(0., -p.lon_0), tol);
    }
    let lonr = (dx * c.sin()).atan2(rho * c.cos()) * RO;
    validated_lon(LAEA.name, red_lon0(lonr, -p.lon_0), tol)
}

// ----- T E S T S ---------------------------------------------------------------------
