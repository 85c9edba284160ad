//! Conic exemplar: Equidistant Conic (sphere)
use crate::authoring::*;

/// Equidistant Conic with two standard parallels. Equal parallels
/// degrade to the tangent cone n = sin(lat_1); parallels symmetric about
/// the equator make the cone constant vanish (the cone degenerates to a
/// cylinder) and are rejected by the division guard on n.
pub const EQDC: Formula = Formula {
    name: "eqdc",
    fwd_x: eqdc_fwd_x,
    fwd_y: eqdc_fwd_y,
    inv_lat: eqdc_inv_lat,
    inv_lon: eqdc_inv_lon,
};

// Cone constant n and the radial offset G = cos(lat_1)/n + lat_1, both
// from the standard parallels. Snyder (1987) eq. 16-4.
fn cone_constants(p: &Parameters, tol: &Tolerances) -> Result<(f64, f64), Error> {
    let phi1 = p.lat_1 / RO;
    let phi2 = p.lat_2 / RO;

    let n = if (p.lat_1 - p.lat_2).abs() < tol.max_angular_diff {
        phi1.sin()
    } else {
        (phi1.cos() - phi2.cos()) / (phi2 - phi1)
    };

    let g = guarded_div(EQDC.name, "n", phi1.cos(), n, tol)? + phi1;
    Ok((n, g))
}

fn eqdc_fwd_x(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(EQDC.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(EQDC.name, lon, tol)?, p.lon_0);
    let (n, g) = cone_constants(p, tol)?;
    let rho = p.r * (g - lat / RO);
    let x = rho * (n * lonr / RO).sin() + p.x_0;
    check_planar(EQDC.name, "x", x, tol)
}

fn eqdc_fwd_y(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(EQDC.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(EQDC.name, lon, tol)?, p.lon_0);
    let (n, g) = cone_constants(p, tol)?;
    let rho = p.r * (g - lat / RO);
    let rho0 = p.r * g;
    let y = rho0 - rho * (n * lonr / RO).cos() + p.y_0;
    check_planar(EQDC.name, "y", y, tol)
}

// Polar distance and angle shared by the two inverse equations.
fn eqdc_polar(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<(f64, f64), Error> {
    check_planar(EQDC.name, "x", x, tol)?;
    check_planar(EQDC.name, "y", y, tol)?;
    let (n, g) = cone_constants(p, tol)?;

    let dx = x - p.x_0;
    let dy = p.r * g - (y - p.y_0);
    let mut rho = dx.hypot(dy);
    let theta = if n < 0. {
        rho = -rho;
        (-dx).atan2(-dy)
    } else {
        dx.atan2(dy)
    };
    Ok((rho, theta))
}

fn eqdc_inv_lat(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let (rho, _) = eqdc_polar(x, y, p, tol)?;
    let (_, g) = cone_constants(p, tol)?;
    let lat = (g - guarded_div(EQDC.name, "r", rho, p.r, tol)?) * RO;
    validated_lat(EQDC.name, lat, tol)
}

fn eqdc_inv_lon(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let (_, theta) = eqdc_polar(x, y, p, tol)?;
    let (n, _) = cone_constants(p, tol)?;
    let lonr = guarded_div(EQDC.name, "n", theta * RO, n, tol)?;
    validated_lon(EQDC.name, red_lon0(lonr, -p.lon_0), tol)
}

// ----- T E S T S ---------------------------------------------------------------------
