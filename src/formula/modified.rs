//! Modified azimuthal exemplars: Aitoff and Winkel Tripel
//!
//! Neither projection has a closed-form inverse; both are inverted with
//! the 2×2 Gauss-Newton solver, the residuals being the forward equations
//! evaluated against the target planar point and the Jacobian obtained by
//! central differences of the same forward equations.
use crate::authoring::*;
use crate::math::gauss_newton;

// Central-difference step for the numeric Jacobians, in degrees.
const JACOBIAN_STEP: f64 = 1e-5;

// Shared Gauss-Newton inversion driver: probe evaluations are folded back
// into the legal geographic ranges, so the forward equations never fail
// mid-iteration.
fn invert(
    fwd_x: FwdFn,
    fwd_y: FwdFn,
    x: f64,
    y: f64,
    lat_guess: f64,
    lon_guess: f64,
    p: &Parameters,
    tol: &Tolerances,
) -> (f64, f64) {
    let probe = |lat: f64, lon: f64| -> (f64, f64) {
        let lat = lat.clamp(-90., 90.);
        let lon = red_lon0(lon, 0.);
        let px = fwd_x(lat, lon, p, tol).unwrap_or(f64::NAN);
        let py = fwd_y(lat, lon, p, tol).unwrap_or(f64::NAN);
        (px, py)
    };

    let residuals = |lat: f64, lon: f64| {
        let (px, py) = probe(lat, lon);
        (px - x, py - y)
    };

    let jacobian = |lat: f64, lon: f64| {
        let h = JACOBIAN_STEP;
        let (xn, yn) = probe(lat + h, lon);
        let (xs, ys) = probe(lat - h, lon);
        let (xe, ye) = probe(lat, lon + h);
        let (xw, yw) = probe(lat, lon - h);
        [
            [(xn - xs) / (2. * h), (xe - xw) / (2. * h)],
            [(yn - ys) / (2. * h), (ye - yw) / (2. * h)],
        ]
    };

    let solution = gauss_newton(jacobian, residuals, lat_guess, lon_guess, tol.min_float);
    (solution.lat, solution.lon)
}

// ----- A I T O F F -------------------------------------------------------------------

/// Aitoff: the azimuthal equidistant projection of the λ/2-compressed
/// sphere, stretched back by a factor of two in easting.
pub const AITOFF: Formula = Formula {
    name: "aitoff",
    fwd_x: aitoff_fwd_x,
    fwd_y: aitoff_fwd_y,
    inv_lat: aitoff_inv_lat,
    inv_lon: aitoff_inv_lon,
};

// Angular distance α from the projection center and the radial stretch
// α/sin α, shared by both forward equations.
fn aitoff_alpha(lat: f64, lonr: f64, tol: &Tolerances) -> Result<(f64, f64), Error> {
    let arg = (lat / RO).cos() * (lonr / RO / 2.).cos();
    let alpha = clamped_acos(AITOFF.name, "cos(lat)·cos(lon/2)", arg, tol)?;
    if alpha < tol.max_angular_diff {
        // sin α/α → 1 at the center
        return Ok((alpha, 1.));
    }
    Ok((alpha, alpha / alpha.sin()))
}

fn aitoff_fwd_x(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(AITOFF.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(AITOFF.name, lon, tol)?, p.lon_0);
    let (_, stretch) = aitoff_alpha(lat, lonr, tol)?;
    let x = 2. * p.r * (lat / RO).cos() * (lonr / RO / 2.).sin() * stretch + p.x_0;
    check_planar(AITOFF.name, "x", x, tol)
}

fn aitoff_fwd_y(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(AITOFF.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(AITOFF.name, lon, tol)?, p.lon_0);
    let (_, stretch) = aitoff_alpha(lat, lonr, tol)?;
    let y = p.r * (lat / RO).sin() * stretch + p.y_0;
    check_planar(AITOFF.name, "y", y, tol)
}

fn aitoff_guess(x: f64, y: f64, p: &Parameters) -> (f64, f64) {
    // To first order around the center, x ≈ R·λ and y ≈ R·φ
    let lat = ((y - p.y_0) * RO / p.r).clamp(-89., 89.);
    let lon = ((x - p.x_0) * RO / p.r).clamp(-179., 179.) + p.lon_0;
    (lat, lon)
}

fn aitoff_inv_lat(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    check_planar(AITOFF.name, "x", x, tol)?;
    check_planar(AITOFF.name, "y", y, tol)?;
    let (lat_guess, lon_guess) = aitoff_guess(x, y, p);
    let (lat, _) = invert(aitoff_fwd_x, aitoff_fwd_y, x, y, lat_guess, lon_guess, p, tol);
    validated_lat(AITOFF.name, lat, tol)
}

fn aitoff_inv_lon(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    check_planar(AITOFF.name, "x", x, tol)?;
    check_planar(AITOFF.name, "y", y, tol)?;
    let (lat_guess, lon_guess) = aitoff_guess(x, y, p);
    let (_, lon) = invert(aitoff_fwd_x, aitoff_fwd_y, x, y, lat_guess, lon_guess, p, tol);
    validated_lon(AITOFF.name, red_lon0(lon, 0.), tol)
}

// ----- W I N K E L   T R I P E L -----------------------------------------------------

/// Winkel Tripel: the arithmetic mean of the equidistant cylindrical
/// projection at the standard parallel lat_1 and the Aitoff projection.
/// Winkel's choice of standard parallel is lat_1 = acos(2/π) ≈ 50.467°;
/// the parameter is honored as supplied.
pub const WINTRI: Formula = Formula {
    name: "wintri",
    fwd_x: wintri_fwd_x,
    fwd_y: wintri_fwd_y,
    inv_lat: wintri_inv_lat,
    inv_lon: wintri_inv_lon,
};

fn wintri_fwd_x(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(WINTRI.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(WINTRI.name, lon, tol)?, p.lon_0);
    let (_, stretch) = aitoff_alpha(lat, lonr, tol)?;
    let aitoff = 2. * (lat / RO).cos() * (lonr / RO / 2.).sin() * stretch;
    let eqc = (lonr / RO) * (p.lat_1 / RO).cos();
    let x = p.r / 2. * (eqc + aitoff) + p.x_0;
    check_planar(WINTRI.name, "x", x, tol)
}

fn wintri_fwd_y(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(WINTRI.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(WINTRI.name, lon, tol)?, p.lon_0);
    let (_, stretch) = aitoff_alpha(lat, lonr, tol)?;
    let y = p.r / 2. * (lat / RO + (lat / RO).sin() * stretch) + p.y_0;
    check_planar(WINTRI.name, "y", y, tol)
}

fn wintri_guess(x: f64, y: f64, p: &Parameters) -> (f64, f64) {
    // Aitoff-derived: near the center the mean behaves like
    // x ≈ R·λ·(1 + cos lat_1)/2 and y ≈ R·φ
    let lat = ((y - p.y_0) * RO / p.r).clamp(-89., 89.);
    let spread = (1. + (p.lat_1 / RO).cos()) / 2.;
    let lon = ((x - p.x_0) * RO / (p.r * spread)).clamp(-179., 179.) + p.lon_0;
    (lat, lon)
}

fn wintri_inv_lat(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    check_planar(WINTRI.name, "x", x, tol)?;
    check_planar(WINTRI.name, "y", y, tol)?;
    let (lat_guess, lon_guess) = wintri_guess(x, y, p);
    let (lat, _) = invert(wintri_fwd_x, wintri_fwd_y, x, y, lat_guess, lon_guess, p, tol);
    validated_lat(WINTRI.name, lat, tol)
}

fn wintri_inv_lon(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    check_planar(WINTRI.name, "x", x, tol)?;
    check_planar(WINTRI.name, "y", y, tol)?;
    let (lat_guess, lon_guess) = wintri_guess(x, y, p);
    let (_, lon) = invert(wintri_fwd_x, wintri_fwd_y, x, y, lat_guess, lon_guess, p, tol);
    validated_lon(WINTRI.name, red_lon0(lon, 0.), tol)
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    const TOL: Tolerances = Tolerances::DEFAULT;

    #[test]
    fn aitoff_center_and_axes() -> Result<(), Error> {
        let p = Parameters::default();
        let (x, y) = AITOFF.forward(0., 0., &p, &TOL)?;
        assert_float_eq!(x, 0., abs <= 1e-12);
        assert_float_eq!(y, 0., abs <= 1e-12);

        // On the central meridian the projection is equidistant in lat
        let (x, y) = AITOFF.forward(50., 0., &p, &TOL)?;
        assert_float_eq!(x, 0., abs <= 1e-12);
        assert_float_eq!(y, 50. / RO, abs <= 1e-12);

        // On the equator it is equidistant in lon
        let (x, y) = AITOFF.forward(0., 120., &p, &TOL)?;
        assert_float_eq!(x, 120. / RO, abs <= 1e-12);
        assert_float_eq!(y, 0., abs <= 1e-12);
        Ok(())
    }

    #[test]
    fn aitoff_gauss_newton_roundtrip() -> Result<(), Error> {
        let p = Parameters::default();
        for &(lat, lon) in &[(30., 60.), (-45., 20.), (10., -130.), (65., 90.)] {
            let (x, y) = AITOFF.forward(lat, lon, &p, &TOL)?;
            let (rlat, rlon) = AITOFF.inverse(x, y, &p, &TOL)?;
            assert_float_eq!(rlat, lat, abs <= 1e-4);
            assert_float_eq!(rlon, lon, abs <= 1e-4);
        }
        Ok(())
    }

    #[test]
    fn wintri_forward_reference_value() -> Result<(), Error> {
        // Winkel's standard parallel: lat_1 = acos(2/π)
        let p = Parameters {
            lat_1: (2. / PI).acos() * RO,
            ..Default::default()
        };

        // At (0, 0) both components vanish
        let (x, y) = WINTRI.forward(0., 0., &p, &TOL)?;
        assert_float_eq!(x, 0., abs <= 1e-12);
        assert_float_eq!(y, 0., abs <= 1e-12);

        // The pole maps onto the central meridian at y = R·π/2, the mean
        // of the eqc and Aitoff pole northings
        let (x, y) = WINTRI.forward(90., 0., &p, &TOL)?;
        assert_float_eq!(x, 0., abs <= 1e-12);
        assert_float_eq!(y, FRAC_PI_2, abs <= 1e-9);
        Ok(())
    }

    #[test]
    fn wintri_gauss_newton_roundtrip() -> Result<(), Error> {
        // lat_1 = 0: forward(30, 60), inverse recovers the point within
        // the 5-iteration cap to 1e-4 degrees
        let p = Parameters::default();
        let (x, y) = WINTRI.forward(30., 60., &p, &TOL)?;
        let (lat, lon) = WINTRI.inverse(x, y, &p, &TOL)?;
        assert_float_eq!(lat, 30., abs <= 1e-4);
        assert_float_eq!(lon, 60., abs <= 1e-4);

        // And with Winkel's own standard parallel
        let p = Parameters {
            lat_1: (2. / PI).acos() * RO,
            lon_0: -15.,
            ..Default::default()
        };
        for &(lat, lon) in &[(30., 60.), (-50., -120.), (0., 45.)] {
            let (x, y) = WINTRI.forward(lat, lon, &p, &TOL)?;
            let (rlat, rlon) = WINTRI.inverse(x, y, &p, &TOL)?;
            assert_float_eq!(rlat, lat, abs <= 1e-4);
            assert_float_eq!(rlon, lon, abs <= 1e-4);
        }
        Ok(())
    }
}
