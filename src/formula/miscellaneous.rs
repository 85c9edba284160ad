//! Miscellaneous exemplars: Van der Grinten (I), Armadillo and the Peirce
//! quincuncial
use crate::authoring::*;
use crate::math::{elliptic_f, newton_raphson, quartic_real_roots};
use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

// ----- V A N   D E R   G R I N T E N -------------------------------------------------

/// Van der Grinten (I). The whole sphere maps into a circle of radius
/// π·R; the forward construction is Snyder (1987) eq. 33-1..33-13, the
/// inverse recovers the latitude from a trigonometrically solved cubic.
pub const VANDG: Formula = Formula {
    name: "vandg",
    fwd_x: vandg_fwd_x,
    fwd_y: vandg_fwd_y,
    inv_lat: vandg_inv_lat,
    inv_lon: vandg_inv_lon,
};

// Unit-sphere planar coordinates. Both radicands of Snyder's closed forms
// share the factor W = A²(P² + 1 - 2G) + P² - G²; the expanded textbook
// radicands cancel catastrophically for longitudes close to the central
// meridian, where A grows without bound, so W is computed directly.
fn vandg_planar(lat: f64, lonr: f64, tol: &Tolerances) -> Result<(f64, f64), Error> {
    let phi = lat / RO;
    let lam = lonr / RO;

    if lat.abs() < tol.max_angular_diff {
        return Ok((lam, 0.));
    }

    let theta = clamped_asin(VANDG.name, "sin theta", (2. * phi / PI).abs(), tol)?;

    // Central meridian and poles: the circular arcs degenerate
    if lonr.abs() < tol.max_angular_diff || 90. - lat.abs() < tol.max_angular_diff {
        return Ok((0., (PI * (theta / 2.).tan()).copysign(phi)));
    }

    let a = 0.5 * (guarded_div(VANDG.name, "lon", PI, lam, tol)? - lam / PI).abs();
    let denom = theta.sin() + theta.cos() - 1.;
    let g = guarded_div(VANDG.name, "sin θ + cos θ - 1", theta.cos(), denom, tol)?;
    let p = g * (guarded_div(VANDG.name, "sin θ", 2., theta.sin(), tol)? - 1.);
    let q = a * a + g;

    let w = guarded_sqrt(
        VANDG.name,
        "radicand",
        a * a * (p * p + 1. - 2. * g) + p * p - g * g,
        tol,
    )?;
    let p2a2 = p * p + a * a;

    let x = guarded_div(
        VANDG.name,
        "P² + A²",
        PI * (a * (g - p * p) + p.abs() * w),
        p2a2,
        tol,
    )?
    .copysign(lam);
    let y = guarded_div(VANDG.name, "P² + A²", PI * (p * q - a * w), p2a2, tol)?.copysign(phi);
    Ok((x, y))
}

fn vandg_fwd_x(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(VANDG.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(VANDG.name, lon, tol)?, p.lon_0);
    let (x, _) = vandg_planar(lat, lonr, tol)?;
    check_planar(VANDG.name, "x", p.r * x + p.x_0, tol)
}

fn vandg_fwd_y(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(VANDG.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(VANDG.name, lon, tol)?, p.lon_0);
    let (_, y) = vandg_planar(lat, lonr, tol)?;
    check_planar(VANDG.name, "y", p.r * y + p.y_0, tol)
}

// Planar coordinates scaled to Snyder's X and Y, in units of π·R.
fn vandg_normalized(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<(f64, f64), Error> {
    check_planar(VANDG.name, "x", x, tol)?;
    check_planar(VANDG.name, "y", y, tol)?;
    let xn = guarded_div(VANDG.name, "π·r", x - p.x_0, PI * p.r, tol)?;
    let yn = guarded_div(VANDG.name, "π·r", y - p.y_0, PI * p.r, tol)?;
    Ok((xn, yn))
}

fn vandg_inv_lat(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let (xn, yn) = vandg_normalized(x, y, p, tol)?;

    if yn.abs() < tol.min_float {
        return Ok(0.);
    }

    // Snyder eq. 33-19..33-26: the latitude is a root of a cubic in
    // sin(lat), taken by the trigonometric method
    let r2 = xn * xn + yn * yn;
    let c1 = -yn.abs() * (1. + r2);
    let c2 = c1 - 2. * yn * yn + xn * xn;
    let c3 = -2. * c1 + 1. + 2. * yn * yn + r2 * r2;

    let d = yn * yn / c3 + (2. * c2 * c2 * c2 / (c3 * c3 * c3) - 9. * c1 * c2 / (c3 * c3)) / 27.;
    let a1 = guarded_div(VANDG.name, "c3", c1 - c2 * c2 / (3. * c3), c3, tol)?;
    let m1 = 2. * guarded_sqrt(VANDG.name, "-a1/3", -a1 / 3., tol)?;
    let arg = guarded_div(VANDG.name, "a1·m1", 3. * d, a1 * m1, tol)?;
    let theta1 = clamped_acos(VANDG.name, "cos 3θ1", arg, tol)? / 3.;

    let lat = (PI * (-m1 * (theta1 + PI / 3.).cos() - c2 / (3. * c3))).copysign(yn) * RO;
    validated_lat(VANDG.name, lat, tol)
}

fn vandg_inv_lon(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let (xn, yn) = vandg_normalized(x, y, p, tol)?;

    if xn.abs() < tol.min_float {
        return validated_lon(VANDG.name, red_lon0(0., -p.lon_0), tol);
    }

    let r2 = xn * xn + yn * yn;
    let root = guarded_sqrt(
        VANDG.name,
        "radicand",
        1. + 2. * (xn * xn - yn * yn) + r2 * r2,
        tol,
    )?;
    let lonr = guarded_div(VANDG.name, "2X", PI * (r2 - 1. + root), 2. * xn, tol)? * RO;
    validated_lon(VANDG.name, red_lon0(lonr, -p.lon_0), tol)
}

// ----- A R M A D I L L O -------------------------------------------------------------

/// Armadillo (Raisz). An orthographic view of a torus-like surface,
/// tilted 20°; the far side of the surface is hidden, so latitudes below
/// the longitude-dependent visibility limit have no image. The inverse
/// solves a quartic in tan(lat/2) and back-substitutes every real root to
/// pick the one on the visible sheet.
pub const ARMAD: Formula = Formula {
    name: "armad",
    fwd_x: armad_fwd_x,
    fwd_y: armad_fwd_y,
    inv_lat: armad_inv_lat,
    inv_lon: armad_inv_lon,
};

// Tilt of the torus axis against the plane of projection.
const ARMAD_TILT: f64 = 20.;

// sin and cos of the tilt, and the northing offset centering the image.
fn armad_constants() -> (f64, f64, f64) {
    let s = (ARMAD_TILT / RO).sin();
    let c = (ARMAD_TILT / RO).cos();
    (s, c, (1. + s - c) / 2.)
}

/// Southernmost visible latitude at a given reduced longitude, both in
/// degrees. At the central meridian this is -70°; towards ±180° it rises
/// to 20° - 90°.
pub fn armad_limit(lonr: f64) -> f64 {
    -((lonr / RO / 2.).cos() / (ARMAD_TILT / RO).tan()).atan() * RO
}

// Unit-sphere planar coordinates, after the visibility check.
fn armad_planar(lat: f64, lonr: f64, tol: &Tolerances) -> Result<(f64, f64), Error> {
    if lat < armad_limit(lonr) - tol.max_angular_diff {
        return Err(Error::Domain {
            formula: ARMAD.name,
            quantity: "latitude",
            value: lat,
        });
    }

    let (s, c, k0) = armad_constants();
    let phi = lat / RO;
    let half = lonr / RO / 2.;
    let x = (1. + phi.cos()) * half.sin();
    let y = k0 + phi.sin() * c - (1. + phi.cos()) * s * half.cos();
    Ok((x, y))
}

fn armad_fwd_x(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(ARMAD.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(ARMAD.name, lon, tol)?, p.lon_0);
    let (x, _) = armad_planar(lat, lonr, tol)?;
    check_planar(ARMAD.name, "x", p.r * x + p.x_0, tol)
}

fn armad_fwd_y(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(ARMAD.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(ARMAD.name, lon, tol)?, p.lon_0);
    let (_, y) = armad_planar(lat, lonr, tol)?;
    check_planar(ARMAD.name, "y", p.r * y + p.y_0, tol)
}

// Eliminating the longitude from the two forward equations and
// substituting u = tan(lat/2) leaves one quartic whose real roots are the
// candidate latitudes. Squaring loses the sign of cos(lon/2), and the
// hidden sheet of the surface projects onto the visible one, so each root
// is screened: the latitude must be geographic, the recovered sin(lon/2)
// must be in range, the candidate must lie on the visible sheet, and the
// forward northing must reproduce the input. Among the survivors the
// smallest northing residual wins, ties going to the root of smallest
// magnitude.
fn armad_geographic(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<(f64, f64), Error> {
    check_planar(ARMAD.name, "x", x, tol)?;
    check_planar(ARMAD.name, "y", y, tol)?;
    let (s, c, k0) = armad_constants();
    let xn = guarded_div(ARMAD.name, "r", x - p.x_0, p.r, tol)?;
    let yn = guarded_div(ARMAD.name, "r", y - p.y_0, p.r, tol)? - k0;

    let e = yn * yn + xn * xn * s * s;
    let roots = quartic_real_roots(
        e,
        -4. * yn * c,
        2. * e + 4. * c * c,
        -4. * yn * c,
        e - 4. * s * s,
    );

    let mut best: Option<(f64, f64, f64, f64)> = None;
    for u in roots {
        let lat = 2. * u.atan() * RO;
        if lat.abs() > 90. + tol.argument_round_error {
            continue;
        }
        let sin_half = xn * (1. + u * u) / 2.;
        if sin_half.abs() > 1. + tol.argument_round_error {
            continue;
        }
        let lonr = 2. * sin_half.clamp(-1., 1.).asin() * RO;
        if lat < armad_limit(lonr) - tol.argument_round_error {
            continue;
        }

        let phi = lat / RO;
        let fy = k0 + phi.sin() * c - (1. + phi.cos()) * s * (lonr / RO / 2.).cos();
        let residual = (fy - (yn + k0)).abs();
        if residual > tol.argument_round_error {
            continue;
        }
        let better = match best {
            None => true,
            Some((r, u0, ..)) => residual < r || (residual == r && u.abs() < u0.abs()),
        };
        if better {
            best = Some((residual, u, lat, lonr));
        }
    }

    match best {
        Some((_, _, lat, lonr)) => Ok((lat.clamp(-90., 90.), lonr)),
        None => Err(Error::Domain {
            formula: ARMAD.name,
            quantity: "quartic root",
            value: yn,
        }),
    }
}

fn armad_inv_lat(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let (lat, _) = armad_geographic(x, y, p, tol)?;
    validated_lat(ARMAD.name, lat, tol)
}

fn armad_inv_lon(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let (_, lonr) = armad_geographic(x, y, p, tol)?;
    validated_lon(ARMAD.name, red_lon0(lonr, -p.lon_0), tol)
}

// ----- P E I R C E   Q U I N C U N C I A L -------------------------------------------

/// Peirce quincuncial, north-polar square aspect, through the incomplete
/// elliptic integral F(φ, 1/√2). The forward map is even in the latitude:
/// both hemispheres fold onto the same square, and the inverse returns
/// the northern preimage.
pub const PEIRCE: Formula = Formula {
    name: "peirce",
    fwd_x: peirce_fwd_x,
    fwd_y: peirce_fwd_y,
    inv_lat: peirce_inv_lat,
    inv_lon: peirce_inv_lon,
};

// Elliptic modulus of the quincuncial construction.
const MODULUS: f64 = FRAC_1_SQRT_2;

// Quadrature tolerance for the elliptic integrals.
const ELLIPTIC_TOL: f64 = 1e-14;

// Unit-sphere planar coordinates, Adams' real-valued form of the conformal
// construction: two auxiliary spherical angles a and b carry the point,
// and the elliptic amplitudes m and n satisfy cos(a+b) = -cos 2m,
// cos(a-b) = cos 2n. The |·| under the square roots absorbs marginal
// negatives from rounding.
fn peirce_planar(lat: f64, lonr: f64, tol: &Tolerances) -> Result<(f64, f64), Error> {
    let phi = lat / RO;
    let lam = lonr / RO;
    let (sl, cl) = (lam.sin(), lam.cos());
    let cp = phi.cos();

    let a = clamped_acos(PEIRCE.name, "cos a", cp * (sl + cl) * FRAC_1_SQRT_2, tol)?;
    let b = clamped_acos(PEIRCE.name, "cos b", cp * (sl - cl) * FRAC_1_SQRT_2, tol)?;

    let m = clamped_asin(
        PEIRCE.name,
        "sin m",
        (1. + (a + b).cos()).abs().sqrt() / SQRT_2,
        tol,
    )?;
    let n = clamped_asin(
        PEIRCE.name,
        "sin n",
        (1. - (a - b).cos()).abs().sqrt() / SQRT_2,
        tol,
    )?;

    let x = elliptic_f(m, MODULUS, ELLIPTIC_TOL) * if sl < 0. { -1. } else { 1. };
    let y = elliptic_f(n, MODULUS, ELLIPTIC_TOL) * if cl < 0. { -1. } else { 1. };
    Ok((x, y))
}

fn peirce_fwd_x(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(PEIRCE.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(PEIRCE.name, lon, tol)?, p.lon_0);
    let (x, _) = peirce_planar(lat, lonr, tol)?;
    check_planar(PEIRCE.name, "x", p.r * x + p.x_0, tol)
}

fn peirce_fwd_y(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(PEIRCE.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(PEIRCE.name, lon, tol)?, p.lon_0);
    let (_, y) = peirce_planar(lat, lonr, tol)?;
    check_planar(PEIRCE.name, "y", p.r * y + p.y_0, tol)
}

// Jacobi amplitude: inverts F(θ, k) = rho by Newton-Raphson. F is strictly
// increasing with derivative 1/√(1 - k²·sin²θ) ≥ 1, so the scaled linear
// guess converges in a handful of steps.
fn peirce_amplitude(rho: f64, quarter: f64, tol: &Tolerances) -> f64 {
    let k2 = MODULUS * MODULUS;
    newton_raphson(
        |t| elliptic_f(t, MODULUS, ELLIPTIC_TOL) - rho,
        |t| {
            let s = t.sin();
            1. / (1. - k2 * s * s).sqrt()
        },
        rho * FRAC_PI_2 / quarter,
        tol.max_nr_iterations,
        tol.max_nr_error,
    )
    .root
}

fn peirce_geographic(
    x: f64,
    y: f64,
    p: &Parameters,
    tol: &Tolerances,
) -> Result<(f64, f64), Error> {
    check_planar(PEIRCE.name, "x", x, tol)?;
    check_planar(PEIRCE.name, "y", y, tol)?;
    let dx = x - p.x_0;
    let dy = y - p.y_0;
    let rx = guarded_div(PEIRCE.name, "r", dx.abs(), p.r, tol)?;
    let ry = guarded_div(PEIRCE.name, "r", dy.abs(), p.r, tol)?;

    // Nothing maps beyond the complete integral K(1/√2)
    let quarter = elliptic_f(FRAC_PI_2, MODULUS, ELLIPTIC_TOL);
    if rx > quarter + tol.argument_round_error {
        return Err(Error::Domain {
            formula: PEIRCE.name,
            quantity: "easting amplitude",
            value: rx,
        });
    }
    if ry > quarter + tol.argument_round_error {
        return Err(Error::Domain {
            formula: PEIRCE.name,
            quantity: "northing amplitude",
            value: ry,
        });
    }

    // The center of the square is the pole
    if rx.hypot(ry) < tol.max_angular_diff {
        return Ok((90., 0.));
    }

    let m = peirce_amplitude(rx, quarter, tol);
    let n = peirce_amplitude(ry, quarter, tol);

    let sum = PI - 2. * m;
    let diff = if dy < 0. { 2. * n } else { -2. * n };
    let a = (sum + diff) / 2.;
    let b = (sum - diff) / 2.;

    // cos(lat)·|sin(lonr)| and cos(lat)·cos(lonr)
    let s = (a.cos() + b.cos()) * FRAC_1_SQRT_2;
    let c = (a.cos() - b.cos()) * FRAC_1_SQRT_2;

    let lat = clamped_acos(PEIRCE.name, "cos lat", s.hypot(c), tol)? * RO;
    let lonr = s.atan2(c) * RO * if dx < 0. { -1. } else { 1. };
    Ok((lat, lonr))
}

fn peirce_inv_lat(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let (lat, _) = peirce_geographic(x, y, p, tol)?;
    validated_lat(PEIRCE.name, lat, tol)
}

fn peirce_inv_lon(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let (_, lonr) = peirce_geographic(x, y, p, tol)?;
    validated_lon(PEIRCE.name, red_lon0(lonr, -p.lon_0), tol)
}

// ----- T E S T S ---------------------------------------------------------------------
