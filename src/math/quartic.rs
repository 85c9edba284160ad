//! Real roots of quadratic, cubic and quartic polynomials, in closed form.
//!
//! The quartic solver follows the classic Ferrari construction: depress
//! the quartic, split it through a real root of the resolvent cubic, and
//! read the roots off two quadratics. Complex roots are discarded, not
//! approximated; the returned roots are sorted ascending with near-equal
//! duplicates merged.

// Relative threshold for treating a coefficient or discriminant as zero.
const EPS: f64 = 1e-12;

/// Real roots of a·x² + b·x + c.
pub fn quadratic_real_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    let scale = a.abs().max(b.abs()).max(c.abs()).max(1.);
    if a.abs() < EPS * scale {
        if b.abs() < EPS * scale {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let mut disc = b * b - 4. * a * c;
    if disc < 0. {
        // A marginally negative discriminant is a grazing double root
        if disc > -EPS * scale * scale {
            disc = 0.;
        } else {
            return Vec::new();
        }
    }

    let sq = disc.sqrt();
    finalize(vec![(-b - sq) / (2. * a), (-b + sq) / (2. * a)])
}

/// Real roots of a·x³ + b·x² + c·x + d (one or three, counted without
/// multiplicity).
pub fn cubic_real_roots(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    let scale = a.abs().max(b.abs()).max(c.abs()).max(d.abs()).max(1.);
    if a.abs() < EPS * scale {
        return quadratic_real_roots(b, c, d);
    }

    // Depress: x = t - b/(3a) turns the cubic into t³ + p·t + q
    let shift = b / (3. * a);
    let p = c / a - 3. * shift * shift;
    let q = 2. * shift * shift * shift - shift * c / a + d / a;

    let disc = (q / 2.) * (q / 2.) + (p / 3.) * (p / 3.) * (p / 3.);

    if disc > EPS {
        // One real root, two complex conjugates
        let sq = disc.sqrt();
        let t = (-q / 2. + sq).cbrt() + (-q / 2. - sq).cbrt();
        return vec![t - shift];
    }

    if p >= -EPS {
        // disc ≤ 0 with p ≈ 0 forces q ≈ 0: a (near-)triple root
        let t = (-q).cbrt();
        return vec![t - shift];
    }

    // Three real roots, by the trigonometric method
    let m = 2. * (-p / 3.).sqrt();
    let arg = (3. * q / (p * m)).clamp(-1., 1.);
    let theta = arg.acos() / 3.;

    let mut roots = Vec::with_capacity(3);
    for k in 0..3 {
        let t = m * (theta - f64::from(k) * 2. * std::f64::consts::PI / 3.).cos();
        roots.push(t - shift);
    }
    finalize(roots)
}

/// Real roots of a·x⁴ + b·x³ + c·x² + d·x + e (0 to 4 elements).
///
/// A vanishing leading coefficient degrades to the cubic solver, a
/// vanishing depressed linear term takes the biquadratic shortcut, and
/// the general case goes through the resolvent cubic.
pub fn quartic_real_roots(a: f64, b: f64, c: f64, d: f64, e: f64) -> Vec<f64> {
    let scale = a
        .abs()
        .max(b.abs())
        .max(c.abs())
        .max(d.abs())
        .max(e.abs())
        .max(1.);
    if a.abs() < EPS * scale {
        return cubic_real_roots(b, c, d, e);
    }

    // Monic coefficients, then depress: x = y - B/4 gives y⁴ + p·y² + q·y + r
    let bb = b / a;
    let cc = c / a;
    let dd = d / a;
    let ee = e / a;
    let shift = bb / 4.;

    let p = cc - 3. * bb * bb / 8.;
    let q = dd - bb * cc / 2. + bb * bb * bb / 8.;
    let r = ee - bb * dd / 4. + bb * bb * cc / 16. - 3. * bb * bb * bb * bb / 256.;

    let mut roots = Vec::with_capacity(4);

    if q.abs() < EPS * scale {
        // Biquadratic: z² + p·z + r with z = y²
        for z in quadratic_real_roots(1., p, r) {
            if z < -EPS {
                continue;
            }
            let y = z.max(0.).sqrt();
            roots.push(polish(a, b, c, d, e, y - shift));
            roots.push(polish(a, b, c, d, e, -y - shift));
        }
        return finalize(roots);
    }

    // Resolvent cubic 8m³ + 8p·m² + (2p² - 8r)·m - q² = 0. Since the
    // left side is -q² < 0 at m = 0, a positive real root always exists;
    // take the largest.
    let resolvent = cubic_real_roots(8., 8. * p, 2. * p * p - 8. * r, -q * q);
    let Some(m) = resolvent.into_iter().fold(None, |acc: Option<f64>, root| {
        Some(acc.map_or(root, |best| best.max(root)))
    }) else {
        return roots;
    };
    if m <= 0. {
        return roots;
    }

    // y⁴ + p·y² + q·y + r = (y² - t·y + s₁)(y² + t·y + s₂)
    let t = (2. * m).sqrt();
    let s1 = p / 2. + m + q / (2. * t);
    let s2 = p / 2. + m - q / (2. * t);

    for y in quadratic_real_roots(1., -t, s1) {
        roots.push(polish(a, b, c, d, e, y - shift));
    }
    for y in quadratic_real_roots(1., t, s2) {
        roots.push(polish(a, b, c, d, e, y - shift));
    }
    finalize(roots)
}

// A few Newton steps against the original coefficients. The monic
// normalization can inflate the depressed coefficients by many orders of
// magnitude when the leading coefficient is small, and the closed-form
// roots then carry the amplified rounding error.
fn polish(a: f64, b: f64, c: f64, d: f64, e: f64, mut x: f64) -> f64 {
    for _ in 0..3 {
        let f = (((a * x + b) * x + c) * x + d) * x + e;
        let df = ((4. * a * x + 3. * b) * x + 2. * c) * x + d;
        if df.abs() < f64::MIN_POSITIVE {
            break;
        }
        let step = f / df;
        x -= step;
        if step.abs() <= 1e-14 * (1. + x.abs()) {
            break;
        }
    }
    x
}

// Sort ascending and merge near-equal duplicates.
fn finalize(mut roots: Vec<f64>) -> Vec<f64> {
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    roots.dedup_by(|a, b| (*a - *b).abs() < 1e-7 * (1. + b.abs()));
    roots
}

// ----- T E S T S ---------------------------------------------------------------------
