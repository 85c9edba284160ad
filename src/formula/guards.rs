//! The domain-validation discipline shared by every formula
//!
//! Four-rule discipline, applied identically regardless of algorithmic
//! pattern: planar inputs are overflow-checked before any computation,
//! inverse-trig arguments are clamped within the rounding slack and
//! rejected beyond it, divisors are magnitude-checked before the division,
//! and computed geographic coordinates are range-checked before being
//! returned. The clamp is the only locally recovered case; everything else
//! aborts the evaluation of that single point/projection pair.

use crate::Error;
use crate::Tolerances;

/// Fast overflow check: a supplied or computed planar coordinate whose
/// magnitude exceeds `max_float` fails immediately.
pub fn check_planar(
    formula: &'static str,
    quantity: &'static str,
    value: f64,
    tol: &Tolerances,
) -> Result<f64, Error> {
    if !value.is_finite() || value.abs() > tol.max_float {
        return Err(Error::Overflow {
            formula,
            quantity,
            value,
        });
    }
    Ok(value)
}

/// arcsin with the rounding-slack clamp: arguments within
/// `argument_round_error` of [-1, 1] snap to the nearer bound, anything
/// further out is a domain violation naming the offending quantity.
pub fn clamped_asin(
    formula: &'static str,
    quantity: &'static str,
    value: f64,
    tol: &Tolerances,
) -> Result<f64, Error> {
    Ok(clamped_argument(formula, quantity, value, tol)?.asin())
}

/// arccos with the rounding-slack clamp; see [`clamped_asin`].
pub fn clamped_acos(
    formula: &'static str,
    quantity: &'static str,
    value: f64,
    tol: &Tolerances,
) -> Result<f64, Error> {
    Ok(clamped_argument(formula, quantity, value, tol)?.acos())
}

fn clamped_argument(
    formula: &'static str,
    quantity: &'static str,
    value: f64,
    tol: &Tolerances,
) -> Result<f64, Error> {
    if value.abs() <= 1. {
        return Ok(value);
    }
    if value.abs() <= 1. + tol.argument_round_error {
        return Ok(1_f64.copysign(value));
    }
    Err(Error::Domain {
        formula,
        quantity,
        value,
    })
}

/// Division with the divisor's magnitude checked against `min_float`
/// before the division is attempted.
pub fn guarded_div(
    formula: &'static str,
    quantity: &'static str,
    numerator: f64,
    divisor: f64,
    tol: &Tolerances,
) -> Result<f64, Error> {
    if divisor.abs() < tol.min_float {
        return Err(Error::ZeroDivision {
            formula,
            quantity,
            value: divisor,
        });
    }
    Ok(numerator / divisor)
}

/// Square root with a rounding-slack clamp for marginally negative
/// radicands; materially negative ones are a domain violation.
pub fn guarded_sqrt(
    formula: &'static str,
    quantity: &'static str,
    radicand: f64,
    tol: &Tolerances,
) -> Result<f64, Error> {
    if radicand < 0. {
        if radicand >= -tol.argument_round_error {
            return Ok(0.);
        }
        return Err(Error::Domain {
            formula,
            quantity,
            value: radicand,
        });
    }
    Ok(radicand.sqrt())
}

/// Output-range validation for computed latitudes: marginal excess over
/// ±90° clamps, material excess is a domain violation.
pub fn validated_lat(formula: &'static str, lat: f64, tol: &Tolerances) -> Result<f64, Error> {
    validated_angle(formula, "latitude", lat, 90., tol)
}

/// Output-range validation for computed longitudes against ±180°.
pub fn validated_lon(formula: &'static str, lon: f64, tol: &Tolerances) -> Result<f64, Error> {
    validated_angle(formula, "longitude", lon, 180., tol)
}

fn validated_angle(
    formula: &'static str,
    quantity: &'static str,
    value: f64,
    bound: f64,
    tol: &Tolerances,
) -> Result<f64, Error> {
    if !value.is_finite() {
        return Err(Error::Domain {
            formula,
            quantity,
            value,
        });
    }
    if value.abs() <= bound {
        return Ok(value);
    }
    if value.abs() <= bound + tol.max_angular_diff {
        return Ok(bound.copysign(value));
    }
    Err(Error::Domain {
        formula,
        quantity,
        value,
    })
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: Tolerances = Tolerances::DEFAULT;

    #[test]
    fn clamp_idempotence() -> Result<(), Error> {
        // 1 + 1e-15 must clamp to exactly 1.0 and proceed, not fail
        let theta = clamped_asin("test", "argument", 1. + 1e-15, &TOL)?;
        assert_eq!(theta, std::f64::consts::FRAC_PI_2);

        let theta = clamped_acos("test", "argument", -1. - 1e-15, &TOL)?;
        assert_eq!(theta, std::f64::consts::PI);
        Ok(())
    }

    #[test]
    fn clamp_rejects_beyond_the_slack() {
        let e = clamped_asin("test", "argument", 1.1, &TOL).unwrap_err();
        assert!(matches!(e, Error::Domain { quantity: "argument", .. }));
    }

    #[test]
    fn division_guard() {
        assert_eq!(guarded_div("test", "divisor", 1., 2., &TOL), Ok(0.5));
        let e = guarded_div("test", "divisor", 1., 1e-16, &TOL).unwrap_err();
        assert!(matches!(e, Error::ZeroDivision { .. }));
    }

    #[test]
    fn sqrt_guard() {
        assert_eq!(guarded_sqrt("test", "radicand", 4., &TOL), Ok(2.));
        assert_eq!(guarded_sqrt("test", "radicand", -1e-9, &TOL), Ok(0.));
        assert!(guarded_sqrt("test", "radicand", -1., &TOL).is_err());
    }

    #[test]
    fn output_ranges() {
        assert_eq!(validated_lat("test", 90. + 1e-9, &TOL), Ok(90.));
        assert!(validated_lat("test", 91., &TOL).is_err());
        assert_eq!(validated_lon("test", -180., &TOL), Ok(-180.));
        assert!(validated_lon("test", 181., &TOL).is_err());
        assert!(validated_lat("test", f64::NAN, &TOL).is_err());
    }

    #[test]
    fn overflow_check() {
        assert!(check_planar("test", "x", 1e16, &TOL).is_err());
        assert!(check_planar("test", "x", f64::INFINITY, &TOL).is_err());
        assert_eq!(check_planar("test", "x", 1e6, &TOL), Ok(1e6));
    }
}
