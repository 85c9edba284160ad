//! Cylindrical exemplars: Equidistant Cylindrical and Mercator (sphere)
use crate::authoring::*;

// ----- E Q U I D I S T A N T   C Y L I N D R I C A L ---------------------------------

/// Equidistant Cylindrical (Plate Carrée when lat_1 = 0). Closed forms in
/// both directions; the first standard parallel scales the easting.
pub const EQC: Formula = Formula {
    name: "eqc",
    fwd_x: eqc_fwd_x,
    fwd_y: eqc_fwd_y,
    inv_lat: eqc_inv_lat,
    inv_lon: eqc_inv_lon,
};

fn eqc_fwd_x(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    validated_lat(EQC.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(EQC.name, lon, tol)?, p.lon_0);
    let x = p.r * (p.lat_1 / RO).cos() * lonr / RO + p.x_0;
    check_planar(EQC.name, "x", x, tol)
}

fn eqc_fwd_y(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    validated_lat(EQC.name, lat, tol)?;
    validated_lon(EQC.name, lon, tol)?;
    let y = p.r * lat / RO + p.y_0;
    check_planar(EQC.name, "y", y, tol)
}

fn eqc_inv_lat(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    check_planar(EQC.name, "x", x, tol)?;
    check_planar(EQC.name, "y", y, tol)?;
    let lat = guarded_div(EQC.name, "r", (y - p.y_0) * RO, p.r, tol)?;
    validated_lat(EQC.name, lat, tol)
}

fn eqc_inv_lon(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    check_planar(EQC.name, "x", x, tol)?;
    check_planar(EQC.name, "y", y, tol)?;
    let denom = p.r * (p.lat_1 / RO).cos();
    let lonr = guarded_div(EQC.name, "r·cos(lat_1)", (x - p.x_0) * RO, denom, tol)?;
    validated_lon(EQC.name, red_lon0(lonr, -p.lon_0), tol)
}

// ----- M E R C A T O R ---------------------------------------------------------------

/// Mercator on the sphere, scaled by the first standard parallel. The
/// poles are rejected: the isometric northing diverges there.
pub const MERC: Formula = Formula {
    name: "merc",
    fwd_x: merc_fwd_x,
    fwd_y: merc_fwd_y,
    inv_lat: merc_inv_lat,
    inv_lon: merc_inv_lon,
};

fn merc_fwd_x(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    validated_lat(MERC.name, lat, tol)?;
    let lonr = red_lon0(validated_lon(MERC.name, lon, tol)?, p.lon_0);
    let x = p.r * (p.lat_1 / RO).cos() * lonr / RO + p.x_0;
    check_planar(MERC.name, "x", x, tol)
}

fn merc_fwd_y(lat: f64, lon: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    let lat = validated_lat(MERC.name, lat, tol)?;
    validated_lon(MERC.name, lon, tol)?;

    // The projection diverges at the poles
    if 90. - lat.abs() < tol.max_angular_diff {
        return Err(Error::Domain {
            formula: MERC.name,
            quantity: "latitude",
            value: lat,
        });
    }

    let psi = (FRAC_PI_2 / 2. + lat / RO / 2.).tan().ln();
    let y = p.r * (p.lat_1 / RO).cos() * psi + p.y_0;
    check_planar(MERC.name, "y", y, tol)
}

fn merc_inv_lat(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    check_planar(MERC.name, "x", x, tol)?;
    check_planar(MERC.name, "y", y, tol)?;
    let denom = p.r * (p.lat_1 / RO).cos();
    let psi = guarded_div(MERC.name, "r·cos(lat_1)", y - p.y_0, denom, tol)?;
    let lat = (2. * psi.exp().atan() - FRAC_PI_2) * RO;
    validated_lat(MERC.name, lat, tol)
}

fn merc_inv_lon(x: f64, y: f64, p: &Parameters, tol: &Tolerances) -> Result<f64, Error> {
    check_planar(MERC.name, "x", x, tol)?;
    check_planar(MERC.name, "y", y, tol)?;
    let denom = p.r * (p.lat_1 / RO).cos();
    let lonr = guarded_div(MERC.name, "r·cos(lat_1)", (x - p.x_0) * RO, denom, tol)?;
    validated_lon(MERC.name, red_lon0(lonr, -p.lon_0), tol)
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    const TOL: Tolerances = Tolerances::DEFAULT;

    #[test]
    fn eqc_unit_sphere() -> Result<(), Error> {
        // Unit sphere, lat_1 = 0, lon_0 = 0: forward(45, 90) = (π/2, π/4)
        let p = Parameters::default();
        let (x, y) = EQC.forward(45., 90., &p, &TOL)?;
        assert_float_eq!(x, FRAC_PI_2, abs <= 1e-6);
        assert_float_eq!(y, FRAC_PI_2 / 2., abs <= 1e-6);

        let (lat, lon) = EQC.inverse(1.570796, 0.785398, &p, &TOL)?;
        assert_float_eq!(lat, 45., abs <= 1e-4);
        assert_float_eq!(lon, 90., abs <= 1e-4);
        Ok(())
    }

    #[test]
    fn eqc_standard_parallel_and_false_origin() -> Result<(), Error> {
        let p = Parameters {
            lat_1: 60.,
            lon_0: 10.,
            x_0: 100.,
            y_0: -50.,
            ..Default::default()
        };
        let (x, y) = EQC.forward(55., 12., &p, &TOL)?;
        // cos 60° = 1/2 halves the easting
        assert_float_eq!(x, 0.5 * (2. / RO) + 100., abs <= 1e-12);
        assert_float_eq!(y, 55. / RO - 50., abs <= 1e-12);

        let (lat, lon) = EQC.inverse(x, y, &p, &TOL)?;
        assert_float_eq!(lat, 55., abs <= 1e-9);
        assert_float_eq!(lon, 12., abs <= 1e-9);
        Ok(())
    }

    #[test]
    fn eqc_rejects_overflowing_planar_input() {
        let p = Parameters::default();
        let e = EQC.inverse(1e16, 0., &p, &TOL).unwrap_err();
        assert!(matches!(e, Error::Overflow { .. }));
    }

    #[test]
    fn merc_matches_the_gudermannian_form() -> Result<(), Error> {
        // ln tan(π/4 + φ/2) is the inverse Gudermannian asinh(tan φ)
        let p = Parameters::default();
        let (x, y) = MERC.forward(55., 12., &p, &TOL)?;
        assert_float_eq!(x, 12. / RO, abs <= 1e-12);
        assert_float_eq!(y, (55_f64 / RO).tan().asinh(), abs <= 1e-12);

        let (lat, lon) = MERC.inverse(x, y, &p, &TOL)?;
        assert_float_eq!(lat, 55., abs <= 1e-9);
        assert_float_eq!(lon, 12., abs <= 1e-9);
        Ok(())
    }

    #[test]
    fn merc_rejects_the_poles() {
        let p = Parameters::default();
        assert!(matches!(
            MERC.forward(90., 0., &p, &TOL),
            Err(Error::Domain { .. })
        ));
        assert!(matches!(
            MERC.forward(-90., 10., &p, &TOL),
            Err(Error::Domain { .. })
        ));
    }

    #[test]
    fn merc_quadrants() -> Result<(), Error> {
        let p = Parameters::default();
        let (x, y) = MERC.forward(1., 2., &p, &TOL)?;
        for &(lat, lon, sx, sy) in
            &[(1., -2., -1., 1.), (-1., 2., 1., -1.), (-1., -2., -1., -1.)]
        {
            let (qx, qy) = MERC.forward(lat, lon, &p, &TOL)?;
            assert_float_eq!(qx, sx * x, abs <= 1e-12);
            assert_float_eq!(qy, sy * y, abs <= 1e-12);
        }
        Ok(())
    }
}
