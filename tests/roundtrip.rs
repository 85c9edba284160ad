//! Cross-formula behavior through the public API: round trips on
//! realistic parameter sets, and the uniformity of the evaluation
//! contract and the error taxonomy across all twelve formulas.

use float_eq::assert_float_eq;
use planisphere::formula::azimuthal::{AEQD, LAEA};
use planisphere::formula::conic::EQDC;
use planisphere::formula::cylindrical::{EQC, MERC};
use planisphere::formula::miscellaneous::{ARMAD, PEIRCE, VANDG};
use planisphere::formula::modified::{AITOFF, WINTRI};
use planisphere::formula::pseudocylindrical::{MOLL, SINU};
use planisphere::formula::{Formula, Parameters};
use planisphere::{Error, Tolerances};

const TOL: Tolerances = Tolerances::DEFAULT;

// An Earth-sized sphere with a central meridian and a false origin, the
// way the formulas are used in practice.
fn earthlike() -> Parameters {
    Parameters {
        r: 6_371_000.,
        lon_0: 9.,
        x_0: 500_000.,
        y_0: -200_000.,
        ..Default::default()
    }
}

fn roundtrip(
    formula: &Formula,
    p: &Parameters,
    points: &[(f64, f64)],
    tolerance: f64,
) -> Result<(), Error> {
    for &(lat, lon) in points {
        let (x, y) = formula.forward(lat, lon, p, &TOL)?;
        let (rlat, rlon) = formula.inverse(x, y, p, &TOL)?;
        assert_float_eq!(rlat, lat, abs <= tolerance);
        assert_float_eq!(rlon, lon, abs <= tolerance);
    }
    Ok(())
}

// ----- R O U N D   T R I P S ---------------------------------------------------------

#[test]
fn closed_form_inverses() -> Result<(), Error> {
    let p = earthlike();
    let global = [(0., 9.), (45., 70.), (-33.9, 151.2), (80., -120.), (-75., 178.)];

    roundtrip(&EQC, &p, &global, 1e-6)?;
    roundtrip(&MERC, &p, &global, 1e-6)?;
    roundtrip(&SINU, &p, &global, 1e-6)?;
    roundtrip(&AEQD, &p, &global, 1e-6)?;
    roundtrip(&VANDG, &p, &global, 1e-6)?;

    let conic = Parameters {
        lat_1: 30.,
        lat_2: 60.,
        ..earthlike()
    };
    roundtrip(&EQDC, &conic, &global, 1e-6)?;

    // Equatorial LAEA covers everything short of the antipode
    roundtrip(&LAEA, &p, &[(0., 9.), (52., 30.), (-35., -60.), (80., 100.)], 1e-6)
}

#[test]
fn newton_raphson_inverse() -> Result<(), Error> {
    roundtrip(
        &MOLL,
        &earthlike(),
        &[(0., 9.), (40.7, -74.), (-33.9, 151.2), (75., 10.), (-85., -170.)],
        1e-6,
    )
}

#[test]
fn gauss_newton_inverses() -> Result<(), Error> {
    // The 2D iteration stops at a 10⁻⁴ degree step, so the round trip is
    // held to that
    let p = earthlike();
    let points = [(0., 9.), (30., 69.), (-45., -51.), (60., 120.), (-20., -160.)];
    roundtrip(&AITOFF, &p, &points, 1e-4)?;

    let wintri = Parameters {
        lat_1: (2. / std::f64::consts::PI).acos() * 57.295_779_513_082_32,
        ..earthlike()
    };
    roundtrip(&WINTRI, &wintri, &points, 1e-4)
}

#[test]
fn quartic_and_elliptic_inverses() -> Result<(), Error> {
    let p = earthlike();

    // Armadillo: visible sheet only, down to the -70° limit near the
    // central meridian
    roundtrip(
        &ARMAD,
        &p,
        &[(30., 69.), (0., 9.), (-60., 4.), (80., 170.), (-40., -31.)],
        1e-6,
    )?;

    // Peirce: the inverse resolves the northern hemisphere
    roundtrip(
        &PEIRCE,
        &p,
        &[(45., 39.), (70., 29.), (30., -51.), (10., 109.), (60., -141.)],
        1e-6,
    )
}

// ----- C O N T R A C T ---------------------------------------------------------------

const ALL: [&Formula; 12] = [
    &EQC, &MERC, &SINU, &MOLL, &EQDC, &AEQD, &LAEA, &AITOFF, &WINTRI, &VANDG, &ARMAD, &PEIRCE,
];

#[test]
fn names_are_unique() {
    for (i, f) in ALL.iter().enumerate() {
        for g in &ALL[i + 1..] {
            assert_ne!(f.name, g.name);
        }
    }
}

#[test]
fn overflowing_planar_input_is_rejected_uniformly() {
    // Every inverse checks its planar inputs before computing anything
    let p = Parameters {
        lat_1: 30.,
        lat_2: 60.,
        ..Default::default()
    };
    for f in ALL {
        let e = f.inverse(1e16, 0., &p, &TOL).unwrap_err();
        assert!(matches!(e, Error::Overflow { .. }), "{}", f.name);

        let e = f.inverse(0., f64::NAN, &p, &TOL).unwrap_err();
        assert!(matches!(e, Error::Overflow { .. }), "{}", f.name);
    }
}

#[test]
fn geographic_input_beyond_range_is_rejected_uniformly() {
    let p = Parameters {
        lat_1: 30.,
        lat_2: 60.,
        ..Default::default()
    };
    for f in ALL {
        assert!(f.forward(91., 0., &p, &TOL).is_err(), "{}", f.name);
        assert!(f.forward(0., 200., &p, &TOL).is_err(), "{}", f.name);
    }
}

#[test]
fn errors_carry_the_offending_quantity() {
    let p = Parameters::default();

    // Mercator pole: domain violation on the latitude
    match MERC.forward(90., 0., &p, &TOL) {
        Err(Error::Domain {
            formula: "merc",
            quantity: "latitude",
            value,
        }) => assert_float_eq!(value, 90., abs <= 1e-12),
        other => panic!("unexpected result {other:?}"),
    }

    // LAEA antipode: zero division on the scaled denominator
    match LAEA.forward(0., 180., &p, &TOL) {
        Err(Error::ZeroDivision { formula: "laea", .. }) => (),
        other => panic!("unexpected result {other:?}"),
    }

    // EQDC with symmetric parallels: the cone constant vanishes
    let symmetric = Parameters {
        lat_1: -40.,
        lat_2: 40.,
        ..Default::default()
    };
    match EQDC.forward(10., 10., &symmetric, &TOL) {
        Err(Error::ZeroDivision {
            formula: "eqdc",
            quantity: "n",
            ..
        }) => (),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn failures_are_per_point_not_per_formula() -> Result<(), Error> {
    // A rejected point leaves the formula fully usable for the next one
    let p = Parameters::default();
    assert!(MERC.forward(90., 0., &p, &TOL).is_err());
    let (x, _) = MERC.forward(55., 12., &p, &TOL)?;
    assert_float_eq!(x, 12. / 57.295_779_513_082_32, abs <= 1e-12);
    Ok(())
}

#[test]
fn central_meridian_maps_to_the_easting_origin() -> Result<(), Error> {
    // On the central meridian every formula puts the easting at x_0
    let p = Parameters {
        lat_1: 30.,
        lat_2: 60.,
        lon_0: 25.,
        x_0: 1000.,
        ..Default::default()
    };
    for f in ALL {
        let (x, _) = f.forward(40., 25., &p, &TOL)?;
        assert_float_eq!(x, 1000., abs <= 1e-6);
    }
    Ok(())
}
