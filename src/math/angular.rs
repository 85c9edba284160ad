/// Degrees per radian. All public interfaces of the crate speak degrees;
/// internal trigonometry divides by RO on the way in and multiplies on the
/// way out.
pub const RO: f64 = 57.295_779_513_082_32;

/// Reduce `lon` relative to the central meridian `lon_0`, normalizing the
/// result to the half-open interval (-180°, 180°].
///
/// The inverse path of a projection reconstructs the absolute longitude
/// from a reduced one by calling this with the *negated* central meridian:
/// `red_lon0(lonr, -lon_0)`.
pub fn red_lon0(lon: f64, lon_0: f64) -> f64 {
    let reduced = (lon - lon_0 + 180.).rem_euclid(360.) - 180.;
    if reduced == -180. {
        return 180.;
    }
    reduced
}

/// Normalize an arbitrary angle in degrees to [-180°, 180°).
pub fn normalize_symmetric(angle: f64) -> f64 {
    (angle + 180.).rem_euclid(360.) - 180.
}

// ----- T E S T S ---------------------------------------------------------------------
