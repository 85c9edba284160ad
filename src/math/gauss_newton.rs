use log::warn;

/// Iteration cap for the 2×2 Gauss-Newton solver. The cap is the only
/// termination mechanism: there is no wall-clock timeout.
pub const MAX_ITERATIONS: u32 = 5;

/// Early-stop threshold, in degrees, for both components of the update.
pub const STEP_TOLERANCE: f64 = 1e-4;

/// Outcome of a Gauss-Newton run: the final iterate, the iteration count,
/// whether the step tolerance was reached, and the final residual sum of
/// squares. As with the one-variable solver, the iterate is returned even
/// when not converged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution2D {
    pub lat: f64,
    pub lon: f64,
    pub iterations: u32,
    pub converged: bool,
    pub residual: f64,
}

/// Solve the coupled system {rx(lat,lon) = 0, ry(lat,lon) = 0} by
/// Gauss-Newton, where the residuals are a projection's forward equations
/// evaluated against a target planar point.
///
/// `jacobian` returns [[∂rx/∂lat, ∂rx/∂lon], [∂ry/∂lat, ∂ry/∂lon]], and
/// `residuals` returns (rx, ry), both at a (lat, lon) in degrees. The
/// normal-equation update Δ = -(JᵗJ)⁻¹Jᵗr is applied for at most
/// [`MAX_ITERATIONS`] rounds, stopping early once both components of Δ
/// fall below [`STEP_TOLERANCE`] degrees. A singular normal matrix
/// (determinant magnitude below `min_float`) stops the iteration where it
/// stands.
pub fn gauss_newton(
    jacobian: impl Fn(f64, f64) -> [[f64; 2]; 2],
    residuals: impl Fn(f64, f64) -> (f64, f64),
    lat_guess: f64,
    lon_guess: f64,
    min_float: f64,
) -> Solution2D {
    let (mut lat, mut lon) = (lat_guess, lon_guess);
    let mut iterations = 0;
    let mut converged = false;

    for i in 1..=MAX_ITERATIONS {
        iterations = i;
        let j = jacobian(lat, lon);
        let (rx, ry) = residuals(lat, lon);

        // Normal matrix JᵗJ and gradient Jᵗr
        let a = j[0][0] * j[0][0] + j[1][0] * j[1][0];
        let b = j[0][0] * j[0][1] + j[1][0] * j[1][1];
        let d = j[0][1] * j[0][1] + j[1][1] * j[1][1];
        let g1 = j[0][0] * rx + j[1][0] * ry;
        let g2 = j[0][1] * rx + j[1][1] * ry;

        let det = a * d - b * b;
        if det.abs() < min_float {
            warn!("gauss_newton: singular normal matrix at ({lat}, {lon})");
            break;
        }

        let dlat = -(d * g1 - b * g2) / det;
        let dlon = -(a * g2 - b * g1) / det;
        lat += dlat;
        lon += dlon;

        if dlat.abs() < STEP_TOLERANCE && dlon.abs() < STEP_TOLERANCE {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!("gauss_newton: no convergence after {iterations} iterations (last iterate ({lat}, {lon}))");
    }

    let (rx, ry) = residuals(lat, lon);
    Solution2D {
        lat,
        lon,
        iterations,
        converged,
        residual: rx * rx + ry * ry,
    }
}

// ----- T E S T S ---------------------------------------------------------------------
