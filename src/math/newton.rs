use log::warn;

/// Outcome of a Newton-Raphson run. The root is the last iterate whether
/// or not the step tolerance was reached within the iteration cap: the
/// solver is best-effort by design, and callers needing strict guarantees
/// inspect `converged` and `iterations` instead of trusting the value
/// blindly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewtonResult {
    pub root: f64,
    pub iterations: u32,
    pub converged: bool,
}

/// Solve h(θ) = 0 by Newton-Raphson: θ ← θ - h(θ)/h′(θ), starting from
/// `guess`, stopping once |Δθ| < `tolerance` or after `max_iterations`
/// steps.
///
/// Used wherever a projection defines an auxiliary angle implicitly, e.g.
/// Mollweide's 2θ + sin 2θ = π·sin(lat), and for inverting the elliptic
/// amplitude. Keeping the derivative away from zero is the caller's
/// obligation; the iteration itself is not guarded.
pub fn newton_raphson(
    h: impl Fn(f64) -> f64,
    dh: impl Fn(f64) -> f64,
    guess: f64,
    max_iterations: u32,
    tolerance: f64,
) -> NewtonResult {
    let mut theta = guess;

    for iterations in 1..=max_iterations {
        let step = h(theta) / dh(theta);
        theta -= step;
        if step.abs() < tolerance {
            return NewtonResult {
                root: theta,
                iterations,
                converged: true,
            };
        }
    }

    warn!("newton_raphson: no convergence after {max_iterations} iterations (last iterate {theta})");
    NewtonResult {
        root: theta,
        iterations: max_iterations,
        converged: false,
    }
}

// ----- T E S T S ---------------------------------------------------------------------
