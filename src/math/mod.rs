//! The numerical toolkit shared by all projection formulas

/// Free functions for handling angles: degree/radian conversion and
/// longitude reduction relative to a central meridian.
pub mod angular;

/// Incomplete elliptic integral of the first kind, by adaptive quadrature.
pub mod elliptic;
pub use elliptic::elliptic_f;

/// Two-variable nonlinear least squares (Gauss-Newton), for projections
/// with no closed-form inverse.
pub mod gauss_newton;
pub use gauss_newton::gauss_newton;
pub use gauss_newton::Solution2D;

/// One-variable root finding (Newton-Raphson), for implicitly defined
/// auxiliary angles.
pub mod newton;
pub use newton::newton_raphson;
pub use newton::NewtonResult;

/// Real roots of quadratic, cubic and quartic polynomials in closed form.
pub mod quartic;
pub use quartic::cubic_real_roots;
pub use quartic::quartic_real_roots;
