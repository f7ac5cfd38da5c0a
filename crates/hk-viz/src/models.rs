//! Model densities for pull-plot overlays.

use hk_core::{Error, Result};

/// `1 / sqrt(2π)` (precomputed to keep this crate const-friendly).
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// PDF of a Normal distribution `N(mu, sigma)` at `x`.
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::Validation(format!("sigma must be finite and > 0, got {}", sigma)));
    }
    let z = (x - mu) / sigma;
    Ok(INV_SQRT_2PI / sigma * (-0.5 * z * z).exp())
}

/// A Normal density closure for [`crate::pulls::pull_artifact`].
///
/// Validates the parameters once so the returned function is infallible.
pub fn normal_model(mu: f64, sigma: f64) -> Result<impl Fn(f64) -> f64> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::Validation(format!("sigma must be finite and > 0, got {}", sigma)));
    }
    Ok(move |x: f64| {
        let z = (x - mu) / sigma;
        INV_SQRT_2PI / sigma * (-0.5 * z * z).exp()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn standard_normal_at_zero() {
        let p = normal_pdf(0.0, 0.0, 1.0).unwrap();
        assert_abs_diff_eq!(p, INV_SQRT_2PI, epsilon = 1e-15);
    }

    #[test]
    fn symmetry() {
        let a = normal_pdf(1.3, 0.0, 2.0).unwrap();
        let b = normal_pdf(-1.3, 0.0, 2.0).unwrap();
        assert_abs_diff_eq!(a, b, epsilon = 1e-15);
    }

    #[test]
    fn invalid_sigma() {
        assert!(normal_pdf(0.0, 0.0, 0.0).is_err());
        assert!(normal_pdf(0.0, 0.0, -1.0).is_err());
        assert!(normal_model(0.0, f64::NAN).is_err());
    }

    #[test]
    fn closure_matches_pdf() {
        let f = normal_model(1.0, 0.5).unwrap();
        assert_abs_diff_eq!(f(1.7), normal_pdf(1.7, 1.0, 0.5).unwrap(), epsilon = 1e-15);
    }
}
