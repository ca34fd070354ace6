//! Uniform-to-normal transforms.
//!
//! Both functions are pure so that their closed forms can be checked
//! without a generator. Neither guards against `u = 0`: `ln(0)` diverges and
//! the result is `+∞`.

use std::f64::consts::TAU;

/// Legacy single-draw transform: `sqrt(-2 ln u) * cos(2π u)`.
///
/// The same uniform feeds both the radius and the angle, so the output is
/// not exactly standard normal (its mean is about 0.057 and its standard
/// deviation about 1.056). Kept to reproduce numbers produced by the
/// single-draw `randn`.
///
/// # Examples
///
/// ```rust
/// use colstats_random::single_draw_transform;
///
/// let x = single_draw_transform(0.5);
/// assert!((x - -(2.0 * 2.0_f64.ln()).sqrt()).abs() < 1e-12);
/// ```
#[inline]
pub fn single_draw_transform(u: f64) -> f64 {
    (-2.0 * u.ln()).sqrt() * (TAU * u).cos()
}

/// Box–Muller transform of two independent uniforms:
/// `sqrt(-2 ln u1) * cos(2π u2)`.
///
/// `u1` must lie in `(0, 1]` for a finite result; `u2` in `[0, 1)`.
#[inline]
pub fn box_muller_transform(u1: f64, u2: f64) -> f64 {
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Verifies that the single-draw transform matches its closed form.
    #[test]
    fn test_single_draw_closed_form() {
        for &u in &[0.01, 0.125, 0.25, 0.5, 0.75, 0.99] {
            let expected = (-2.0 * f64::ln(u)).sqrt() * (2.0 * std::f64::consts::PI * u).cos();
            assert_relative_eq!(single_draw_transform(u), expected, epsilon = 1e-12);
        }
    }

    /// Verifies that `u = 0.25` maps to zero.
    #[test]
    fn test_single_draw_quarter_is_zero() {
        // cos(π/2) = 0
        assert!(single_draw_transform(0.25).abs() < 1e-12);
    }

    /// Verifies that single-draw equals Box-Muller fed the same uniform twice.
    #[test]
    fn test_single_draw_equals_box_muller_with_shared_uniform() {
        for &u in &[0.1, 0.3, 0.6, 0.9] {
            assert_eq!(single_draw_transform(u), box_muller_transform(u, u));
        }
    }

    /// Verifies that `u = 0` diverges to positive infinity.
    #[test]
    fn test_zero_uniform_diverges() {
        assert_eq!(single_draw_transform(0.0), f64::INFINITY);
        assert_eq!(box_muller_transform(0.0, 0.0), f64::INFINITY);
    }

    /// Verifies that a radius uniform of 1 gives zero.
    #[test]
    fn test_unit_radius_is_zero() {
        assert_eq!(box_muller_transform(1.0, 0.3), 0.0);
    }
}
