use crate::core::data::complex::Complex;
use crate::core::data::escape_grid::EscapeResult;
use crate::core::fractals::escape_time::{EscapeLimits, iterate_orbit};

/// Escape time of `c` under `z = z² + c`, starting from the origin.
#[must_use]
pub fn evaluate(c: Complex, limits: EscapeLimits) -> EscapeResult {
    iterate_orbit(Complex::ZERO, c, limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(max_iterations: u32) -> EscapeLimits {
        EscapeLimits::new(max_iterations, 2.0).unwrap()
    }

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 10, 1000] {
            let result = evaluate(Complex::ZERO, limits(max_iterations));

            assert!(!result.escaped);
            assert_eq!(result.iteration_count, max_iterations);
            assert_eq!(result.smoothed_value, f64::from(max_iterations));
        }
    }

    #[test]
    fn test_two_escapes_almost_immediately() {
        let result = evaluate(Complex::new(2.0, 0.0), limits(100));

        assert!(result.escaped);
        assert!(result.iteration_count <= 2);
    }

    #[test]
    fn test_far_point_escapes_on_first_iteration() {
        let result = evaluate(Complex::new(3.0, 0.0), limits(100));

        assert!(result.escaped);
        assert_eq!(result.iteration_count, 1);
    }

    #[test]
    fn test_period_two_bulb_is_inside() {
        let result = evaluate(Complex::new(-1.0, 0.0), limits(500));

        assert!(!result.escaped);
    }

    #[test]
    fn test_seahorse_valley_escapes_slowly() {
        let result = evaluate(Complex::new(-0.75, 0.1), limits(1000));

        assert!(result.escaped);
        assert!(result.iteration_count > 10);
    }
}
