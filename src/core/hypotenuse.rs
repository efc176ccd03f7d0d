/// Length of the hypotenuse of a right triangle with legs `a` and `b`.
///
/// Each leg is converted to `f64` before squaring, so the sum never
/// overflows for any pair of `i32` values. The sign of a leg is absorbed by
/// the squaring; no validation is done here.
pub fn hypotenuse(a: i32, b: i32) -> f64 {
    (f64::from(a).powi(2) + f64::from(b).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pythagorean_triples() {
        assert_eq!(hypotenuse(3, 4), 5.0);
        assert_eq!(hypotenuse(5, 12), 13.0);
        assert_eq!(hypotenuse(8, 15), 17.0);
        assert_eq!(hypotenuse(7, 24), 25.0);
        assert_eq!(hypotenuse(20, 21), 29.0);
    }

    #[test]
    fn test_zero_legs() {
        assert_eq!(hypotenuse(0, 0), 0.0);
    }

    #[test]
    fn test_degenerate_triangle_returns_other_leg() {
        for a in -10_000..=10_000 {
            assert_eq!(hypotenuse(a, 0), f64::from(a).abs(), "a = {}", a);
            assert_eq!(hypotenuse(0, a), f64::from(a).abs(), "a = {}", a);
        }
        assert_eq!(hypotenuse(i32::MAX, 0), f64::from(i32::MAX));
        assert_eq!(hypotenuse(i32::MIN, 0), 2_147_483_648.0);
    }

    #[test]
    fn test_commutative() {
        let legs = [-1000, -17, -1, 0, 1, 2, 3, 99, 12_345, i32::MAX, i32::MIN];
        for &a in &legs {
            for &b in &legs {
                assert_eq!(hypotenuse(a, b), hypotenuse(b, a), "a = {}, b = {}", a, b);
            }
        }
    }

    #[test]
    fn test_non_negative_for_non_negative_legs() {
        for a in (0..=1_000).step_by(7) {
            for b in (0..=1_000).step_by(11) {
                assert!(hypotenuse(a, b) >= 0.0);
            }
        }
    }

    #[test]
    fn test_sign_is_absorbed() {
        assert_eq!(hypotenuse(-3, 4), 5.0);
        assert_eq!(hypotenuse(3, -4), 5.0);
        assert_eq!(hypotenuse(-3, -4), 5.0);
    }

    #[test]
    fn test_extreme_legs_are_finite() {
        let c = hypotenuse(i32::MAX, i32::MAX);
        assert!(c.is_finite());
        assert!((c - f64::from(i32::MAX) * std::f64::consts::SQRT_2).abs() < 1.0);

        assert!(hypotenuse(i32::MIN, i32::MIN).is_finite());
    }

    #[test]
    fn test_irrational_result() {
        assert!((hypotenuse(1, 1) - std::f64::consts::SQRT_2).abs() < 1e-15);
    }
}
