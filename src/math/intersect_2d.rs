use super::TOLERANCE;

/// Solves the linear system
///
/// ```text
/// a*x + b*y = k1
/// c*x + d*y = k2
/// ```
///
/// by Cramer's rule, returning `(x, y)`.
///
/// Returns `None` when the two equations describe parallel (or coincident)
/// lines. The test is relative to the lengths of the normals `(a, b)` and
/// `(c, d)`, so it measures the sine of the angle between the lines rather
/// than their scale.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn solve_2x2(a: f64, b: f64, c: f64, d: f64, k1: f64, k2: f64) -> Option<(f64, f64)> {
    let det = a * d - b * c;
    let scale = a.hypot(b) * c.hypot(d);
    if det.abs() <= TOLERANCE * scale {
        return None;
    }

    // d*EQN1 - b*EQN2 eliminates y, a*EQN2 - c*EQN1 eliminates x.
    let x = (d / det) * k1 + (-b / det) * k2;
    let y = (-c / det) * k1 + (a / det) * k2;
    Some((x, y))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unique_solution() {
        // x + y = 3, x - y = 1
        let (x, y) = solve_2x2(1.0, 1.0, 1.0, -1.0, 3.0, 1.0).unwrap();
        assert_relative_eq!(x, 2.0);
        assert_relative_eq!(y, 1.0);
    }

    #[test]
    fn parallel_returns_none() {
        // y = 0 and y = 1
        assert!(solve_2x2(0.0, 1.0, 0.0, 2.0, 0.0, 2.0).is_none());
    }

    #[test]
    fn coincident_returns_none() {
        assert!(solve_2x2(1.0, -1.0, 2.0, -2.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn zero_normal_returns_none() {
        assert!(solve_2x2(1.0, 0.0, 0.0, 0.0, 1.0, 0.0).is_none());
    }

    #[test]
    fn large_coefficients_are_not_parallel() {
        let (x, y) = solve_2x2(1e8, 0.0, 0.0, 1e8, 1e8, 2e8).unwrap();
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(y, 2.0, epsilon = 1e-12);
    }
}
