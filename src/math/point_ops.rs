//! Arithmetic on points treated as coordinate pairs.
//!
//! These are free functions rather than operators so that the argument order
//! of [`subtract`] stays explicit at every call site.

use tracing::debug;

use super::Point2;
use crate::error::{InputError, Result};

/// Scales both coordinates of `point` by `factor`.
///
/// A factor of `0` collapses to the origin, a negative factor reflects
/// through the origin.
#[must_use]
pub fn scale(point: &Point2, factor: f64) -> Point2 {
    Point2::new(factor * point.x, factor * point.y)
}

/// Returns `b - a`: the vector pointing from `a` to `b`.
///
/// Order matters. `subtract(a, b) == scale(&subtract(b, a), -1.0)`.
#[must_use]
pub fn subtract(a: &Point2, b: &Point2) -> Point2 {
    sum(b, &[scale(a, -1.0)])
}

/// Sums the points component-wise.
///
/// A single point is returned unchanged.
///
/// # Errors
///
/// Returns [`InputError::InvalidArgument`] if `points` is empty: there is no
/// sum of zero points.
pub fn add(points: &[Point2]) -> Result<Point2> {
    let Some((first, rest)) = points.split_first() else {
        debug!("rejected point addition over an empty list");
        return Err(
            InputError::InvalidArgument("point addition is undefined for an empty list".into())
                .into(),
        );
    };
    Ok(sum(first, rest))
}

/// Builds a point from a dynamically sized coordinate list.
///
/// # Errors
///
/// Returns [`InputError::TypeMismatch`] unless exactly two coordinates are given.
pub fn point_from_coords(coords: &[f64]) -> Result<Point2> {
    match coords {
        [x, y] => Ok(Point2::new(*x, *y)),
        other => {
            debug!(len = other.len(), "coordinate list is not a 2D point");
            Err(InputError::TypeMismatch {
                expected: "2 coordinates",
                found: format!("{} coordinates", other.len()),
            }
            .into())
        }
    }
}

/// Sums `first` and `rest` component-wise, left to right.
pub(crate) fn sum(first: &Point2, rest: &[Point2]) -> Point2 {
    rest.iter()
        .fold(*first, |acc, p| Point2::new(acc.x + p.x, acc.y + p.y))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn scale_by_minus_one_negates() {
        assert_eq!(scale(&Point2::new(1.0, 2.0), -1.0), Point2::new(-1.0, -2.0));
    }

    #[test]
    fn scale_by_zero_collapses() {
        assert_eq!(scale(&Point2::new(3.5, -7.0), 0.0), Point2::origin());
    }

    #[test]
    fn subtract_is_b_minus_a() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(subtract(&a, &b), Point2::new(2.0, 2.0));
        assert_eq!(subtract(&b, &a), Point2::new(-2.0, -2.0));
    }

    #[test]
    fn add_three_points() {
        let pts = [
            Point2::new(1.0, 2.0),
            Point2::new(3.0, 4.0),
            Point2::new(5.0, 6.0),
        ];
        assert_eq!(add(&pts).unwrap(), Point2::new(9.0, 12.0));
    }

    #[test]
    fn add_single_point_is_unchanged() {
        let p = Point2::new(5.0, 6.0);
        assert_eq!(add(&[p]).unwrap(), p);
    }

    #[test]
    fn add_empty_is_invalid_argument() {
        let err = add(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn coords_of_wrong_arity_mismatch() {
        assert_eq!(point_from_coords(&[1.0, 2.0]).unwrap(), Point2::new(1.0, 2.0));
        for bad in [&[][..], &[1.0][..], &[1.0, 2.0, 3.0][..]] {
            let err = point_from_coords(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        }
    }

    fn point() -> impl Strategy<Value = Point2> {
        (-1e3..1e3f64, -1e3..1e3f64).prop_map(|(x, y)| Point2::new(x, y))
    }

    proptest! {
        #[test]
        fn scale_by_one_is_identity(p in point()) {
            prop_assert_eq!(scale(&p, 1.0), p);
        }

        #[test]
        fn subtract_is_antisymmetric(a in point(), b in point()) {
            prop_assert_eq!(subtract(&a, &b), scale(&subtract(&b, &a), -1.0));
        }

        #[test]
        fn add_is_commutative(a in point(), b in point(), c in point()) {
            let abc = add(&[a, b, c]).unwrap();
            let cab = add(&[c, a, b]).unwrap();
            prop_assert!((abc - cab).norm() < 1e-9);
        }

        #[test]
        fn add_is_associative(a in point(), b in point(), c in point()) {
            let left = add(&[add(&[a, b]).unwrap(), c]).unwrap();
            let right = add(&[a, add(&[b, c]).unwrap()]).unwrap();
            prop_assert!((left - right).norm() < 1e-9);
        }
    }
}
