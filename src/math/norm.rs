//! Overflow- and underflow-safe vector norms.
//!
//! Squaring components of magnitude around `1e200` overflows to infinity and
//! squaring components around `1e-200` underflows to zero. Every routine here
//! first divides by the largest absolute component so that the squared sum
//! lies in `[1, D]`, then scales the result back.

use std::cmp::Ordering;

use nalgebra::SVector;

use super::Vector3;

/// Returns the length of `components` together with the unit vector in the
/// same direction, or `None` if every component is exactly zero.
///
/// This is the single routine behind `length`, `direction`, `normalize` and
/// `length_and_direction` on the vector types.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn stable_normalize<const D: usize>(
    components: SVector<f64, D>,
) -> Option<(f64, SVector<f64, D>)> {
    let largest = components.amax();
    if largest == 0.0 {
        return None;
    }
    let scaled = components.unscale(largest);
    let scaled_length = scaled.norm();
    Some((largest * scaled_length, scaled.unscale(scaled_length)))
}

/// Length of `components`, exactly zero only for the zero vector.
#[must_use]
pub fn stable_length<const D: usize>(components: SVector<f64, D>) -> f64 {
    stable_normalize(components).map_or(0.0, |(length, _)| length)
}

/// A vector perpendicular to `v`, built from its two largest components.
///
/// Dropping the smallest-magnitude component avoids cancellation, and the
/// result is zero only when `v` is zero. The branch order is fixed:
///
/// * `|x| <= |y|` and `|x| <= |z|` gives `(0, -z, y)`
/// * otherwise `|y| <= |z|` gives `(z, 0, -x)`
/// * otherwise `(-y, x, 0)`
#[must_use]
pub fn perpendicular_3d(v: &Vector3) -> Vector3 {
    let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
    if ax <= ay && ax <= az {
        Vector3::new(0.0, -v.z, v.y)
    } else if ay <= az {
        Vector3::new(v.z, 0.0, -v.x)
    } else {
        Vector3::new(-v.y, v.x, 0.0)
    }
}

/// Interpolates from `start` towards `end`, always extrapolating from the
/// nearer endpoint.
#[must_use]
pub fn interpolate<const D: usize>(
    start: &SVector<f64, D>,
    end: &SVector<f64, D>,
    t: f64,
) -> SVector<f64, D> {
    if t <= 0.5 {
        start + (end - start) * t
    } else {
        end + (start - end) * (1.0 - t)
    }
}

/// Orders component by component, the first unequal pair deciding.
///
/// Components equal under `==` fall through, so `-0.0` and `0.0` tie. Only
/// unequal pairs (including NaN) are ordered with [`f64::total_cmp`].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn compare_lexicographic<const D: usize>(
    first: &SVector<f64, D>,
    second: &SVector<f64, D>,
) -> Ordering {
    first
        .iter()
        .zip(second.iter())
        .find(|(a, b)| a != b)
        .map_or(Ordering::Equal, |(a, b)| a.total_cmp(b))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn zero_has_no_direction() {
        assert!(stable_normalize(Vector3::zeros()).is_none());
        assert_eq!(stable_length(Vector3::zeros()), 0.0);
    }

    #[test]
    fn length_of_two_one_two_is_three() {
        assert_eq!(stable_length(Vector3::new(2.0, 1.0, 2.0)), 3.0);
    }

    #[test]
    fn huge_components_do_not_overflow() {
        let v = Vector3::new(3e300, 4e300, 0.0);
        assert!(v.norm_squared().is_infinite());
        assert_relative_eq!(stable_length(v), 5e300, max_relative = 1e-15);
    }

    #[test]
    fn tiny_components_do_not_underflow() {
        let v = Vector3::new(3e-300, 0.0, -4e-300);
        assert_eq!(v.norm_squared(), 0.0);
        let (length, unit) = stable_normalize(v).unwrap();
        assert_relative_eq!(length, 5e-300, max_relative = 1e-15);
        assert_relative_eq!(unit, Vector3::new(0.6, 0.0, -0.8), epsilon = 1e-15);
    }

    #[test]
    fn perpendicular_branches() {
        assert_eq!(perpendicular_3d(&Vector3::new(3.0, 0.0, 0.0)), Vector3::new(0.0, 0.0, -3.0));
        assert_eq!(perpendicular_3d(&Vector3::new(1.0, 2.0, 3.0)), Vector3::new(0.0, -3.0, 2.0));
        assert_eq!(perpendicular_3d(&Vector3::new(4.0, 1.0, 2.0)), Vector3::new(2.0, 0.0, -4.0));
        assert_eq!(perpendicular_3d(&Vector3::zeros()), Vector3::zeros());
    }

    #[test]
    fn interpolation_extrapolates_from_nearer_end() {
        let a = Vector3::new(1.0, 2.0, 4.0);
        let b = Vector3::new(1.0, 3.0, 8.0);
        assert_eq!(interpolate(&a, &b, 0.25), Vector3::new(1.0, 2.25, 5.0));
        assert_eq!(interpolate(&a, &b, -0.5), Vector3::new(1.0, 1.5, 2.0));
        assert_eq!(interpolate(&a, &b, 1.25), Vector3::new(1.0, 3.25, 9.0));
    }

    #[test]
    fn lexicographic_treats_signed_zeros_as_equal() {
        let first = Vector3::new(-0.0, 5.0, 0.0);
        let second = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(compare_lexicographic(&first, &second), Ordering::Greater);
        assert_eq!(
            compare_lexicographic(&Vector3::new(0.0, -0.0, 0.0), &Vector3::zeros()),
            Ordering::Equal
        );
    }
}
