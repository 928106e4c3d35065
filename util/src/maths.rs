//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Map a value from one range into another.
pub fn lin_map<T>(source_range: (T, T), target_range: (T, T), value: T) -> T
where
    T: Float,
{
    target_range.0
        + ((value - source_range.0)
        * (target_range.1 - target_range.0)
        / (source_range.1 - source_range.0))
}

/// Limit a value to the range [min, max].
pub fn clamp<T>(value: &T, min: &T, max: &T) -> T
where
    T: Float,
{
    let mut ret = *value;

    if ret > *max {
        ret = *max
    }
    if ret < *min {
        ret = *min
    }

    ret
}

/// Wrap an angle's magnitude into [0, 2pi), keeping the angle's sign.
///
/// Note that a full circle wraps to zero, so `wrap_signed_circle(2.0 * PI)`
/// is `0.0`.
pub fn wrap_signed_circle<T>(angle_rad: T) -> T
where
    T: Float,
{
    let tau_t: T = T::from(std::f64::consts::TAU).unwrap();

    let wrapped = rem_euclid(angle_rad.abs(), tau_t);

    if angle_rad < T::zero() {
        -wrapped
    } else {
        wrapped
    }
}

/// Calculates the least nonnegative remainder of `lhs (mod rhs)`.
///
/// This function is taken from the std library as num is missing it.
pub fn rem_euclid<T>(lhs: T, rhs: T) -> T
where
    T: Float,
{
    let r = lhs % rhs;
    if r < T::from(0.0).unwrap() {
        r + rhs.abs()
    } else {
        r
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const TAU: f64 = std::f64::consts::TAU;
    const PI: f64 = std::f64::consts::PI;

    #[test]
    fn test_lin_map() {
        assert_eq!(lin_map((0f64, 1f64), (0f64, 10f64), 0.5), 5.0);
        assert_eq!(lin_map((0f64, 1f64), (2f64, 4f64), 0.0), 2.0);
        assert_eq!(lin_map((-1f64, 1f64), (0f64, 1f64), 0.0), 0.5);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(&1.5f64, &-1.0, &1.0), 1.0);
        assert_eq!(clamp(&-1.5f64, &-1.0, &1.0), -1.0);
        assert_eq!(clamp(&0.3f64, &-1.0, &1.0), 0.3);
    }

    #[test]
    fn test_wrap_signed_circle() {
        assert_eq!(wrap_signed_circle(0f64), 0f64);
        assert_eq!(wrap_signed_circle(PI), PI);
        assert_eq!(wrap_signed_circle(-PI), -PI);
        // A full circle in either direction wraps to zero
        assert_eq!(wrap_signed_circle(TAU), 0f64);
        assert_eq!(wrap_signed_circle(-TAU), 0f64);
    }

    #[test]
    fn test_rem_euclid() {
        assert_eq!(rem_euclid(3f64, TAU), 3f64);
        assert_eq!(rem_euclid(-1f64, TAU), TAU - 1f64);
    }
}
