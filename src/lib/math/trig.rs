use num_traits::Float;

use super::{Matrix3, Vector3};

/// Cosine of an angle given in degrees.
pub fn cosd<T: Float>(x: T) -> T {
    x.to_radians().cos()
}

/// Sine of an angle given in degrees.
pub fn sind<T: Float>(x: T) -> T {
    x.to_radians().sin()
}

/// Skew-symmetric matrix of `x`, so that `skew(x) * v == x × v`.
pub fn skew<T: Float>(x: &Vector3<T>) -> Matrix3<T> {
    let zero = T::zero();
    [
        [zero, -x[2], x[1]],
        [x[2], zero, -x[0]],
        [-x[1], x[0], zero],
    ]
}
