pub mod orientation;
pub mod quaternion;
pub mod trig;

use num_traits::Float;

pub type Vector3<T> = [T; 3];
pub type Matrix3<T> = [[T; 3]; 3];

// Float constants. Every `Float` in use (f32, f64) can represent an f64
// literal, so the NaN arm is unreachable in practice.
#[inline]
pub(crate) fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

pub fn norm3<T: Float>(v: &Vector3<T>) -> T {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

pub fn cross<T: Float>(a: &Vector3<T>, b: &Vector3<T>) -> Vector3<T> {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Scale `v` to unit length, or `None` if its norm is zero or not finite.
pub fn normalize3<T: Float>(v: &Vector3<T>) -> Option<Vector3<T>> {
    let norm = norm3(v);
    if norm > T::zero() && norm.is_finite() {
        Some([v[0] / norm, v[1] / norm, v[2] / norm])
    } else {
        None
    }
}
