//! Attitude from static observations.
//!
//! These estimators need no history: they assume the sensor is quasi-static,
//! so the accelerometer reads only gravity. They are used to seed the
//! gradient-descent filter when no initial orientation is given.

use num_traits::Float;

use super::quaternion::Quaternion;
use super::{cross, lit, norm3, normalize3, Matrix3, Vector3};

/// Earth frame the static estimators express their result in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frame {
    /// East-North-Up.
    Enu,
    /// North-East-Down.
    #[default]
    Ned,
    /// North-West-Up: x along the horizontal magnetic field, z against
    /// gravity. The reference frame of the gradient-descent filter.
    Nwu,
}

/// Orientation from a single accelerometer sample.
///
/// Roll and pitch come from the gravity direction; yaw is unobservable and
/// set to zero. A zero-norm sample yields the identity quaternion.
pub fn acc2q<T: Float>(a: &Vector3<T>) -> Quaternion<T> {
    let a = match normalize3(a) {
        Some(a) => a,
        None => return Quaternion::identity(),
    };
    let half: T = lit(0.5);

    let roll = a[1].atan2(a[2]);
    let pitch = (-a[0]).atan2((a[1] * a[1] + a[2] * a[2]).sqrt());

    let (sx, cx) = (roll * half).sin_cos();
    let (sy, cy) = (pitch * half).sin_cos();
    // yaw = 0, so cos(yaw/2) = 1 and sin(yaw/2) = 0
    let q = Quaternion::new(cx * cy, sx * cy, cx * sy, -sx * sy);
    q.normalized().unwrap_or(q)
}

/// Orientation from an accelerometer and a magnetometer sample.
///
/// Builds the rotation matrix whose rows are the Earth axes measured in the
/// sensor frame (east = m × a, north = a × east, up = a) and converts it.
/// Falls back to [`acc2q`] when the magnetometer sample is zero or parallel
/// to gravity, and to identity when the accelerometer sample is zero.
pub fn am2q<T: Float>(a: &Vector3<T>, m: &Vector3<T>, frame: Frame) -> Quaternion<T> {
    let up = match normalize3(a) {
        Some(up) => up,
        None => return Quaternion::identity(),
    };
    let horizontal = normalize3(m)
        .map(|m| cross(&m, &up))
        .filter(|h| norm3(h) > T::epsilon().sqrt());
    let east = match horizontal.and_then(|h| normalize3(&h)) {
        Some(east) => east,
        None => {
            log::trace!("magnetometer unusable for static attitude, using gravity only");
            return acc2q(a);
        }
    };
    let north = cross(&up, &east);

    let dcm = match frame {
        Frame::Enu => [east, north, up],
        Frame::Ned => [north, east, [-up[0], -up[1], -up[2]]],
        Frame::Nwu => [north, [-east[0], -east[1], -east[2]], up],
    };
    dcm2q(&dcm)
}

/// Quaternion of a rotation matrix (body to Earth), by Shepperd's method.
pub fn dcm2q<T: Float>(r: &Matrix3<T>) -> Quaternion<T> {
    let one = T::one();
    let two: T = lit(2.0);
    let quarter: T = lit(0.25);
    let trace = r[0][0] + r[1][1] + r[2][2];

    let q = if trace > T::zero() {
        let s = two * (trace + one).sqrt();
        Quaternion::new(
            quarter * s,
            (r[2][1] - r[1][2]) / s,
            (r[0][2] - r[2][0]) / s,
            (r[1][0] - r[0][1]) / s,
        )
    } else if r[0][0] > r[1][1] && r[0][0] > r[2][2] {
        let s = two * (one + r[0][0] - r[1][1] - r[2][2]).sqrt();
        Quaternion::new(
            (r[2][1] - r[1][2]) / s,
            quarter * s,
            (r[0][1] + r[1][0]) / s,
            (r[0][2] + r[2][0]) / s,
        )
    } else if r[1][1] > r[2][2] {
        let s = two * (one + r[1][1] - r[0][0] - r[2][2]).sqrt();
        Quaternion::new(
            (r[0][2] - r[2][0]) / s,
            (r[0][1] + r[1][0]) / s,
            quarter * s,
            (r[1][2] + r[2][1]) / s,
        )
    } else {
        let s = two * (one + r[2][2] - r[0][0] - r[1][1]).sqrt();
        Quaternion::new(
            (r[1][0] - r[0][1]) / s,
            (r[0][2] + r[2][0]) / s,
            (r[1][2] + r[2][1]) / s,
            quarter * s,
        )
    };
    q.normalized().unwrap_or(q)
}

/// Direction of the Earth's vertical axis seen from the sensor frame,
/// i.e. the normalized accelerometer reading expected at rest for
/// orientation `q`. Equals the third row of the rotation matrix of `q`.
pub fn q_rot_g<T: Float>(q: &Quaternion<T>) -> Vector3<T> {
    let one = T::one();
    let two: T = lit(2.0);
    let Quaternion { w, x, y, z } = *q;
    [
        two * (x * z - w * y),
        two * (w * x + y * z),
        one - two * (x * x + y * y),
    ]
}
