use crate::error::AhrsError;
use crate::math::quaternion::Quaternion;
use crate::math::Vector3;

/// One synchronized reading of the sensor array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImuData<T> {
    pub gyro: Vector3<T>,        // (gx, gy, gz) in rad/s
    pub accel: Vector3<T>,       // (ax, ay, az) in any unit
    pub mag: Option<Vector3<T>>, // (mx, my, mz) in any unit, None without magnetometer
}

impl<T> ImuData<T> {
    pub fn imu(gyro: Vector3<T>, accel: Vector3<T>) -> Self {
        Self {
            gyro,
            accel,
            mag: None,
        }
    }

    pub fn marg(gyro: Vector3<T>, accel: Vector3<T>, mag: Vector3<T>) -> Self {
        Self {
            gyro,
            accel,
            mag: Some(mag),
        }
    }
}

pub trait AHRSFilter<T> {
    // deltat (time delta between update calls) in seconds
    fn update(&mut self, imu_data: &ImuData<T>, deltat: T) -> Result<Quaternion<T>, AhrsError>;

    // current estimate, body to Earth frame
    fn orientation(&self) -> Quaternion<T>;

    // (roll, pitch, yaw) in degrees
    fn get_euler_angles(&self) -> (T, T, T);

    // reset the filter to initial conditions
    fn reset(&mut self);
}
