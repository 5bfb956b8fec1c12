use core::fmt::Debug;
use num_traits::Float;

use crate::error::AhrsError;
use crate::filtering::ahrs::ahrs_filter::{AHRSFilter, ImuData};
use crate::filtering::ahrs::madgwick::Madgwick;
use crate::math::lit;
use crate::math::quaternion::Quaternion;

/// Running orientation estimate driven by a [`Madgwick`] filter, for
/// callers polling a sensor one reading at a time.
#[derive(Debug, Clone)]
pub struct AttitudeTracker<T> {
    filter: Madgwick<T>,
    q: Quaternion<T>,
    initial: Quaternion<T>,
}

impl<T: Float + Debug> AttitudeTracker<T> {
    // starts from the filter's q0, or level
    pub fn new(filter: Madgwick<T>) -> Self {
        let initial = filter.q0().unwrap_or_else(Quaternion::identity);
        Self {
            filter,
            q: initial,
            initial,
        }
    }

    pub fn with_orientation(filter: Madgwick<T>, q: Quaternion<T>) -> Result<Self, AhrsError> {
        let initial = q.normalized()?;
        Ok(Self {
            filter,
            q: initial,
            initial,
        })
    }

    pub fn filter(&self) -> &Madgwick<T> {
        &self.filter
    }
}

impl<T: Float + Debug> AHRSFilter<T> for AttitudeTracker<T> {
    fn update(&mut self, imu_data: &ImuData<T>, deltat: T) -> Result<Quaternion<T>, AhrsError> {
        self.filter.set_sampling_step(deltat)?;
        self.q = self.filter.update(self.q, imu_data)?;
        Ok(self.q)
    }

    fn orientation(&self) -> Quaternion<T> {
        self.q
    }

    fn get_euler_angles(&self) -> (T, T, T) {
        let one = T::one();
        let two: T = lit(2.0);
        let Quaternion { w, x, y, z } = self.q;

        let roll = (two * (w * x + y * z)).atan2(one - two * (x * x + y * y));
        let pitch = (two * (w * y - x * z)).max(-one).min(one).asin();
        let yaw = (two * (w * z + x * y)).atan2(one - two * (y * y + z * z));
        (roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees())
    }

    fn reset(&mut self) {
        self.q = self.initial;
    }
}
