//! Attitude estimation from inertial and magnetic sensor arrays.
//!
//! The core is [`Madgwick`], a gradient-descent orientation filter with an
//! IMU mode (gyroscope + accelerometer) and a MARG mode (plus magnetometer).
//! Each update is a pure function of the previous orientation and the new
//! sample; [`Madgwick::from_samples`] runs it over whole recordings and
//! [`AttitudeTracker`] keeps the running estimate for polling loops.
//!
//! ```
//! use gradient_ahrs::{Madgwick, MadgwickConfig, Quaternion};
//!
//! let filter = Madgwick::new(MadgwickConfig::new().frequency(200.0)).unwrap();
//! let q = filter
//!     .update_imu(Quaternion::identity(), &[0.0, 0.0, 0.1], &[0.0, 0.0, 9.81])
//!     .unwrap();
//! assert!((q.norm() - 1.0_f64).abs() < 1e-9);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub mod filtering;
pub mod math;

pub use error::{AhrsError, Sensor};
pub use filtering::ahrs::ahrs_filter::{AHRSFilter, ImuData};
pub use filtering::ahrs::config::MadgwickConfig;
pub use filtering::ahrs::madgwick::Madgwick;
pub use filtering::ahrs::samples::samples_from_rows;
pub use filtering::ahrs::tracker::AttitudeTracker;
pub use math::quaternion::Quaternion;
