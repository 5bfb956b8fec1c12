use alloc::vec::Vec;
use num_traits::Float;

use crate::error::{AhrsError, Sensor};
use crate::math::Vector3;

/// Convert dynamically sized rows into tri-axial samples.
///
/// Every row must have exactly 3 components.
pub fn samples_from_rows<T, R>(sensor: Sensor, rows: &[R]) -> Result<Vec<Vector3<T>>, AhrsError>
where
    T: Float,
    R: AsRef<[T]>,
{
    rows.iter()
        .map(|row| match *row.as_ref() {
            [x, y, z] => Ok([x, y, z]),
            ref other => Err(AhrsError::DimensionMismatch {
                sensor,
                expected: 3,
                found: other.len(),
            }),
        })
        .collect()
}

// accel (and mag) must hold as many samples as gyro
pub fn check_lengths(gyr: usize, acc: usize, mag: Option<usize>) -> Result<(), AhrsError> {
    if acc != gyr {
        return Err(AhrsError::DimensionMismatch {
            sensor: Sensor::Accelerometer,
            expected: gyr,
            found: acc,
        });
    }
    match mag {
        Some(mag) if mag != gyr => Err(AhrsError::DimensionMismatch {
            sensor: Sensor::Magnetometer,
            expected: gyr,
            found: mag,
        }),
        _ => Ok(()),
    }
}
