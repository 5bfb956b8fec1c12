use core::fmt;

/// Which sensor array a shape error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    Gyroscope,
    Accelerometer,
    Magnetometer,
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sensor::Gyroscope => f.write_str("gyroscope"),
            Sensor::Accelerometer => f.write_str("accelerometer"),
            Sensor::Magnetometer => f.write_str("magnetometer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AhrsError {
    // sensor arrays disagree in sample count, or a sample is not 3 wide
    DimensionMismatch {
        sensor: Sensor,
        expected: usize,
        found: usize,
    },
    // eager construction needs at least one sample to seed from
    NoSamples,
    // a quaternion with zero (or non-finite) norm had to be normalized
    DegenerateOrientation,
    // gain or sampling step out of range
    ParamError,
}

impl fmt::Display for AhrsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AhrsError::DimensionMismatch {
                sensor,
                expected,
                found,
            } => write!(
                f,
                "{} data has dimension {}, expected {}",
                sensor, found, expected
            ),
            AhrsError::NoSamples => f.write_str("no sensor samples given"),
            AhrsError::DegenerateOrientation => {
                f.write_str("quaternion has zero norm and cannot be normalized")
            }
            AhrsError::ParamError => f.write_str("invalid filter parameter"),
        }
    }
}
