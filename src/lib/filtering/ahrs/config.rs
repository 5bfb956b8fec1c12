use crate::math::quaternion::Quaternion;

pub const DEFAULT_FREQUENCY_HZ: f64 = 100.0;
// gains suggested in Madgwick's 2010 report
pub const DEFAULT_IMU_GAIN: f64 = 0.033;
pub const DEFAULT_MARG_GAIN: f64 = 0.041;

/// Construction options for [`Madgwick`](super::madgwick::Madgwick). Unset
/// values are resolved when the filter is built: sampling step wins over
/// frequency, `beta` wins over `gain`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MadgwickConfig<T> {
    pub(crate) gain: Option<T>,
    pub(crate) beta: Option<T>,
    pub(crate) frequency: Option<T>,
    pub(crate) sampling_step: Option<T>,
    pub(crate) q0: Option<Quaternion<T>>,
    pub(crate) magnetometer: bool,
}

impl<T> MadgwickConfig<T> {
    pub fn new() -> Self {
        Self {
            gain: None,
            beta: None,
            frequency: None,
            sampling_step: None,
            q0: None,
            magnetometer: false,
        }
    }

    pub fn gain(mut self, gain: T) -> Self {
        self.gain = Some(gain);
        self
    }

    // former name of the gain
    #[deprecated(note = "use `gain` instead")]
    pub fn beta(mut self, beta: T) -> Self {
        self.beta = Some(beta);
        self
    }

    // in Hz
    pub fn frequency(mut self, frequency: T) -> Self {
        self.frequency = Some(frequency);
        self
    }

    // in seconds
    pub fn sampling_step(mut self, dt: T) -> Self {
        self.sampling_step = Some(dt);
        self
    }

    pub fn q0(mut self, q0: Quaternion<T>) -> Self {
        self.q0 = Some(q0);
        self
    }

    // picks the MARG default gain, overridden by from_samples
    pub fn with_magnetometer(mut self, magnetometer: bool) -> Self {
        self.magnetometer = magnetometer;
        self
    }
}

impl<T> Default for MadgwickConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}
