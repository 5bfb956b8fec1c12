// Madgwick filter implementation
// Gradient-descent orientation filter for IMU (gyro + accel) and MARG
// (gyro + accel + mag) arrays, after S. Madgwick, "An efficient orientation
// filter for inertial and inertial/magnetic sensor arrays" (2010).

use alloc::vec::Vec;
use core::fmt::Debug;
use num_traits::Float;

pub use crate::filtering::ahrs::ahrs_filter::*;
pub use crate::filtering::ahrs::config::*;
use crate::error::AhrsError;
use crate::filtering::ahrs::samples::check_lengths;
use crate::math::orientation::{acc2q, am2q, q_rot_g, Frame};
use crate::math::quaternion::Quaternion;
use crate::math::{lit, norm3, normalize3, Vector3};

/// Madgwick's gradient-descent orientation filter. Each update takes the
/// previous orientation and returns the next one.
#[derive(Debug, Clone)]
pub struct Madgwick<T> {
    gain: T,
    frequency: T, // Hz
    dt: T,        // s
    has_mag: bool,
    q0: Option<Quaternion<T>>,
    orientations: Vec<Quaternion<T>>,
}

impl<T: Float + Debug> Madgwick<T> {
    pub fn new(config: MadgwickConfig<T>) -> Result<Self, AhrsError> {
        let has_mag = config.magnetometer;
        let (frequency, dt) = resolve_rate(&config)?;
        let gain = resolve_gain(&config, has_mag)?;
        let q0 = config.q0.map(|q| q.normalized()).transpose()?;
        log::debug!(
            "madgwick filter: gain {:?}, {:?} Hz (dt {:?} s), magnetometer: {}",
            gain,
            frequency,
            dt,
            has_mag
        );

        Ok(Self {
            gain,
            frequency,
            dt,
            has_mag,
            q0,
            orientations: Vec::new(),
        })
    }

    /// Build a filter and estimate the orientation of every sample, with the
    /// MARG update when `mag` is given. Without a configured `q0` the seed
    /// comes from the first accelerometer (and magnetometer) sample.
    pub fn from_samples(
        config: MadgwickConfig<T>,
        gyr: &[Vector3<T>],
        acc: &[Vector3<T>],
        mag: Option<&[Vector3<T>]>,
    ) -> Result<Self, AhrsError> {
        check_lengths(gyr.len(), acc.len(), mag.map(|m| m.len()))?;
        if acc.is_empty() {
            return Err(AhrsError::NoSamples);
        }

        let mut filter = Self::new(config.with_magnetometer(mag.is_some()))?;
        let q0 = match (filter.q0, mag) {
            (Some(q0), _) => q0,
            (None, Some(mag)) => am2q(&acc[0], &mag[0], Frame::Nwu),
            (None, None) => acc2q(&acc[0]),
        };
        filter.q0 = Some(q0);
        filter.orientations = filter.compute_all(q0, gyr, acc, mag)?;
        Ok(filter)
    }

    // Index 0 is q0 itself, index t updates index t - 1 with sample t
    pub fn compute_all(
        &self,
        q0: Quaternion<T>,
        gyr: &[Vector3<T>],
        acc: &[Vector3<T>],
        mag: Option<&[Vector3<T>]>,
    ) -> Result<Vec<Quaternion<T>>, AhrsError> {
        check_lengths(gyr.len(), acc.len(), mag.map(|m| m.len()))?;
        if gyr.is_empty() {
            return Ok(Vec::new());
        }
        log::info!(
            "estimating {} orientations with {} update",
            gyr.len(),
            if mag.is_some() { "MARG" } else { "IMU" }
        );

        let mut q = Vec::with_capacity(gyr.len());
        q.push(q0);
        match mag {
            Some(mag) => {
                for t in 1..gyr.len() {
                    q.push(self.update_marg(q[t - 1], &gyr[t], &acc[t], &mag[t])?);
                }
            }
            None => {
                for t in 1..gyr.len() {
                    q.push(self.update_imu(q[t - 1], &gyr[t], &acc[t])?);
                }
            }
        }
        Ok(q)
    }

    pub fn update(&self, q: Quaternion<T>, imu_data: &ImuData<T>) -> Result<Quaternion<T>, AhrsError> {
        match imu_data.mag {
            Some(ref mag) => self.update_marg(q, &imu_data.gyro, &imu_data.accel, mag),
            None => self.update_imu(q, &imu_data.gyro, &imu_data.accel),
        }
    }

    // gyro in rad/s
    pub fn update_imu(
        &self,
        q: Quaternion<T>,
        gyr: &Vector3<T>,
        acc: &Vector3<T>,
    ) -> Result<Quaternion<T>, AhrsError> {
        // not `<=`: NaN also holds the orientation
        if !(norm3(gyr) > T::zero()) {
            log::trace!("zero angular rate, holding orientation");
            return Ok(q);
        }
        let mut q_dot = angular_rate(&q, gyr);

        match normalize3(acc) {
            Some(a) => {
                let zero = T::zero();
                let half: T = lit(0.5);
                let two: T = lit(2.0);
                let four: T = lit(4.0);
                let Quaternion {
                    w: qw,
                    x: qx,
                    y: qy,
                    z: qz,
                } = q.normalized()?;

                // Objective function of gravity and its Jacobian
                let f = [
                    two * (qx * qz - qw * qy) - a[0],
                    two * (qw * qx + qy * qz) - a[1],
                    two * (half - qx * qx - qy * qy) - a[2],
                ];
                let j = [
                    [-two * qy, two * qz, -two * qw, two * qx],
                    [two * qx, two * qw, two * qz, two * qy],
                    [zero, -four * qx, -four * qy, zero],
                ];
                q_dot = self.correct(q_dot, &j, &f);
            }
            None => log::trace!("zero acceleration, integrating angular rate only"),
        }
        self.integrate(q, q_dot)
    }

    pub fn update_marg(
        &self,
        q: Quaternion<T>,
        gyr: &Vector3<T>,
        acc: &Vector3<T>,
        mag: &Vector3<T>,
    ) -> Result<Quaternion<T>, AhrsError> {
        if !(norm3(gyr) > T::zero()) {
            log::trace!("zero angular rate, holding orientation");
            return Ok(q);
        }
        let m = match normalize3(mag) {
            Some(m) => m,
            None => {
                log::trace!("zero magnetic field, falling back to IMU update");
                return self.update_imu(q, gyr, acc);
            }
        };
        let mut q_dot = angular_rate(&q, gyr);

        match normalize3(acc) {
            Some(a) => {
                let zero = T::zero();
                let half: T = lit(0.5);
                let two: T = lit(2.0);
                let four: T = lit(4.0);

                // Measured field in the Earth frame, flattened onto the
                // north-vertical plane: b = [0, bx, 0, bz]
                let h = q.product(&Quaternion::pure(m).product(&q.conjugate()));
                let bx = (h.x * h.x + h.y * h.y).sqrt();
                let bz = h.z;

                let Quaternion {
                    w: qw,
                    x: qx,
                    y: qy,
                    z: qz,
                } = q.normalized()?;

                // Objective function of gravity and magnetic field, and its Jacobian
                let f = [
                    two * (qx * qz - qw * qy) - a[0],
                    two * (qw * qx + qy * qz) - a[1],
                    two * (half - qx * qx - qy * qy) - a[2],
                    two * bx * (half - qy * qy - qz * qz) + two * bz * (qx * qz - qw * qy) - m[0],
                    two * bx * (qx * qy - qw * qz) + two * bz * (qw * qx + qy * qz) - m[1],
                    two * bx * (qw * qy + qx * qz) + two * bz * (half - qx * qx - qy * qy) - m[2],
                ];
                let j = [
                    [-two * qy, two * qz, -two * qw, two * qx],
                    [two * qx, two * qw, two * qz, two * qy],
                    [zero, -four * qx, -four * qy, zero],
                    [
                        -two * bz * qy,
                        two * bz * qz,
                        -four * bx * qy - two * bz * qw,
                        -four * bx * qz + two * bz * qx,
                    ],
                    [
                        -two * bx * qz + two * bz * qx,
                        two * bx * qy + two * bz * qw,
                        two * bx * qx + two * bz * qz,
                        -two * bx * qw + two * bz * qy,
                    ],
                    [
                        two * bx * qy,
                        two * bx * qz - four * bz * qx,
                        two * bx * qw - four * bz * qy,
                        two * bx * qx,
                    ],
                ];
                q_dot = self.correct(q_dot, &j, &f);
            }
            None => log::trace!("zero acceleration, integrating angular rate only"),
        }
        self.integrate(q, q_dot)
    }

    // expected gravity direction in the sensor frame, per stored orientation
    pub fn attitude_estimate(&self) -> Vec<Vector3<T>> {
        self.orientations.iter().map(q_rot_g).collect()
    }

    // Subtract the gain-scaled, normalized gradient J^T f from q_dot. A zero
    // gradient (perfect alignment) leaves q_dot as is.
    fn correct<const N: usize>(
        &self,
        q_dot: Quaternion<T>,
        j: &[[T; 4]; N],
        f: &[T; N],
    ) -> Quaternion<T> {
        let mut gradient = [T::zero(); 4];
        for (row, residual) in j.iter().zip(f.iter()) {
            for (g, partial) in gradient.iter_mut().zip(row.iter()) {
                *g = *g + *partial * *residual;
            }
        }
        let gradient = Quaternion::from(gradient);
        let norm = gradient.norm();
        if !(norm > T::zero()) {
            log::trace!("zero gradient, skipping correction");
            return q_dot;
        }
        q_dot - gradient.scale(T::one() / norm) * self.gain
    }

    fn integrate(&self, q: Quaternion<T>, q_dot: Quaternion<T>) -> Result<Quaternion<T>, AhrsError> {
        let integrated = q + q_dot * self.dt;
        integrated.normalized().map_err(|e| {
            log::warn!("integrated orientation {:?} cannot be normalized", integrated);
            e
        })
    }

    pub fn gain(&self) -> T {
        self.gain
    }

    pub fn frequency(&self) -> T {
        self.frequency
    }

    pub fn sampling_step(&self) -> T {
        self.dt
    }

    pub fn set_sampling_step(&mut self, dt: T) -> Result<(), AhrsError> {
        if !(dt > T::zero() && dt.is_finite()) {
            return Err(AhrsError::ParamError);
        }
        self.dt = dt;
        self.frequency = T::one() / dt;
        Ok(())
    }

    pub fn set_frequency(&mut self, frequency: T) -> Result<(), AhrsError> {
        if !(frequency > T::zero() && frequency.is_finite()) {
            return Err(AhrsError::ParamError);
        }
        self.frequency = frequency;
        self.dt = T::one() / frequency;
        Ok(())
    }

    pub fn has_magnetometer(&self) -> bool {
        self.has_mag
    }

    pub fn q0(&self) -> Option<Quaternion<T>> {
        self.q0
    }

    // empty unless built by from_samples
    pub fn orientations(&self) -> &[Quaternion<T>] {
        &self.orientations
    }
}

// q_dot = 0.5 * q ⊗ [0, ω]
fn angular_rate<T: Float>(q: &Quaternion<T>, gyr: &Vector3<T>) -> Quaternion<T> {
    q.product(&Quaternion::pure(*gyr)) * lit(0.5)
}

fn resolve_rate<T: Float>(config: &MadgwickConfig<T>) -> Result<(T, T), AhrsError> {
    let one = T::one();
    let (frequency, dt) = match (config.sampling_step, config.frequency) {
        (Some(dt), _) => (one / dt, dt),
        (None, Some(frequency)) => (frequency, one / frequency),
        (None, None) => {
            let frequency: T = lit(DEFAULT_FREQUENCY_HZ);
            (frequency, one / frequency)
        }
    };
    if dt > T::zero() && dt.is_finite() && frequency.is_finite() {
        Ok((frequency, dt))
    } else {
        Err(AhrsError::ParamError)
    }
}

fn resolve_gain<T: Float>(config: &MadgwickConfig<T>, has_mag: bool) -> Result<T, AhrsError> {
    let gain = match (config.beta, config.gain) {
        (Some(beta), _) => beta,
        (None, Some(gain)) => gain,
        (None, None) if has_mag => lit(DEFAULT_MARG_GAIN),
        (None, None) => lit(DEFAULT_IMU_GAIN),
    };
    if gain >= T::zero() && gain.is_finite() {
        Ok(gain)
    } else {
        Err(AhrsError::ParamError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Sensor;
    use approx::assert_abs_diff_eq;

    const STILL_GYRO: Vector3<f64> = [0.0, 0.0, 1e-9];

    fn imu_filter() -> Madgwick<f64> {
        Madgwick::new(MadgwickConfig::new()).unwrap()
    }

    fn marg_filter() -> Madgwick<f64> {
        Madgwick::new(MadgwickConfig::new().with_magnetometer(true)).unwrap()
    }

    fn assert_unit(q: Quaternion<f64>) {
        assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-9);
    }

    // body rotated by `angle` about the unit `axis`
    fn axis_angle(axis: Vector3<f64>, angle: f64) -> Quaternion<f64> {
        let (s, c) = (angle / 2.0).sin_cos();
        Quaternion::new(c, axis[0] * s, axis[1] * s, axis[2] * s)
    }

    #[test]
    fn test_default_configuration() {
        let filter = imu_filter();
        assert_eq!(filter.gain(), 0.033);
        assert_eq!(filter.frequency(), 100.0);
        assert_eq!(filter.sampling_step(), 0.01);
        assert!(!filter.has_magnetometer());
        assert!(filter.q0().is_none());
        assert!(filter.orientations().is_empty());

        assert_eq!(marg_filter().gain(), 0.041);
    }

    #[test]
    fn test_gain_precedence() {
        let filter = Madgwick::new(MadgwickConfig::new().gain(0.1)).unwrap();
        assert_eq!(filter.gain(), 0.1);

        #[allow(deprecated)]
        let filter = Madgwick::new(MadgwickConfig::new().gain(0.1).beta(0.2)).unwrap();
        assert_eq!(filter.gain(), 0.2);
    }

    #[test]
    fn test_sampling_step_wins_over_frequency() {
        let filter = Madgwick::new(MadgwickConfig::new().frequency(50.0).sampling_step(0.004)).unwrap();
        assert_eq!(filter.sampling_step(), 0.004);
        assert_eq!(filter.frequency(), 250.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert_eq!(
            Madgwick::new(MadgwickConfig::new().gain(-0.1)).unwrap_err(),
            AhrsError::ParamError
        );
        assert_eq!(
            Madgwick::new(MadgwickConfig::new().sampling_step(0.0)).unwrap_err(),
            AhrsError::ParamError
        );
        assert_eq!(
            Madgwick::new(MadgwickConfig::new().frequency(-100.0)).unwrap_err(),
            AhrsError::ParamError
        );
        assert_eq!(
            Madgwick::new(MadgwickConfig::new().q0(Quaternion::new(0.0, 0.0, 0.0, 0.0))).unwrap_err(),
            AhrsError::DegenerateOrientation
        );

        let mut filter = imu_filter();
        assert_eq!(filter.set_sampling_step(-0.01), Err(AhrsError::ParamError));
        assert_eq!(filter.set_frequency(f64::NAN), Err(AhrsError::ParamError));
        assert_eq!(filter.sampling_step(), 0.01);
    }

    #[test]
    fn test_set_sampling_step_keeps_frequency_in_sync() {
        let mut filter = imu_filter();
        filter.set_sampling_step(0.02).unwrap();
        assert_eq!(filter.frequency(), 50.0);
        filter.set_frequency(200.0).unwrap();
        assert_eq!(filter.sampling_step(), 0.005);
    }

    #[test]
    fn test_q0_is_normalized() {
        let filter = Madgwick::new(MadgwickConfig::new().q0(Quaternion::new(2.0, 0.0, 0.0, 0.0))).unwrap();
        assert_eq!(filter.q0(), Some(Quaternion::identity()));
    }

    #[test]
    fn test_zero_gyro_holds_orientation() {
        let q = axis_angle([1.0, 0.0, 0.0], 0.3);
        let zero = [0.0, 0.0, 0.0];
        assert_eq!(imu_filter().update_imu(q, &zero, &[0.0, 0.0, 9.81]), Ok(q));
        assert_eq!(
            marg_filter().update_marg(q, &zero, &[0.0, 0.0, 9.81], &[0.3, 0.0, -0.5]),
            Ok(q)
        );
    }

    #[test]
    fn test_zero_mag_falls_back_to_imu() {
        let filter = marg_filter();
        let q = axis_angle([0.0, 0.6, 0.8], 0.5);
        let gyr = [0.1, -0.2, 0.05];
        let acc = [0.4, 0.2, 9.7];
        assert_eq!(
            filter.update_marg(q, &gyr, &acc, &[0.0, 0.0, 0.0]),
            filter.update_imu(q, &gyr, &acc)
        );
    }

    #[test]
    fn test_zero_accel_integrates_gyro_only() {
        let filter = imu_filter();
        let gyr = [0.0, 0.0, 0.5];
        let q = filter
            .update_imu(Quaternion::identity(), &gyr, &[0.0, 0.0, 0.0])
            .unwrap();
        // q + 0.5 * [0, 0, 0, 0.5] * 0.01, renormalized
        let expected = Quaternion::new(1.0, 0.0, 0.0, 0.0025).normalized().unwrap();
        assert_abs_diff_eq!(q.w, expected.w, epsilon = 1e-12);
        assert_abs_diff_eq!(q.z, expected.z, epsilon = 1e-12);
    }

    #[test]
    fn test_first_gradient_step() {
        // roll of 90 degrees seen by the accelerometer, starting level:
        // f = [0, -1, 1], gradient = J^T f = [0, -2, 0, 0] -> [0, -1, 0, 0]
        let filter = Madgwick::new(MadgwickConfig::new().gain(0.1)).unwrap();
        let q = filter
            .update_imu(Quaternion::identity(), &STILL_GYRO, &[0.0, 1.0, 0.0])
            .unwrap();
        assert!(q.x > 0.0);
        assert_abs_diff_eq!(q.x, 0.001, epsilon = 1e-6);
        assert_abs_diff_eq!(q.y, 0.0, epsilon = 1e-12);
        assert_unit(q);
    }

    #[test]
    fn test_updates_stay_unit_norm() {
        let imu = imu_filter();
        let marg = marg_filter();
        let samples = [
            ([0.3, -0.1, 0.2], [0.5, -0.2, 9.6], [0.2, 0.1, -0.4]),
            ([-1.2, 0.8, 2.5], [3.0, 1.0, -9.0], [-0.3, 0.4, 0.1]),
            ([0.0, 0.0, 4.0], [0.0, 0.0, 0.0], [0.1, 0.0, 0.0]),
            ([10.0, -10.0, 10.0], [-9.81, 0.0, 0.0], [0.0, -0.5, 0.5]),
        ];
        let mut q_imu = axis_angle([0.0, 0.0, 1.0], 1.0);
        let mut q_marg = axis_angle([0.6, 0.0, 0.8], -2.0);
        for _ in 0..50 {
            for (gyr, acc, mag) in samples.iter() {
                q_imu = imu.update_imu(q_imu, gyr, acc).unwrap();
                q_marg = marg.update_marg(q_marg, gyr, acc, mag).unwrap();
                assert_unit(q_imu);
                assert_unit(q_marg);
            }
        }
    }

    #[test]
    fn test_level_is_fixed_point() {
        let filter = imu_filter();
        let mut q = Quaternion::identity();
        for _ in 0..1000 {
            q = filter.update_imu(q, &STILL_GYRO, &[0.0, 0.0, 1.0]).unwrap();
        }
        assert_abs_diff_eq!(q.w, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(q.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(q.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_imu_converges_to_level() {
        let filter = imu_filter();
        let mut q = axis_angle([1.0, 0.0, 0.0], 0.2);
        for _ in 0..3000 {
            q = filter.update_imu(q, &STILL_GYRO, &[0.0, 0.0, 9.81]).unwrap();
        }
        let g = q_rot_g(&q);
        assert_abs_diff_eq!(g[0], 0.0, epsilon = 5e-3);
        assert_abs_diff_eq!(g[1], 0.0, epsilon = 5e-3);
        assert_abs_diff_eq!(g[2], 1.0, epsilon = 5e-3);
    }

    #[test]
    fn test_marg_converges_in_heading() {
        let filter = marg_filter();
        let dip: f64 = 1.1;
        let mag = [dip.cos(), 0.0, -dip.sin()];
        let mut q = axis_angle([0.0, 0.0, 1.0], 0.3);
        for _ in 0..20000 {
            q = filter.update_marg(q, &STILL_GYRO, &[0.0, 0.0, 9.81], &mag).unwrap();
        }
        assert_abs_diff_eq!(q.w.abs(), 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(q.z, 0.0, epsilon = 2e-2);
    }

    #[test]
    fn test_update_dispatches_on_mag() {
        let filter = marg_filter();
        let q = axis_angle([0.0, 1.0, 0.0], 0.4);
        let (gyr, acc, mag) = ([0.2, 0.1, -0.3], [1.0, 0.5, 9.5], [0.3, -0.1, -0.6]);
        assert_eq!(
            filter.update(q, &ImuData::marg(gyr, acc, mag)),
            filter.update_marg(q, &gyr, &acc, &mag)
        );
        assert_eq!(
            filter.update(q, &ImuData::imu(gyr, acc)),
            filter.update_imu(q, &gyr, &acc)
        );
    }

    #[test]
    fn test_degenerate_input_quaternion() {
        let filter = imu_filter();
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            filter.update_imu(zero, &[0.1, 0.0, 0.0], &[0.0, 0.0, 1.0]),
            Err(AhrsError::DegenerateOrientation)
        );
        assert_eq!(
            filter.update_imu(zero, &[0.1, 0.0, 0.0], &[0.0, 0.0, 0.0]),
            Err(AhrsError::DegenerateOrientation)
        );
    }

    #[test]
    fn test_compute_all_single_sample_is_seed() {
        let filter = imu_filter();
        let seed = Quaternion::new(0.9, 0.1, 0.0, 0.0);
        let q = filter
            .compute_all(seed, &[[1.0, 2.0, 3.0]], &[[0.0, 0.0, 9.81]], None)
            .unwrap();
        assert_eq!(q, vec![seed]);
    }

    #[test]
    fn test_compute_all_rejects_mismatched_mag() {
        let filter = marg_filter();
        let gyr = [[0.0; 3]; 4];
        let acc = [[0.0, 0.0, 1.0]; 4];
        let mag = [[0.3, 0.0, -0.5]; 3];
        assert_eq!(
            filter.compute_all(Quaternion::identity(), &gyr, &acc, Some(&mag[..])),
            Err(AhrsError::DimensionMismatch {
                sensor: Sensor::Magnetometer,
                expected: 4,
                found: 3,
            })
        );
    }

    #[test]
    fn test_from_samples_seeds_from_accelerometer() {
        let roll: f64 = 0.3;
        let acc = [[0.0, roll.sin(), roll.cos()]; 3];
        let gyr = [[0.0; 3]; 3];
        let filter = Madgwick::from_samples(MadgwickConfig::new(), &gyr, &acc, None).unwrap();
        let q0 = filter.q0().unwrap();
        assert_eq!(q0, acc2q(&acc[0]));
        assert_eq!(filter.orientations(), &[q0, q0, q0]);
    }

    #[test]
    fn test_from_samples_seeds_from_magnetometer() {
        let acc = [[0.0, 0.0, 9.81]; 2];
        let mag = [[0.2, 0.3, -0.4]; 2];
        let gyr = [[0.0; 3]; 2];
        let filter = Madgwick::from_samples(MadgwickConfig::new(), &gyr, &acc, Some(&mag[..])).unwrap();
        assert!(filter.has_magnetometer());
        assert_eq!(filter.gain(), 0.041);
        assert_eq!(filter.q0(), Some(am2q(&acc[0], &mag[0], Frame::Nwu)));
    }

    #[test]
    fn test_magnetometer_seed_is_upright() {
        let n = 500;
        let gyr = vec![[0.0, 0.0, 1e-6]; n];
        let acc = vec![[0.0, 0.0, 9.81]; n];
        let mag = vec![[0.3, 0.0, -0.5]; n];
        let imu = Madgwick::from_samples(MadgwickConfig::new(), &gyr, &acc, None).unwrap();
        let marg = Madgwick::from_samples(MadgwickConfig::new(), &gyr, &acc, Some(&mag[..])).unwrap();

        let seed = q_rot_g(&marg.q0().unwrap());
        assert_abs_diff_eq!(seed[0], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(seed[1], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(seed[2], 1.0, epsilon = 1e-9);

        // both modes agree on gravity over the whole run
        let imu_g = imu.attitude_estimate();
        let marg_g = marg.attitude_estimate();
        for (gi, gm) in imu_g.iter().zip(marg_g.iter()) {
            for k in 0..3 {
                assert_abs_diff_eq!(gi[k], gm[k], epsilon = 1e-2);
            }
        }
        assert_abs_diff_eq!(marg_g[n - 1][2], 1.0, epsilon = 1e-2);
    }

    #[test]
    fn test_from_samples_empty() {
        let none: [Vector3<f64>; 0] = [];
        assert_eq!(
            Madgwick::from_samples(MadgwickConfig::new(), &none, &none, None).unwrap_err(),
            AhrsError::NoSamples
        );
    }

    #[test]
    fn test_attitude_estimate() {
        let gyr = [[0.0; 3]; 4];
        let acc = [[0.0, 0.0, 9.81]; 4];
        let filter = Madgwick::from_samples(
            MadgwickConfig::new().q0(Quaternion::identity()),
            &gyr,
            &acc,
            None,
        )
        .unwrap();
        let attitude = filter.attitude_estimate();
        assert_eq!(attitude.len(), 4);
        for g in attitude {
            assert_eq!(g, [0.0, 0.0, 1.0]);
        }
    }
}
