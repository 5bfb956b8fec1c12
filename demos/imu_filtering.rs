// Drives the Madgwick filter the way a sensor polling task would: one
// reading at a time, with a slightly jittery time step, printing the
// resulting Euler angles. The readings are synthesized for a board that
// slowly yaws while tilted 10 degrees in roll.

use core::f32::consts::PI;
use gradient_ahrs::{AHRSFilter, AttitudeTracker, ImuData, Madgwick, MadgwickConfig};

const DEG_TO_RAD: f32 = PI / 180.0;
const YAW_RATE_DPS: f32 = 15.0;
const ROLL_DEG: f32 = 10.0;
const MAG_DIP_DEG: f32 = 60.0;

fn main() {
    let filter = match Madgwick::new(MadgwickConfig::new().with_magnetometer(true)) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("filter error: {}", e);
            return;
        }
    };
    let mut ahrs = AttitudeTracker::new(filter);

    let roll = ROLL_DEG * DEG_TO_RAD;
    let dip = MAG_DIP_DEG * DEG_TO_RAD;
    let mut t: f32 = 0.0;

    for i in 0..3000 {
        // ~100 Hz with a little scheduling jitter
        let deltat = 0.01 + 0.0005 * ((i % 7) as f32 - 3.0) / 3.0;
        t += deltat;
        let yaw = YAW_RATE_DPS * DEG_TO_RAD * t;

        // yaw rate expressed in the rolled body frame
        let gyro = [
            0.0,
            YAW_RATE_DPS * DEG_TO_RAD * roll.sin(),
            YAW_RATE_DPS * DEG_TO_RAD * roll.cos(),
        ];
        let accel = [0.0, 9.81 * roll.sin(), 9.81 * roll.cos()];

        // Earth field (north, 0, -down) seen by the yawed, rolled body
        let (bx, bz) = (dip.cos(), -dip.sin());
        let (mx, my) = (bx * yaw.cos(), -bx * yaw.sin());
        let mag = [
            mx,
            my * roll.cos() + bz * roll.sin(),
            -my * roll.sin() + bz * roll.cos(),
        ];

        if let Err(e) = ahrs.update(&ImuData::marg(gyro, accel, mag), deltat) {
            eprintln!("update failed: {}", e);
            return;
        }

        if i % 100 == 0 {
            let angles = ahrs.get_euler_angles();
            println!(
                "Roll: {:.2} deg, Pitch: {:.2} deg, Yaw: {:.2} deg",
                angles.0, angles.1, angles.2
            );
        }
    }
}
