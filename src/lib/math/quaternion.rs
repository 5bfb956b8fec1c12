//! Minimal quaternion algebra for the orientation filters.
//!
//! Quaternions are stored scalar-first as (w, x, y, z). A unit quaternion
//! rotates vectors from the sensor (body) frame into the Earth frame via
//! `q ⊗ v ⊗ q*`.

use core::ops::{Add, Mul, Sub};
use num_traits::Float;

use super::Vector3;
use crate::error::AhrsError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Float> Quaternion<T> {
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// Promote a 3-vector to a pure quaternion [0, v].
    pub fn pure(v: Vector3<T>) -> Self {
        Self::new(T::zero(), v[0], v[1], v[2])
    }

    pub fn vector(&self) -> Vector3<T> {
        [self.x, self.y, self.z]
    }

    pub fn to_array(&self) -> [T; 4] {
        [self.w, self.x, self.y, self.z]
    }

    pub fn norm(&self) -> T {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Hamilton product `self ⊗ rhs`.
    pub fn product(&self, rhs: &Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }

    pub fn scale(&self, s: T) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }

    /// Unit quaternion in the same direction. Fails if the norm is zero or
    /// not finite.
    pub fn normalized(&self) -> Result<Self, AhrsError> {
        let norm = self.norm();
        if norm > T::zero() && norm.is_finite() {
            Ok(self.scale(T::one() / norm))
        } else {
            Err(AhrsError::DegenerateOrientation)
        }
    }

    /// Rotate `v` from the body frame into the Earth frame: q ⊗ [0, v] ⊗ q*.
    pub fn rotate(&self, v: Vector3<T>) -> Vector3<T> {
        self.product(&Self::pure(v).product(&self.conjugate()))
            .vector()
    }
}

impl<T: Float> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> From<[T; 4]> for Quaternion<T> {
    fn from(q: [T; 4]) -> Self {
        let [w, x, y, z] = q;
        Self { w, x, y, z }
    }
}

impl<T: Float> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Float> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Float> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}
