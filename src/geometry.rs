//! Minimal table-space geometry.
//!
//! The table is the XY plane; Z points away from the viewer and only carries
//! depth ordering. Rotations are degrees about Z, counter-clockwise positive.

use serde::Deserialize;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotate about the Z axis by `degrees`.
    ///
    /// ```
    /// use bartok_rs::geometry::Vec3;
    ///
    /// let v = Vec3::UP.rotate_z(90.0);
    /// assert!((v.x + 1.0).abs() < 1e-6);
    /// assert!(v.y.abs() < 1e-6);
    /// ```
    pub fn rotate_z(self, degrees: f32) -> Vec3 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vec3 { x: self.x * cos - self.y * sin, y: self.x * sin + self.y * cos, z: self.z }
    }

    pub fn lerp(self, other: Vec3, t: f32) -> Vec3 {
        self + (other - self) * t
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3 { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

/// Position plus rotation about Z (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: f32,
}

impl Pose {
    pub const fn new(position: Vec3, rotation: f32) -> Self {
        Self { position, rotation }
    }

    pub fn lerp(self, other: Pose, t: f32) -> Pose {
        Pose {
            position: self.position.lerp(other.position, t),
            rotation: self.rotation + (other.rotation - self.rotation) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn rotate_zero_is_identity() {
        let v = Vec3::new(1.5, -2.0, 3.0);
        assert_eq!(v.rotate_z(0.0), v);
    }

    #[test]
    fn rotate_keeps_length_and_depth() {
        let v = Vec3::new(0.0, 1.75, -1.0);
        let r = v.rotate_z(37.0);
        assert!(approx(r.x.hypot(r.y), 1.75));
        assert_eq!(r.z, -1.0);
    }

    #[test]
    fn positive_rotation_swings_up_vector_left() {
        let r = Vec3::UP.rotate_z(10.0);
        assert!(r.x < 0.0);
        let l = Vec3::UP.rotate_z(-10.0);
        assert!(l.x > 0.0);
        assert!(approx(r.y, l.y));
    }

    #[test]
    fn pose_lerp_endpoints() {
        let a = Pose::new(Vec3::ZERO, 0.0);
        let b = Pose::new(Vec3::new(2.0, 4.0, 0.0), 90.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!(approx(mid.rotation, 45.0));
        assert!(approx(mid.position.y, 2.0));
    }
}
