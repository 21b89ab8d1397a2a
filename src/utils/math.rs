use bevy::prelude::{Quat, Transform, Vec3};
use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::utils::WORLD_UP;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Build an attitude from Euler angles applied yaw (about +Y), then pitch
/// (about the yawed X), then roll (about the resulting Z).
pub fn attitude_from_euler(pitch: f64, yaw: f64, roll: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw)
        * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), pitch)
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), roll)
}

/// Half-turn about +Y, used to make a body-mounted camera look backwards.
pub fn yaw_flip() -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), PI)
}

/// Rotation whose local -Z axis points from `eye` to `target`.
///
/// Returns identity when the two points coincide, and falls back to +Z as
/// the up hint when looking straight up or down.
pub fn look_rotation(eye: &Vector3<f64>, target: &Vector3<f64>) -> UnitQuaternion<f64> {
    let back = eye - target;
    if back.norm_squared() <= f64::EPSILON {
        return UnitQuaternion::identity();
    }
    let up = if back.cross(&WORLD_UP).norm_squared() <= f64::EPSILON {
        Vector3::z()
    } else {
        WORLD_UP
    };
    UnitQuaternion::face_towards(&back, &up)
}

/// Horizontal field of view for a vertical FOV and aspect ratio (radians).
pub fn horizontal_fov(vertical_fov: f64, aspect: f64) -> f64 {
    2.0 * ((vertical_fov / 2.0).tan() * aspect).atan()
}

pub fn to_vec3(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

pub fn to_quat(q: &UnitQuaternion<f64>) -> Quat {
    let q = q.quaternion();
    Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32)
}

/// Render-space transform for a simulation pose.
pub fn to_transform(position: &Vector3<f64>, rotation: &UnitQuaternion<f64>) -> Transform {
    Transform {
        translation: to_vec3(position),
        rotation: to_quat(rotation),
        scale: Vec3::ONE,
    }
}
