use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned box in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl BoundingBox {
    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        Self {
            min: min.inf(&max),
            max: min.sup(&max),
        }
    }

    pub fn from_center(center: Vector3<f64>, half_extents: Vector3<f64>) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// World AABB of a box with `half_extents` in body space, rotated by
    /// `attitude` and centred on `position`.
    pub fn from_hull(
        half_extents: &Vector3<f64>,
        position: &Vector3<f64>,
        attitude: &UnitQuaternion<f64>,
    ) -> Self {
        let rot = attitude.to_rotation_matrix();
        let half = rot.matrix().abs() * half_extents.abs();
        Self::from_center(*position, half)
    }

    pub fn center(&self) -> Vector3<f64> {
        (self.min + self.max) / 2.0
    }

    /// Overlap test on all three axes; boxes that only touch still intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }

    pub fn contains_point(&self, point: &Vector3<f64>) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }
}

/// Static environment geometry the vehicle may not enter.
#[derive(Component, Debug, Clone, Copy, PartialEq, Deref)]
pub struct Obstacle(pub BoundingBox);

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// First obstacle found intersecting the candidate pose
    pub obstacle: Entity,
    /// Position the integrator proposed
    pub attempted_position: Vector3<f64>,
    /// Position the vehicle was put back to
    pub restored_position: Vector3<f64>,
}

/// Whether the last tick's candidate pose was rejected.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionState {
    pub colliding: bool,
    pub collision_count: u32,
}

impl CollisionState {
    pub fn register_collision(&mut self) {
        self.colliding = true;
        self.collision_count += 1;
    }

    pub fn clear(&mut self) {
        self.colliding = false;
    }
}
