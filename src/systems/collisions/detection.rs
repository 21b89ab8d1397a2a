use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    BoundingBox, CollisionEvent, CollisionState, LastSafePose, Obstacle, VehicleState,
};
use crate::resources::FlightConfig;

pub fn collision_resolution_system(
    config: Res<FlightConfig>,
    obstacles: Query<(Entity, &Obstacle)>,
    mut vehicle: ResMut<VehicleState>,
    mut last_safe: ResMut<LastSafePose>,
    mut collision: ResMut<CollisionState>,
    mut collision_events: EventWriter<CollisionEvent>,
) {
    let hit = resolve_collision(
        &mut vehicle,
        &mut last_safe,
        &config.vehicle.half_extents,
        obstacles.iter().map(|(entity, obstacle)| (entity, obstacle.0)),
    );

    match hit {
        Some(event) => {
            debug!(
                "Collision with {:?} at {:?}, restored to {:?}",
                event.obstacle, event.attempted_position, event.restored_position
            );
            collision.register_collision();
            collision_events.send(event);
        }
        None => collision.clear(),
    }
}

/// First obstacle whose box intersects `hull`.
pub fn find_collision<I>(hull: &BoundingBox, obstacles: I) -> Option<Entity>
where
    I: IntoIterator<Item = (Entity, BoundingBox)>,
{
    obstacles
        .into_iter()
        .find(|(_, bounds)| hull.intersects(bounds))
        .map(|(entity, _)| entity)
}

/// Accept the candidate pose or roll back to the last safe one.
///
/// On a hit the position is restored and the velocity zeroed; otherwise the
/// candidate becomes the new safe pose.
pub fn resolve_collision<I>(
    vehicle: &mut VehicleState,
    last_safe: &mut LastSafePose,
    half_extents: &Vector3<f64>,
    obstacles: I,
) -> Option<CollisionEvent>
where
    I: IntoIterator<Item = (Entity, BoundingBox)>,
{
    let hull = BoundingBox::from_hull(half_extents, &vehicle.position, &vehicle.attitude);

    match find_collision(&hull, obstacles) {
        Some(obstacle) => {
            let attempted_position = vehicle.position;
            vehicle.position = last_safe.position;
            vehicle.velocity = Vector3::zeros();
            Some(CollisionEvent {
                obstacle,
                attempted_position,
                restored_position: last_safe.position,
            })
        }
        None => {
            last_safe.position = vehicle.position;
            None
        }
    }
}
