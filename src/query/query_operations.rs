//! Radius and cone membership over an entity snapshot.
//!
//! Same full-scan-with-exclusion skeleton as the raycast entity tester, but
//! these produce sets, not a single nearest hit. No ordering guarantee.

use crate::entity::{EntityId, EntitySnapshot};
use crate::math;
use cgmath::{InnerSpace, Point3, Vector3};
use rustc_hash::FxHashSet;

/// Ids of all entities within `radius` of `center`, boundary inclusive.
pub fn entities_in_radius(
    entities: &[EntitySnapshot],
    center: Point3<f64>,
    radius: f64,
) -> FxHashSet<EntityId> {
    entities
        .iter()
        .filter(|entity| math::point_in_sphere(entity.position, center, radius))
        .map(|entity| entity.id)
        .collect()
}

/// Ids of all entities within `max_distance` of `origin` and inside the cone
/// of `half_angle_degrees` around `direction`.
///
/// A half angle of 180 degrees degenerates to the radius test.
pub fn entities_in_cone(
    entities: &[EntitySnapshot],
    origin: Point3<f64>,
    direction: Vector3<f64>,
    max_distance: f64,
    half_angle_degrees: f64,
    exclude: Option<EntityId>,
) -> FxHashSet<EntityId> {
    let cos_half_angle = half_angle_degrees.to_radians().cos();
    let direction = math::normalize_or_zero(direction);

    let mut inside = FxHashSet::default();
    for entity in entities {
        if exclude == Some(entity.id) {
            continue;
        }

        let to_entity = entity.position - origin;
        if to_entity.magnitude() > max_distance {
            continue;
        }

        if math::normalize_or_zero(to_entity).dot(direction) >= cos_half_angle {
            inside.insert(entity.id);
        }
    }

    inside
}

/// Id of the entity closest to `position` within `max_radius` (exclusive)
/// that satisfies `filter`.
pub fn closest_entity<F>(
    entities: &[EntitySnapshot],
    position: Point3<f64>,
    max_radius: f64,
    filter: F,
) -> Option<EntityId>
where
    F: Fn(&EntitySnapshot) -> bool,
{
    let mut best = None;
    let mut best_dist = max_radius * max_radius;

    for entity in entities {
        if !filter(entity) {
            continue;
        }

        let dist = math::distance_squared(entity.position, position);
        if dist < best_dist {
            best = Some(entity.id);
            best_dist = dist;
        }
    }

    best
}
