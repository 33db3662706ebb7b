//! Raycast resolution - the public entry points.
//!
//! Pure functions: take the world view, an entity snapshot, and a query;
//! return an owned result. No state survives between calls.

use super::{march_blocks, nearest_entity_hit, RayQuery, RaycastResult};
use crate::constants::raycast::EYE_HEIGHT;
use crate::entity::{EntitySnapshot, Observer};
use crate::math;
use crate::world::{VoxelPos, WorldView};
use cgmath::{InnerSpace, Point3, Vector3};

/// Resolves a ray against blocks and entities per the query flags.
///
/// Precedence: when both hit types are enabled, the entity scan runs first
/// over the full distance; on an entity hit the block march is re-run bounded
/// by that hit's distance, so any block in front of the entity wins outright.
/// Degenerate queries (zero direction, non-finite input, non-positive
/// distance) resolve to a miss rather than an error.
pub fn resolve(
    world: &dyn WorldView,
    entities: &[EntitySnapshot],
    query: &RayQuery,
) -> RaycastResult {
    if !query.check_blocks && !query.check_entities {
        return RaycastResult::Miss;
    }

    if let Err(err) = query.validate() {
        log::debug!("[resolve] degenerate query treated as miss: {}", err);
        return RaycastResult::Miss;
    }

    let origin = query.ray.origin;
    // Fields are public; re-normalize in case the caller bypassed Ray::new.
    let direction = math::normalize_or_zero(query.ray.direction);

    log::trace!(
        "[resolve] origin=({:.2}, {:.2}, {:.2}) max_distance={} blocks={} entities={}",
        origin.x,
        origin.y,
        origin.z,
        query.max_distance,
        query.check_blocks,
        query.check_entities
    );

    if query.check_entities {
        if let Some(entity_hit) =
            nearest_entity_hit(entities, origin, direction, query.max_distance, query.exclude)
        {
            if !query.check_blocks {
                return RaycastResult::Entity(entity_hit);
            }

            // Only look for blocks up to the entity; a hit there is closer
            // by construction.
            if let Some(block_hit) = march_blocks(world, origin, direction, entity_hit.distance) {
                return RaycastResult::Block(block_hit);
            }

            return RaycastResult::Entity(entity_hit);
        }
    }

    if query.check_blocks {
        return match march_blocks(world, origin, direction, query.max_distance) {
            Some(block_hit) => RaycastResult::Block(block_hit),
            None => RaycastResult::Miss,
        };
    }

    RaycastResult::Miss
}

/// Resolves from an observer's vantage point: origin at eye height above the
/// observer's position, along its look direction, with the observer itself
/// excluded from entity testing.
pub fn resolve_from_observer(
    world: &dyn WorldView,
    entities: &[EntitySnapshot],
    observer: &Observer,
    max_distance: f64,
) -> RaycastResult {
    let query = RayQuery::new(observer.eye_position(), observer.look, max_distance)
        .excluding(observer.id);
    resolve(world, entities, &query)
}

/// Whether the straight segment from `from` to `to` is free of solid blocks.
/// Entities never block sight.
pub fn line_of_sight(world: &dyn WorldView, from: Point3<f64>, to: Point3<f64>) -> bool {
    let offset = to - from;
    let distance = offset.magnitude();
    if distance == 0.0 {
        return true;
    }

    let query = RayQuery::new(from, offset / distance, distance).blocks_only();
    match resolve(world, &[], &query) {
        RaycastResult::Block(hit) => hit.distance >= distance,
        _ => true,
    }
}

/// Line of sight between two standing entities, eye to eye: both endpoints
/// are lifted by eye height before the segment test.
pub fn line_of_sight_between(world: &dyn WorldView, a: Point3<f64>, b: Point3<f64>) -> bool {
    let eyes = Vector3::new(0.0, EYE_HEIGHT, 0.0);
    line_of_sight(world, a + eyes, b + eyes)
}

/// Coordinate of the first solid block along the ray, ignoring entities.
pub fn find_first_solid_block(
    world: &dyn WorldView,
    origin: Point3<f64>,
    direction: Vector3<f64>,
    max_distance: f64,
) -> Option<VoxelPos> {
    let query = RayQuery::new(origin, direction, max_distance).blocks_only();
    match resolve(world, &[], &query) {
        RaycastResult::Block(hit) => Some(hit.block_pos),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use crate::world::{BlockDescriptor, SparseWorld};
    use rand::Rng;

    fn npc(id: u64, x: f64, y: f64, z: f64) -> EntitySnapshot {
        EntitySnapshot::new(id, Point3::new(x, y, z), EntityKind::Npc, "")
    }

    fn wall_world(z: i32) -> SparseWorld {
        let mut world = SparseWorld::new();
        world.fill_box(
            VoxelPos::new(-4, -4, z),
            VoxelPos::new(4, 4, z),
            "core:stone",
        );
        world
    }

    #[test]
    fn test_nothing_enabled_is_a_miss() {
        let world = wall_world(2);
        let entities = vec![npc(1, 0.0, -1.0, 3.0)];
        let mut query = RayQuery::new(
            Point3::new(0.5, 0.5, 0.5),
            Vector3::new(0.0, 0.0, 1.0),
            20.0,
        );
        query.check_blocks = false;
        query.check_entities = false;
        assert!(resolve(&world, &entities, &query).is_miss());
    }

    #[test]
    fn test_non_positive_distance_is_a_miss() {
        let world = wall_world(2);
        for max_distance in [0.0, -5.0] {
            let query = RayQuery::new(
                Point3::new(0.5, 0.5, 0.5),
                Vector3::new(0.0, 0.0, 1.0),
                max_distance,
            );
            assert!(resolve(&world, &[], &query).is_miss());
        }
    }

    #[test]
    fn test_zero_direction_is_a_miss() {
        // Even standing inside a solid block: no direction, no hit.
        let mut world = SparseWorld::new();
        world.set_block(VoxelPos::new(0, 0, 0), BlockDescriptor::new("core:stone"));
        let query = RayQuery::new(
            Point3::new(0.5, 0.5, 0.5),
            Vector3::new(0.0, 0.0, 0.0),
            10.0,
        );
        assert!(resolve(&world, &[], &query).is_miss());
    }

    #[test]
    fn test_block_in_front_of_entity_wins() {
        let world = wall_world(5);
        // Biased center lands on the ray at z=10, well behind the wall.
        let entities = vec![npc(1, 0.5, -0.5, 10.5)];
        let query = RayQuery::new(
            Point3::new(0.5, 0.5, 0.5),
            Vector3::new(0.0, 0.0, 1.0),
            20.0,
        );

        let result = resolve(&world, &entities, &query);
        match result {
            RaycastResult::Block(hit) => {
                assert_eq!(hit.block_pos.z, 5);
                assert!(hit.distance < 5.0, "{}", hit.distance);
            }
            other => panic!("expected block hit, got {:?}", other),
        }
    }

    #[test]
    fn test_entity_in_clear_space_wins() {
        let world = SparseWorld::new();
        let entities = vec![npc(1, 0.0, -1.0, 3.0)];
        let query = RayQuery::new(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            20.0,
        );

        let result = resolve(&world, &entities, &query);
        match result {
            RaycastResult::Entity(hit) => {
                assert_eq!(hit.entity, 1);
                assert!((hit.distance - 3.0).abs() < 1e-12);
            }
            other => panic!("expected entity hit, got {:?}", other),
        }
    }

    #[test]
    fn test_entity_behind_wall_does_not_leak_through() {
        // Entity directly behind the wall on the same ray: the bounded
        // re-march finds the wall first.
        let world = wall_world(5);
        let entities = vec![npc(1, 0.5, -0.5, 10.5)];
        let query = RayQuery::new(
            Point3::new(0.5, 0.5, 0.5),
            Vector3::new(0.0, 0.0, 1.0),
            20.0,
        );
        assert!(resolve(&world, &entities, &query).is_block_hit());

        // Entities disabled: same wall, same answer.
        let blocks_only = query.clone().blocks_only();
        assert!(resolve(&world, &entities, &blocks_only).is_block_hit());

        // Blocks disabled: now the entity is reachable.
        let entities_only = query.entities_only();
        assert!(resolve(&world, &entities, &entities_only).is_entity_hit());
    }

    #[test]
    fn test_observer_never_hits_itself() {
        let world = SparseWorld::new();
        let position = Point3::new(3.0, 7.0, -2.0);
        let snapshot = vec![EntitySnapshot::new(
            42,
            position,
            EntityKind::Player,
            "Self",
        )];

        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let look = Vector3::new(
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
            );
            let observer = Observer::new(42, position, look);
            let result = resolve_from_observer(&world, &snapshot, &observer, 50.0);
            assert!(result.is_miss(), "self-hit with look {:?}", look);
        }
    }

    #[test]
    fn test_observer_hits_other_entities() {
        let world = SparseWorld::new();
        let observer = Observer::new(1, Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
        // Eye ray runs at y=1.6; center bias puts this NPC at y=1.6 too.
        let entities = vec![
            EntitySnapshot::new(1, Point3::new(0.0, 0.0, 0.0), EntityKind::Player, "Self"),
            EntitySnapshot::new(2, Point3::new(0.0, 0.6, 6.0), EntityKind::Npc, "Guard"),
        ];

        let result = resolve_from_observer(&world, &entities, &observer, 20.0);
        match result {
            RaycastResult::Entity(hit) => {
                assert_eq!(hit.entity, 2);
                assert_eq!(hit.name, "Guard");
            }
            other => panic!("expected entity hit, got {:?}", other),
        }
    }

    #[test]
    fn test_end_to_end_wall_before_entity() {
        // A +Z ray into a solid block filling (0,0,3)-(1,1,4), with an
        // entity at (0,1,6) that the ray only grazes outside the hit radius.
        let mut world = SparseWorld::new();
        world.fill_box(VoxelPos::new(0, 0, 3), VoxelPos::new(0, 0, 3), "core:stone");
        let entities = vec![npc(1, 0.0, 1.0, 6.0)];
        let query = RayQuery::new(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            10.0,
        );

        let result = resolve(&world, &entities, &query);
        match result {
            RaycastResult::Block(hit) => {
                assert_eq!(hit.block_pos, VoxelPos::new(0, 0, 3));
                assert!(
                    hit.distance >= 3.0 && hit.distance <= 3.1,
                    "{}",
                    hit.distance
                );
            }
            other => panic!("expected block hit, got {:?}", other),
        }
    }

    #[test]
    fn test_line_of_sight_blocked_by_wall() {
        let world = wall_world(5);
        let from = Point3::new(0.5, 0.5, 0.5);
        let to = Point3::new(0.5, 0.5, 9.5);
        assert!(!line_of_sight(&world, from, to));
        assert!(line_of_sight(&SparseWorld::new(), from, to));
        // Degenerate zero-length segment sees itself.
        assert!(line_of_sight(&world, from, from));
    }

    #[test]
    fn test_line_of_sight_checks_full_segment_length() {
        // Wall nine units out: a one-unit probe would miss it.
        let world = wall_world(9);
        assert!(!line_of_sight(
            &world,
            Point3::new(0.5, 0.5, 0.5),
            Point3::new(0.5, 0.5, 11.0),
        ));
    }

    #[test]
    fn test_line_of_sight_between_uses_eye_height() {
        // Chest-high wall at y in [0,1]: feet positions are blocked, eye
        // positions (y+1.6) see over it.
        let mut world = SparseWorld::new();
        world.fill_box(VoxelPos::new(-4, 0, 5), VoxelPos::new(4, 0, 5), "core:stone");

        let a = Point3::new(0.5, 0.5, 0.5);
        let b = Point3::new(0.5, 0.5, 9.5);
        assert!(!line_of_sight(&world, a, b));
        assert!(line_of_sight_between(&world, a, b));
    }

    #[test]
    fn test_find_first_solid_block_returns_coordinate() {
        let world = wall_world(5);
        let found = find_first_solid_block(
            &world,
            Point3::new(0.5, 0.5, 0.5),
            Vector3::new(0.0, 0.0, 1.0),
            20.0,
        );
        assert_eq!(found, Some(VoxelPos::new(0, 0, 5)));

        let none = find_first_solid_block(
            &world,
            Point3::new(0.5, 0.5, 0.5),
            Vector3::new(0.0, 0.0, -1.0),
            20.0,
        );
        assert_eq!(none, None);
    }
}
