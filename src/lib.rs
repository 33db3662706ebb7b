//! Sightcast - raycast resolution and spatial queries for voxel worlds.
//!
//! Given a ray inside a block world populated with dynamic entities, find
//! the nearest obstruction - a solid block or an entity - or report a miss.
//! Built to run synchronously on a per-tick hot path: bounded cost
//! (`max_distance / step` block lookups plus one pass over the entity
//! snapshot), no internal state between calls, and no error paths on the
//! resolve route - degenerate input collapses to a miss.
//!
//! World storage and entity snapshots are collaborator contracts: blocks are
//! read on demand through [`WorldView`], entities arrive as a plain slice of
//! [`EntitySnapshot`] rows valid for one call.
//!
//! ```
//! use cgmath::{Point3, Vector3};
//! use sightcast::{
//!     resolve, EntityKind, EntitySnapshot, RayQuery, RaycastResult, SparseWorld, VoxelPos,
//! };
//!
//! let mut world = SparseWorld::new();
//! world.fill_box(VoxelPos::new(-2, 0, 6), VoxelPos::new(2, 3, 6), "core:stone");
//!
//! let entities = vec![EntitySnapshot::new(
//!     7,
//!     Point3::new(0.5, 0.5, 3.5),
//!     EntityKind::Npc,
//!     "Guard",
//! )];
//!
//! let query = RayQuery::new(
//!     Point3::new(0.5, 1.5, 0.5),
//!     Vector3::new(0.0, 0.0, 1.0),
//!     20.0,
//! );
//!
//! match resolve(&world, &entities, &query) {
//!     RaycastResult::Entity(hit) => assert_eq!(hit.name, "Guard"),
//!     other => panic!("expected the guard in front of the wall, got {:?}", other),
//! }
//! ```

pub mod constants;
pub mod entity;
pub mod error;
pub mod math;
pub mod query;
pub mod raycast;
pub mod world;

pub use entity::{EntityId, EntityKind, EntitySnapshot, Observer};
pub use error::QueryError;
pub use query::{closest_entity, entities_in_cone, entities_in_radius};
pub use raycast::{
    find_first_solid_block, line_of_sight, line_of_sight_between, march_blocks,
    nearest_entity_hit, resolve, resolve_from_observer, BlockHit, EntityHit, Ray, RayQuery,
    RaycastResult,
};
pub use world::{is_passable, BlockDescriptor, SparseWorld, VoxelPos, WorldView};
