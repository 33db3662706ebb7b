//! Raycast resolution: fixed-step block marching, nearest-entity testing,
//! and the precedence policy combining the two.

mod block_march;
mod raycast_data;
mod raycast_operations;

pub use block_march::march_blocks;
pub use entity_test::nearest_entity_hit;
pub use raycast_data::{BlockHit, EntityHit, Ray, RayQuery, RaycastResult};
pub use raycast_operations::{
    find_first_solid_block, line_of_sight, line_of_sight_between, resolve, resolve_from_observer,
};
