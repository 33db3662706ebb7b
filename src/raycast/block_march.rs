//! Fixed-step voxel ray marching.

use super::BlockHit;
use crate::constants::raycast::STEP_SIZE;
use crate::world::{VoxelPos, WorldView};
use cgmath::{Point3, Vector3};

/// Walks the ray in [`STEP_SIZE`] increments and returns the first
/// non-passable block, or `None` if the ray reaches `max_distance` clear.
///
/// Sampling starts one step out, so the block containing the origin is only
/// struck if the first sample still lands inside it. `direction` must be
/// unit length. Voxels thinner than the step along the ray can be stepped
/// over; that imprecision is the documented cost of bounding each call at
/// `max_distance / STEP_SIZE` lookups.
pub fn march_blocks(
    world: &dyn WorldView,
    origin: Point3<f64>,
    direction: Vector3<f64>,
    max_distance: f64,
) -> Option<BlockHit> {
    let steps = (max_distance / STEP_SIZE) as i32;

    for i in 1..=steps {
        let dist = f64::from(i) * STEP_SIZE;
        let sample = origin + direction * dist;
        let block_pos = VoxelPos::from_world(sample);

        if let Some(block) = world.block_at(block_pos) {
            if !block.is_passable() {
                return Some(BlockHit {
                    position: sample,
                    distance: dist,
                    block_id: block.id,
                    block_pos,
                });
            }
        }
    }

    None
}
