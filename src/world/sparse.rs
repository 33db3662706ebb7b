//! In-memory world storage for hosts, demos, and tests.

use super::{BlockDescriptor, VoxelPos, WorldView};
use rustc_hash::FxHashMap;

/// Hash-backed [`WorldView`] holding only explicitly written blocks.
/// Everything else reads as absent, which the raycast core treats as
/// passable.
#[derive(Debug, Clone, Default)]
pub struct SparseWorld {
    blocks: FxHashMap<VoxelPos, BlockDescriptor>,
}

impl SparseWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_block(&mut self, pos: VoxelPos, block: BlockDescriptor) {
        self.blocks.insert(pos, block);
    }

    pub fn clear_block(&mut self, pos: VoxelPos) -> Option<BlockDescriptor> {
        self.blocks.remove(&pos)
    }

    /// Fills the axis-aligned box from `min` to `max` (inclusive) with the
    /// given block type.
    pub fn fill_box(&mut self, min: VoxelPos, max: VoxelPos, id: &str) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.blocks
                        .insert(VoxelPos::new(x, y, z), BlockDescriptor::new(id));
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl WorldView for SparseWorld {
    fn block_at(&self, pos: VoxelPos) -> Option<BlockDescriptor> {
        self.blocks.get(&pos).cloned()
    }
}
