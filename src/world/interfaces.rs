//! Collaborator contract for voxel storage.

use super::{BlockDescriptor, VoxelPos};

/// Read access to block data, supplied by the host.
///
/// Implementations must accept arbitrary coordinates: space that is unloaded
/// or out of bounds returns `None` rather than failing. Lookups are
/// synchronous; consistency of concurrently mutated storage for the duration
/// of one engine call is the provider's responsibility.
pub trait WorldView {
    fn block_at(&self, pos: VoxelPos) -> Option<BlockDescriptor>;
}
