//! World-side data types and the voxel storage contract.
//!
//! The engine never owns world state; it reads blocks on demand through
//! [`WorldView`]. [`SparseWorld`] is a ready-made in-memory implementation.

mod block;
mod interfaces;
mod position;
mod sparse;

pub use block::{is_passable, BlockDescriptor};
pub use interfaces::WorldView;
pub use position::VoxelPos;
pub use sparse::SparseWorld;
