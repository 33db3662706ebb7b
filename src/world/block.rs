use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of a block type, identified by its namespaced string id
/// (e.g. `"core:stone"`). Fetched on demand from a [`WorldView`] provider;
/// never cached across calls.
///
/// [`WorldView`]: crate::world::WorldView
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockDescriptor {
    pub id: String,
}

impl BlockDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Whether a ray passes through this block.
    ///
    /// A block is passable when its id is empty or contains `"air"`,
    /// `"void"`, or `"empty"`, case-insensitive. This substring match is the
    /// complete rule; there is no per-block property table.
    pub fn is_passable(&self) -> bool {
        if self.id.is_empty() {
            return true;
        }
        let id = self.id.to_ascii_lowercase();
        id.contains("air") || id.contains("void") || id.contains("empty")
    }
}

impl fmt::Display for BlockDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Passability for an optional block sample. Absent blocks (unloaded or
/// never-written space) are passable.
pub fn is_passable(block: Option<&BlockDescriptor>) -> bool {
    block.map_or(true, BlockDescriptor::is_passable)
}
