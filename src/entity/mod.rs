//! Entity snapshot types supplied by the host per call.

mod entity_data;

pub use entity_data::{EntityId, EntityKind, EntitySnapshot, Observer};
