//! Area and cone membership queries over entity snapshots.

mod query_operations;

pub use query_operations::{closest_entity, entities_in_cone, entities_in_radius};
