//! Entity snapshot data.
//!
//! The host supplies these per call; the engine treats a snapshot slice as
//! immutable for the duration of one call and keeps nothing across calls.
//! Iteration order is whatever the host produced; ties in scans resolve
//! first-seen.

use crate::constants::raycast::EYE_HEIGHT;
use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Stable entity identity. Hosts with UUID-keyed entities hash or map the
/// UUID down to this.
pub type EntityId = u64;

/// What kind of entity a snapshot row describes. Attached by the host so the
/// engine performs one match instead of repeated capability probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Npc,
    Other,
}

/// One entity in a point-in-time snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub position: Point3<f64>,
    pub kind: EntityKind,
    pub name: String,
}

impl EntitySnapshot {
    pub fn new(id: EntityId, position: Point3<f64>, kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            id,
            position,
            kind,
            name: name.into(),
        }
    }

    /// Name to report in hit results; falls back to a kind label when the
    /// host supplied no name.
    pub fn display_label(&self) -> &str {
        if !self.name.is_empty() {
            return &self.name;
        }
        match self.kind {
            EntityKind::Player => "Player",
            EntityKind::Npc => "NPC",
            EntityKind::Other => "Entity",
        }
    }
}

/// Vantage point for the observer convenience entry point: an entity that
/// looks along `look` from eye height above its feet position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    pub id: EntityId,
    pub position: Point3<f64>,
    pub look: Vector3<f64>,
}

impl Observer {
    pub fn new(id: EntityId, position: Point3<f64>, look: Vector3<f64>) -> Self {
        Self { id, position, look }
    }

    pub fn eye_position(&self) -> Point3<f64> {
        self.position + Vector3::new(0.0, EYE_HEIGHT, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_fallback() {
        let named = EntitySnapshot::new(1, Point3::new(0.0, 0.0, 0.0), EntityKind::Npc, "Guard");
        assert_eq!(named.display_label(), "Guard");

        let unnamed = EntitySnapshot::new(2, Point3::new(0.0, 0.0, 0.0), EntityKind::Npc, "");
        assert_eq!(unnamed.display_label(), "NPC");

        let other = EntitySnapshot::new(3, Point3::new(0.0, 0.0, 0.0), EntityKind::Other, "");
        assert_eq!(other.display_label(), "Entity");
    }

    #[test]
    fn test_observer_eye_position() {
        let observer = Observer::new(
            9,
            Point3::new(1.0, 10.0, -3.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(observer.eye_position(), Point3::new(1.0, 11.6, -3.0));
    }
}
