//! Ray query and result data.

use crate::entity::EntityId;
use crate::error::QueryError;
use crate::math;
use crate::world::VoxelPos;
use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A ray with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Builds a ray, normalizing the direction. A zero-length direction stays
    /// zero and is rejected at resolve time.
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self {
            origin,
            direction: math::normalize_or_zero(direction),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

/// Everything one resolution call needs: the ray, its reach, which hit types
/// to consider, and an optional entity to ignore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayQuery {
    pub ray: Ray,
    pub max_distance: f64,
    pub check_blocks: bool,
    pub check_entities: bool,
    pub exclude: Option<EntityId>,
}

impl RayQuery {
    /// Query considering both blocks and entities, excluding nothing.
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>, max_distance: f64) -> Self {
        Self {
            ray: Ray::new(origin, direction),
            max_distance,
            check_blocks: true,
            check_entities: true,
            exclude: None,
        }
    }

    /// Only consider block hits.
    pub fn blocks_only(mut self) -> Self {
        self.check_blocks = true;
        self.check_entities = false;
        self
    }

    /// Only consider entity hits.
    pub fn entities_only(mut self) -> Self {
        self.check_blocks = false;
        self.check_entities = true;
        self
    }

    /// Ignore the given entity during entity testing (typically the source
    /// of the ray). Applies to every entity kind.
    pub fn excluding(mut self, id: EntityId) -> Self {
        self.exclude = Some(id);
        self
    }

    /// Diagnoses degenerate queries. [`resolve`](crate::raycast::resolve)
    /// does not surface these; it treats any invalid query as a miss.
    pub fn validate(&self) -> Result<(), QueryError> {
        let origin = self.ray.origin;
        let direction = self.ray.direction;
        let finite = origin.x.is_finite()
            && origin.y.is_finite()
            && origin.z.is_finite()
            && direction.x.is_finite()
            && direction.y.is_finite()
            && direction.z.is_finite();
        if !finite {
            return Err(QueryError::NonFinite);
        }
        if direction.x == 0.0 && direction.y == 0.0 && direction.z == 0.0 {
            return Err(QueryError::ZeroDirection);
        }
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(QueryError::NonPositiveDistance(self.max_distance));
        }
        Ok(())
    }
}

/// A ray stopped by a solid block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockHit {
    /// Exact sampled point on the ray, not the block corner.
    pub position: Point3<f64>,
    pub distance: f64,
    pub block_id: String,
    pub block_pos: VoxelPos,
}

/// A ray stopped by an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityHit {
    /// Closest-approach point on the ray.
    pub position: Point3<f64>,
    pub distance: f64,
    pub entity: EntityId,
    pub name: String,
}

/// Outcome of one resolution call. Owns its data; valid after the world and
/// entity snapshot it was computed from are gone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RaycastResult {
    Miss,
    Block(BlockHit),
    Entity(EntityHit),
}

impl RaycastResult {
    pub fn is_miss(&self) -> bool {
        matches!(self, RaycastResult::Miss)
    }

    pub fn is_hit(&self) -> bool {
        !self.is_miss()
    }

    pub fn is_block_hit(&self) -> bool {
        matches!(self, RaycastResult::Block(_))
    }

    pub fn is_entity_hit(&self) -> bool {
        matches!(self, RaycastResult::Entity(_))
    }

    /// Distance to the obstruction, `None` on a miss.
    pub fn distance(&self) -> Option<f64> {
        match self {
            RaycastResult::Miss => None,
            RaycastResult::Block(hit) => Some(hit.distance),
            RaycastResult::Entity(hit) => Some(hit.distance),
        }
    }

    /// World-space hit point, `None` on a miss.
    pub fn position(&self) -> Option<Point3<f64>> {
        match self {
            RaycastResult::Miss => None,
            RaycastResult::Block(hit) => Some(hit.position),
            RaycastResult::Entity(hit) => Some(hit.position),
        }
    }
}
