use cgmath::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer block coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Block coordinate containing a world-space point, flooring each axis.
    pub fn from_world(point: Point3<f64>) -> Self {
        Self {
            x: point.x.floor() as i32,
            y: point.y.floor() as i32,
            z: point.z.floor() as i32,
        }
    }

    /// World-space center of this block.
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            f64::from(self.x) + 0.5,
            f64::from(self.y) + 0.5,
            f64::from(self.z) + 0.5,
        )
    }
}

impl fmt::Display for VoxelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
