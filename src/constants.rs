//! Engine tuning constants.
//!
//! Grouped by subsystem so call sites read as `constants::raycast::STEP_SIZE`.

pub mod raycast {
    /// Step size for fixed-increment block marching, in world units.
    ///
    /// Worst-case work per march is `max_distance / STEP_SIZE` samples.
    /// Voxels thinner than this along the ray can be skipped; that is the
    /// accepted trade-off of stepped sampling.
    pub const STEP_SIZE: f64 = 0.1;

    /// Vertical offset from an observer's feet to its eye position.
    pub const EYE_HEIGHT: f64 = 1.6;
}

pub mod entity {
    /// Perpendicular distance within which a ray counts as striking an entity.
    pub const HIT_RADIUS: f64 = 1.5;

    /// Vertical offset from an entity's raw position to its approximate center.
    pub const CENTER_HEIGHT: f64 = 1.0;
}
