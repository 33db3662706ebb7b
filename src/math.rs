//! Scalar and vector math kernel.
//!
//! Pure functions over `cgmath` types, shared by the raycast and query
//! modules. Dot and cross products come straight from `cgmath::InnerSpace`;
//! only the operations it does not provide (or that need defensive behavior,
//! like zero-safe normalization) live here.

use cgmath::{InnerSpace, MetricSpace, Point3, Vector3};

/// Euclidean distance between two points.
pub fn distance(from: Point3<f64>, to: Point3<f64>) -> f64 {
    from.distance(to)
}

/// Squared distance between two points. Cheaper than [`distance`] when only
/// comparing against a squared threshold.
pub fn distance_squared(from: Point3<f64>, to: Point3<f64>) -> f64 {
    from.distance2(to)
}

/// Normalizes a vector, returning the zero vector instead of NaNs when the
/// input has zero length.
pub fn normalize_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    let length = v.magnitude();
    if length == 0.0 {
        Vector3::new(0.0, 0.0, 0.0)
    } else {
        v / length
    }
}

/// Linear interpolation between two scalars.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Linear interpolation between two points.
pub fn lerp_point(start: Point3<f64>, end: Point3<f64>, t: f64) -> Point3<f64> {
    Point3::new(
        lerp(start.x, end.x, t),
        lerp(start.y, end.y, t),
        lerp(start.z, end.z, t),
    )
}

/// Angle between two vectors in radians, clamped against rounding drift so
/// `acos` never sees a value outside `[-1, 1]`.
pub fn angle_between(a: Vector3<f64>, b: Vector3<f64>) -> f64 {
    let dot = normalize_or_zero(a).dot(normalize_or_zero(b));
    dot.clamp(-1.0, 1.0).acos()
}

/// Converts yaw/pitch (radians) into a unit direction vector.
///
/// Yaw 0 looks toward +Z; pitch is positive looking down.
pub fn euler_to_direction(yaw: f64, pitch: f64) -> Vector3<f64> {
    Vector3::new(
        -yaw.sin() * pitch.cos(),
        -pitch.sin(),
        yaw.cos() * pitch.cos(),
    )
}

/// Converts a direction vector into `(yaw, pitch)` in radians. Inverse of
/// [`euler_to_direction`] for unit vectors.
pub fn direction_to_euler(direction: Vector3<f64>) -> (f64, f64) {
    let normalized = normalize_or_zero(direction);
    let pitch = (-normalized.y).asin();
    let yaw = (-normalized.x).atan2(normalized.z);
    (yaw, pitch)
}

/// Tests whether a point lies inside or on a sphere.
pub fn point_in_sphere(point: Point3<f64>, center: Point3<f64>, radius: f64) -> bool {
    distance_squared(point, center) <= radius * radius
}

/// Tests whether a point lies inside or on an axis-aligned box.
pub fn point_in_box(point: Point3<f64>, min: Point3<f64>, max: Point3<f64>) -> bool {
    point.x >= min.x
        && point.x <= max.x
        && point.y >= min.y
        && point.y <= max.y
        && point.z >= min.z
        && point.z <= max.z
}

/// Closest point to `point` on the segment from `start` to `end`.
pub fn closest_point_on_segment(
    point: Point3<f64>,
    start: Point3<f64>,
    end: Point3<f64>,
) -> Point3<f64> {
    let segment = end - start;
    let length_squared = segment.magnitude2();
    if length_squared == 0.0 {
        return start;
    }
    let t = ((point - start).dot(segment) / length_squared).clamp(0.0, 1.0);
    start + segment * t
}

/// Projects `point` onto the ray `origin + t * direction`.
///
/// Returns the unclamped ray parameter `t` and the projected point; `t` is
/// negative when the point lies behind the origin. `direction` must be unit
/// length for `t` to be a distance.
pub fn ray_closest_approach(
    origin: Point3<f64>,
    direction: Vector3<f64>,
    point: Point3<f64>,
) -> (f64, Point3<f64>) {
    let t = (point - origin).dot(direction);
    (t, origin + direction * t)
}
