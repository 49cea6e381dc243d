//! Screen to surface coordinate mapping.

use crate::camera::Camera;
use crate::constants::PARALLEL_EPSILON;
use crate::error::MapError;
use glam::{Vec2, Vec3};

/// Cast a ray from the camera through a normalized device point.
///
/// Returns `(origin, direction)` in world space with a unit direction.
#[inline]
pub fn pointer_ray(ndc: Vec2, camera: &Camera) -> (Vec3, Vec3) {
    let near = camera.unproject(Vec3::new(ndc.x, ndc.y, 0.0));
    let dir = (near - camera.eye).normalize_or_zero();
    (camera.eye, dir)
}

/// Map a normalized device point onto the surface's home plane.
///
/// The parametric distance is measured from the eye by the eye's height above
/// `plane_z` (`t = (eye.z - plane_z) / dir.z`). For a camera looking down the
/// negative Z axis this lands on the point mirrored through the eye, so callers
/// that want the point under the pointer negate both axes.
pub fn project_to_surface(ndc: Vec2, camera: &Camera, plane_z: f32) -> Result<Vec2, MapError> {
    let (origin, dir) = pointer_ray(ndc, camera);
    if dir.z.abs() < PARALLEL_EPSILON {
        return Err(MapError::ParallelRay);
    }
    let t = (origin.z - plane_z) / dir.z;
    let hit = origin + dir * t;
    let point = Vec2::new(hit.x, hit.y);
    if point.is_finite() {
        Ok(point)
    } else {
        Err(MapError::NonFinite)
    }
}
