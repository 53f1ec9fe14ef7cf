//! Picking
//!
//! Pure ray intersection tests against the ground plane, brick bounding
//! boxes, and the whole model. Degenerate geometry (parallel rays, rays
//! starting outside a slab) is a valid "no intersection" outcome, never an
//! error.

use glam::{IVec3, Vec3};

use crate::camera::Ray;
use crate::model::{BrickModel, cell_bounds};

/// A ray component below this magnitude is treated as parallel to the axis.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Upper bound on hit distances, standing in for "unbounded".
const T_MAX_SENTINEL: f32 = 100_000.0;

/// Normal components above this magnitude snap to ±1; the rest to 0.
const NORMAL_SNAP_THRESHOLD: f32 = 0.9;

/// A resolved pick against the brick model.
///
/// `neighbor` is the empty cell adjacent to the struck face - where a new
/// brick would attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickHit {
    /// Grid cell of the brick that was struck.
    pub position: IVec3,
    /// Axis-aligned unit normal of the struck face.
    pub normal: IVec3,
    /// `position + normal`: the attachment cell for a new brick.
    pub neighbor: IVec3,
}

/// Intersect a ray with an infinite plane.
///
/// # Arguments
/// * `ray` - The ray to test
/// * `plane_normal` - Plane normal (need not be normalized)
/// * `plane_point` - Any point on the plane
///
/// # Returns
/// The hit distance `t`, or `None` when the ray is parallel to the plane or
/// the intersection lies behind the ray origin.
pub fn intersect_plane(ray: &Ray, plane_normal: Vec3, plane_point: Vec3) -> Option<f32> {
    let denom = ray.direction.dot(plane_normal);
    if denom.abs() <= PARALLEL_EPSILON {
        return None;
    }

    let t = (plane_point - ray.origin).dot(plane_normal) / denom;
    (t >= 0.0).then_some(t)
}

/// Intersect a ray with an axis-aligned box using the slab method.
///
/// # Arguments
/// * `ray` - The ray to test
/// * `box_min` - Minimum corner of the box
/// * `box_max` - Maximum corner of the box
///
/// # Returns
/// `(t, normal)` for the entry point, or `None` on a miss. The normal
/// belongs to the last slab that raised the entry distance - the face the
/// ray actually enters through. A ray starting inside the box reports
/// `t = 0` with a zero normal.
pub fn intersect_aabb(ray: &Ray, box_min: Vec3, box_max: Vec3) -> Option<(f32, Vec3)> {
    let mut t_min = 0.0_f32;
    let mut t_max = T_MAX_SENTINEL;
    let mut normal = Vec3::ZERO;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.direction[axis];

        if dir.abs() < PARALLEL_EPSILON {
            // Parallel to this slab: either always inside it or never.
            if origin < box_min[axis] || origin > box_max[axis] {
                return None;
            }
            continue;
        }

        let inv_dir = 1.0 / dir;
        let mut t_near = (box_min[axis] - origin) * inv_dir;
        let mut t_far = (box_max[axis] - origin) * inv_dir;
        if t_near > t_far {
            std::mem::swap(&mut t_near, &mut t_far);
        }

        if t_near > t_min {
            t_min = t_near;
            normal = Vec3::ZERO;
            normal[axis] = if dir > 0.0 { -1.0 } else { 1.0 };
        }
        t_max = t_max.min(t_far);

        if t_min > t_max {
            return None;
        }
    }

    Some((t_min, normal))
}

/// Pick the nearest brick struck by a ray.
///
/// Linear scan over every brick's AABB - O(n) per pick, fine at the brick
/// counts an interactive editing session produces (low thousands). The
/// surviving normal is snapped to the nearest axis-aligned unit vector and
/// the attachment cell is derived from it in integer grid arithmetic.
///
/// Returns `None` for an empty model or a ray that misses everything. A ray
/// grazing an edge shared by two bricks reports whichever brick reached the
/// minimal distance first in iteration order.
pub fn intersect_model(ray: &Ray, model: &BrickModel) -> Option<PickHit> {
    let mut closest_t = T_MAX_SENTINEL;
    let mut closest: Option<(IVec3, Vec3)> = None;

    for brick in model.bricks() {
        let (box_min, box_max) = cell_bounds(brick.position);
        if let Some((t, normal)) = intersect_aabb(ray, box_min, box_max) {
            if t < closest_t {
                closest_t = t;
                closest = Some((brick.position, normal));
            }
        }
    }

    closest.map(|(position, raw_normal)| {
        let normal = snap_normal(raw_normal);
        PickHit {
            position,
            normal,
            neighbor: position + normal,
        }
    })
}

/// Snap a near-axis-aligned normal onto the integer grid.
fn snap_normal(normal: Vec3) -> IVec3 {
    let snap = |c: f32| {
        if c.abs() > NORMAL_SNAP_THRESHOLD {
            c.signum() as i32
        } else {
            0
        }
    };
    IVec3::new(snap(normal.x), snap(normal.y), snap(normal.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> (Vec3, Vec3) {
        (Vec3::new(-0.5, -0.5, -0.5), Vec3::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn test_plane_hit_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let t = intersect_plane(&ray, Vec3::Z, Vec3::ZERO).unwrap();
        assert!((t - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_plane_parallel_is_none() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(intersect_plane(&ray, Vec3::Z, Vec3::ZERO).is_none());
    }

    #[test]
    fn test_plane_behind_origin_is_none() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(intersect_plane(&ray, Vec3::Z, Vec3::ZERO).is_none());
    }

    #[test]
    fn test_aabb_axis_hit() {
        let (bmin, bmax) = unit_box();
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        let (t, normal) = intersect_aabb(&ray, bmin, bmax).unwrap();
        assert!((t - 4.5).abs() < 1e-5);
        assert_eq!(normal, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_aabb_entered_face_wins() {
        let (bmin, bmax) = unit_box();
        // Shallow diagonal approach: the X slab is entered last.
        let ray = Ray::new(Vec3::new(-5.0, -0.2, 0.0), Vec3::new(1.0, 0.02, 0.0));
        let (_, normal) = intersect_aabb(&ray, bmin, bmax).unwrap();
        assert_eq!(normal, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_aabb_parallel_outside_slab_misses() {
        let (bmin, bmax) = unit_box();
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(intersect_aabb(&ray, bmin, bmax).is_none());
    }

    #[test]
    fn test_aabb_parallel_inside_slab_hits() {
        let (bmin, bmax) = unit_box();
        let ray = Ray::new(Vec3::new(-5.0, 0.25, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(intersect_aabb(&ray, bmin, bmax).is_some());
    }

    #[test]
    fn test_aabb_miss() {
        let (bmin, bmax) = unit_box();
        let ray = Ray::new(Vec3::new(5.0, 3.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        assert!(intersect_aabb(&ray, bmin, bmax).is_none());
    }

    #[test]
    fn test_ray_starting_inside_reports_zero_t() {
        let (bmin, bmax) = unit_box();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        let (t, _) = intersect_aabb(&ray, bmin, bmax).unwrap();
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_snap_normal() {
        assert_eq!(snap_normal(Vec3::new(0.98, 0.1, -0.05)), IVec3::new(1, 0, 0));
        assert_eq!(snap_normal(Vec3::new(0.0, 0.0, -1.0)), IVec3::new(0, 0, -1));
        assert_eq!(snap_normal(Vec3::ZERO), IVec3::ZERO);
    }

    #[test]
    fn test_empty_model_yields_no_hit() {
        let model = BrickModel::new();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(intersect_model(&ray, &model).is_none());
    }

    #[test]
    fn test_nearest_brick_wins() {
        let mut model = BrickModel::new();
        let color = Vec3::ONE;
        model.add_brick(IVec3::new(0, 0, 0), color);
        model.add_brick(IVec3::new(3, 0, 0), color);

        // Approaching from +X: the brick at x=3 is struck first.
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.5), Vec3::new(-1.0, 0.0, 0.0));
        let hit = intersect_model(&ray, &model).unwrap();
        assert_eq!(hit.position, IVec3::new(3, 0, 0));
        assert_eq!(hit.normal, IVec3::new(1, 0, 0));
        assert_eq!(hit.neighbor, IVec3::new(4, 0, 0));
    }
}
