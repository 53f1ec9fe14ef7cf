//! Pointer Ray Casting
//!
//! Converts a 2D pointer position into a world-space ray by unprojecting
//! through the camera's combined view-projection transform. Because the
//! derivation inverts the full matrix instead of assuming a fixed eye, it
//! works unchanged for orthographic and perspective projections; the camera
//! model can be swapped without touching any picking code.

use glam::{Vec3, Vec4};

use super::OrbitCamera;

/// A world-space ray: origin plus unit direction. Immutable once built.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing the direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point along the ray at parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Convert a pointer position to a world-space ray.
///
/// # Arguments
/// * `pointer_x` - Pointer X in pixels, origin top-left
/// * `pointer_y` - Pointer Y in pixels, growing downward
/// * `width` - Viewport width in pixels
/// * `height` - Viewport height in pixels
/// * `camera` - Camera supplying the view and projection transforms
///
/// # Returns
/// A ray whose origin is the unprojected near-plane point under the pointer
/// and whose direction runs toward the corresponding far-plane point.
pub fn cast_ray(
    pointer_x: f32,
    pointer_y: f32,
    width: f32,
    height: f32,
    camera: &OrbitCamera,
) -> Ray {
    // Pixel coordinates to normalized device coordinates in [-1, 1].
    // Pixel Y grows downward, NDC Y grows upward.
    let ndc_x = (2.0 * pointer_x) / width - 1.0;
    let ndc_y = 1.0 - (2.0 * pointer_y) / height;

    let inverse_view_proj = (camera.projection_matrix() * camera.view_matrix()).inverse();

    // Unproject the pointer at the near (-1) and far (+1) clip depths.
    // The homogeneous divide is a no-op for an orthographic projection but
    // keeps this correct if the projection ever becomes perspective.
    let near = inverse_view_proj * Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
    let near = near.truncate() / near.w;

    let far = inverse_view_proj * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let far = far.truncate() / far.w;

    Ray::new(near, far - near)
}
