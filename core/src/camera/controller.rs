//! Orbit Camera
//!
//! A Z-up, orthographic orbit camera for the editor viewport. The camera
//! circles a target point at a fixed distance using spherical angles; zoom
//! changes the size of the orthographic view volume rather than the eye
//! distance, so depth precision is unaffected by zoom level.
//!
//! Controls (wired up by the shell):
//! - Middle mouse drag: Orbit (rotate around target)
//! - Shift + middle mouse drag: Pan (translate target point)
//! - Scroll wheel: Zoom (change view volume size)

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};

use glam::{Mat4, Vec3};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default orbit angle around the Z axis, in radians (-45 degrees).
const DEFAULT_YAW: f32 = -FRAC_PI_4;
/// Default elevation angle, in radians (30 degrees).
const DEFAULT_PITCH: f32 = FRAC_PI_6;
/// Eye-to-target distance. Fixed: orthographic zoom scales the view volume.
const DEFAULT_DISTANCE: f32 = 50.0;
/// Default full vertical extent of the view volume in world units.
const DEFAULT_SCALE: f32 = 20.0;
/// Default viewport aspect ratio before the first resize event.
const DEFAULT_ASPECT_RATIO: f32 = 16.0 / 9.0;
/// Near clip plane.
const NEAR_PLANE: f32 = 0.1;
/// Far clip plane.
const FAR_PLANE: f32 = 500.0;

/// Minimum view volume height (maximum zoom-in).
const MIN_SCALE: f32 = 0.1;
/// Maximum view volume height (maximum zoom-out).
const MAX_SCALE: f32 = 500.0;

/// Pitch clamp just short of straight up/down to avoid gimbal flip.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Scroll zoom factor: world units of scale per unit of zoom delta.
const ZOOM_SENSITIVITY: f32 = 2.0;

// ============================================================================
// ORBIT CAMERA
// ============================================================================

/// Orthographic orbit camera with world-up = +Z.
///
/// # Coordinate System
/// - Yaw: rotation around world Z, in radians (unclamped)
/// - Pitch: elevation above the XY plane, in radians (clamped short of ±π/2)
/// - Scale: full vertical extent of the ortho volume (clamped to [0.1, 500])
/// - Horizontal extent = `scale * aspect_ratio`
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// The point the camera orbits around; moved by panning.
    pub target: Vec3,
    /// Orbit angle around world Z, radians.
    pub yaw: f32,
    /// Elevation angle, radians, clamped to avoid gimbal flip.
    pub pitch: f32,
    /// Eye-to-target distance.
    pub distance: f32,
    /// Full vertical extent of the orthographic view volume.
    pub scale: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clip plane distance.
    pub near_plane: f32,
    /// Far clip plane distance.
    pub far_plane: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            distance: DEFAULT_DISTANCE,
            scale: DEFAULT_SCALE,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            near_plane: NEAR_PLANE,
            far_plane: FAR_PLANE,
        }
    }
}

impl OrbitCamera {
    /// Create a camera with the default three-quarter view of the origin.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // MATRIX COMPUTATION
    // ========================================================================

    /// Compute the eye position from the current spherical coordinates.
    fn eye_position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.distance * self.pitch.cos() * self.yaw.cos(),
            self.distance * self.pitch.cos() * self.yaw.sin(),
            self.distance * self.pitch.sin(),
        );
        self.target + offset
    }

    /// Right-handed look-at transform from the current orbit state.
    ///
    /// Pure function of camera state; no side effects.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Z)
    }

    /// Centered orthographic projection over the current view volume.
    ///
    /// Uses the GL clip convention (NDC depth in [-1, 1]) so that
    /// unprojecting NDC z = -1 / +1 lands exactly on the near/far planes.
    pub fn projection_matrix(&self) -> Mat4 {
        let w = self.scale * self.aspect_ratio;
        let h = self.scale;
        Mat4::orthographic_rh_gl(
            -w / 2.0,
            w / 2.0,
            -h / 2.0,
            h / 2.0,
            self.near_plane,
            self.far_plane,
        )
    }

    // ========================================================================
    // NAVIGATION
    // ========================================================================

    /// Accumulate orbit deltas, clamping pitch short of straight up/down.
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Zoom by shrinking or growing the view volume.
    ///
    /// Positive delta zooms in. Scale is clamped to [`MIN_SCALE`, `MAX_SCALE`];
    /// out-of-range input is silently absorbed, never rejected.
    pub fn zoom(&mut self, delta: f32) {
        self.scale = (self.scale - delta * ZOOM_SENSITIVITY).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Pan the target in the camera's right/up plane.
    ///
    /// The camera-space axes are read from the first two basis columns of
    /// the inverted view matrix. Motion is multiplied by the current scale
    /// so panning covers a constant fraction of the screen at any zoom.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let inv_view = self.view_matrix().inverse();
        let right = inv_view.x_axis.truncate();
        let up = inv_view.y_axis.truncate();

        self.target -= right * dx * self.scale;
        self.target -= up * dy * self.scale;
    }

    /// Update the viewport aspect ratio after a window resize.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

// ============================================================================
// TESTS
// ============================================================================
