//! Editor Session
//!
//! The composition root wiring camera, picking, interaction and model
//! together behind the shell-facing API. The shell feeds in translated
//! pointer/keyboard events and viewport sizes; the session hands back a
//! [`FrameState`] snapshot to render. All work is synchronous on the
//! interaction thread; the session exclusively owns every piece of mutable
//! state.

use std::path::Path;

use glam::Vec3;

use crate::camera::{OrbitCamera, Ray, cast_ray};
use crate::frame::{FrameState, GhostPreview};
use crate::input::{ButtonState, ModifierState, PointerButton};
use crate::interaction::{InteractionState, Tool};
use crate::model::{BrickModel, ModelFileError};
use crate::palette;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Orbit sensitivity: radians per pixel of middle-button drag.
const ORBIT_SENSITIVITY: f32 = 0.01;
/// Pan sensitivity: screen fraction per pixel of shift+middle drag.
const PAN_SENSITIVITY: f32 = 0.005;
/// Zoom step per scroll-wheel notch.
const WHEEL_STEP: f32 = 0.6;

/// Viewport size assumed until the first resize event arrives.
const DEFAULT_VIEWPORT: (u32, u32) = (1280, 720);

// ============================================================================
// EDITOR SESSION
// ============================================================================

/// One open brick document plus everything needed to edit it.
///
/// Navigation (orbit/pan/zoom) is orthogonal to the active tool: middle-drag
/// orbits, shift+middle-drag pans and the wheel zooms in every mode, while
/// primary presses dispatch to whatever tool is active.
pub struct EditorSession {
    model: BrickModel,
    camera: OrbitCamera,
    interaction: InteractionState,
    viewport: (f32, f32),
    buttons: ButtonState,
    last_pointer: [f32; 2],
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Create a session with an empty scene and the default camera view.
    pub fn new() -> Self {
        let mut camera = OrbitCamera::new();
        camera.set_aspect_ratio(DEFAULT_VIEWPORT.0 as f32 / DEFAULT_VIEWPORT.1 as f32);
        Self {
            model: BrickModel::new(),
            camera,
            interaction: InteractionState::new(),
            viewport: (DEFAULT_VIEWPORT.0 as f32, DEFAULT_VIEWPORT.1 as f32),
            buttons: ButtonState::new(),
            last_pointer: [0.0, 0.0],
        }
    }

    // ========================================================================
    // POINTER AND VIEWPORT EVENTS
    // ========================================================================

    /// Update the viewport size after a window resize. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.viewport = (width as f32, height as f32);
            self.camera.set_aspect_ratio(width as f32 / height as f32);
        }
    }

    /// Handle a pointer button press.
    ///
    /// A primary press dispatches the active tool at the pointer position;
    /// other buttons only arm navigation drags for subsequent moves.
    pub fn pointer_pressed(
        &mut self,
        x: f32,
        y: f32,
        button: PointerButton,
        modifiers: ModifierState,
    ) {
        self.buttons.set(button, true);
        self.last_pointer = [x, y];

        if button == PointerButton::Primary {
            let ray = self.pointer_ray(x, y);
            self.interaction.click(&ray, &modifiers, &mut self.model);
        }
    }

    /// Handle a pointer button release.
    pub fn pointer_released(&mut self, button: PointerButton) {
        self.buttons.set(button, false);
    }

    /// Handle pointer motion. Call on every pointer-move event.
    ///
    /// While the middle button is held the drag navigates (shift pans,
    /// otherwise orbits). The ghost preview is recomputed afterwards either
    /// way, so it tracks both pointer motion and camera motion.
    pub fn pointer_moved(&mut self, x: f32, y: f32, modifiers: ModifierState) {
        let dx = x - self.last_pointer[0];
        let dy = y - self.last_pointer[1];
        self.last_pointer = [x, y];

        if self.buttons.is_pressed(PointerButton::Middle) {
            if modifiers.shift {
                self.camera
                    .pan(dx * PAN_SENSITIVITY, -dy * PAN_SENSITIVITY);
            } else {
                self.camera
                    .orbit(-dx * ORBIT_SENSITIVITY, -dy * ORBIT_SENSITIVITY);
            }
        }

        let ray = self.pointer_ray(x, y);
        self.interaction.update_ghost(&ray, &self.model);
    }

    /// Handle scroll-wheel input, in wheel notches (positive = zoom in).
    pub fn scroll(&mut self, delta_notches: f32) {
        self.camera.zoom(delta_notches * WHEEL_STEP);
    }

    fn pointer_ray(&self, x: f32, y: f32) -> Ray {
        cast_ray(x, y, self.viewport.0, self.viewport.1, &self.camera)
    }

    // ========================================================================
    // TOOL AND COLOR SELECTION
    // ========================================================================

    /// Switch the active tool (menu/shortcut event from the shell).
    pub fn set_tool(&mut self, tool: Tool) {
        self.interaction.set_tool(tool);
    }

    pub fn tool(&self) -> Tool {
        self.interaction.tool()
    }

    /// Set the active color directly.
    pub fn set_color(&mut self, color: Vec3) {
        self.interaction.set_color(color);
    }

    /// Set the active color from the named palette.
    ///
    /// Returns `false` (leaving the color unchanged) for unknown names.
    pub fn set_color_by_name(&mut self, name: &str) -> bool {
        match palette::color_by_name(name) {
            Some(color) => {
                self.interaction.set_color(color);
                true
            }
            None => false,
        }
    }

    pub fn color(&self) -> Vec3 {
        self.interaction.color()
    }

    // ========================================================================
    // DOCUMENT LIFECYCLE
    // ========================================================================

    /// Discard the scene and start a fresh, unmodified document.
    pub fn new_scene(&mut self) {
        self.model.clear();
        self.interaction.clear_preview();
        println!("[Editor] New scene");
    }

    /// Replace the scene with the contents of a model file.
    ///
    /// On failure the current scene is left untouched; the error propagates
    /// for the shell to report.
    pub fn open(&mut self, path: &Path) -> Result<(), ModelFileError> {
        let loaded = BrickModel::load_from_file(path)?;
        println!("[Editor] Opened {} ({} bricks)", path.display(), loaded.len());
        self.model = loaded;
        self.interaction.clear_preview();
        Ok(())
    }

    /// Write the scene to a model file and clear the dirty flag.
    pub fn save(&mut self, path: &Path) -> Result<(), ModelFileError> {
        self.model.save_to_file(path)?;
        println!("[Editor] Saved {} ({} bricks)", path.display(), self.model.len());
        Ok(())
    }

    /// Whether the scene has edits not yet written to disk.
    pub fn is_modified(&self) -> bool {
        self.model.is_modified()
    }

    // ========================================================================
    // RENDER OUTPUT
    // ========================================================================

    /// Snapshot the state the renderer consumes this frame.
    pub fn frame(&self) -> FrameState<'_> {
        let ghost = self.interaction.ghost().map(|position| GhostPreview {
            position,
            color: self.interaction.color(),
        });
        FrameState::new(
            &self.model,
            ghost,
            self.interaction.selected(),
            self.camera.view_matrix(),
            self.camera.projection_matrix(),
        )
    }

    /// The brick collection.
    pub fn model(&self) -> &BrickModel {
        &self.model
    }

    /// The viewport camera.
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }
}
