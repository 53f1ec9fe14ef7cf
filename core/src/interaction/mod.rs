//! Interaction State Machine
//!
//! Turns tool mode + pick results + pointer presses into grid-aligned
//! edits. States are the four tool modes; transitions happen only on
//! explicit tool-selection events from the shell, never on pointer input.
//! Within a mode, pointer motion recomputes the transient ghost preview and
//! a primary press commits a mutation.

use glam::{IVec3, Vec3};

use crate::camera::Ray;
use crate::input::ModifierState;
use crate::model::BrickModel;
use crate::palette;
use crate::picking::{intersect_model, intersect_plane};

/// A ray Z component below this is considered pointing downward.
const DOWNWARD_EPSILON: f32 = 1e-6;

/// The active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Attach a brick to a picked face, or drop one on the ground plane.
    #[default]
    Place,
    /// Highlight a single brick.
    Select,
    /// Recolor the picked brick with the current color.
    Paint,
    /// Remove the picked brick.
    Erase,
}

/// Transient interaction state owned by the editor.
#[derive(Debug, Clone)]
pub struct InteractionState {
    tool: Tool,
    color: Vec3,
    /// Preview cell shown under the pointer in Place mode.
    ghost: Option<IVec3>,
    /// Brick highlighted by the Select tool.
    selected: Option<IVec3>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            color: palette::default_color(),
            ghost: None,
            selected: None,
        }
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn ghost(&self) -> Option<IVec3> {
        self.ghost
    }

    pub fn selected(&self) -> Option<IVec3> {
        self.selected
    }

    /// Switch tools.
    ///
    /// Clears the ghost and the selection: both are mode-specific concepts
    /// and must not outlive the mode that produced them.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.ghost = None;
        self.selected = None;
    }

    /// Change the color applied by Place and Paint.
    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    /// Drop the ghost and selection, e.g. after the model is replaced
    /// wholesale by New/Open.
    pub(crate) fn clear_preview(&mut self) {
        self.ghost = None;
        self.selected = None;
    }

    /// Recompute the ghost preview for the current pointer ray.
    ///
    /// Place mode resolves, in order: the attachment cell of a picked brick
    /// face; else the ground-plane cell under a downward ray (always layer
    /// z = 0); else nothing. Every other tool keeps the ghost cleared.
    pub fn update_ghost(&mut self, ray: &Ray, model: &BrickModel) {
        if self.tool != Tool::Place {
            self.ghost = None;
            return;
        }

        if let Some(hit) = intersect_model(ray, model) {
            self.ghost = Some(hit.neighbor);
            return;
        }

        if ray.direction.z < -DOWNWARD_EPSILON {
            if let Some(t) = intersect_plane(ray, Vec3::Z, Vec3::ZERO) {
                let point = ray.at(t);
                self.ghost = Some(IVec3::new(
                    point.x.round() as i32,
                    point.y.round() as i32,
                    0,
                ));
                return;
            }
        }

        self.ghost = None;
    }

    /// Dispatch a primary-button press.
    ///
    /// Place mode re-resolves the ghost from the same ray afterwards, so
    /// the preview reflects the post-mutation model: it stacks upward after
    /// a placement and disappears after an override-erase.
    pub fn click(&mut self, ray: &Ray, modifiers: &ModifierState, model: &mut BrickModel) {
        match self.tool {
            Tool::Place => {
                if modifiers.ctrl {
                    // Erase override: remove the brick itself, not the neighbor.
                    if let Some(hit) = intersect_model(ray, model) {
                        model.remove_brick(hit.position);
                    }
                } else if let Some(cell) = self.ghost {
                    model.add_brick(cell, self.color);
                }
                self.update_ghost(ray, model);
            }
            Tool::Select => {
                self.selected = intersect_model(ray, model).map(|hit| hit.position);
            }
            Tool::Paint => {
                if let Some(hit) = intersect_model(ray, model) {
                    model.paint_brick(hit.position, self.color);
                }
            }
            Tool::Erase => {
                if let Some(hit) = intersect_model(ray, model) {
                    model.remove_brick(hit.position);
                }
            }
        }
    }
}
