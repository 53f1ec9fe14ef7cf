//! Frame Snapshot
//!
//! The read-only state handed to the external renderer once per frame:
//! committed bricks, the transient ghost/selection overlays, and the camera
//! transforms to consume verbatim. Borrows the model for the duration of
//! the frame; nothing here mutates.

use glam::{IVec3, Mat4, Vec3};

use crate::model::BrickModel;

/// The Place-mode preview cell and the color it would commit with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostPreview {
    pub position: IVec3,
    pub color: Vec3,
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameState<'a> {
    model: &'a BrickModel,
    /// Preview cell under the pointer, Place mode only.
    pub ghost: Option<GhostPreview>,
    /// Cell to draw a highlight outline around.
    pub selected: Option<IVec3>,
    /// Current view transform.
    pub view: Mat4,
    /// Current projection transform.
    pub projection: Mat4,
}

impl<'a> FrameState<'a> {
    pub(crate) fn new(
        model: &'a BrickModel,
        ghost: Option<GhostPreview>,
        selected: Option<IVec3>,
        view: Mat4,
        projection: Mat4,
    ) -> Self {
        Self {
            model,
            ghost,
            selected,
            view,
            projection,
        }
    }

    /// Committed bricks as `(cell, color)` pairs, order unspecified.
    pub fn bricks(&self) -> impl Iterator<Item = (IVec3, Vec3)> + 'a {
        self.model.bricks().map(|brick| (brick.position, brick.color))
    }

    /// Number of committed bricks this frame.
    pub fn brick_count(&self) -> usize {
        self.model.len()
    }
}
