//! Brick Builder Core
//!
//! The spatial interaction engine behind an interactive brick construction
//! editor: pointer rays, brick picking, and the placement/selection state
//! machine that turns raw pointer input into grid-aligned edits. The crate
//! is window-system and graphics-API agnostic - the shell feeds it
//! translated input events and renders whatever [`frame::FrameState`]
//! describes.
//!
//! # Modules
//!
//! - [`model`] - the brick collection, dirty-flag tracking and persistence
//! - [`palette`] - the static named-color table
//! - [`camera`] - orthographic orbit camera and pointer ray casting
//! - [`picking`] - ray/plane, ray/AABB and ray/model intersection
//! - [`input`] - windowing-agnostic pointer button and modifier types
//! - [`interaction`] - the tool-mode state machine
//! - [`editor`] - the composition root exposing the shell-facing API
//! - [`frame`] - the per-frame snapshot handed to the renderer
//!
//! # Example
//!
//! ```
//! use brick_builder_core::{EditorSession, ModifierState, PointerButton, Tool};
//!
//! let mut session = EditorSession::new();
//! session.resize(1280, 720);
//! session.set_tool(Tool::Place);
//! session.set_color_by_name("Blue");
//!
//! // Hover to preview, click to commit.
//! session.pointer_moved(640.0, 360.0, ModifierState::new());
//! session.pointer_pressed(640.0, 360.0, PointerButton::Primary, ModifierState::new());
//!
//! let frame = session.frame();
//! for (cell, color) in frame.bricks() {
//!     // hand off to the renderer
//!     let _ = (cell, color);
//! }
//! ```

pub mod camera;
pub mod editor;
pub mod frame;
pub mod input;
pub mod interaction;
pub mod model;
pub mod palette;
pub mod picking;

// Re-export the shell-facing types at crate level for convenience
pub use camera::{OrbitCamera, Ray, cast_ray};
pub use editor::EditorSession;
pub use frame::{FrameState, GhostPreview};
pub use input::{ButtonState, ModifierState, PointerButton};
pub use interaction::{InteractionState, Tool};
pub use model::{Brick, BrickModel, ModelDocument, ModelFileError};
pub use picking::{PickHit, intersect_aabb, intersect_model, intersect_plane};
