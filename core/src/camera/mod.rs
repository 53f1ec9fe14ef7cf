//! Camera Module
//!
//! Orbit camera state and pointer ray casting for the editor viewport.
//! This module is window-system agnostic - it only deals with camera state
//! and math; the shell feeds it pointer deltas and viewport sizes.

pub mod controller;
pub mod raycast;

pub use controller::OrbitCamera;
pub use raycast::{Ray, cast_ray};
