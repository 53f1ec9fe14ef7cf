//! Brick Color Palette
//!
//! Static table of named brick colors offered by the shell's swatch UI.
//! Read-only; tools copy a color out of the table and hand it to the
//! interaction layer.

use glam::Vec3;

/// Named brick colors, normalized RGB in [0, 1].
pub const PALETTE: [(&str, Vec3); 14] = [
    ("Red", Vec3::new(0.8, 0.1, 0.1)),
    ("Green", Vec3::new(0.1, 0.6, 0.1)),
    ("Blue", Vec3::new(0.1, 0.3, 0.8)),
    ("Yellow", Vec3::new(0.95, 0.9, 0.1)),
    ("White", Vec3::new(0.95, 0.95, 0.95)),
    ("Black", Vec3::new(0.1, 0.1, 0.1)),
    ("Grey", Vec3::new(0.6, 0.6, 0.6)),
    ("Dark Grey", Vec3::new(0.3, 0.3, 0.3)),
    ("Orange", Vec3::new(0.9, 0.5, 0.1)),
    ("Brown", Vec3::new(0.4, 0.2, 0.1)),
    ("Purple", Vec3::new(0.5, 0.1, 0.6)),
    ("Pink", Vec3::new(0.9, 0.6, 0.7)),
    ("Cyan", Vec3::new(0.2, 0.8, 0.8)),
    ("Lime", Vec3::new(0.6, 0.8, 0.2)),
];

/// Name of the color selected when the editor starts.
pub const DEFAULT_COLOR_NAME: &str = "Red";

/// Look up a palette color by its display name.
pub fn color_by_name(name: &str) -> Option<Vec3> {
    PALETTE
        .iter()
        .find(|(entry_name, _)| *entry_name == name)
        .map(|(_, color)| *color)
}

/// The color selected when the editor starts.
pub fn default_color() -> Vec3 {
    color_by_name(DEFAULT_COLOR_NAME).unwrap_or(Vec3::new(0.8, 0.1, 0.1))
}
