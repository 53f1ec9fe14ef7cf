//! Model Save/Load (.bricks JSON document)
//!
//! Version-tagged JSON persistence for the brick collection:
//!
//! ```text
//! { "version": 1,
//!   "bricks": [ { "x": 3, "y": 4, "z": 0, "r": 0.8, "g": 0.1, "b": 0.1 }, ... ] }
//! ```
//!
//! Loading parses the whole document into a fresh model before anything is
//! committed, so a malformed file can never leave a half-replaced scene
//! behind. A missing `"bricks"` key reads back as an empty model.

use std::path::Path;

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use super::BrickModel;

/// Current document format version.
pub const MODEL_FORMAT_VERSION: u32 = 1;

// ============================================================================
// DOCUMENT RECORDS
// ============================================================================

/// One persisted brick: integer cell plus normalized RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickRecord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// The on-disk document: a version tag and a flat list of bricks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    pub version: u32,
    #[serde(default)]
    pub bricks: Vec<BrickRecord>,
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur during model save/load.
#[derive(Debug)]
pub enum ModelFileError {
    /// Document version is not supported by this build.
    UnsupportedVersion(u32),
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
}

impl std::fmt::Display for ModelFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelFileError::UnsupportedVersion(v) => {
                write!(f, "unsupported model document version: {v}")
            }
            ModelFileError::Io(e) => write!(f, "IO error: {e}"),
            ModelFileError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ModelFileError {}

impl From<std::io::Error> for ModelFileError {
    fn from(e: std::io::Error) -> Self {
        ModelFileError::Io(e)
    }
}

impl From<serde_json::Error> for ModelFileError {
    fn from(e: serde_json::Error) -> Self {
        ModelFileError::Json(e)
    }
}

// ============================================================================
// DOCUMENT CONVERSION
// ============================================================================

impl BrickModel {
    /// Snapshot the brick set into a persistable document.
    pub fn to_document(&self) -> ModelDocument {
        let mut bricks: Vec<BrickRecord> = self
            .bricks()
            .map(|brick| BrickRecord {
                x: brick.position.x,
                y: brick.position.y,
                z: brick.position.z,
                r: brick.color.x,
                g: brick.color.y,
                b: brick.color.z,
            })
            .collect();
        // Deterministic output regardless of hash order.
        bricks.sort_by_key(|r| (r.x, r.y, r.z));

        ModelDocument {
            version: MODEL_FORMAT_VERSION,
            bricks,
        }
    }

    /// Rebuild a model from a parsed document.
    ///
    /// The returned model is clean (`is_modified() == false`): it matches
    /// what the document describes, byte for byte.
    pub fn from_document(doc: &ModelDocument) -> Result<Self, ModelFileError> {
        if doc.version != MODEL_FORMAT_VERSION {
            return Err(ModelFileError::UnsupportedVersion(doc.version));
        }

        let mut model = BrickModel::new();
        for record in &doc.bricks {
            model.add_brick(
                IVec3::new(record.x, record.y, record.z),
                Vec3::new(record.r, record.g, record.b),
            );
        }
        model.set_modified(false);
        Ok(model)
    }

    /// Read a model document from disk.
    ///
    /// Returns a fresh model on success; on any failure the caller's live
    /// model is untouched because nothing is mutated in place.
    pub fn load_from_file(path: &Path) -> Result<Self, ModelFileError> {
        let data = std::fs::read_to_string(path)?;
        let doc: ModelDocument = serde_json::from_str(&data)?;
        Self::from_document(&doc)
    }

    /// Write the model document to disk and clear the dirty flag.
    pub fn save_to_file(&mut self, path: &Path) -> Result<(), ModelFileError> {
        let doc = self.to_document();
        let json = serde_json::to_string_pretty(&doc)?;
        std::fs::write(path, json)?;
        self.set_modified(false);
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
