//! Editor configuration.

use crate::mode::Mode;
use crate::shapes::IdStrategy;
use serde::{Deserialize, Serialize};

/// What a pointer-up does when no pointer-down was seen first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanRelease {
    /// Treat the missing anchor as the surface origin `(0, 0)`.
    #[default]
    Origin,
    /// Drop the gesture without creating a shape.
    Ignore,
}

/// Settings for an [`crate::Editor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Mode active when the editor is created.
    pub initial_mode: Mode,
    /// How new shapes get their ids.
    pub id_strategy: IdStrategy,
    /// Handling of a pointer-up without an anchor in draw mode.
    pub orphan_release: OrphanRelease,
    /// Extra slop in surface units when picking up a shape in move mode.
    pub hit_tolerance: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_mode: Mode::Nothing,
            id_strategy: IdStrategy::Positional,
            orphan_release: OrphanRelease::Origin,
            hit_tolerance: 0.0,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
