//! Shape definitions for the annotation canvas.

mod store;

pub use store::ShapeStore;

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a shape.
///
/// Also the external tag the rendering layer puts on the element, and the
/// payload carried by native drag events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    /// Id derived from a rectangle's position, `"{top}-{left}"`.
    ///
    /// Negative zero is written as `0`, so equal positions share an id.
    pub fn positional(rect: &Rect) -> Self {
        Self(format!("{}-{}", rect.top + 0.0, rect.left + 0.0))
    }

    /// A fresh random id, independent of geometry.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Accept a raw string as an id. Blank strings are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the store assigns ids to new shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `"{top}-{left}"`. Two shapes at the same position collide.
    #[default]
    Positional,
    /// UUID v4. Identity does not depend on position.
    Random,
}

impl IdStrategy {
    /// Issue an id for a shape occupying `rect`.
    pub fn issue(self, rect: &Rect) -> ShapeId {
        match self {
            IdStrategy::Positional => ShapeId::positional(rect),
            IdStrategy::Random => ShapeId::random(),
        }
    }
}

/// A rectangle on the canvas with its identifier.
///
/// Shapes are values: moving one means storing a new shape in place of the old.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub rect: Rect,
    /// Whether the rendering layer should let the user drag it.
    #[serde(default = "default_draggable")]
    pub draggable: bool,
}

fn default_draggable() -> bool {
    true
}

impl Shape {
    /// Create a draggable shape.
    pub fn new(id: ShapeId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            draggable: true,
        }
    }
}
