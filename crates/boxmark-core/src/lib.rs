//! BoxMark Core Library
//!
//! Turns pointer and drag-and-drop gestures over an annotation surface into
//! rectangles that can be drawn and moved. Rendering and the mode selector
//! belong to the host; this crate owns the shapes and the gesture state.

pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod mode;
pub mod shapes;
pub mod tools;

pub use config::{EditorConfig, OrphanRelease};
pub use editor::{Editor, IgnoreReason, Outcome};
pub use error::{EditorError, EditorResult};
pub use geometry::Rect;
pub use input::{DragPayload, DropEffect, HostEvent};
pub use mode::{EventKind, Mode, ModeController, ModeTransition};
pub use shapes::{IdStrategy, Shape, ShapeId, ShapeStore};
pub use tools::{DragRelocationController, DragSession, Interaction, PointerGestureTracker};
