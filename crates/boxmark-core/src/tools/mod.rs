//! Gesture handlers for the modes that have behavior.
//!
//! Each handler owns the transient state of its gesture. The editor keeps
//! exactly one [`ActiveTool`] alive, built for the current mode; switching
//! modes drops it, which discards any pending anchor or drag session.

mod draw;
mod relocate;

pub use draw::PointerGestureTracker;
pub use relocate::{DragRelocationController, DragSession};

use crate::config::EditorConfig;
use crate::mode::Mode;
use kurbo::Point;

/// Observable state of the gesture machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Draw mode saw a pointer-down and waits for the pointer-up.
    AnchorPending { anchor: Point },
    /// Move mode holds a picked-up shape and waits for the drop.
    DragPending(DragSession),
}

/// The gesture handler subscribed for the current mode.
#[derive(Debug, Clone)]
pub(crate) enum ActiveTool {
    Draw(PointerGestureTracker),
    Move(DragRelocationController),
    /// Reserved modes and `nothing`.
    Inert,
}

impl ActiveTool {
    pub(crate) fn for_mode(mode: Mode, config: &EditorConfig) -> Self {
        match mode {
            Mode::Draw => ActiveTool::Draw(PointerGestureTracker::new(config.orphan_release)),
            Mode::Move => ActiveTool::Move(DragRelocationController::new(config.hit_tolerance)),
            Mode::Resize | Mode::InputText | Mode::Arrow | Mode::Nothing => ActiveTool::Inert,
        }
    }

    pub(crate) fn interaction(&self) -> Interaction {
        match self {
            ActiveTool::Draw(tracker) => match tracker.anchor() {
                Some(anchor) => Interaction::AnchorPending { anchor },
                None => Interaction::Idle,
            },
            ActiveTool::Move(controller) => match controller.session() {
                Some(session) => Interaction::DragPending(session.clone()),
                None => Interaction::Idle,
            },
            ActiveTool::Inert => Interaction::Idle,
        }
    }
}
