//! Interaction modes and the controller that scopes event subscriptions to them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The single interaction behavior active on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mode {
    /// Pointer down/up pairs create rectangles.
    #[serde(rename = "draw")]
    Draw,
    /// Reserved. No gestures are handled yet.
    #[serde(rename = "resize")]
    Resize,
    /// Shapes can be picked up and dropped elsewhere.
    #[serde(rename = "move", alias = "drag", alias = "drop")]
    Move,
    /// Reserved. No gestures are handled yet.
    #[serde(rename = "inputText")]
    InputText,
    /// Reserved. No gestures are handled yet.
    #[serde(rename = "arrow")]
    Arrow,
    /// Nothing reacts to the pointer.
    #[default]
    #[serde(rename = "nothing")]
    Nothing,
}

impl Mode {
    /// Every mode, in selector (tab) order.
    pub const ALL: [Mode; 6] = [
        Mode::Draw,
        Mode::Resize,
        Mode::Move,
        Mode::InputText,
        Mode::Arrow,
        Mode::Nothing,
    ];

    /// Identifier used by the mode selector.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Draw => "draw",
            Mode::Resize => "resize",
            Mode::Move => "move",
            Mode::InputText => "inputText",
            Mode::Arrow => "arrow",
            Mode::Nothing => "nothing",
        }
    }

    /// Modes that exist in the selector but have no behavior yet.
    pub fn is_reserved(self) -> bool {
        matches!(self, Mode::Resize | Mode::InputText | Mode::Arrow)
    }

    /// Event kinds a host must deliver while this mode is active.
    pub fn subscriptions(self) -> &'static [EventKind] {
        match self {
            Mode::Draw => &[EventKind::PointerDown, EventKind::PointerUp],
            Mode::Move => &[
                EventKind::PointerDown,
                EventKind::PointerUp,
                EventKind::DragStart,
                EventKind::DragOver,
                EventKind::Drop,
                EventKind::DragEnd,
            ],
            Mode::Resize | Mode::InputText | Mode::Arrow | Mode::Nothing => &[],
        }
    }

    /// Check if this mode listens to `kind`.
    pub fn listens_to(self, kind: EventKind) -> bool {
        self.subscriptions().contains(&kind)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mode identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draw" => Ok(Mode::Draw),
            "resize" => Ok(Mode::Resize),
            "move" | "drag" | "drop" => Ok(Mode::Move),
            "inputText" => Ok(Mode::InputText),
            "arrow" => Ok(Mode::Arrow),
            "nothing" => Ok(Mode::Nothing),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Kind of host event, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PointerDown,
    PointerUp,
    DragStart,
    DragOver,
    Drop,
    DragEnd,
}

/// What changed when the mode was set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: Mode,
    pub to: Mode,
    /// Event kinds the host should start delivering.
    pub attached: Vec<EventKind>,
    /// Event kinds the host should stop delivering.
    pub released: Vec<EventKind>,
}

impl ModeTransition {
    fn between(from: Mode, to: Mode) -> Self {
        // Re-entering a mode releases and re-acquires everything it holds
        let (attached, released) = if from == to {
            (to.subscriptions().to_vec(), from.subscriptions().to_vec())
        } else {
            (
                to.subscriptions()
                    .iter()
                    .copied()
                    .filter(|kind| !from.listens_to(*kind))
                    .collect(),
                from.subscriptions()
                    .iter()
                    .copied()
                    .filter(|kind| !to.listens_to(*kind))
                    .collect(),
            )
        };
        Self {
            from,
            to,
            attached,
            released,
        }
    }
}

/// Holds the active mode. Every transition is legal.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    current: Mode,
}

impl ModeController {
    /// Create a controller starting in `mode`.
    pub fn new(mode: Mode) -> Self {
        Self { current: mode }
    }

    /// The active mode.
    pub fn current_mode(&self) -> Mode {
        self.current
    }

    /// Replace the active mode unconditionally.
    pub fn set_mode(&mut self, mode: Mode) -> ModeTransition {
        let transition = ModeTransition::between(self.current, mode);
        log::debug!(
            "Mode {} -> {} (attached {:?}, released {:?})",
            transition.from,
            transition.to,
            transition.attached,
            transition.released
        );
        if mode.is_reserved() {
            log::debug!("Mode {} has no gestures yet", mode);
        }
        self.current = mode;
        transition
    }
}
