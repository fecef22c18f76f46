//! The editor: shape store, active mode, and the gesture dispatch between them.

use crate::config::EditorConfig;
use crate::error::EditorResult;
use crate::geometry::is_finite;
use crate::input::{DropEffect, HostEvent};
use crate::mode::{Mode, ModeController, ModeTransition};
use crate::shapes::{Shape, ShapeId, ShapeStore};
use crate::tools::{ActiveTool, Interaction};
use kurbo::Point;

/// Why an event left the editor unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The current mode does not listen to this kind of event.
    NotSubscribed,
    /// The event position, or the rectangle computed from it, was NaN or
    /// infinite.
    NonFinitePosition,
    /// Pointer-up without a preceding pointer-down.
    NoAnchor,
    /// Pointer-down in move mode landed on empty canvas.
    NoShapeHit,
    /// The drag payload does not name a shape in the store.
    UnresolvedPayload,
    /// Drop or drag-end without a picked-up shape.
    NoSession,
    /// The picked-up shape was removed before the drop.
    UnknownShape,
}

/// Result of handling one host event.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Ignored(IgnoreReason),
    /// Draw mode captured a pointer-down.
    AnchorSet(Point),
    ShapeCreated(ShapeId),
    PickedUp(ShapeId),
    /// Answer to a drag-over, for the host's cursor feedback.
    DragOver(DropEffect),
    /// A shape moved. Its id changes when ids encode position.
    Relocated { from: ShapeId, to: ShapeId },
    /// A drag ended without a drop.
    DragCancelled(ShapeId),
}

impl Outcome {
    /// Whether the shape store changed.
    pub fn mutated(&self) -> bool {
        matches!(self, Outcome::ShapeCreated(_) | Outcome::Relocated { .. })
    }
}

/// An annotation canvas editor.
///
/// Events are handled one at a time. Only the tool built for the current
/// mode sees them; changing the mode drops that tool along with any gesture
/// it was tracking.
#[derive(Debug, Clone)]
pub struct Editor {
    store: ShapeStore,
    modes: ModeController,
    tool: ActiveTool,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor with an empty store.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            store: ShapeStore::new(config.id_strategy),
            modes: ModeController::new(config.initial_mode),
            tool: ActiveTool::for_mode(config.initial_mode, &config),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The shape store.
    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    /// Shapes in drawing order, for the rendering layer.
    pub fn shapes(&self) -> Vec<&Shape> {
        self.store.list()
    }

    pub fn current_mode(&self) -> Mode {
        self.modes.current_mode()
    }

    /// Where the gesture machine currently stands.
    pub fn interaction(&self) -> Interaction {
        self.tool.interaction()
    }

    /// Switch modes. Any pending gesture is discarded without a mutation.
    pub fn set_mode(&mut self, mode: Mode) -> ModeTransition {
        let pending = self.tool.interaction();
        if pending != Interaction::Idle {
            log::debug!("Discarding {:?} on mode change", pending);
        }
        let transition = self.modes.set_mode(mode);
        self.tool = ActiveTool::for_mode(mode, &self.config);
        transition
    }

    /// Release every subscription, as when the canvas goes away.
    pub fn detach(&mut self) -> ModeTransition {
        self.set_mode(Mode::Nothing)
    }

    /// Handle one event from the host surface.
    ///
    /// Only duplicate ids are reported as errors. Every other misuse comes back
    /// as [`Outcome::Ignored`].
    pub fn handle_event(&mut self, event: HostEvent) -> EditorResult<Outcome> {
        let mode = self.modes.current_mode();
        if !mode.listens_to(event.kind()) {
            log::trace!("{:?} ignored in mode {}", event.kind(), mode);
            return Ok(Outcome::Ignored(IgnoreReason::NotSubscribed));
        }
        if let Some(position) = event.position() {
            if !is_finite(position) {
                log::warn!("Ignoring {:?} at non-finite {:?}", event.kind(), position);
                return Ok(Outcome::Ignored(IgnoreReason::NonFinitePosition));
            }
        }

        let store = &mut self.store;
        match (&mut self.tool, event) {
            (ActiveTool::Draw(tracker), HostEvent::PointerDown { position }) => {
                Ok(tracker.press(position))
            }
            (ActiveTool::Draw(tracker), HostEvent::PointerUp { position }) => {
                tracker.release(position, store)
            }
            (ActiveTool::Move(drag), HostEvent::PointerDown { position }) => {
                Ok(drag.pick_up(position, store))
            }
            (ActiveTool::Move(drag), HostEvent::PointerUp { position }) => {
                if drag.session().is_some() {
                    drag.drop(position, None, store)
                } else {
                    Ok(Outcome::Ignored(IgnoreReason::NoSession))
                }
            }
            (ActiveTool::Move(drag), HostEvent::DragStart { position, payload }) => {
                Ok(drag.drag_start(position, &payload, store))
            }
            (ActiveTool::Move(drag), HostEvent::DragOver { .. }) => Ok(drag.drag_over()),
            (ActiveTool::Move(drag), HostEvent::Drop { position, payload }) => {
                drag.drop(position, payload.as_ref(), store)
            }
            (ActiveTool::Move(drag), HostEvent::DragEnd) => Ok(drag.drag_end()),
            // Subscriptions keep anything else from reaching here
            (_, event) => {
                log::trace!("{:?} has no handler in mode {}", event.kind(), mode);
                Ok(Outcome::Ignored(IgnoreReason::NotSubscribed))
            }
        }
    }
}
