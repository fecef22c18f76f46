//! Host events delivered to the editor.
//!
//! The host surface translates its native pointer and drag-and-drop events
//! into [`HostEvent`]s. Positions are surface coordinates.

use crate::mode::EventKind;
use crate::shapes::{Shape, ShapeId, ShapeStore};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Data-transfer format under which hosts store the drag payload.
pub const PAYLOAD_FORMAT: &str = "element";

/// The opaque string a native drag carries from drag-start to drop.
///
/// Hosts hand over whatever string they got back from their drag data; it is
/// only trusted once [`DragPayload::resolve`] finds a live shape for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DragPayload(String);

impl DragPayload {
    /// Payload identifying `id`, to be stored by the host on drag-start.
    pub fn for_shape(id: &ShapeId) -> Self {
        Self(id.as_str().to_string())
    }

    /// Wrap a raw payload string received from the host.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// The id this payload names, if it is well-formed.
    pub fn shape_id(&self) -> Option<ShapeId> {
        ShapeId::parse(&self.0)
    }

    /// Look the payload up in `store`.
    pub fn resolve<'a>(&self, store: &'a ShapeStore) -> Option<&'a Shape> {
        self.shape_id().and_then(|id| store.get(&id))
    }
}

/// Feedback for the host's native drag cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropEffect {
    None,
    Move,
}

/// An input event from the host surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    PointerDown {
        position: Point,
    },
    PointerUp {
        position: Point,
    },
    DragStart {
        position: Point,
        payload: DragPayload,
    },
    DragOver {
        position: Point,
    },
    Drop {
        position: Point,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<DragPayload>,
    },
    DragEnd,
}

impl HostEvent {
    /// The payload-free kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::PointerDown { .. } => EventKind::PointerDown,
            HostEvent::PointerUp { .. } => EventKind::PointerUp,
            HostEvent::DragStart { .. } => EventKind::DragStart,
            HostEvent::DragOver { .. } => EventKind::DragOver,
            HostEvent::Drop { .. } => EventKind::Drop,
            HostEvent::DragEnd => EventKind::DragEnd,
        }
    }

    /// Pointer position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            HostEvent::PointerDown { position }
            | HostEvent::PointerUp { position }
            | HostEvent::DragStart { position, .. }
            | HostEvent::DragOver { position }
            | HostEvent::Drop { position, .. } => Some(*position),
            HostEvent::DragEnd => None,
        }
    }
}
