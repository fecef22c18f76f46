//! Shape relocation by pick-up and drop.

use crate::editor::{IgnoreReason, Outcome};
use crate::error::EditorResult;
use crate::geometry::{Rect, drop_origin, pointer_offset};
use crate::input::{DragPayload, DropEffect};
use crate::shapes::{Shape, ShapeId, ShapeStore};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A shape that has been picked up and not yet dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    /// Shape being moved.
    pub target: ShapeId,
    /// Its rectangle at pick-up time.
    pub origin_rect: Rect,
    /// Where the pointer grabbed it, relative to its top-left corner.
    pub pointer_offset: Vec2,
}

/// Moves shapes while preserving their size and the grab offset.
#[derive(Debug, Clone)]
pub struct DragRelocationController {
    session: Option<DragSession>,
    hit_tolerance: f64,
}

impl DragRelocationController {
    /// Create a controller. A negative or non-finite `hit_tolerance` is
    /// treated as zero.
    pub fn new(hit_tolerance: f64) -> Self {
        let hit_tolerance = if hit_tolerance.is_finite() && hit_tolerance >= 0.0 {
            hit_tolerance
        } else {
            log::warn!("Invalid hit tolerance {}, using 0", hit_tolerance);
            0.0
        };
        Self {
            session: None,
            hit_tolerance,
        }
    }

    /// The live session, if a shape is picked up.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Pick up the topmost shape under `position`.
    pub fn pick_up(&mut self, position: Point, store: &ShapeStore) -> Outcome {
        match store.shape_at(position, self.hit_tolerance) {
            Some(shape) => self.begin(shape, position),
            None => {
                log::debug!("Pointer-down at {:?} hit no shape", position);
                Outcome::Ignored(IgnoreReason::NoShapeHit)
            }
        }
    }

    /// Start a native drag for the shape named by `payload`.
    ///
    /// If the pointer-down already picked up the same shape, its grab offset is
    /// kept; the drag-start position trails the real grab point.
    pub fn drag_start(
        &mut self,
        position: Point,
        payload: &DragPayload,
        store: &ShapeStore,
    ) -> Outcome {
        let Some(shape) = payload.resolve(store) else {
            log::debug!("Drag payload {:?} names no shape", payload.raw());
            return Outcome::Ignored(IgnoreReason::UnresolvedPayload);
        };
        if self.session.as_ref().is_some_and(|s| s.target == shape.id) {
            return Outcome::PickedUp(shape.id.clone());
        }
        self.begin(shape, position)
    }

    /// Tell the host whether a drop here would be accepted.
    pub fn drag_over(&self) -> Outcome {
        if self.session.is_some() {
            Outcome::DragOver(DropEffect::Move)
        } else {
            Outcome::DragOver(DropEffect::None)
        }
    }

    /// Drop the picked-up shape so the grab offset lands under `position`.
    ///
    /// The target is the payload's shape when one is given, otherwise the
    /// session's. The session is cleared whatever happens.
    pub fn drop(
        &mut self,
        position: Point,
        payload: Option<&DragPayload>,
        store: &mut ShapeStore,
    ) -> EditorResult<Outcome> {
        let session = self.session.take();

        let target = match (payload, &session) {
            (Some(payload), _) => match payload.resolve(store) {
                Some(shape) => shape.id.clone(),
                None => {
                    log::debug!("Drop payload {:?} names no shape", payload.raw());
                    return Ok(Outcome::Ignored(IgnoreReason::UnresolvedPayload));
                }
            },
            (None, Some(session)) => session.target.clone(),
            (None, None) => {
                log::debug!("Drop at {:?} without a picked-up shape", position);
                return Ok(Outcome::Ignored(IgnoreReason::NoSession));
            }
        };

        let Some(shape) = store.get(&target) else {
            log::debug!("Picked-up shape {} no longer exists", target);
            return Ok(Outcome::Ignored(IgnoreReason::UnknownShape));
        };

        // A payload-only drop has no recorded grab point
        let offset = session
            .filter(|s| s.target == target)
            .map_or(Vec2::ZERO, |s| s.pointer_offset);
        let rect = shape.rect.with_origin(drop_origin(position, offset));
        if !rect.is_finite() {
            log::warn!("Drop of {} at {:?} overflows, ignored", target, position);
            return Ok(Outcome::Ignored(IgnoreReason::NonFinitePosition));
        }

        let id = store.relocate(&target, rect)?;
        log::debug!("Relocated {} to {} at {:?}", target, id, rect);
        Ok(Outcome::Relocated {
            from: target,
            to: id,
        })
    }

    /// End a native drag. A session still live here was never dropped.
    pub fn drag_end(&mut self) -> Outcome {
        match self.session.take() {
            Some(session) => {
                log::debug!("Drag of {} cancelled", session.target);
                Outcome::DragCancelled(session.target)
            }
            None => Outcome::Ignored(IgnoreReason::NoSession),
        }
    }

    fn begin(&mut self, shape: &Shape, position: Point) -> Outcome {
        let session = DragSession {
            target: shape.id.clone(),
            origin_rect: shape.rect,
            pointer_offset: pointer_offset(&shape.rect, position),
        };
        if let Some(previous) = self.session.replace(session) {
            log::debug!(
                "Pick-up of {} cancels pending drag of {}",
                shape.id,
                previous.target
            );
        } else {
            log::debug!("Picked up {} at {:?}", shape.id, position);
        }
        Outcome::PickedUp(shape.id.clone())
    }
}
