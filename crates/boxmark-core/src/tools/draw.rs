//! Rectangle creation from a pointer-down / pointer-up pair.

use crate::config::OrphanRelease;
use crate::editor::{IgnoreReason, Outcome};
use crate::error::EditorResult;
use crate::geometry::normalize;
use crate::shapes::ShapeStore;
use kurbo::Point;

/// Turns a press/release pair into a new shape.
#[derive(Debug, Clone)]
pub struct PointerGestureTracker {
    /// Position of the last unmatched pointer-down.
    anchor: Option<Point>,
    orphan_release: OrphanRelease,
}

impl PointerGestureTracker {
    pub fn new(orphan_release: OrphanRelease) -> Self {
        Self {
            anchor: None,
            orphan_release,
        }
    }

    /// The pending anchor, if a pointer-down is waiting for its release.
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Record the anchor. A pending one is overwritten.
    pub fn press(&mut self, position: Point) -> Outcome {
        if let Some(previous) = self.anchor.replace(position) {
            log::debug!("Anchor {:?} replaced by {:?}", previous, position);
        } else {
            log::debug!("Anchor set at {:?}", position);
        }
        Outcome::AnchorSet(position)
    }

    /// Complete the gesture and append the spanned rectangle to `store`.
    ///
    /// The anchor is consumed even if the store rejects the shape.
    pub fn release(&mut self, position: Point, store: &mut ShapeStore) -> EditorResult<Outcome> {
        let anchor = match (self.anchor.take(), self.orphan_release) {
            (Some(anchor), _) => anchor,
            (None, OrphanRelease::Origin) => {
                log::debug!("Pointer-up without anchor, using the surface origin");
                Point::ZERO
            }
            (None, OrphanRelease::Ignore) => {
                log::debug!("Pointer-up without anchor ignored");
                return Ok(Outcome::Ignored(IgnoreReason::NoAnchor));
            }
        };

        let rect = normalize(anchor, position);
        if !rect.is_finite() {
            log::warn!("Gesture from {:?} to {:?} overflows, ignored", anchor, position);
            return Ok(Outcome::Ignored(IgnoreReason::NonFinitePosition));
        }
        let id = store.append(rect)?;
        log::debug!("Created shape {} at {:?}", id, rect);
        Ok(Outcome::ShapeCreated(id))
    }
}
