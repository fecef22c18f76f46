//! Ordered shape collection.

use super::{IdStrategy, Shape, ShapeId};
use crate::error::{EditorError, EditorResult};
use crate::geometry::Rect;
use kurbo::Point;
use std::collections::HashMap;

/// Owns every shape on the canvas and the order they are drawn in.
///
/// Ids are unique at all times. New shapes go to the end; a relocated shape
/// is removed and re-inserted, so it also ends up last.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    /// All shapes, keyed by ID.
    shapes: HashMap<ShapeId, Shape>,
    /// Insertion order (oldest first).
    order: Vec<ShapeId>,
    /// How ids are issued for new shapes.
    strategy: IdStrategy,
}

impl ShapeStore {
    /// Create an empty store issuing ids with `strategy`.
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            shapes: HashMap::new(),
            order: Vec::new(),
            strategy,
        }
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Issue an id for `rect` and wrap both in a shape. Nothing is stored.
    pub fn make_shape(&self, rect: Rect) -> Shape {
        Shape::new(self.strategy.issue(&rect), rect)
    }

    /// Add a new shape for `rect` at the end of the collection.
    ///
    /// Fails without touching the store if the issued id is already taken.
    pub fn append(&mut self, rect: Rect) -> EditorResult<ShapeId> {
        let shape = self.make_shape(rect);
        if self.shapes.contains_key(&shape.id) {
            log::warn!("Rejecting shape with duplicate id {}", shape.id);
            return Err(EditorError::DuplicateId(shape.id));
        }
        let id = shape.id.clone();
        self.push(shape);
        Ok(id)
    }

    /// Remove `old_id` (if present) and append `shape`.
    ///
    /// Fails without touching the store if `shape.id` belongs to some other
    /// shape. Replacing a shape with one carrying the same id is allowed.
    pub fn replace(&mut self, old_id: &ShapeId, shape: Shape) -> EditorResult<()> {
        if shape.id != *old_id && self.shapes.contains_key(&shape.id) {
            log::warn!(
                "Cannot replace {} with {}: id already in use",
                old_id,
                shape.id
            );
            return Err(EditorError::DuplicateId(shape.id));
        }
        self.remove(old_id);
        self.push(shape);
        Ok(())
    }

    /// Move `old_id` to `rect`, issuing the id for the new position.
    ///
    /// Returns the id the shape has after the move.
    pub fn relocate(&mut self, old_id: &ShapeId, rect: Rect) -> EditorResult<ShapeId> {
        let shape = self.make_shape(rect);
        let id = shape.id.clone();
        self.replace(old_id, shape)?;
        Ok(id)
    }

    /// Remove a shape. Unknown ids are ignored.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        self.order.retain(|shape_id| shape_id != id);
        self.shapes.remove(id)
    }

    /// Get a shape by ID.
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    /// Shapes in insertion order (oldest first).
    pub fn list(&self) -> Vec<&Shape> {
        self.order
            .iter()
            .filter_map(|id| self.shapes.get(id))
            .collect()
    }

    /// The topmost shape under `point`, if any.
    ///
    /// Later shapes are drawn over earlier ones, so the search runs newest first.
    pub fn shape_at(&self, point: Point, tolerance: f64) -> Option<&Shape> {
        self.order
            .iter()
            .rev()
            .filter_map(|id| self.shapes.get(id))
            .find(|shape| shape.rect.hit_test(point, tolerance))
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Serialize the shape list to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.list())
    }

    fn push(&mut self, shape: Shape) {
        self.order.push(shape.id.clone());
        self.shapes.insert(shape.id.clone(), shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(Point::new(x, y), w, h)
    }

    #[test]
    fn test_store_starts_empty() {
        let store = ShapeStore::default();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_append_returns_positional_id() {
        let mut store = ShapeStore::new(IdStrategy::Positional);
        let id = store.append(rect(50.0, 20.0, 10.0, 10.0)).unwrap();
        assert_eq!(id.as_str(), "20-50");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().rect, rect(50.0, 20.0, 10.0, 10.0));
    }

    #[test]
    fn test_append_rejects_duplicate_position() {
        let mut store = ShapeStore::new(IdStrategy::Positional);
        let id = store.append(rect(0.0, 0.0, 10.0, 10.0)).unwrap();

        let result = store.append(rect(0.0, 0.0, 30.0, 40.0));
        assert_eq!(result, Err(EditorError::DuplicateId(id.clone())));
        assert_eq!(store.len(), 1);
        assert!((store.get(&id).unwrap().rect.width - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_signed_zero_collides() {
        let mut store = ShapeStore::new(IdStrategy::Positional);
        let id = store.append(rect(0.0, 0.0, 10.0, 10.0)).unwrap();

        let result = store.append(rect(-0.0, -0.0, 0.0, 0.0));
        assert_eq!(result, Err(EditorError::DuplicateId(id)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_random_strategy_allows_same_position() {
        let mut store = ShapeStore::new(IdStrategy::Random);
        let a = store.append(rect(0.0, 0.0, 10.0, 10.0)).unwrap();
        let b = store.append(rect(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_is_insertion_order() {
        let mut store = ShapeStore::new(IdStrategy::Positional);
        let a = store.append(rect(0.0, 0.0, 1.0, 1.0)).unwrap();
        let b = store.append(rect(5.0, 5.0, 1.0, 1.0)).unwrap();
        let c = store.append(rect(9.0, 9.0, 1.0, 1.0)).unwrap();

        let ids: Vec<_> = store.list().iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_relocate_moves_shape_to_end() {
        let mut store = ShapeStore::new(IdStrategy::Positional);
        let a = store.append(rect(0.0, 0.0, 1.0, 1.0)).unwrap();
        let b = store.append(rect(5.0, 5.0, 1.0, 1.0)).unwrap();

        let moved = store.relocate(&a, rect(20.0, 30.0, 1.0, 1.0)).unwrap();
        assert_eq!(moved.as_str(), "30-20");
        assert!(!store.contains(&a));

        let ids: Vec<_> = store.list().iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec![b, moved]);
    }

    #[test]
    fn test_replace_onto_own_position() {
        let mut store = ShapeStore::new(IdStrategy::Positional);
        let a = store.append(rect(0.0, 0.0, 1.0, 1.0)).unwrap();
        let b = store.append(rect(5.0, 5.0, 1.0, 1.0)).unwrap();

        let same = store.relocate(&a, rect(0.0, 0.0, 1.0, 1.0)).unwrap();
        assert_eq!(same, a);
        let ids: Vec<_> = store.list().iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec![b, a]);
    }

    #[test]
    fn test_replace_collision_leaves_store_unchanged() {
        let mut store = ShapeStore::new(IdStrategy::Positional);
        let a = store.append(rect(0.0, 0.0, 1.0, 1.0)).unwrap();
        let b = store.append(rect(5.0, 5.0, 1.0, 1.0)).unwrap();

        let result = store.relocate(&a, rect(5.0, 5.0, 1.0, 1.0));
        assert_eq!(result, Err(EditorError::DuplicateId(b.clone())));
        let ids: Vec<_> = store.list().iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_replace_missing_old_id_still_appends() {
        let mut store = ShapeStore::new(IdStrategy::Positional);
        let ghost = ShapeId::parse("nope").unwrap();
        let shape = store.make_shape(rect(1.0, 1.0, 2.0, 2.0));
        store.replace(&ghost, shape).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut store = ShapeStore::new(IdStrategy::Positional);
        store.append(rect(0.0, 0.0, 1.0, 1.0)).unwrap();
        assert!(store.remove(&ShapeId::parse("missing").unwrap()).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_shape_at_prefers_newest() {
        let mut store = ShapeStore::new(IdStrategy::Positional);
        let back = store.append(rect(0.0, 0.0, 100.0, 100.0)).unwrap();
        let front = store.append(rect(50.0, 50.0, 100.0, 100.0)).unwrap();

        assert_eq!(store.shape_at(Point::new(75.0, 75.0), 0.0).unwrap().id, front);
        assert_eq!(store.shape_at(Point::new(25.0, 25.0), 0.0).unwrap().id, back);
        assert!(store.shape_at(Point::new(300.0, 300.0), 0.0).is_none());
    }

    #[test]
    fn test_to_json_lists_shapes_in_order() {
        let mut store = ShapeStore::new(IdStrategy::Positional);
        store.append(rect(50.0, 50.0, 100.0, 70.0)).unwrap();
        store.append(rect(0.0, 10.0, 5.0, 5.0)).unwrap();

        let json: serde_json::Value = serde_json::from_str(&store.to_json().unwrap()).unwrap();
        let list = json.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["id"], "50-50");
        assert_eq!(list[1]["id"], "10-0");
    }
}
