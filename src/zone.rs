//! Pointer zones: named rectangles rebuilt on every render.
//!
//! The render pass marks one zone per interactive region using a fixed id
//! scheme (`item-<index>`, `btn-select`, `btn-back`, `btn-exit`); the
//! controller hit-tests those ids when a pointer press arrives. Marking is
//! metadata only: it never changes a rendered cell. Before the first render
//! the registry is empty and every hit test misses, so early pointer events
//! fall through harmlessly.

use crate::types::Rect;

/// Zone id of a list row.
pub fn item_zone_id(index: usize) -> String {
    format!("item-{index}")
}

/// Zone id of the Select button.
pub const ZONE_SELECT: &str = "btn-select";
/// Zone id of the Back button.
pub const ZONE_BACK: &str = "btn-back";
/// Zone id of the Exit button.
pub const ZONE_EXIT: &str = "btn-exit";

/// Named clickable rectangles for one rendered frame.
#[derive(Debug, Clone, Default)]
pub struct ZoneRegistry {
    zones: Vec<(String, Rect)>,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all zones. Called at the start of every render.
    pub fn reset(&mut self) {
        self.zones.clear();
    }

    /// Record `id`'s clickable rectangle, replacing any previous one.
    pub fn mark(&mut self, id: impl Into<String>, rect: Rect) {
        let id = id.into();
        if let Some(entry) = self.zones.iter_mut().find(|(name, _)| *name == id) {
            entry.1 = rect;
        } else {
            self.zones.push((id, rect));
        }
    }

    /// Whether the point lies inside `id`'s rectangle.
    ///
    /// Unknown ids miss, so callers can probe without existence checks.
    pub fn hit_test(&self, id: &str, x: u16, y: u16) -> bool {
        self.get(id).is_some_and(|rect| rect.contains(x, y))
    }

    /// The rectangle recorded for `id`, if any.
    pub fn get(&self, id: &str) -> Option<Rect> {
        self.zones
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, rect)| *rect)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_inside_and_outside() {
        let mut zones = ZoneRegistry::new();
        zones.mark(item_zone_id(2), Rect::new(5, 3, 10, 1));

        assert!(zones.hit_test("item-2", 5, 3));
        assert!(zones.hit_test("item-2", 14, 3));
        assert!(!zones.hit_test("item-2", 15, 3));
        assert!(!zones.hit_test("item-2", 5, 4));
    }

    #[test]
    fn unknown_id_misses() {
        let zones = ZoneRegistry::new();
        assert!(!zones.hit_test("btn-select", 0, 0));
        assert_eq!(zones.get("btn-select"), None);
    }

    #[test]
    fn reset_clears() {
        let mut zones = ZoneRegistry::new();
        zones.mark(ZONE_EXIT, Rect::new(0, 0, 4, 1));
        assert!(!zones.is_empty());

        zones.reset();
        assert!(zones.is_empty());
        assert!(!zones.hit_test(ZONE_EXIT, 1, 0));
    }

    #[test]
    fn remark_replaces() {
        let mut zones = ZoneRegistry::new();
        zones.mark(ZONE_SELECT, Rect::new(0, 0, 4, 1));
        zones.mark(ZONE_SELECT, Rect::new(10, 5, 4, 1));

        assert_eq!(zones.len(), 1);
        assert!(zones.hit_test(ZONE_SELECT, 11, 5));
        assert!(!zones.hit_test(ZONE_SELECT, 1, 0));
    }
}
