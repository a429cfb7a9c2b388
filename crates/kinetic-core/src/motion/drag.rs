use glam::Vec2;

use super::pointer::{normalize_pointer, CoordSpace, Rect};

/// Press-drag-release state for a pointer-captured element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        pointer_id: i32,
        /// Element center minus pointer at press time, so the grab point stays put.
        grab_offset: Vec2,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Start dragging. `element_center` is `None` when the grab point should
    /// follow the pointer exactly.
    pub fn press(&mut self, pointer_id: i32, pointer: Vec2, element_center: Option<Vec2>) {
        let grab_offset = element_center.map(|c| c - pointer).unwrap_or(Vec2::ZERO);
        *self = DragState::Dragging {
            pointer_id,
            grab_offset,
        };
    }

    /// Normalized position of the dragged element, or `None` when idle.
    pub fn drag_to(&self, pointer: Vec2, container: &Rect, space: CoordSpace) -> Option<Vec2> {
        match *self {
            DragState::Dragging { grab_offset, .. } => {
                Some(normalize_pointer(container, pointer + grab_offset, space))
            }
            DragState::Idle => None,
        }
    }

    /// End the drag; returns the captured pointer id if one was active.
    pub fn release(&mut self) -> Option<i32> {
        match std::mem::take(self) {
            DragState::Dragging { pointer_id, .. } => Some(pointer_id),
            DragState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grab_offset_is_preserved() {
        let stage = Rect::new(0.0, 0.0, 200.0, 100.0);
        let mut drag = DragState::default();
        // grabbed 10px left of the element center
        drag.press(7, Vec2::new(90.0, 50.0), Some(Vec2::new(100.0, 50.0)));
        let pos = drag.drag_to(Vec2::new(40.0, 25.0), &stage, CoordSpace::Percent).unwrap();
        assert!((pos.x - 25.0).abs() < 1e-4);
        assert!((pos.y - 25.0).abs() < 1e-4);
        assert_eq!(drag.release(), Some(7));
        assert_eq!(drag.release(), None);
        assert!(drag.drag_to(Vec2::ZERO, &stage, CoordSpace::Percent).is_none());
    }
}
