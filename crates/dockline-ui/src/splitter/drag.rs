//! Drag gesture tracking for splitter handles.

use dockline_core::math::Vec2;

use crate::tree::NodeId;

use super::types::DRAG_THRESHOLD;

/// State of an active drag gesture.
///
/// One gesture at a time: pointer capture is exclusive, so starting a new
/// drag replaces any previous state.
#[derive(Debug, Clone)]
pub struct DragState {
    /// The splitter being dragged.
    pub splitter: NodeId,
    /// Position where the drag started.
    pub start_pos: Vec2,
    /// Current pointer position.
    pub current_pos: Vec2,
    /// Position whose delta was last handed out.
    last_pos: Vec2,
    /// Whether the drag threshold has been exceeded.
    pub is_active: bool,
}

impl DragState {
    /// Create a new drag state.
    pub fn new(splitter: NodeId, start_pos: Vec2) -> Self {
        Self {
            splitter,
            start_pos,
            current_pos: start_pos,
            last_pos: start_pos,
            is_active: false,
        }
    }

    /// Update the pointer position, returning the incremental delta to
    /// apply since the last update.
    ///
    /// Returns `None` until the threshold is exceeded; the activating move
    /// yields the full offset from the start position so no motion is lost.
    pub fn update(&mut self, pos: Vec2) -> Option<Vec2> {
        self.current_pos = pos;
        if !self.is_active {
            if (pos - self.start_pos).length() < DRAG_THRESHOLD {
                return None;
            }
            self.is_active = true;
        }
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        Some(delta)
    }

    /// Total offset from the start position.
    pub fn delta(&self) -> Vec2 {
        self.current_pos - self.start_pos
    }
}

/// Manages the drag gesture for splitter handles.
#[derive(Debug, Default)]
pub struct DragManager {
    /// Current active drag state.
    drag_state: Option<DragState>,
}

impl DragManager {
    /// Create a new drag manager.
    pub fn new() -> Self {
        Self { drag_state: None }
    }

    /// Start a drag gesture on a splitter.
    pub fn start_drag(&mut self, splitter: NodeId, start_pos: Vec2) {
        self.drag_state = Some(DragState::new(splitter, start_pos));
    }

    /// Feed a pointer position into the current gesture.
    ///
    /// Returns the dragged splitter and the incremental delta to apply,
    /// once the gesture is active.
    pub fn pointer_moved(&mut self, pos: Vec2) -> Option<(NodeId, Vec2)> {
        let state = self.drag_state.as_mut()?;
        let delta = state.update(pos)?;
        Some((state.splitter, delta))
    }

    /// Check if there's an active drag operation.
    pub fn is_dragging(&self) -> bool {
        self.drag_state.as_ref().is_some_and(|s| s.is_active)
    }

    /// Check if there's a pending drag (pointer down but threshold not exceeded).
    pub fn has_pending_drag(&self) -> bool {
        self.drag_state.as_ref().is_some_and(|s| !s.is_active)
    }

    /// The splitter being dragged, if any gesture is in flight.
    pub fn dragged_splitter(&self) -> Option<NodeId> {
        self.drag_state.as_ref().map(|s| s.splitter)
    }

    /// Get the current drag state.
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag_state.as_ref()
    }

    /// Cancel the current drag operation. Whatever size was last applied
    /// remains; there is no rollback.
    pub fn cancel_drag(&mut self) {
        self.drag_state = None;
    }

    /// End the current drag operation and return the final state.
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag_state.take()
    }
}
