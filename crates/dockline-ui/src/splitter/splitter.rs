//! PanelSplitter node payload - the draggable handle between two siblings.

use super::types::{CursorShape, DEFAULT_THICKNESS, SplitterClasses};

/// Draggable resize handle placed between two siblings of a dock panel.
///
/// The payload carries configuration (thickness) and the visual state the
/// host theme reads back (style classes, pointer shape). The resize logic
/// itself lives in the controller; attachment wires the two together.
#[derive(Debug, Clone)]
pub struct PanelSplitter {
    /// Extent of the handle on its cross axis, in layout units.
    pub thickness: f32,
    /// Style tags set at attachment and during drags.
    pub classes: SplitterClasses,
    /// Pointer shape advertised while over the handle; set at attachment.
    pub cursor: Option<CursorShape>,
}

impl PanelSplitter {
    /// Create a handle with the default thickness.
    pub fn new() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            classes: SplitterClasses::empty(),
            cursor: None,
        }
    }

    /// Set the handle thickness in layout units.
    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness.max(1.0);
        self
    }

    /// Set the dragging style tag.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.classes.set(SplitterClasses::DRAGGING, dragging);
    }
}

impl Default for PanelSplitter {
    fn default() -> Self {
        Self::new()
    }
}
