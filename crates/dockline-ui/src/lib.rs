//! Dockline UI - dock panel tree with draggable splitter handles
//!
//! This crate provides a headless docking layout core:
//! - Panel tree with per-child dock sides
//! - Dock measure/arrange pass with layout-updated events
//! - Splitter handles that resize the preceding sibling by drag
//! - Proportional target rescaling when the containing panel resizes
//!
//! Rendering and windowing stay with the host; everything here runs
//! without a GPU, which is also how the test suite exercises it.
//!
//! ## Quick Start
//!
//! ```
//! use dockline_core::geometry::Size;
//! use dockline_ui::DockSpace;
//! use dockline_ui::splitter::{DockSide, PanelSplitter};
//!
//! let mut space = DockSpace::new();
//! let tree = space.tree_mut();
//! let panel = tree.add_panel();
//! let sidebar = tree.add_pane(Size::new(240.0, 600.0));
//! let splitter = tree.add_splitter(PanelSplitter::new());
//! let editor = tree.add_pane(Size::new(560.0, 600.0));
//! tree.add_child(panel, sidebar);
//! tree.add_child(panel, splitter);
//! tree.add_child(panel, editor);
//! tree.set_dock(sidebar, DockSide::Left);
//! tree.set_dock(splitter, DockSide::Left);
//! tree.set_root(panel);
//!
//! space.attach_splitter(splitter);
//! space.set_viewport(Size::new(800.0, 600.0));
//! space.compute_layout();
//!
//! assert_eq!(space.splitters().is_horizontal(splitter), Some(false));
//! ```

pub mod layout;
pub mod splitter;
pub mod tree;

// Re-export main types
pub use splitter::{
    ChildSlot, CursorShape, DockSide, DragManager, Orientation, PanelSplitter, SplitterBinding,
    SplitterClasses, SplitterSystem,
};
pub use tree::{LayoutEvent, LayoutFlags, LayoutRect, NodeId, NodeKind, PanelNode, PanelTree};

// Re-export common types from dependencies
pub use dockline_core::geometry::Size;
pub use dockline_core::math::Vec2;

/// Render-agnostic docking core managing the tree, layout, and splitters.
///
/// Couples a [`PanelTree`] with its [`SplitterSystem`] and drives the
/// layout pass: `compute_layout` runs measure+arrange and then pumps the
/// queued layout events into the splitter rescale path, in that order, so
/// rescaling always observes a consistent, fully-computed pass.
pub struct DockSpace {
    tree: PanelTree,
    splitters: SplitterSystem,
    viewport: Size<f32>,
}

impl DockSpace {
    /// Create an empty dock space.
    pub fn new() -> Self {
        Self {
            tree: PanelTree::new(),
            splitters: SplitterSystem::new(),
            viewport: Size::new(800.0, 600.0),
        }
    }

    /// The panel tree.
    pub fn tree(&self) -> &PanelTree {
        &self.tree
    }

    /// The panel tree, mutably.
    pub fn tree_mut(&mut self) -> &mut PanelTree {
        &mut self.tree
    }

    /// The splitter system.
    pub fn splitters(&self) -> &SplitterSystem {
        &self.splitters
    }

    /// The splitter system, mutably.
    pub fn splitters_mut(&mut self) -> &mut SplitterSystem {
        &mut self.splitters
    }

    /// Set the viewport the root is arranged into.
    pub fn set_viewport(&mut self, viewport: Size<f32>) {
        self.viewport = viewport;
    }

    /// Run a measure+arrange pass, then dispatch layout events to the
    /// splitter system.
    pub fn compute_layout(&mut self) {
        layout::run(&mut self.tree, self.viewport);
        self.splitters.pump_layout_events(&mut self.tree);
    }

    /// Attach a splitter to the tree it currently sits in.
    pub fn attach_splitter(&mut self, splitter: NodeId) {
        self.splitters.attach(&mut self.tree, splitter);
    }

    /// Detach a splitter, tearing down its binding and subscription.
    pub fn detach_splitter(&mut self, splitter: NodeId) {
        self.splitters.detach(splitter);
    }

    /// Begin a drag gesture on a splitter at the given pointer position.
    pub fn begin_drag(&mut self, splitter: NodeId, pos: Vec2) {
        self.splitters.begin_drag(&mut self.tree, splitter, pos);
    }

    /// Feed a pointer position into the active drag gesture.
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.splitters.pointer_moved(&mut self.tree, pos);
    }

    /// End the active drag gesture.
    pub fn end_drag(&mut self) {
        self.splitters.end_drag(&mut self.tree);
    }

    /// Cancel the active drag gesture (lost capture). No rollback.
    pub fn cancel_drag(&mut self) {
        self.splitters.cancel_drag(&mut self.tree);
    }
}

impl Default for DockSpace {
    fn default() -> Self {
        Self::new()
    }
}
