//! Splitter subsystem: a draggable handle that resizes the sibling
//! preceding it in a dock panel.
//!
//! The pieces, from the bottom up:
//! - **Types**: dock sides, orientation, the attach-time child slot,
//!   cursor shapes and style classes
//! - **PanelSplitter**: the handle's node payload (thickness, affordances)
//! - **DragManager**: exclusive, threshold-gated gesture tracking
//! - **SplitterBinding**: attach-time resolution of panel, slot, and target
//! - **Controller**: the clamped drag-to-size and rescale-on-parent-resize
//!   algorithms
//! - **SplitterSystem**: attachment registry, subscriptions, and dispatch
//!
//! # Quick Start
//!
//! ```
//! use dockline_core::geometry::Size;
//! use dockline_core::math::Vec2;
//! use dockline_ui::DockSpace;
//! use dockline_ui::splitter::{DockSide, PanelSplitter};
//!
//! let mut space = DockSpace::new();
//! let tree = space.tree_mut();
//! let panel = tree.add_panel();
//! let top_pane = tree.add_pane(Size::new(800.0, 200.0));
//! let splitter = tree.add_splitter(PanelSplitter::new());
//! let body = tree.add_pane(Size::new(800.0, 400.0));
//! tree.add_child(panel, top_pane);
//! tree.add_child(panel, splitter);
//! tree.add_child(panel, body);
//! tree.set_dock(top_pane, DockSide::Top);
//! tree.set_dock(splitter, DockSide::Top);
//! tree.set_root(panel);
//!
//! space.attach_splitter(splitter);
//! space.compute_layout();
//!
//! // Drag the handle 30 units down: the pane above grows by 30.
//! space.begin_drag(splitter, Vec2::new(400.0, 200.0));
//! space.pointer_moved(Vec2::new(400.0, 230.0));
//! space.end_drag();
//!
//! assert_eq!(space.tree().get(top_pane).unwrap().height, Some(230.0));
//! ```

pub mod binding;
pub mod controller;
pub mod drag;
#[allow(clippy::module_inception)]
pub mod splitter;
pub mod system;
pub mod types;

// Re-export main types
pub use binding::SplitterBinding;
pub use drag::{DragManager, DragState};
pub use splitter::PanelSplitter;
pub use system::{LayoutSubscription, SplitterSystem, SubscriptionId};
pub use types::{
    ChildSlot, CursorShape, DEFAULT_THICKNESS, DRAG_THRESHOLD, DockSide, Orientation,
    SplitterClasses,
};
