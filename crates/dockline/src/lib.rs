//! Dockline - dock panel splitters for interactive layout resizing
//!
//! Dockline is a small, headless docking toolkit: a panel tree whose
//! children stack along dock sides, plus draggable splitter handles that
//! resize the sibling preceding them and keep it proportionally sized
//! when the containing panel resizes.
//!
//! The [`prelude`] pulls in everything a typical host needs:
//!
//! ```
//! use dockline::prelude::*;
//!
//! let mut space = DockSpace::new();
//! let tree = space.tree_mut();
//! let panel = tree.add_panel();
//! tree.set_root(panel);
//! space.compute_layout();
//! ```

pub use dockline_core as core;
pub use dockline_ui as ui;

/// Commonly used types, re-exported in one place.
pub mod prelude {
    pub use dockline_core::geometry::Size;
    pub use dockline_core::math::Vec2;
    pub use dockline_ui::splitter::{
        CursorShape, DockSide, Orientation, PanelSplitter, SplitterClasses, SplitterSystem,
    };
    pub use dockline_ui::{DockSpace, LayoutRect, NodeId, PanelTree};
}
