//! Dock layout pass: measure and arrange over a panel tree.
//!
//! Children of a panel carve space off their dock side in child order; a
//! `Fill` child takes whatever remains. The pass computes every node's
//! `desired_size`, assigns `bounds`, marks both validity flags, and queues
//! one [`LayoutEvent`] per arranged panel. Events are queued, not
//! dispatched inline, so listeners always observe a fully-computed pass.

use dockline_core::geometry::Size;
use dockline_core::profiling::profile_function;

use crate::splitter::{DockSide, Orientation};
use crate::tree::{LayoutEvent, LayoutFlags, LayoutRect, NodeId, NodeKind, PanelTree};

/// Run a full measure+arrange pass from the root over the given viewport.
pub fn run(tree: &mut PanelTree, viewport: Size<f32>) {
    profile_function!();
    let Some(root) = tree.root() else {
        return;
    };
    measure(tree, root, viewport);
    arrange(
        tree,
        root,
        LayoutRect {
            x: 0.0,
            y: 0.0,
            width: viewport.width,
            height: viewport.height,
        },
    );
    tracing::trace!(
        width = viewport.width,
        height = viewport.height,
        "dock layout pass complete"
    );
}

/// What the measure pass has to do for a node, extracted up front so the
/// recursion does not hold a borrow into the tree.
enum MeasureJob {
    Leaf(Size<f32>),
    Content(Option<NodeId>),
    Dock(Vec<NodeId>),
}

fn measure(tree: &mut PanelTree, node_id: NodeId, available: Size<f32>) -> Size<f32> {
    let Some(node) = tree.get(node_id) else {
        return Size::ZERO;
    };

    let job = match &node.kind {
        NodeKind::Pane { preferred } => MeasureJob::Leaf(*preferred),
        NodeKind::Splitter(splitter) => {
            // Attachment writes the cross-axis size explicitly; this is
            // the fallback for splitters measured before any attach.
            MeasureJob::Leaf(match node.dock.orientation() {
                Orientation::Horizontal => Size::new(0.0, splitter.thickness),
                Orientation::Vertical => Size::new(splitter.thickness, 0.0),
            })
        }
        NodeKind::Presenter => MeasureJob::Content(node.children.first().copied()),
        NodeKind::Panel => MeasureJob::Dock(node.children.clone()),
    };
    let explicit = (node.width, node.height);
    let (min_w, max_w) = (node.min_width, node.max_width);
    let (min_h, max_h) = (node.min_height, node.max_height);

    let base = match job {
        MeasureJob::Leaf(size) => size,
        MeasureJob::Content(content) => content
            .map(|child| measure(tree, child, available))
            .unwrap_or(Size::ZERO),
        MeasureJob::Dock(children) => measure_dock(tree, &children, available),
    };

    let mut desired = base;
    if let Some(width) = explicit.0 {
        desired.width = width;
    }
    if let Some(height) = explicit.1 {
        desired.height = height;
    }
    desired.width = desired.width.max(min_w).min(max_w);
    desired.height = desired.height.max(min_h).min(max_h);

    if let Some(node) = tree.get_mut(node_id) {
        node.desired_size = desired;
        node.flags.insert(LayoutFlags::MEASURE_VALID);
    }
    desired
}

/// Accumulate a panel's desired size from its docked children.
fn measure_dock(tree: &mut PanelTree, children: &[NodeId], available: Size<f32>) -> Size<f32> {
    let mut used_width = 0.0_f32;
    let mut used_height = 0.0_f32;
    let mut accumulated_width = 0.0_f32;
    let mut accumulated_height = 0.0_f32;

    for &child in children {
        let child_available = Size::new(
            (available.width - used_width).max(0.0),
            (available.height - used_height).max(0.0),
        );
        let child_desired = measure(tree, child, child_available);
        let side = tree.get(child).map(|n| n.dock).unwrap_or_default();
        match side {
            DockSide::Left | DockSide::Right => {
                accumulated_height = accumulated_height.max(used_height + child_desired.height);
                used_width += child_desired.width;
            }
            DockSide::Top | DockSide::Bottom => {
                accumulated_width = accumulated_width.max(used_width + child_desired.width);
                used_height += child_desired.height;
            }
            DockSide::Fill => {
                accumulated_width = accumulated_width.max(used_width + child_desired.width);
                accumulated_height = accumulated_height.max(used_height + child_desired.height);
            }
        }
    }

    Size::new(
        accumulated_width.max(used_width),
        accumulated_height.max(used_height),
    )
}

/// What the arrange pass has to do for a node, extracted up front so the
/// recursion does not hold a borrow into the tree.
enum ArrangeJob {
    Dock(Vec<NodeId>),
    Content(Option<NodeId>),
    Leaf,
}

fn arrange(tree: &mut PanelTree, node_id: NodeId, rect: LayoutRect) {
    let Some(node) = tree.get_mut(node_id) else {
        return;
    };
    node.bounds = rect;
    node.flags.insert(LayoutFlags::ARRANGE_VALID);
    let job = match &node.kind {
        NodeKind::Panel => ArrangeJob::Dock(node.children.clone()),
        NodeKind::Presenter => ArrangeJob::Content(node.children.first().copied()),
        NodeKind::Pane { .. } | NodeKind::Splitter(_) => ArrangeJob::Leaf,
    };

    match job {
        ArrangeJob::Dock(children) => {
            let mut remaining = rect;
            for child in children {
                let child_desired = tree.desired_size(child).unwrap_or(Size::ZERO);
                let side = tree.get(child).map(|n| n.dock).unwrap_or_default();
                let child_rect = carve(&mut remaining, side, child_desired);
                arrange(tree, child, child_rect);
            }
            tree.push_layout_event(LayoutEvent {
                panel: node_id,
                size: rect.size(),
            });
        }
        ArrangeJob::Content(content) => {
            if let Some(content) = content {
                arrange(tree, content, rect);
            }
        }
        ArrangeJob::Leaf => {}
    }
}

/// Cut a child's rect off one side of the remaining space.
fn carve(remaining: &mut LayoutRect, side: DockSide, desired: Size<f32>) -> LayoutRect {
    match side {
        DockSide::Left => {
            let rect = LayoutRect {
                x: remaining.x,
                y: remaining.y,
                width: desired.width,
                height: remaining.height,
            };
            remaining.x += desired.width;
            remaining.width = (remaining.width - desired.width).max(0.0);
            rect
        }
        DockSide::Right => {
            let rect = LayoutRect {
                x: remaining.x + (remaining.width - desired.width).max(0.0),
                y: remaining.y,
                width: desired.width,
                height: remaining.height,
            };
            remaining.width = (remaining.width - desired.width).max(0.0);
            rect
        }
        DockSide::Top => {
            let rect = LayoutRect {
                x: remaining.x,
                y: remaining.y,
                width: remaining.width,
                height: desired.height,
            };
            remaining.y += desired.height;
            remaining.height = (remaining.height - desired.height).max(0.0);
            rect
        }
        DockSide::Bottom => {
            let rect = LayoutRect {
                x: remaining.x,
                y: remaining.y + (remaining.height - desired.height).max(0.0),
                width: remaining.width,
                height: desired.height,
            };
            remaining.height = (remaining.height - desired.height).max(0.0);
            rect
        }
        DockSide::Fill => *remaining,
    }
}
