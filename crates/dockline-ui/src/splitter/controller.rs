//! The resize algorithm: drag deltas and parent resizes to target sizes.
//!
//! Every operation takes the attach-time [`SplitterBinding`] plus the live
//! tree, computes one clamped size, and writes it to the target's explicit
//! size property. Anything that cannot be resolved is a silent no-op; the
//! layout must stay stable no matter what arrives here.

use dockline_core::geometry::Size;
use dockline_core::math::Vec2;

use crate::tree::PanelTree;

use super::binding::SplitterBinding;
use super::types::{DockSide, Orientation};

/// Apply one incremental drag delta to the bound target.
///
/// Reads the axis the orientation controls, inverts the sign for
/// far-edge-docked handles, and runs one full compute-and-apply cycle.
pub fn drag_delta(tree: &mut PanelTree, binding: &SplitterBinding, delta: Vec2) {
    match binding.orientation {
        Orientation::Horizontal => {
            let mut dy = delta.y;
            if binding.dock.inverts_drag() {
                dy = -dy;
            }
            set_target_height(tree, binding, dy);
        }
        Orientation::Vertical => {
            let mut dx = delta.x;
            if binding.dock.inverts_drag() {
                dx = -dx;
            }
            set_target_width(tree, binding, dx);
        }
    }
}

/// Set the target's explicit width to its desired width plus `dx`, clamped.
///
/// The desired size, not the already-written explicit size, anchors each
/// delta: every increment is relative to the last completed layout, so
/// deltas arriving faster than layout passes do not compound.
pub fn set_target_width(tree: &mut PanelTree, binding: &SplitterBinding, dx: f32) {
    let Some(target) = binding.target else {
        return;
    };
    let Some(node) = tree.get(target) else {
        return;
    };

    let mut width = node.desired_size.width + dx;
    width = width.max(node.min_width).min(node.max_width);

    // A Left-docked handle must not push the target past the handle itself.
    if binding.dock == DockSide::Left
        && let Some(cap) = growth_cap(tree, binding, |size| size.width)
    {
        width = width.min(cap);
    }

    tracing::trace!(node = target.0, width, "splitter set target width");
    tree.set_explicit_width(target, width);
}

/// Set the target's explicit height to its desired height plus `dy`, clamped.
pub fn set_target_height(tree: &mut PanelTree, binding: &SplitterBinding, dy: f32) {
    let Some(target) = binding.target else {
        return;
    };
    let Some(node) = tree.get(target) else {
        return;
    };

    let mut height = node.desired_size.height + dy;
    height = height.max(node.min_height).min(node.max_height);

    // A Top-docked handle must not push the target past the handle itself.
    if binding.dock == DockSide::Top
        && let Some(cap) = growth_cap(tree, binding, |size| size.height)
    {
        height = height.min(cap);
    }

    tracing::trace!(node = target.0, height, "splitter set target height");
    tree.set_explicit_height(target, height);
}

/// Panel desired extent minus the handle thickness on the given axis.
fn growth_cap(
    tree: &PanelTree,
    binding: &SplitterBinding,
    axis: impl Fn(Size<f32>) -> f32,
) -> Option<f32> {
    let panel = tree.get(binding.panel)?;
    let thickness = tree.get(binding.splitter)?.as_splitter()?.thickness;
    Some(axis(panel.desired_size) - thickness)
}

/// Rescale the target after a panel resize so it keeps roughly the same
/// fraction of the panel it held before.
///
/// `snapshot` is the panel size recorded at attach or by the previous
/// pass; it is replaced with the current size after applying, so each pass
/// scales against a fresh baseline. Skipped entirely while the target is
/// mid-relayout, and per axis when the ratio is degenerate (previous size
/// zero). No dock-side sign inversion here: this path is not a physical
/// drag, the deltas are already oriented by construction.
pub fn rescale(tree: &mut PanelTree, binding: &SplitterBinding, snapshot: &mut Size<f32>) {
    let Some(target) = binding.target else {
        return;
    };
    let Some(node) = tree.get(target) else {
        return;
    };
    if !node.flags.is_layout_valid() {
        return;
    }
    let Some(panel) = tree.get(binding.panel) else {
        return;
    };

    let current = panel.bounds.size();
    let desired = node.desired_size;

    let width_ratio = current.width / snapshot.width;
    if width_ratio.is_finite() {
        set_target_width(tree, binding, desired.width * width_ratio - desired.width);
    } else {
        tracing::trace!(panel = binding.panel.0, "degenerate width ratio, axis skipped");
    }

    let height_ratio = current.height / snapshot.height;
    if height_ratio.is_finite() {
        set_target_height(tree, binding, desired.height * height_ratio - desired.height);
    } else {
        tracing::trace!(panel = binding.panel.0, "degenerate height ratio, axis skipped");
    }

    *snapshot = current;
}
