//! Attach-time resolution of a splitter's place in the tree.

use crate::tree::{NodeId, PanelTree};

use super::types::{ChildSlot, DockSide, Orientation};

/// Immutable description of where an attached splitter sits and what it
/// controls.
///
/// Produced once per attachment and handed to every resize operation, so
/// the controller never re-derives placement mid-gesture. Reattaching a
/// splitter produces a fresh binding; nothing here survives detachment.
#[derive(Debug, Clone, Copy)]
pub struct SplitterBinding {
    /// The splitter node itself.
    pub splitter: NodeId,
    /// The dock panel whose child list places the splitter.
    pub panel: NodeId,
    /// How the splitter occupies its position (directly or via presenter).
    pub slot: ChildSlot,
    /// The sibling the splitter resizes: the one immediately preceding its
    /// slot in child order. `None` when the slot is the first child; every
    /// operation is a no-op then.
    pub target: Option<NodeId>,
    /// Placement side, read through the slot.
    pub dock: DockSide,
    /// Derived from the dock side at attach time.
    pub orientation: Orientation,
}

impl SplitterBinding {
    /// Resolve the binding for a splitter currently in a tree.
    ///
    /// Returns `None` when the parent chain is not a recognized panel
    /// arrangement (direct panel child, or presenter-wrapped panel child);
    /// the splitter then stays a permanent no-op until reattached.
    pub fn resolve(tree: &PanelTree, splitter: NodeId) -> Option<SplitterBinding> {
        let parent = tree.parent(splitter)?;
        let parent_node = tree.get(parent)?;

        let (panel, slot) = if parent_node.is_panel() {
            (parent, ChildSlot::Direct(splitter))
        } else if parent_node.is_presenter() {
            let grandparent = tree.parent(parent)?;
            if !tree.get(grandparent)?.is_panel() {
                return None;
            }
            (grandparent, ChildSlot::Wrapped { presenter: parent })
        } else {
            return None;
        };

        let position = slot.position_node();
        let dock = tree.get(position)?.dock;
        let index = tree.index_of_child(panel, position)?;

        let target = if index == 0 {
            None
        } else {
            let preceding = tree.children(panel)[index - 1];
            if tree.get(preceding)?.is_presenter() {
                // Templated tree: the controlled sibling is the wrapper's content.
                tree.children(preceding).first().copied()
            } else {
                Some(preceding)
            }
        };

        Some(SplitterBinding {
            splitter,
            panel,
            slot,
            target,
            dock,
            orientation: dock.orientation(),
        })
    }
}
