//! Panel tree structure backing the dock layout.

use bitflags::bitflags;
use dockline_core::geometry::Size;
use dockline_core::math::Vec2;
use indexmap::IndexMap;

use crate::splitter::{DockSide, PanelSplitter};

/// Node identifier in the panel tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Arranged bounds of a node, in layout units relative to the tree origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size<f32> {
        Size::new(self.width, self.height)
    }
}

bitflags! {
    /// Validity of the last layout passes for a node.
    ///
    /// Both flags are set by the layout pass and cleared whenever an input
    /// to that pass changes (explicit size, constraints, dock side, child
    /// order). A node with either flag clear is mid-relayout: its
    /// `desired_size` and `bounds` may disagree with the tree.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LayoutFlags: u8 {
        /// `desired_size` reflects the current inputs.
        const MEASURE_VALID = 0b01;
        /// `bounds` reflects the current inputs.
        const ARRANGE_VALID = 0b10;
    }
}

impl LayoutFlags {
    /// True when both the measure and arrange passes are current.
    #[inline]
    pub fn is_layout_valid(&self) -> bool {
        self.contains(Self::MEASURE_VALID | Self::ARRANGE_VALID)
    }
}

/// What a node in the panel tree is.
///
/// A closed set: the dock layout only ever arranges these four kinds, and
/// the splitter attachment logic resolves its position through exactly
/// this vocabulary.
pub enum NodeKind {
    /// Dock container. Ordered children carve space off their dock side;
    /// a `Fill` child takes whatever remains.
    Panel,
    /// Leaf content with an intrinsic preferred size.
    Pane {
        /// Content size reported during measure when no explicit size is set.
        preferred: Size<f32>,
    },
    /// One-child generic wrapper, standing in for a templating presenter.
    /// Dock side and child order are carried by the presenter, not by its
    /// content.
    Presenter,
    /// Draggable resize handle.
    Splitter(PanelSplitter),
}

/// A node in the panel tree.
pub struct PanelNode {
    pub kind: NodeKind,
    /// Placement side within the parent panel.
    pub dock: DockSide,
    /// Explicit width, `None` = auto.
    pub width: Option<f32>,
    /// Explicit height, `None` = auto.
    pub height: Option<f32>,
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
    /// Size computed by the last measure pass.
    pub desired_size: Size<f32>,
    /// Bounds assigned by the last arrange pass.
    pub bounds: LayoutRect,
    pub flags: LayoutFlags,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl PanelNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            dock: DockSide::Fill,
            width: None,
            height: None,
            min_width: 0.0,
            max_width: f32::INFINITY,
            min_height: 0.0,
            max_height: f32::INFINITY,
            desired_size: Size::ZERO,
            bounds: LayoutRect::default(),
            flags: LayoutFlags::empty(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// The splitter payload, if this node is a splitter.
    pub fn as_splitter(&self) -> Option<&PanelSplitter> {
        match &self.kind {
            NodeKind::Splitter(splitter) => Some(splitter),
            _ => None,
        }
    }

    /// Mutable splitter payload, if this node is a splitter.
    pub fn as_splitter_mut(&mut self) -> Option<&mut PanelSplitter> {
        match &mut self.kind {
            NodeKind::Splitter(splitter) => Some(splitter),
            _ => None,
        }
    }

    pub fn is_panel(&self) -> bool {
        matches!(self.kind, NodeKind::Panel)
    }

    pub fn is_presenter(&self) -> bool {
        matches!(self.kind, NodeKind::Presenter)
    }
}

/// Notification that a panel finished a measure+arrange pass.
///
/// Queued by the layout pass and drained afterwards, so observers always
/// see fully-computed desired sizes and bounds.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEvent {
    /// The panel that was arranged.
    pub panel: NodeId,
    /// The panel's arranged size.
    pub size: Size<f32>,
}

/// Panel tree managing nodes, placement, and layout state.
pub struct PanelTree {
    nodes: IndexMap<NodeId, PanelNode>,
    root: Option<NodeId>,
    next_id: usize,
    layout_events: Vec<LayoutEvent>,
}

impl PanelTree {
    /// Create an empty panel tree.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            root: None,
            next_id: 0,
            layout_events: Vec::new(),
        }
    }

    fn add_node(&mut self, kind: NodeKind) -> NodeId {
        let node_id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(node_id, PanelNode::new(kind));
        node_id
    }

    /// Add a dock container node.
    pub fn add_panel(&mut self) -> NodeId {
        self.add_node(NodeKind::Panel)
    }

    /// Add a leaf pane with the given preferred content size.
    pub fn add_pane(&mut self, preferred: Size<f32>) -> NodeId {
        self.add_node(NodeKind::Pane { preferred })
    }

    /// Add a one-child presenter wrapper.
    pub fn add_presenter(&mut self) -> NodeId {
        self.add_node(NodeKind::Presenter)
    }

    /// Add a splitter node.
    pub fn add_splitter(&mut self, splitter: PanelSplitter) -> NodeId {
        self.add_node(NodeKind::Splitter(splitter))
    }

    /// Append a child to a parent node.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child) {
            return;
        }
        if let Some(child_node) = self.nodes.get_mut(&child) {
            child_node.parent = Some(parent);
        }
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(child);
        }
        self.invalidate(parent);
    }

    /// Set the root node.
    pub fn set_root(&mut self, node_id: NodeId) {
        self.root = Some(node_id);
        self.invalidate(node_id);
    }

    /// Get the root node.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, node_id: NodeId) -> Option<&PanelNode> {
        self.nodes.get(&node_id)
    }

    pub fn get_mut(&mut self, node_id: NodeId) -> Option<&mut PanelNode> {
        self.nodes.get_mut(&node_id)
    }

    pub fn node_exists(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Parent of a node, if any.
    pub fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes.get(&node_id).and_then(|n| n.parent)
    }

    /// Ordered children of a node.
    pub fn children(&self, node_id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node_id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Position of `child` in `parent`'s child list.
    pub fn index_of_child(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|&c| c == child)
    }

    /// Set a node's dock side and invalidate its layout.
    pub fn set_dock(&mut self, node_id: NodeId, dock: DockSide) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.dock = dock;
        }
        self.invalidate(node_id);
    }

    /// Write an explicit width and invalidate the affected layout.
    pub fn set_explicit_width(&mut self, node_id: NodeId, width: f32) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.width = Some(width);
        }
        self.invalidate(node_id);
    }

    /// Write an explicit height and invalidate the affected layout.
    pub fn set_explicit_height(&mut self, node_id: NodeId, height: f32) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.height = Some(height);
        }
        self.invalidate(node_id);
    }

    /// Clear an explicit width (back to auto sizing).
    pub fn clear_explicit_width(&mut self, node_id: NodeId) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.width = None;
        }
        self.invalidate(node_id);
    }

    /// Clear an explicit height (back to auto sizing).
    pub fn clear_explicit_height(&mut self, node_id: NodeId) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.height = None;
        }
        self.invalidate(node_id);
    }

    /// Set min/max width constraints.
    pub fn set_width_constraints(&mut self, node_id: NodeId, min: f32, max: f32) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.min_width = min;
            node.max_width = max;
        }
        self.invalidate(node_id);
    }

    /// Set min/max height constraints.
    pub fn set_height_constraints(&mut self, node_id: NodeId, min: f32, max: f32) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.min_height = min;
            node.max_height = max;
        }
        self.invalidate(node_id);
    }

    /// Clear layout validity on a node and its ancestors.
    ///
    /// Any size-affecting change flows upward: the node's own passes are
    /// stale, and so is every containing panel's.
    pub fn invalidate(&mut self, node_id: NodeId) {
        let mut current = Some(node_id);
        while let Some(id) = current {
            let Some(node) = self.nodes.get_mut(&id) else {
                break;
            };
            node.flags = LayoutFlags::empty();
            current = node.parent;
        }
    }

    /// Desired size of a node from the last measure pass.
    pub fn desired_size(&self, node_id: NodeId) -> Option<Size<f32>> {
        self.nodes.get(&node_id).map(|n| n.desired_size)
    }

    /// Arranged bounds of a node from the last arrange pass.
    pub fn bounds(&self, node_id: NodeId) -> Option<LayoutRect> {
        self.nodes.get(&node_id).map(|n| n.bounds)
    }

    /// Queue a layout-completed notification for a panel.
    pub(crate) fn push_layout_event(&mut self, event: LayoutEvent) {
        self.layout_events.push(event);
    }

    /// Drain layout-completed notifications queued by the last pass.
    pub fn drain_layout_events(&mut self) -> Vec<LayoutEvent> {
        std::mem::take(&mut self.layout_events)
    }
}

impl Default for PanelTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_order() {
        let mut tree = PanelTree::new();
        let panel = tree.add_panel();
        let a = tree.add_pane(Size::new(10.0, 10.0));
        let b = tree.add_pane(Size::new(10.0, 10.0));
        tree.add_child(panel, a);
        tree.add_child(panel, b);

        assert_eq!(tree.children(panel), &[a, b]);
        assert_eq!(tree.index_of_child(panel, b), Some(1));
        assert_eq!(tree.parent(b), Some(panel));
    }

    #[test]
    fn test_invalidate_propagates_to_ancestors() {
        let mut tree = PanelTree::new();
        let panel = tree.add_panel();
        let pane = tree.add_pane(Size::new(10.0, 10.0));
        tree.add_child(panel, pane);

        tree.get_mut(panel).unwrap().flags = LayoutFlags::all();
        tree.get_mut(pane).unwrap().flags = LayoutFlags::all();

        tree.set_explicit_width(pane, 50.0);

        assert!(tree.get(pane).unwrap().flags.is_empty());
        assert!(tree.get(panel).unwrap().flags.is_empty());
    }

    #[test]
    fn test_missing_node_is_harmless() {
        let mut tree = PanelTree::new();
        let ghost = NodeId(99);
        tree.set_explicit_width(ghost, 10.0);
        assert!(!tree.node_exists(ghost));
        assert!(tree.children(ghost).is_empty());
    }
}
