//! Cross-splitter state: attachments, subscriptions, and drag dispatch.

use dockline_core::alloc::HashMap;
use dockline_core::geometry::Size;
use dockline_core::math::Vec2;
use dockline_core::profiling::profile_function;

use crate::tree::{NodeId, PanelTree};

use super::binding::SplitterBinding;
use super::controller;
use super::drag::DragManager;
use super::types::{DEFAULT_THICKNESS, Orientation};

/// Identifier of a layout-updated subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub usize);

/// A registered listener on a panel's layout-updated signal.
///
/// Held for exactly as long as its splitter is attached; detaching drops
/// the subscription, so no rescale can fire against a splitter that has
/// left the tree.
#[derive(Debug, Clone, Copy)]
pub struct LayoutSubscription {
    pub id: SubscriptionId,
    /// The panel whose layout events this subscription receives.
    pub panel: NodeId,
    /// The splitter the events are dispatched to.
    pub splitter: NodeId,
}

/// Per-splitter attachment state.
struct SplitterEntry {
    /// Resolved placement, or `None` when the parent chain was not a
    /// recognized panel arrangement (the splitter is then a no-op).
    binding: Option<SplitterBinding>,
    /// Panel size recorded at attach and after each rescale pass.
    snapshot: Size<f32>,
    /// Layout-updated subscription, present iff the binding resolved.
    subscription: Option<LayoutSubscription>,
}

/// Owns splitter attachments and routes gesture and layout events to the
/// resize controller.
///
/// One system per panel tree; one entry per attached splitter. The drag
/// gesture is exclusive across all splitters, mirroring pointer capture.
pub struct SplitterSystem {
    entries: HashMap<NodeId, SplitterEntry>,
    drag: DragManager,
    next_subscription: usize,
}

impl SplitterSystem {
    /// Create a new splitter system.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            drag: DragManager::new(),
            next_subscription: 0,
        }
    }

    /// Attach a splitter: resolve its binding, apply the handle's own
    /// sizing and affordances, record the panel-size snapshot, and
    /// subscribe to the panel's layout events.
    ///
    /// Attaching is idempotent per call: orientation, dock side, and the
    /// target are re-derived from the live tree every time, never carried
    /// over from a previous attachment.
    pub fn attach(&mut self, tree: &mut PanelTree, splitter: NodeId) {
        let binding = SplitterBinding::resolve(tree, splitter);

        let (snapshot, subscription) = if let Some(binding) = &binding {
            self.apply_handle_affordances(tree, binding);

            let snapshot = tree
                .bounds(binding.panel)
                .map(|bounds| bounds.size())
                .unwrap_or(Size::ZERO);

            let subscription = self.subscribe(binding.panel, splitter);
            tracing::debug!(
                splitter = splitter.0,
                panel = binding.panel.0,
                controls = ?binding.target.map(|t| t.0),
                horizontal = binding.orientation.is_horizontal(),
                "splitter attached"
            );
            (snapshot, Some(subscription))
        } else {
            tracing::debug!(
                splitter = splitter.0,
                "splitter attached outside a recognized panel; resize is a no-op"
            );
            (Size::ZERO, None)
        };

        self.entries.insert(
            splitter,
            SplitterEntry {
                binding,
                snapshot,
                subscription,
            },
        );
    }

    /// Detach a splitter, dropping its binding, snapshot, and
    /// subscription. Teardown is symmetric to [`attach`](Self::attach).
    pub fn detach(&mut self, splitter: NodeId) {
        if self.drag.dragged_splitter() == Some(splitter) {
            self.drag.cancel_drag();
        }
        if let Some(entry) = self.entries.remove(&splitter)
            && let Some(subscription) = entry.subscription
        {
            tracing::debug!(
                splitter = splitter.0,
                subscription = subscription.id.0,
                "splitter detached, subscription removed"
            );
        }
    }

    /// Size the handle on its cross axis and advertise cursor and style
    /// class for its orientation.
    fn apply_handle_affordances(&self, tree: &mut PanelTree, binding: &SplitterBinding) {
        let thickness = tree
            .get(binding.splitter)
            .and_then(|node| node.as_splitter())
            .map(|splitter| splitter.thickness)
            .unwrap_or(DEFAULT_THICKNESS);

        match binding.orientation {
            Orientation::Horizontal => {
                tree.set_explicit_height(binding.splitter, thickness);
                tree.clear_explicit_width(binding.splitter);
            }
            Orientation::Vertical => {
                tree.set_explicit_width(binding.splitter, thickness);
                tree.clear_explicit_height(binding.splitter);
            }
        }

        if let Some(splitter) = tree
            .get_mut(binding.splitter)
            .and_then(|node| node.as_splitter_mut())
        {
            splitter.classes.set_orientation(binding.orientation);
            splitter.cursor = Some(binding.orientation.cursor());
        }
    }

    fn subscribe(&mut self, panel: NodeId, splitter: NodeId) -> LayoutSubscription {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        LayoutSubscription {
            id,
            panel,
            splitter,
        }
    }

    /// Whether an attached splitter resizes along the vertical axis.
    pub fn is_horizontal(&self, splitter: NodeId) -> Option<bool> {
        self.entries
            .get(&splitter)?
            .binding
            .as_ref()
            .map(|binding| binding.orientation.is_horizontal())
    }

    /// The binding resolved at attach time, if any.
    pub fn binding(&self, splitter: NodeId) -> Option<&SplitterBinding> {
        self.entries.get(&splitter)?.binding.as_ref()
    }

    /// The panel size recorded for a splitter's rescale baseline.
    pub fn parent_size_snapshot(&self, splitter: NodeId) -> Option<Size<f32>> {
        self.entries.get(&splitter).map(|entry| entry.snapshot)
    }

    /// Begin a drag gesture on an attached splitter.
    pub fn begin_drag(&mut self, tree: &mut PanelTree, splitter: NodeId, pos: Vec2) {
        if !self.entries.contains_key(&splitter) {
            return;
        }
        self.drag.start_drag(splitter, pos);
        if let Some(payload) = tree.get_mut(splitter).and_then(|node| node.as_splitter_mut()) {
            payload.set_dragging(true);
        }
    }

    /// Feed a pointer position into the active gesture, applying the
    /// incremental delta to the dragged splitter's target.
    pub fn pointer_moved(&mut self, tree: &mut PanelTree, pos: Vec2) {
        let Some((splitter, delta)) = self.drag.pointer_moved(pos) else {
            return;
        };
        let Some(binding) = self.binding(splitter).copied() else {
            return;
        };
        controller::drag_delta(tree, &binding, delta);
    }

    /// End the active gesture. The last applied size remains.
    pub fn end_drag(&mut self, tree: &mut PanelTree) {
        if let Some(state) = self.drag.end_drag()
            && let Some(payload) = tree
                .get_mut(state.splitter)
                .and_then(|node| node.as_splitter_mut())
        {
            payload.set_dragging(false);
        }
    }

    /// Cancel the active gesture, e.g. on lost capture. No rollback.
    pub fn cancel_drag(&mut self, tree: &mut PanelTree) {
        self.end_drag(tree);
    }

    /// Whether a drag gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Drain the tree's layout events and rescale every splitter
    /// subscribed to an affected panel.
    pub fn pump_layout_events(&mut self, tree: &mut PanelTree) {
        profile_function!();
        let events = tree.drain_layout_events();
        if events.is_empty() {
            return;
        }
        for event in &events {
            for entry in self.entries.values_mut() {
                let SplitterEntry {
                    binding,
                    snapshot,
                    subscription,
                } = entry;
                if let (Some(binding), Some(subscription)) = (binding, subscription)
                    && subscription.panel == event.panel
                {
                    controller::rescale(tree, binding, snapshot);
                }
            }
        }
    }

    /// Drop state referring to nodes that no longer exist in the tree.
    pub fn invalidate_removed_nodes(&mut self, tree: &PanelTree) {
        if let Some(splitter) = self.drag.dragged_splitter()
            && !tree.node_exists(splitter)
        {
            self.drag.cancel_drag();
        }
        self.entries
            .retain(|splitter, _| tree.node_exists(*splitter));
    }
}

impl Default for SplitterSystem {
    fn default() -> Self {
        Self::new()
    }
}
