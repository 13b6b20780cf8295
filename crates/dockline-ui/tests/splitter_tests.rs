//! Tests for splitter attachment and the drag-to-size algorithm.
//!
//! Fixtures build a small dock space (docked pane, splitter, fill body),
//! attach the splitter, and run one layout pass so desired sizes are
//! populated. Tests then drive either the full gesture path through
//! `DockSpace` or the controller directly when exact deltas matter.

use dockline_core::geometry::Size;
use dockline_core::math::Vec2;
use dockline_ui::splitter::{
    CursorShape, DockSide, PanelSplitter, SplitterClasses, controller,
};
use dockline_ui::{DockSpace, NodeId};

struct Fixture {
    space: DockSpace,
    panel: NodeId,
    pane: NodeId,
    splitter: NodeId,
}

/// Panel with a pane docked on `side`, a splitter on the same side, and a
/// fill body. Attached and laid out at 800x600.
fn docked_fixture(side: DockSide) -> Fixture {
    let preferred = if side.orientation().is_horizontal() {
        Size::new(800.0, 200.0)
    } else {
        Size::new(200.0, 600.0)
    };

    let mut space = DockSpace::new();
    let tree = space.tree_mut();
    let panel = tree.add_panel();
    let pane = tree.add_pane(preferred);
    let splitter = tree.add_splitter(PanelSplitter::new());
    let body = tree.add_pane(Size::new(100.0, 100.0));
    tree.add_child(panel, pane);
    tree.add_child(panel, splitter);
    tree.add_child(panel, body);
    tree.set_dock(pane, side);
    tree.set_dock(splitter, side);
    tree.set_root(panel);

    space.attach_splitter(splitter);
    space.set_viewport(Size::new(800.0, 600.0));
    space.compute_layout();

    Fixture {
        space,
        panel,
        pane,
        splitter,
    }
}

fn apply_raw_delta(fixture: &mut Fixture, delta: Vec2) {
    let binding = fixture
        .space
        .splitters()
        .binding(fixture.splitter)
        .copied()
        .unwrap();
    controller::drag_delta(fixture.space.tree_mut(), &binding, delta);
}

#[test]
fn test_is_horizontal_matches_dock_side() {
    for (side, expected) in [
        (DockSide::Top, true),
        (DockSide::Bottom, true),
        (DockSide::Left, false),
        (DockSide::Right, false),
        (DockSide::Fill, false),
    ] {
        let fixture = docked_fixture(side);
        assert_eq!(
            fixture.space.splitters().is_horizontal(fixture.splitter),
            Some(expected),
            "side {side:?}"
        );
    }
}

#[test]
fn test_attach_sizes_handle_and_sets_affordances() {
    let fixture = docked_fixture(DockSide::Top);
    let node = fixture.space.tree().get(fixture.splitter).unwrap();
    assert_eq!(node.height, Some(4.0));
    assert_eq!(node.width, None);
    let payload = node.as_splitter().unwrap();
    assert!(payload.classes.contains(SplitterClasses::HORIZONTAL));
    assert!(!payload.classes.contains(SplitterClasses::VERTICAL));
    assert_eq!(payload.cursor, Some(CursorShape::RowResize));

    let fixture = docked_fixture(DockSide::Left);
    let node = fixture.space.tree().get(fixture.splitter).unwrap();
    assert_eq!(node.width, Some(4.0));
    assert_eq!(node.height, None);
    let payload = node.as_splitter().unwrap();
    assert!(payload.classes.contains(SplitterClasses::VERTICAL));
    assert_eq!(payload.cursor, Some(CursorShape::ColResize));
}

#[test]
fn test_attach_honors_configured_thickness() {
    let mut space = DockSpace::new();
    let tree = space.tree_mut();
    let panel = tree.add_panel();
    let pane = tree.add_pane(Size::new(800.0, 200.0));
    let splitter = tree.add_splitter(PanelSplitter::new().thickness(8.0));
    tree.add_child(panel, pane);
    tree.add_child(panel, splitter);
    tree.set_dock(pane, DockSide::Top);
    tree.set_dock(splitter, DockSide::Top);
    tree.set_root(panel);

    space.attach_splitter(splitter);
    assert_eq!(space.tree().get(splitter).unwrap().height, Some(8.0));
}

#[test]
fn test_top_drag_grows_target_by_delta() {
    let mut fixture = docked_fixture(DockSide::Top);
    apply_raw_delta(&mut fixture, Vec2::new(0.0, 10.0));
    assert_eq!(fixture.space.tree().get(fixture.pane).unwrap().height, Some(210.0));
}

#[test]
fn test_bottom_drag_inverts_sign() {
    // Bottom side, raw delta +10 => applied delta -10.
    let mut fixture = docked_fixture(DockSide::Bottom);
    apply_raw_delta(&mut fixture, Vec2::new(0.0, 10.0));
    assert_eq!(fixture.space.tree().get(fixture.pane).unwrap().height, Some(190.0));
}

#[test]
fn test_left_drag_applies_x_axis() {
    let mut fixture = docked_fixture(DockSide::Left);
    // The y component is ignored for a vertical handle.
    apply_raw_delta(&mut fixture, Vec2::new(10.0, -500.0));
    assert_eq!(fixture.space.tree().get(fixture.pane).unwrap().width, Some(210.0));
}

#[test]
fn test_right_drag_inverts_sign() {
    let mut fixture = docked_fixture(DockSide::Right);
    apply_raw_delta(&mut fixture, Vec2::new(10.0, 0.0));
    assert_eq!(fixture.space.tree().get(fixture.pane).unwrap().width, Some(190.0));
}

#[test]
fn test_extreme_deltas_clamp_to_constraints() {
    let mut fixture = docked_fixture(DockSide::Bottom);
    fixture
        .space
        .tree_mut()
        .set_height_constraints(fixture.pane, 50.0, 500.0);
    fixture.space.compute_layout();

    // Raw -1e9 inverts to +1e9, clamped to max.
    apply_raw_delta(&mut fixture, Vec2::new(0.0, -1e9));
    assert_eq!(fixture.space.tree().get(fixture.pane).unwrap().height, Some(500.0));

    // Raw +1e9 inverts to -1e9, clamped to min.
    apply_raw_delta(&mut fixture, Vec2::new(0.0, 1e9));
    assert_eq!(fixture.space.tree().get(fixture.pane).unwrap().height, Some(50.0));
}

#[test]
fn test_left_growth_capped_by_panel_extent() {
    let mut fixture = docked_fixture(DockSide::Left);
    fixture.space.tree_mut().set_explicit_width(fixture.panel, 200.0);
    fixture
        .space
        .tree_mut()
        .set_width_constraints(fixture.pane, 0.0, 500.0);
    fixture.space.compute_layout();

    // Constraints would allow 500, but the target may not grow past the
    // handle: 200 - 4 = 196.
    apply_raw_delta(&mut fixture, Vec2::new(1000.0, 0.0));
    assert_eq!(fixture.space.tree().get(fixture.pane).unwrap().width, Some(196.0));
}

#[test]
fn test_top_growth_capped_by_panel_extent() {
    let mut fixture = docked_fixture(DockSide::Top);
    fixture.space.tree_mut().set_explicit_height(fixture.panel, 300.0);
    fixture.space.compute_layout();

    apply_raw_delta(&mut fixture, Vec2::new(0.0, 1e4));
    assert_eq!(fixture.space.tree().get(fixture.pane).unwrap().height, Some(296.0));
}

#[test]
fn test_bottom_growth_is_not_capped() {
    // The panel-extent cap applies to leading edges only; a Bottom-docked
    // target may grow past the panel's desired extent up to its max.
    let mut fixture = docked_fixture(DockSide::Bottom);
    fixture.space.tree_mut().set_explicit_height(fixture.panel, 200.0);
    fixture
        .space
        .tree_mut()
        .set_height_constraints(fixture.pane, 0.0, 500.0);
    fixture.space.compute_layout();

    apply_raw_delta(&mut fixture, Vec2::new(0.0, -1000.0));
    assert_eq!(fixture.space.tree().get(fixture.pane).unwrap().height, Some(500.0));
}

#[test]
fn test_first_child_splitter_is_noop() {
    let mut space = DockSpace::new();
    let tree = space.tree_mut();
    let panel = tree.add_panel();
    let splitter = tree.add_splitter(PanelSplitter::new());
    let body = tree.add_pane(Size::new(100.0, 100.0));
    tree.add_child(panel, splitter);
    tree.add_child(panel, body);
    tree.set_dock(splitter, DockSide::Top);
    tree.set_root(panel);

    space.attach_splitter(splitter);
    space.compute_layout();
    assert!(space.splitters().binding(splitter).unwrap().target.is_none());

    space.begin_drag(splitter, Vec2::new(400.0, 2.0));
    space.pointer_moved(Vec2::new(400.0, 80.0));
    space.end_drag();

    let body_node = space.tree().get(body).unwrap();
    assert_eq!(body_node.width, None);
    assert_eq!(body_node.height, None);
}

#[test]
fn test_unrecognized_parent_chain_is_noop() {
    let mut space = DockSpace::new();
    let tree = space.tree_mut();
    let pane = tree.add_pane(Size::new(400.0, 400.0));
    let splitter = tree.add_splitter(PanelSplitter::new());
    tree.add_child(pane, splitter);

    space.attach_splitter(splitter);
    assert_eq!(space.splitters().is_horizontal(splitter), None);

    // The gesture path tolerates the no-op splitter.
    space.begin_drag(splitter, Vec2::ZERO);
    space.pointer_moved(Vec2::new(50.0, 50.0));
    space.end_drag();
}

#[test]
fn test_wrapped_splitter_resizes_presenter_content() {
    let mut space = DockSpace::new();
    let tree = space.tree_mut();
    let panel = tree.add_panel();

    let pane_wrapper = tree.add_presenter();
    let pane = tree.add_pane(Size::new(200.0, 600.0));
    tree.add_child(pane_wrapper, pane);

    let splitter_wrapper = tree.add_presenter();
    let splitter = tree.add_splitter(PanelSplitter::new());
    tree.add_child(splitter_wrapper, splitter);

    let body = tree.add_pane(Size::new(100.0, 100.0));

    tree.add_child(panel, pane_wrapper);
    tree.add_child(panel, splitter_wrapper);
    tree.add_child(panel, body);
    tree.set_dock(pane_wrapper, DockSide::Left);
    tree.set_dock(splitter_wrapper, DockSide::Left);
    tree.set_root(panel);

    space.attach_splitter(splitter);
    space.compute_layout();

    // Dock side is read through the wrapper.
    assert_eq!(space.splitters().is_horizontal(splitter), Some(false));

    space.begin_drag(splitter, Vec2::new(204.0, 300.0));
    space.pointer_moved(Vec2::new(244.0, 300.0));
    space.end_drag();

    assert_eq!(space.tree().get(pane).unwrap().width, Some(240.0));
}

#[test]
fn test_deltas_anchor_on_last_completed_layout() {
    let mut fixture = docked_fixture(DockSide::Top);
    fixture.space.begin_drag(fixture.splitter, Vec2::new(400.0, 204.0));

    // Activating move: full offset from the start position.
    fixture.space.pointer_moved(Vec2::new(400.0, 244.0));
    assert_eq!(fixture.space.tree().get(fixture.pane).unwrap().height, Some(240.0));

    // No layout has run, so the next increment still anchors on the
    // desired size from the last pass, not on the 240 just written.
    fixture.space.pointer_moved(Vec2::new(400.0, 254.0));
    assert_eq!(fixture.space.tree().get(fixture.pane).unwrap().height, Some(210.0));

    // After a pass the anchor catches up.
    fixture.space.compute_layout();
    fixture.space.pointer_moved(Vec2::new(400.0, 264.0));
    assert_eq!(fixture.space.tree().get(fixture.pane).unwrap().height, Some(220.0));
    fixture.space.end_drag();
}

#[test]
fn test_reattach_rederives_orientation() {
    let mut fixture = docked_fixture(DockSide::Left);
    let splitter = fixture.splitter;
    assert_eq!(fixture.space.splitters().is_horizontal(splitter), Some(false));

    fixture.space.tree_mut().set_dock(fixture.pane, DockSide::Top);
    fixture.space.tree_mut().set_dock(splitter, DockSide::Top);
    fixture.space.attach_splitter(splitter);

    assert_eq!(fixture.space.splitters().is_horizontal(splitter), Some(true));
    let node = fixture.space.tree().get(splitter).unwrap();
    assert_eq!(node.height, Some(4.0));
    assert_eq!(node.width, None);
    let payload = node.as_splitter().unwrap();
    assert!(payload.classes.contains(SplitterClasses::HORIZONTAL));
    assert!(!payload.classes.contains(SplitterClasses::VERTICAL));
    assert_eq!(payload.cursor, Some(CursorShape::RowResize));
}

#[test]
fn test_dragging_class_follows_gesture() {
    let mut fixture = docked_fixture(DockSide::Top);
    let splitter = fixture.splitter;

    fixture.space.begin_drag(splitter, Vec2::new(400.0, 204.0));
    let classes = |space: &DockSpace| {
        space
            .tree()
            .get(splitter)
            .unwrap()
            .as_splitter()
            .unwrap()
            .classes
    };
    assert!(classes(&fixture.space).contains(SplitterClasses::DRAGGING));

    fixture.space.end_drag();
    assert!(!classes(&fixture.space).contains(SplitterClasses::DRAGGING));
}
