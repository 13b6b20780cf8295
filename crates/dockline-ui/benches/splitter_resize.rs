//! Benchmarks for splitter drag and rescale paths

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dockline_core::geometry::Size;
use dockline_core::math::Vec2;
use dockline_ui::DockSpace;
use dockline_ui::splitter::{DockSide, PanelSplitter};

fn setup(panes: usize) -> (DockSpace, dockline_ui::NodeId) {
    let mut space = DockSpace::new();
    let tree = space.tree_mut();
    let panel = tree.add_panel();
    let pane = tree.add_pane(Size::new(200.0, 600.0));
    let splitter = tree.add_splitter(PanelSplitter::new());
    tree.add_child(panel, pane);
    tree.add_child(panel, splitter);
    tree.set_dock(pane, DockSide::Left);
    tree.set_dock(splitter, DockSide::Left);
    for _ in 0..panes {
        let filler = tree.add_pane(Size::new(50.0, 50.0));
        tree.add_child(panel, filler);
        tree.set_dock(filler, DockSide::Left);
    }
    let body = tree.add_pane(Size::new(100.0, 100.0));
    tree.add_child(panel, body);
    tree.set_root(panel);

    space.attach_splitter(splitter);
    space.set_viewport(Size::new(1600.0, 600.0));
    space.compute_layout();
    (space, splitter)
}

fn bench_drag_deltas(c: &mut Criterion) {
    let mut group = c.benchmark_group("splitter_drag_deltas");

    for panes in [2, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(panes), &panes, |b, &panes| {
            let (mut space, splitter) = setup(panes);
            space.begin_drag(splitter, Vec2::new(204.0, 300.0));
            let mut x = 204.0;
            b.iter(|| {
                x += 1.0;
                space.pointer_moved(Vec2::new(x, 300.0));
                black_box(())
            });
        });
    }

    group.finish();
}

fn bench_layout_and_rescale(c: &mut Criterion) {
    let mut group = c.benchmark_group("splitter_layout_rescale");

    for panes in [2, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(panes), &panes, |b, &panes| {
            let (mut space, _splitter) = setup(panes);
            let mut width = 1600.0;
            b.iter(|| {
                // Alternate the viewport so every pass sees a real ratio.
                width = if width == 1600.0 { 1200.0 } else { 1600.0 };
                space.set_viewport(Size::new(width, 600.0));
                space.compute_layout();
                black_box(())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag_deltas, bench_layout_and_rescale);
criterion_main!(benches);
