use brush_edit_core::{
    BrushId, BrushMap, CommandHistory, EditorDocument, EditorOptions, Selection,
    TranslateObjectsCommand,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use std::hint::black_box;

fn build_grid_map(brush_count: usize) -> (BrushMap, Vec<BrushId>) {
    let mut map = BrushMap::new();
    let world = map.add_entity("worldspawn", Vec3::ZERO);
    let brushes = (0..brush_count)
        .filter_map(|index| {
            let column = (index % 100) as f32 * 32.0;
            let row = (index / 100) as f32 * 32.0;
            let min = Vec3::new(column, row, 0.0);
            map.add_box_brush(world, min, min + Vec3::splat(16.0), None)
        })
        .collect();
    (map, brushes)
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    for &brush_count in &[1_000usize, 10_000usize] {
        let (map, brushes) = build_grid_map(brush_count);

        group.bench_with_input(
            BenchmarkId::new("add_remove_brushes", brush_count),
            &brushes,
            |b, brushes| {
                b.iter(|| {
                    let mut selection = Selection::default();
                    selection
                        .add_brushes(black_box(brushes))
                        .expect("add_brushes failed");
                    selection
                        .remove_brushes(&map, black_box(brushes))
                        .expect("remove_brushes failed");
                    black_box(selection.is_empty())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("bounds", brush_count),
            &brushes,
            |b, brushes| {
                let mut selection = Selection::default();
                selection.add_brushes(brushes).expect("add_brushes failed");
                b.iter(|| black_box(selection.bounds(&map).expect("bounds failed")))
            },
        );
    }

    group.finish();
}

fn bench_history(c: &mut Criterion) {
    let (map, brushes) = build_grid_map(1_000);
    let options = EditorOptions::default();

    c.bench_function("translate_execute_undo", |b| {
        let mut document = EditorDocument::with_map(map.clone(), &options);
        document
            .selection
            .add_brushes(&brushes)
            .expect("add_brushes failed");
        let mut history = CommandHistory::from_options(&options);
        history.set_collation(false);

        b.iter(|| {
            history
                .execute(
                    &mut document,
                    Box::new(TranslateObjectsCommand::translate(black_box(Vec3::X))),
                )
                .expect("execute failed");
            history.undo(&mut document).expect("undo failed");
        })
    });
}

criterion_group!(core_benches, bench_selection, bench_history);
criterion_main!(core_benches);
