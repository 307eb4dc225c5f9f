//! Performance benchmarks for the bar chart render pass

use bar_chart_renderer::{ChartRenderer, DomTree};
use bar_chart_shared::DataSet;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_data(num_values: usize) -> DataSet {
    (0..num_values).map(|i| (i % 97) as f64 * 0.5).collect()
}

fn bench_render_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");
    let renderer = ChartRenderer::new();

    for size in [10, 1_000, 10_000] {
        let data = create_data(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let mut tree = DomTree::new();
                let body = tree.body();
                let chart = renderer.render(&mut tree, black_box(data), &body).unwrap();
                black_box(chart.bar_count())
            });
        });
    }

    group.finish();
}

fn bench_html_serialization(c: &mut Criterion) {
    let mut tree = DomTree::new();
    let body = tree.body();
    ChartRenderer::new()
        .render(&mut tree, &create_data(1_000), &body)
        .unwrap();

    c.bench_function("to_html_1000_bars", |b| b.iter(|| black_box(tree.to_html())));
}

criterion_group!(benches, bench_render_pass, bench_html_serialization);
criterion_main!(benches);
