use criterion::{Criterion, criterion_group, criterion_main};
use scale_chart::core::{ScaleLadder, Segment, Viewport, tick_marks};
use scale_chart::render::NullRenderer;
use scale_chart::{ScaleChartConfig, ScaleChartEngine};
use std::hint::black_box;

fn build_engine(segment_count: i64) -> ScaleChartEngine<NullRenderer> {
    let config = ScaleChartConfig::new(Viewport::new(1920, 400));
    let mut engine = ScaleChartEngine::new(NullRenderer::default(), config).expect("engine init");
    let step = 86_400 / segment_count;
    let segments = (0..segment_count)
        .map(|i| Segment::new(i * step, i * step + step / 2, format!("event{i}")))
        .collect();
    engine.set_segments(segments);
    engine.scroll_to(43_200.0).expect("scroll");
    engine
}

fn bench_mapping_round_trip(c: &mut Criterion) {
    let engine = build_engine(10);

    c.bench_function("point_screen_round_trip", |b| {
        b.iter(|| {
            let x = engine.map_point_to_screen(black_box(12_345));
            let _ = engine.map_screen_to_point(x);
        })
    });
}

fn bench_hit_test_10k(c: &mut Criterion) {
    let engine = build_engine(10_000);

    c.bench_function("hit_test_10k_segments", |b| {
        b.iter(|| {
            let _ = engine.hit_test(black_box(125.0));
        })
    });
}

fn bench_tick_marks_fine_zoom(c: &mut Criterion) {
    let ladder = ScaleLadder::clock_default();

    c.bench_function("tick_marks_one_second_scale", |b| {
        b.iter(|| {
            let _ = tick_marks(
                black_box(&ladder),
                black_box(2.0),
                black_box(40_000.0),
                black_box(41_000.0),
            );
        })
    });
}

fn bench_render_frame_1k(c: &mut Criterion) {
    let mut engine = build_engine(1_000);
    engine.set_units_per_inch(900.0).expect("zoom");

    c.bench_function("render_frame_1k_segments", |b| {
        b.iter(|| {
            let _ = engine.build_render_frame().expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_mapping_round_trip,
    bench_hit_test_10k,
    bench_tick_marks_fine_zoom,
    bench_render_frame_1k
);
criterion_main!(benches);
