#![allow(dead_code)]

use scale_chart::core::{Segment, Viewport, clock_point};
use scale_chart::render::NullRenderer;
use scale_chart::{ScaleChartConfig, ScaleChartEngine};

pub fn build_engine() -> ScaleChartEngine<NullRenderer> {
    build_engine_with(ScaleChartConfig::new(Viewport::new(1000, 500)))
}

pub fn build_engine_with(config: ScaleChartConfig) -> ScaleChartEngine<NullRenderer> {
    ScaleChartEngine::new(NullRenderer::default(), config).expect("engine init")
}

pub fn clock_segment(
    begin_hour: u32,
    begin_minute: u32,
    end_hour: u32,
    end_minute: u32,
    title: &str,
) -> Segment {
    Segment::new(
        clock_point(begin_hour, begin_minute, 0).expect("valid start"),
        clock_point(end_hour, end_minute, 0).expect("valid end"),
        title,
    )
}

pub fn sample_day() -> Vec<Segment> {
    vec![
        clock_segment(0, 30, 0, 45, "event1"),
        clock_segment(2, 1, 2, 2, "event2"),
        clock_segment(2, 3, 2, 4, "event3"),
        clock_segment(2, 5, 2, 6, "event4"),
        clock_segment(2, 7, 2, 8, "event5"),
        clock_segment(3, 30, 4, 45, "event6"),
        clock_segment(6, 0, 7, 15, "event7"),
        clock_segment(10, 0, 12, 15, "event8"),
        clock_segment(13, 0, 13, 15, "event9"),
        clock_segment(14, 30, 16, 15, "event10"),
        clock_segment(18, 30, 19, 0, "event11"),
        clock_segment(21, 30, 23, 0, "event12"),
    ]
}
