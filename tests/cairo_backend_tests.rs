#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chrono::{Duration, TimeZone, Utc};
use ticker_chart::ChartError;
use ticker_chart::api::{ChartEngine, ChartEngineConfig};
use ticker_chart::core::{Dataset, Sample, TimeRange, Viewport};
use ticker_chart::render::{CairoContextRenderer, CairoRenderer};

fn dataset() -> Dataset {
    let base = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
    let prices = [100.0, 102.0, 101.0, 103.0, 104.0, 99.0, 98.0, 97.0, 99.0, 101.0, 100.0, 102.0];
    let samples = prices
        .iter()
        .enumerate()
        .map(|(i, price)| Sample::new(i, base + Duration::minutes(i as i64), *price, 10.0))
        .collect();
    Dataset::new("AAPL", TimeRange::OneDay, samples)
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_segments_markers_and_axes() {
    let renderer = CairoRenderer::new(900, 500).expect("renderer");
    let mut engine =
        ChartEngine::new(renderer, ChartEngineConfig::new(Viewport::new(900, 500))).expect("engine");
    engine.set_dataset(dataset(), None).expect("dataset");

    let stats = engine.into_renderer().last_stats();
    // Visible window is [100, 102, 101]: one rising and one falling segment.
    assert_eq!(stats.paths_drawn, 2);
    assert_eq!(stats.circles_drawn, 3);
    assert_eq!(stats.lines_drawn, 1 + 6 + 1 + 8);
    assert!(stats.texts_drawn >= 9);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(600, 320).expect("renderer");
    let mut engine =
        ChartEngine::new(renderer, ChartEngineConfig::new(Viewport::new(600, 320))).expect("engine");
    engine.set_dataset(dataset(), None).expect("dataset");
    let frame = engine.build_render_frame().expect("frame");

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    let mut renderer = engine.into_renderer();
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("external render");
    assert_eq!(renderer.last_stats().paths_drawn, 2);
}

#[test]
fn cairo_renderer_exports_png() {
    let renderer = CairoRenderer::new(320, 200).expect("renderer");
    let mut engine =
        ChartEngine::new(renderer, ChartEngineConfig::new(Viewport::new(320, 200))).expect("engine");
    engine.render().expect("render");

    let mut png = Vec::new();
    engine.renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}
