use chrono::{Duration, TimeZone, Utc};
use ticker_chart::api::{ChartEngine, ChartEngineConfig, ChartSnapshot};
use ticker_chart::core::{Dataset, Sample, TimeRange};
use ticker_chart::interaction::InteractionMode;
use ticker_chart::provider::MetricsSummary;
use ticker_chart::render::NullRenderer;

fn engine() -> ChartEngine<NullRenderer> {
    let base = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();
    let prices = [100.0, 102.0, 101.0, 105.0, 104.0, 103.0, 108.0, 107.0];
    let samples = prices
        .iter()
        .cycle()
        .take(32)
        .enumerate()
        .map(|(i, price)| Sample::new(i, base + Duration::days(i as i64), *price, 1.0))
        .collect();
    let metrics = MetricsSummary {
        current_price: 107.0,
        previous_close: 108.0,
        change: -1.0,
        change_percent: -0.93,
        ..MetricsSummary::default()
    };

    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    engine
        .set_dataset(Dataset::new("NVDA", TimeRange::OneMonth, samples), Some(metrics))
        .expect("dataset");
    engine
}

#[test]
fn snapshot_reports_window_segments_and_metrics() {
    let snapshot = engine().snapshot().expect("snapshot");

    assert_eq!(snapshot.ticker, "NVDA");
    assert_eq!(snapshot.time_range, TimeRange::OneMonth);
    assert_eq!(snapshot.window.count(), 8);
    assert!(!snapshot.flush_end);
    assert_eq!(snapshot.interaction_mode, InteractionMode::Idle);
    assert_eq!(snapshot.hovered, None);

    let spans: Vec<(usize, usize, bool)> = snapshot
        .segments
        .iter()
        .map(|s| (s.first_index, s.last_index, s.increasing))
        .collect();
    assert_eq!(
        spans,
        vec![
            (0, 1, true),
            (1, 2, false),
            (2, 3, true),
            (3, 5, false),
            (5, 6, true),
            (6, 7, false),
        ]
    );

    let labels: Vec<&str> = snapshot.metrics.keys().map(String::as_str).collect();
    assert_eq!(labels[0], "Current Price");
    assert_eq!(snapshot.metrics["Change"], -1.0);
}

#[test]
fn snapshot_segments_use_absolute_indices_after_panning() {
    let mut engine = engine();
    engine.drag_start(600.0).expect("drag start");
    // 140px per sample with eight visible; -300px shifts two samples.
    engine.drag_move(300.0).expect("drag move");
    let snapshot = engine.snapshot().expect("snapshot");

    assert_eq!(snapshot.window.start(), 2);
    assert_eq!(snapshot.interaction_mode, InteractionMode::Dragging);
    assert_eq!(snapshot.segments.first().map(|s| s.first_index), Some(2));
    assert_eq!(snapshot.segments.last().map(|s| s.last_index), Some(9));
}

#[test]
fn snapshot_json_round_trips() {
    let json = engine().snapshot_json_pretty().expect("json");
    assert!(json.contains("\"ticker\": \"NVDA\""));
    assert!(json.contains("\"time_range\": \"1m\""));
    let parsed: ChartSnapshot = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed.window.count(), 8);
}
