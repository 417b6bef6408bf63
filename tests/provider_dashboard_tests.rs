use std::cell::Cell;

use ticker_chart::core::TimeRange;
use ticker_chart::provider::{
    DEFAULT_FETCH_ERROR_MESSAGE, DataProvider, FetchedData, MetricsSummary, ProviderConfig,
    StaticDataProvider, StockPoint, StockResponse, decode_response,
};
use ticker_chart::render::NullRenderer;
use ticker_chart::{ChartEngine, ChartEngineConfig, ChartError, ChartResult, Dashboard};

fn body(points: &[(&str, f64)]) -> String {
    let data: Vec<String> = points
        .iter()
        .map(|(timestamp, price)| {
            format!(r#"{{"timestamp":"{timestamp}","price":{price},"volume":1200}}"#)
        })
        .collect();
    format!(
        r#"{{"ticker":"AAPL","data":[{}],"metrics":{{"currentPrice":187.42,"previousClose":185.1,"change":2.32,"changePercent":1.25,"dayHigh":188.0,"dayLow":184.9,"volume":51000000,"marketCap":2900000000000}}}}"#,
        data.join(",")
    )
}

fn session_body(count: usize) -> String {
    let points: Vec<(String, f64)> = (0..count)
        .map(|i| {
            (
                format!("2024-01-02T{:02}:{:02}:00Z", 9 + (30 + i) / 60, (30 + i) % 60),
                180.0 + (i % 6) as f64,
            )
        })
        .collect();
    let borrowed: Vec<(&str, f64)> = points.iter().map(|(t, p)| (t.as_str(), *p)).collect();
    body(&borrowed)
}

fn engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine")
}

#[test]
fn server_error_message_is_propagated_verbatim() {
    let err = decode_response(500, r#"{"message":"rate limited"}"#, TimeRange::OneDay)
        .expect_err("status 500");
    assert_eq!(err.to_string(), "rate limited");
    assert!(matches!(err, ChartError::Fetch { status: 500, .. }));
    assert!(err.is_provider_error());
}

#[test]
fn server_error_without_message_uses_generic_text() {
    for payload in ["<html>Bad gateway</html>", "{}", r#"{"message":42}"#] {
        let err = decode_response(502, payload, TimeRange::OneDay).expect_err("status 502");
        assert_eq!(err.to_string(), DEFAULT_FETCH_ERROR_MESSAGE);
    }
}

#[test]
fn successful_response_decodes_samples_and_metrics() {
    let fetched = decode_response(
        200,
        &body(&[("2024-01-02T09:30:00Z", 185.5), ("2024-01-02T09:31:00Z", 186.25)]),
        TimeRange::OneDay,
    )
    .expect("decoded");

    assert_eq!(fetched.dataset.ticker, "AAPL");
    assert_eq!(fetched.dataset.time_range, TimeRange::OneDay);
    assert_eq!(fetched.dataset.len(), 2);
    assert_eq!(fetched.dataset.samples[1].index, 1);
    assert_eq!(fetched.dataset.samples[1].price, 186.25);
    assert_eq!(fetched.metrics.current_price, 187.42);

    let rows: Vec<&str> = fetched.metrics.rows().keys().copied().collect();
    assert_eq!(rows.first(), Some(&"Current Price"));
    assert_eq!(rows.last(), Some(&"Market Cap"));
    assert_eq!(rows.len(), 8);
}

#[test]
fn malformed_points_fail_the_whole_load() {
    let err = decode_response(
        200,
        &body(&[("2024-01-02T09:30:00Z", 185.5), ("yesterday", 186.0)]),
        TimeRange::OneDay,
    )
    .expect_err("bad timestamp");
    assert!(matches!(err, ChartError::MalformedSample { index: 1, .. }));

    let err = decode_response(
        200,
        &body(&[("2024-01-02T09:31:00Z", 185.5), ("2024-01-02T09:30:00Z", 186.0)]),
        TimeRange::OneDay,
    )
    .expect_err("out of order");
    assert!(matches!(err, ChartError::MalformedSample { index: 1, .. }));

    let err = decode_response(200, "not json", TimeRange::OneDay).expect_err("bad json");
    assert!(matches!(err, ChartError::Decode(_)));
}

#[test]
fn provider_config_requires_url_and_key() {
    let err = ProviderConfig::from_lookup(|_| None).expect_err("missing url");
    assert!(matches!(err, ChartError::Configuration(_)));

    let config = ProviderConfig::from_lookup(|name| match name {
        "TICKER_CHART_API_URL" => Some("https://quotes.test/api/stock".to_owned()),
        "TICKER_CHART_API_KEY" => Some("secret".to_owned()),
        _ => None,
    })
    .expect("config");
    assert_eq!(config.endpoint, "https://quotes.test/api/stock");
    assert_eq!(config.timeout.as_secs(), 12);

    let err = ProviderConfig::from_lookup(|name| match name {
        "TICKER_CHART_API_URL" => Some("https://quotes.test/api/stock".to_owned()),
        "TICKER_CHART_API_KEY" => Some("secret".to_owned()),
        "TICKER_CHART_TIMEOUT_SECS" => Some("soon".to_owned()),
        _ => None,
    })
    .expect_err("bad timeout");
    assert!(matches!(err, ChartError::Configuration(_)));
}

#[test]
fn dashboard_load_renders_the_fetched_ticker() {
    let provider =
        StaticDataProvider::new().with_exchange(TimeRange::OneDay, 200, session_body(40));
    let mut dashboard = Dashboard::new(engine(), provider);

    dashboard.load_query(None).expect("load");
    let engine = dashboard.engine();
    assert_eq!(engine.title(), "AAPL");
    assert_eq!(engine.dataset().len(), 40);
    assert_eq!(engine.window().count(), 10);
    assert_eq!(engine.metrics().map(|m| m.day_high), Some(188.0));

    let frame = engine.renderer().last_frame.clone().expect("frame");
    assert_eq!(frame.circles.len(), 10);
    assert!(frame.texts.iter().any(|text| text.text == "AAPL" && text.bold));
}

#[test]
fn dashboard_failure_leaves_an_empty_chart() {
    let provider = StaticDataProvider::new()
        .with_exchange(TimeRange::OneDay, 200, session_body(40))
        .with_exchange(TimeRange::OneWeek, 500, r#"{"message":"rate limited"}"#);
    let mut dashboard = Dashboard::new(engine(), provider);
    dashboard.load(TimeRange::OneDay).expect("first load");

    let err = dashboard.load(TimeRange::OneWeek).expect_err("second load");
    assert_eq!(err.to_string(), "rate limited");

    let engine = dashboard.engine();
    assert_eq!(engine.time_range(), TimeRange::OneWeek);
    assert!(engine.dataset().is_empty());
    assert!(engine.metrics().is_none());
    assert_eq!(engine.renderer().last_path_count(), 0);
    assert_eq!(engine.renderer().last_circle_count(), 0);
}

#[test]
fn dashboard_rejects_unknown_query_values() {
    let mut dashboard = Dashboard::new(engine(), StaticDataProvider::new());
    let err = dashboard.load_query(Some("5y")).expect_err("unknown range");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = dashboard.load_query(Some("1m")).expect_err("no canned data");
    assert!(matches!(err, ChartError::Fetch { status: 404, .. }));
    assert_eq!(dashboard.engine().time_range(), TimeRange::OneMonth);
}

struct CountingProvider {
    calls: Cell<usize>,
    response: StockResponse,
}

impl DataProvider for CountingProvider {
    fn fetch(&self, range: TimeRange) -> ChartResult<FetchedData> {
        self.calls.set(self.calls.get() + 1);
        self.response.clone().into_fetched(range)
    }
}

#[test]
fn each_load_fetches_once_with_the_selected_range() {
    let provider = CountingProvider {
        calls: Cell::new(0),
        response: StockResponse {
            ticker: "MSFT".to_owned(),
            data: vec![StockPoint {
                timestamp: "2024-03-01".to_owned(),
                price: 410.0,
                volume: 9.0,
            }],
            metrics: MetricsSummary::default(),
        },
    };
    let mut dashboard = Dashboard::new(engine(), &provider);

    dashboard.load(TimeRange::OneYear).expect("load");
    dashboard.load(TimeRange::OneMonth).expect("load");
    assert_eq!(provider.calls.get(), 2);

    let engine = dashboard.engine();
    assert_eq!(engine.time_range(), TimeRange::OneMonth);
    assert_eq!(engine.dataset().len(), 1);
    assert_eq!(engine.window().count(), 1);
    assert_eq!(engine.renderer().last_path_count(), 0);
    assert_eq!(engine.renderer().last_circle_count(), 1);
}
