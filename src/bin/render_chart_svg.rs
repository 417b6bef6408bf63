use std::fs;
use std::path::PathBuf;

use ticker_chart::api::{ChartEngine, ChartEngineConfig, Dashboard};
use ticker_chart::core::{TimeRange, Viewport};
use ticker_chart::provider::StaticDataProvider;
use ticker_chart::render::SvgRenderer;
use ticker_chart::telemetry;

const USAGE: &str = "usage: render_chart_svg --input <response.json> --output <chart.svg> [--range <1d|1w|1m|1y>] [--drag <px>] [--width <px>] [--height <px>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    range: TimeRange,
    drag_px: Option<f64>,
    width: u32,
    height: u32,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let body = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;

    let provider = StaticDataProvider::new().with_exchange(args.range, 200, body);
    let config = ChartEngineConfig::new(Viewport::new(args.width, args.height));
    let engine = ChartEngine::new(SvgRenderer::new(), config).map_err(|err| err.to_string())?;
    let mut dashboard = Dashboard::new(engine, provider);
    dashboard.load(args.range).map_err(|err| err.to_string())?;

    if let Some(drag_px) = args.drag_px {
        let engine = dashboard.engine_mut();
        let origin = engine.plot_area().left + engine.plot_area().width / 2.0;
        engine.drag_start(origin).map_err(|err| err.to_string())?;
        engine
            .drag_move(origin + drag_px)
            .map_err(|err| err.to_string())?;
        engine.drag_end().map_err(|err| err.to_string())?;
    }

    let (engine, _) = dashboard.into_parts();
    let document = engine.into_renderer().into_document();
    fs::write(&args.output, document)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut range = TimeRange::default();
    let mut drag_px = None::<f64>;
    let mut width = 1200;
    let mut height = 500;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value("--input")?)),
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--range" => {
                range = value("--range")?
                    .parse::<TimeRange>()
                    .map_err(|err| err.to_string())?;
            }
            "--drag" => {
                let raw = value("--drag")?;
                drag_px = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid --drag value `{raw}`"))?,
                );
            }
            "--width" => {
                let raw = value("--width")?;
                width = raw
                    .parse()
                    .map_err(|_| format!("invalid --width value `{raw}`"))?;
            }
            "--height" => {
                let raw = value("--height")?;
                height = raw
                    .parse()
                    .map_err(|_| format!("invalid --height value `{raw}`"))?;
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| format!("missing --input\n{USAGE}"))?,
        output: output.ok_or_else(|| format!("missing --output\n{USAGE}"))?,
        range,
        drag_px,
        width,
        height,
    })
}
