use scale_chart::core::{Segment, Viewport, clock_point};
use scale_chart::render::NullRenderer;
use scale_chart::{ScaleChartConfig, ScaleChartEngine};
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: scale_chart_frame_dump [--config <path>] [--scroll <unit>] [--fit] [--output <path>]";

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    scroll: Option<f64>,
    fit: bool,
    output: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ScaleChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ScaleChartConfig::new(Viewport::new(1080, 400)),
    };

    let mut engine =
        ScaleChartEngine::new(NullRenderer::default(), config).map_err(|err| err.to_string())?;
    engine.set_segments(sample_day()?);

    if args.fit {
        engine.fit_to_bounds(20.0).map_err(|err| err.to_string())?;
    }
    if let Some(unit) = args.scroll {
        engine.scroll_to(unit).map_err(|err| err.to_string())?;
    }

    let frame = engine.build_render_frame().map_err(|err| err.to_string())?;
    frame.validate().map_err(|err| err.to_string())?;
    let json = serde_json::to_string_pretty(&frame)
        .map_err(|err| format!("failed to serialize frame: {err}"))?;

    match &args.output {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn sample_day() -> Result<Vec<Segment>, String> {
    let schedule: [(u32, u32, u32, u32, &str); 12] = [
        (0, 30, 0, 45, "event1"),
        (2, 1, 2, 2, "event2"),
        (2, 3, 2, 4, "event3"),
        (2, 5, 2, 6, "event4"),
        (2, 7, 2, 8, "event5"),
        (3, 30, 4, 45, "event6"),
        (6, 0, 7, 15, "event7"),
        (10, 0, 12, 15, "event8"),
        (13, 0, 13, 15, "event9"),
        (14, 30, 16, 15, "event10"),
        (18, 30, 19, 0, "event11"),
        (21, 30, 23, 0, "event12"),
    ];

    schedule
        .into_iter()
        .map(|(begin_hour, begin_minute, end_hour, end_minute, title)| {
            let start = clock_point(begin_hour, begin_minute, 0).map_err(|err| err.to_string())?;
            let end = clock_point(end_hour, end_minute, 0).map_err(|err| err.to_string())?;
            Ok(Segment::new(start, end, title))
        })
        .collect()
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs::default();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--scroll" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --scroll".to_owned())?;
                let unit = value
                    .parse::<f64>()
                    .map_err(|err| format!("invalid --scroll value `{value}`: {err}"))?;
                parsed.scroll = Some(unit);
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                parsed.output = Some(PathBuf::from(value));
            }
            "--fit" => parsed.fit = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    Ok(parsed)
}
