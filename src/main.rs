use std::env;
use std::path::Path;
use std::process;
use std::time::Instant;

use log::{error, info};

use gridvis::config::Config;
use gridvis::engine::compute_visibility;
use gridvis::error::VisError;
use gridvis::loader::grid_from_image;
use gridvis::persist::save_map;

/// Positional arguments, recognized by shape so the benchmark launcher can
/// pass them in any order:
///   WIDTHxHEIGHT   (e.g. "1920x1080")
///   input.png      (image path)
///   output.json    (output path)
///   [WORKERS]      (optional worker thread count)
struct CliArgs {
    width: u32,
    height: u32,
    image_path: Option<String>,
    json_path: Option<String>,
    workers: Option<usize>,
}

fn parse_args(args: &[String], config: &Config) -> CliArgs {
    let mut cli = CliArgs {
        width: config.grid.width,
        height: config.grid.height,
        image_path: None,
        json_path: None,
        workers: None,
    };

    for arg in args.iter().skip(1) {
        if let Some((w, h)) = arg.split_once('x') {
            if let (Ok(w), Ok(h)) = (w.parse(), h.parse()) {
                cli.width = w;
                cli.height = h;
                continue;
            }
        }
        if arg.ends_with(".png") {
            cli.image_path = Some(arg.clone());
        } else if arg.ends_with(".json") {
            cli.json_path = Some(arg.clone());
        } else if let Ok(n) = arg.parse::<usize>() {
            cli.workers = Some(n);
        }
    }
    cli
}

fn init_logging(level: &str) {
    let level = match level.to_ascii_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    // stdout stays clean for the launcher's timing line
    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply();
}

fn run(cli: &CliArgs, config: &Config) -> Result<(), VisError> {
    let image_path = cli.image_path.as_deref().ok_or_else(|| {
        VisError::Config(
            "usage: gridvis <WIDTHxHEIGHT> <input.png> <output.json> [workers]".to_string(),
        )
    })?;
    if !Path::new(image_path).exists() {
        return Err(VisError::Config(format!(
            "image file '{}' not found",
            image_path
        )));
    }

    let json_path = cli.json_path.clone().unwrap_or_else(|| config.output.path.clone());
    let workers = cli
        .workers
        .or((config.engine.workers > 0).then_some(config.engine.workers))
        .unwrap_or_else(num_cpus::get);

    let grid = grid_from_image(image_path, cli.width, cli.height, config.loader.threshold)?;
    let map = compute_visibility(&grid, workers)?;
    save_map(&map, &json_path)?;
    info!("saved visibility map to '{}'", json_path);
    Ok(())
}

fn main() {
    let start = Instant::now();
    let config = Config::load();
    init_logging(&config.logging.level);

    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args, &config);

    if let Err(e) = run(&cli, &config) {
        error!("{}", e);
        process::exit(1);
    }

    println!("Total runtime: {:.4} s", start.elapsed().as_secs_f64());
}
