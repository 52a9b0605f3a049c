use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{debug, info, warn};

use mandelbrot_dive::core::data::viewport::{
    DEFAULT_CENTER_X, DEFAULT_CENTER_Y, DEFAULT_MAX_ITERATIONS, DEFAULT_ZOOM,
};
use mandelbrot_dive::{
    CanvasDimensions, ColourScheme, ExplorerSession, FrameRenderer, FrameSink, NavigationLimits,
    NavigationObserver, PixelBuffer, RenderEvent, RenderOptions, SystemClock, Viewport,
    ViewportChange, ViewportError, find_landmark,
};

const SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("unknown landmark `{0}`")]
    UnknownLandmark(String),
    #[error("invalid view: {0}")]
    Viewport(#[from] ViewportError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "mandelbrot_dive",
    version,
    about = "Renders a Mandelbrot view headlessly and optionally dives into it"
)]
struct Cli {
    #[arg(long, env = "MANDELBROT_WIDTH", default_value_t = 800)]
    width: u32,

    #[arg(long, env = "MANDELBROT_HEIGHT", default_value_t = 600)]
    height: u32,

    #[arg(long, allow_hyphen_values = true, default_value_t = DEFAULT_CENTER_X)]
    center_x: f64,

    #[arg(long, allow_hyphen_values = true, default_value_t = DEFAULT_CENTER_Y)]
    center_y: f64,

    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    zoom: f64,

    #[arg(long, env = "MANDELBROT_MAX_ITERATIONS", default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,

    #[arg(long, env = "MANDELBROT_SCHEME", default_value = "classic", value_parser = parse_scheme)]
    scheme: ColourScheme,

    /// Start at a named landmark instead of --center-x/--center-y/--zoom.
    #[arg(long)]
    landmark: Option<String>,

    /// Dive ticks to run through the background renderer after the first frame.
    #[arg(long, default_value_t = 0)]
    dive_ticks: u32,

    #[arg(long)]
    sequential: bool,

    /// Print the final viewport as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn parse_scheme(name: &str) -> Result<ColourScheme, String> {
    ColourScheme::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = ColourScheme::ALL.iter().map(|s| s.display_name()).collect();
        format!("unknown scheme `{}` (expected one of {})", name, known.join(", "))
    })
}

#[derive(Default)]
struct CountingSink {
    frames: AtomicU64,
}

impl FrameSink for CountingSink {
    fn submit(&self, event: RenderEvent) {
        let RenderEvent::Frame(frame) = event;
        self.frames.fetch_add(1, Ordering::Relaxed);
        debug!(
            "frame {} at zoom {:e} in {:?}",
            frame.generation,
            frame.viewport.zoom(),
            frame.render_duration
        );
    }
}

struct ProgressLogger;

impl NavigationObserver for ProgressLogger {
    fn viewport_changed(&self, change: &ViewportChange) {
        debug!(
            "zoom {:e} (best {:e})",
            change.progress.zoom, change.progress.max_zoom
        );
    }
}

fn initial_viewport(cli: &Cli) -> Result<Viewport, CliError> {
    let (center_x, center_y, zoom) = match &cli.landmark {
        Some(name) => {
            let landmark =
                find_landmark(name).ok_or_else(|| CliError::UnknownLandmark(name.clone()))?;
            (landmark.center.real, landmark.center.imag, landmark.zoom)
        }
        None => (cli.center_x, cli.center_y, cli.zoom),
    };

    Ok(Viewport::new(
        center_x,
        center_y,
        zoom,
        cli.max_iterations,
        cli.scheme,
    )?)
}

fn inside_fraction(buffer: &PixelBuffer) -> f64 {
    let pixels = buffer.buffer().chunks_exact(4);
    let total = pixels.len();
    if total == 0 {
        return 0.0;
    }

    let inside = pixels.filter(|pixel| pixel[..3] == [0, 0, 0]).count();
    inside as f64 / total as f64
}

fn sweep_label(options: RenderOptions) -> &'static str {
    if options.parallel { "rayon" } else { "sequential" }
}

fn dive(
    viewport: Viewport,
    canvas: CanvasDimensions,
    renderer: FrameRenderer,
    ticks: u32,
) -> Viewport {
    let sink = Arc::new(CountingSink::default());
    let mut session = ExplorerSession::with_viewport(
        viewport,
        canvas,
        NavigationLimits::default(),
        renderer,
        Arc::clone(&sink) as Arc<dyn FrameSink>,
    );
    session.add_observer(Arc::new(ProgressLogger));
    let interval = session.limits().dive_tick_interval;

    session.toggle_dive();
    for _ in 0..ticks {
        session.advance(interval);
    }
    session.toggle_dive();

    let start = Instant::now();
    while session.is_rendering() {
        if start.elapsed() >= SETTLE_TIMEOUT {
            warn!("gave up waiting for the last dive frame");
            break;
        }
        session.advance(Duration::ZERO);
        thread::sleep(Duration::from_millis(5));
    }

    let progress = session.progress();
    info!(
        "dive of {} ticks reached zoom {:e} (best {:e}), {} frames delivered",
        ticks,
        progress.zoom,
        progress.max_zoom,
        sink.frames.load(Ordering::Relaxed)
    );

    session.viewport()
}

fn run(cli: &Cli) -> Result<Viewport, CliError> {
    let viewport = initial_viewport(cli)?;
    let canvas = CanvasDimensions::new(cli.width, cli.height);
    let renderer = FrameRenderer::new(
        Arc::new(SystemClock),
        RenderOptions {
            parallel: !cli.sequential,
        },
    );

    let start = Instant::now();
    let buffer = renderer.render(&viewport, canvas);
    info!(
        "rendered {}x{} {} view at ({}, {}) zoom {:e} in {:?} ({}), {:.1}% inside the set",
        canvas.width,
        canvas.height,
        viewport.colour_scheme(),
        viewport.center_x(),
        viewport.center_y(),
        viewport.zoom(),
        start.elapsed(),
        sweep_label(renderer.options()),
        inside_fraction(&buffer) * 100.0
    );

    let viewport = if cli.dive_ticks > 0 {
        dive(viewport, canvas, renderer, cli.dive_ticks)
    } else {
        viewport
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&viewport)?);
    }

    Ok(viewport)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run(&cli)?;

    Ok(())
}
