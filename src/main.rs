use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gradient_mandelbrot::controllers::cli::animate::CliAnimateController;
use gradient_mandelbrot::controllers::cli::args::{parse_viewport, parse_zoom_step, RenderOverrides};
use gradient_mandelbrot::controllers::cli::render::CliRenderController;
use gradient_mandelbrot::controllers::cli::zoom::{record_zoom_session, ZoomStep};
use gradient_mandelbrot::core::data::frame::Frame;
use gradient_mandelbrot::storage::keyframe_file::{load_keyframes, save_keyframes};
use gradient_mandelbrot::{KeyframeSequence, PlaybackEngine, RenderConfig, Viewport};
use log::*;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "gradient_mandelbrot", about = "Gradient-coloured Mandelbrot renders and zoom videos")]
struct Cli {
    /// JSON render config; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: RenderOverrides,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render one viewport to an image file
    Render {
        /// Viewport as x_min,x_max,y_min,y_max; defaults to the configured one
        #[arg(long, value_parser = parse_viewport, allow_hyphen_values = true)]
        viewport: Option<Viewport>,
        #[arg(short, long, default_value = "mandelbrot.png")]
        output: PathBuf,
    },
    /// Record a keyframe path from a series of navigation steps
    Zoom {
        /// Steps applied in order: x0,y0,x1,y1 pixel selections, `back`,
        /// `reset` or `view=x_min,x_max,y_min,y_max`
        #[arg(required = true, value_parser = parse_zoom_step)]
        steps: Vec<ZoomStep>,
        #[arg(short, long, default_value = "keyframes.json")]
        output: PathBuf,
    },
    /// Render an interpolated zoom video from a keyframe file
    Animate {
        keyframes: PathBuf,
        /// Directory the numbered frames are written to
        #[arg(short, long, default_value = "frames")]
        output: PathBuf,
        #[arg(long)]
        steps_per_span: Option<u32>,
        /// Play the frames back after rendering
        #[arg(long)]
        play: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    cli.overrides.apply(&mut config);
    debug!("Using config {:?}", config);

    match cli.command {
        Cmd::Render { viewport, output } => render(&config, viewport, output),
        Cmd::Zoom { steps, output } => zoom(&config, &steps, output),
        Cmd::Animate {
            keyframes,
            output,
            steps_per_span,
            play,
        } => animate(&config, keyframes, output, steps_per_span, play),
    }
}

fn render(config: &RenderConfig, viewport: Option<Viewport>, output: PathBuf) -> Result<()> {
    let grid = config.grid().context("Invalid canvas size")?;
    let palette = config.palette().context("Failed to build gradient palette")?;

    let mut controller = CliRenderController::new(config.format.presenter(), config.strategy)?;
    controller.generate(viewport.unwrap_or(config.viewport), grid, Arc::new(palette))?;
    controller
        .write(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(())
}

fn zoom(config: &RenderConfig, steps: &[ZoomStep], output: PathBuf) -> Result<()> {
    let grid = config.grid().context("Invalid canvas size")?;
    let session = record_zoom_session(config.viewport, grid, steps)
        .context("Selection does not cover any area")?;

    let keyframes = KeyframeSequence::from(session.keyframe_path());
    save_keyframes(&keyframes, &output)?;

    Ok(())
}

fn animate(
    config: &RenderConfig,
    keyframes: PathBuf,
    output: PathBuf,
    steps_per_span: Option<u32>,
    play: bool,
) -> Result<()> {
    let grid = config.grid().context("Invalid canvas size")?;
    let palette = config.palette().context("Failed to build gradient palette")?;
    let keyframes = load_keyframes(&keyframes)?;

    let mut controller = CliAnimateController::new(
        config.strategy,
        steps_per_span.unwrap_or(config.steps_per_span),
    )?;
    controller.generate(&keyframes, grid, Arc::new(palette))?;
    controller.write(&output, config.format)?;

    if play {
        let engine = PlaybackEngine::new(config.playback_interval());
        controller.play(&engine, &mut |index: usize, frame: &Frame| {
            info!("Frame {}: {}", index, frame.viewport);
        });
    }

    Ok(())
}
