use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{codec, SceneDescription};
use glint_math::Color;
use glint_renderer::{render, RenderConfig, World};

/// Render a scene of spheres with recursive ray tracing
#[derive(Parser, Debug)]
#[command(name = "glint", version)]
struct Args {
    /// Scene file (JSON). Renders the built-in demo scene when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Environment map image sampled by rays that leave the scene
    #[arg(short, long)]
    env_map: Option<PathBuf>,

    /// Output image; the format follows the extension
    #[arg(short, long, default_value = "render.bmp")]
    output: PathBuf,

    /// Frame width in pixels
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    fov: f32,

    /// Maximum reflection/refraction depth
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Hits farther than this are treated as misses
    #[arg(long, default_value_t = 1000.0)]
    render_distance: f32,

    /// Background gray level used when no environment map is given
    #[arg(long, default_value_t = 1.0)]
    background: f32,

    /// Worker threads (defaults to one per core)
    #[arg(short, long)]
    threads: Option<usize>,
}

impl Args {
    fn render_config(&self) -> Result<RenderConfig> {
        anyhow::ensure!(
            self.width > 0 && self.height > 0,
            "frame size must be positive, got {}x{}",
            self.width,
            self.height
        );
        anyhow::ensure!(
            self.fov > 0.0 && self.fov < 180.0,
            "field of view must be in (0, 180) degrees, got {}",
            self.fov
        );
        anyhow::ensure!(
            self.render_distance > 0.0,
            "render distance must be positive, got {}",
            self.render_distance
        );

        Ok(RenderConfig {
            width: self.width,
            height: self.height,
            fov_degrees: self.fov,
            render_distance: self.render_distance,
            max_depth: self.depth,
            background: Color::splat(self.background),
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let config = args.render_config()?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let scene = match &args.scene {
        Some(path) => SceneDescription::load_json(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the demo scene");
            SceneDescription::demo()
        }
    };
    let world = World::from_description(&scene).context("Invalid scene")?;

    let environment = match &args.env_map {
        Some(path) => {
            let start = Instant::now();
            let env = codec::decode(path)
                .with_context(|| format!("Failed to load environment map {}", path.display()))?;
            log::info!(
                "Loaded environment map {}x{} in {:?}",
                env.width,
                env.height,
                start.elapsed()
            );
            Some(env)
        }
        None => None,
    };

    log::info!(
        "Rendering {}x{} ({} objects, {} lights, depth {}) on {} threads",
        config.width,
        config.height,
        world.objects.len(),
        world.lights.len(),
        config.max_depth,
        rayon::current_num_threads()
    );

    let start = Instant::now();
    let image = render(&world, environment.as_ref(), &config);
    log::info!("Rendered in {:?}", start.elapsed());

    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
