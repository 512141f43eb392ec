extern crate sphere_tracer as root;

use root::parsing::config::*;
use root::parsing::{construct_world, get_settings};
use root::prelude::*;
use root::renderer::NaiveRenderer;
#[cfg(feature = "preview")]
use root::renderer::PreviewRenderer;

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::Context;
use structopt::StructOpt;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_FILE: &str = "data/config.toml";

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    /// overrides the scene named in the config file
    #[structopt(long)]
    pub scene: Option<String>,
    /// number of frames to write when rendering headless
    #[structopt(long)]
    pub frames: Option<usize>,
    #[structopt(long)]
    pub output: Option<String>,
    /// open a window instead of writing images
    #[structopt(long)]
    pub preview: bool,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    /// used unless RUST_LOG is set
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(opts: &Opt) -> anyhow::Result<Config> {
    let path = Path::new(&opts.config_file);
    let toml_config = if !path.exists() && opts.config_file == DEFAULT_CONFIG_FILE {
        warn!("{} not found, using built-in defaults", DEFAULT_CONFIG_FILE);
        TOMLConfig::default()
    } else {
        get_settings(path)?
    };
    let mut config = Config::from(toml_config);

    if let Some(scene) = &opts.scene {
        config.scene.clone_from(scene);
    }
    if opts.preview {
        config.renderer = RendererType::Preview;
    }
    if let RendererType::Naive { frames, output } = &mut config.renderer {
        if opts.frames.is_some() {
            *frames = opts.frames;
        }
        if opts.output.is_some() {
            output.clone_from(&opts.output);
        }
    }
    Ok(config)
}

fn construct_renderer(config: &Config) -> anyhow::Result<Box<dyn Renderer>> {
    match &config.renderer {
        RendererType::Naive { frames, output } => Ok(Box::new(NaiveRenderer::new(
            frames.unwrap_or(1),
            PathBuf::from(output.as_deref().unwrap_or(DEFAULT_OUTPUT)),
        ))),
        #[cfg(feature = "preview")]
        RendererType::Preview => Ok(Box::new(PreviewRenderer::new())),
        #[cfg(not(feature = "preview"))]
        RendererType::Preview => {
            anyhow::bail!("preview renderer requested but built without the `preview` feature")
        }
    }
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let config = load_config(&opts)?;

    let threads = config.render_settings.threads;
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("couldn't build the render thread pool")?;
    info!("rendering with {} threads", threads);

    let world = construct_world(&config).context("fatal error constructing scene")?;
    config.viewport().context("invalid camera settings")?;
    let renderer = construct_renderer(&config)?;

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }
    renderer
        .render(Arc::new(world), &config)
        .context("render failed")?;
    Ok(())
}

fn main() {
    let opts = Opt::from_args();
    init_logging(&opts.log_level);

    if let Err(e) = run(opts) {
        error!("{:#}", e);
        process::exit(1);
    }
}
