mod prelude;

mod frame;
mod naive;
mod pixel_buffer;
#[cfg(feature = "preview")]
mod preview;
mod viewport;

pub use frame::FrameRenderer;
pub use naive::NaiveRenderer;
pub use pixel_buffer::{PixelBuffer, BYTES_PER_TEXEL, CLEAR_COLOR};
#[cfg(feature = "preview")]
pub use preview::PreviewRenderer;
pub use viewport::Viewport;

use crate::integrator::{Integrator, WhittedIntegrator};
use crate::parsing::config::Config;
use crate::surface::{KeyCode, Surface, SurfaceError, SurfaceEvent};
use crate::world::Scene;

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    #[error("pixel ({x}, {y}) lies outside the centered {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("texel ({column}, {row}) lies outside the {width}x{height} buffer")]
    OutOfBuffer {
        column: usize,
        row: usize,
        width: usize,
        height: usize,
    },
    #[error("pixel buffer is {actual:?} but the viewport covers {expected:?}")]
    BufferSize {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    #[error("invalid viewport: {0}")]
    InvalidViewport(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

pub trait Renderer {
    fn render(&self, world: Arc<Scene>, config: &Config) -> Result<(), RenderError>;
}

pub fn construct_frame_renderer(
    world: Arc<Scene>,
    config: &Config,
) -> Result<FrameRenderer<WhittedIntegrator>, FrameError> {
    let viewport = config.viewport()?;
    let camera_origin = world.camera_origin();
    let integrator = WhittedIntegrator::new(world, config.render_settings.max_depth);
    Ok(FrameRenderer::new(viewport, camera_origin, integrator))
}

/// Renders frames into `buffer` and hands each one to `surface` until the
/// surface asks to close. Close requests are only checked between frames, so
/// a frame that has started always finishes. Returns the number of frames presented.
pub fn render_loop<I: Integrator>(
    frame_renderer: &FrameRenderer<I>,
    surface: &mut dyn Surface,
    buffer: &mut PixelBuffer,
    threads: usize,
) -> Result<usize, RenderError> {
    let mut frames = 0usize;
    'frames: loop {
        while let Some(event) = surface.poll_event() {
            match event {
                SurfaceEvent::CloseRequested | SurfaceEvent::Key(KeyCode::Escape) => {
                    info!("stopping after {} frames ({:?})", frames, event);
                    break 'frames;
                }
                SurfaceEvent::Key(key) => debug!("ignoring key {:?}", key),
            }
        }

        let now = Instant::now();
        let profile = frame_renderer.render_frame(buffer)?;
        let elapsed = now.elapsed().as_secs_f32();

        surface.upload(buffer)?;
        surface.present()?;
        frames += 1;

        debug!("frame {} took {:.3}s", frames, elapsed);
        profile.pretty_print(elapsed, threads);
    }
    Ok(frames)
}
