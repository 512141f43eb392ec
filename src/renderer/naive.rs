use super::prelude::*;

use crate::surface::ImageSurface;

use std::path::PathBuf;

use tracing::info;

/// Headless renderer, encodes each presented frame to an image file and stops
/// after a fixed number of frames.
pub struct NaiveRenderer {
    pub frames: usize,
    pub output: PathBuf,
}

impl NaiveRenderer {
    pub fn new(frames: usize, output: PathBuf) -> Self {
        NaiveRenderer { frames, output }
    }
}

impl Renderer for NaiveRenderer {
    fn render(&self, world: Arc<Scene>, config: &Config) -> Result<(), RenderError> {
        let frame_renderer = construct_frame_renderer(world, config)?;
        let Resolution { width, height } = config.window.resolution;
        info!(
            "starting render with resolution {}x{}, {} frame(s) into {}",
            width,
            height,
            self.frames,
            self.output.display()
        );

        let mut surface = ImageSurface::create(width, height, &self.output, self.frames)?;
        let mut buffer = PixelBuffer::new(width, height);
        let frames = render_loop(
            &frame_renderer,
            &mut surface,
            &mut buffer,
            config.render_settings.threads,
        )?;
        info!("wrote {} frame(s) to {}", frames, self.output.display());
        Ok(())
    }
}
