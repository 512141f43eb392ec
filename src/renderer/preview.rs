use super::prelude::*;

use crate::surface::{Surface, WindowSurface};

use tracing::info;

/// Re-renders the scene into a window until it is closed or escape is pressed.
#[derive(Default)]
pub struct PreviewRenderer {}

impl PreviewRenderer {
    pub fn new() -> Self {
        PreviewRenderer {}
    }
}

impl Renderer for PreviewRenderer {
    fn render(&self, world: Arc<Scene>, config: &Config) -> Result<(), RenderError> {
        let frame_renderer = construct_frame_renderer(world, config)?;
        let Resolution { width, height } = config.window.resolution;
        info!("opening {}x{} preview window", width, height);

        let mut surface = WindowSurface::create(width, height, &config.window.title)?;
        let mut buffer = PixelBuffer::new(width, height);
        // show the clear color while the first frame is traced
        surface.upload(&buffer)?;
        surface.present()?;

        let frames = render_loop(
            &frame_renderer,
            &mut surface,
            &mut buffer,
            config.render_settings.threads,
        )?;
        info!("preview closed after {} frames", frames);
        Ok(())
    }
}
