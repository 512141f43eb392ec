use super::pixel_buffer::{PixelBuffer, BYTES_PER_TEXEL};
use super::viewport::Viewport;
use super::FrameError;

use crate::integrator::Integrator;
use crate::math::*;
use crate::profile::Profile;

use rayon::prelude::*;

pub struct FrameRenderer<I: Integrator> {
    pub viewport: Viewport,
    pub camera_origin: Point3,
    pub integrator: I,
}

impl<I: Integrator> FrameRenderer<I> {
    pub fn new(viewport: Viewport, camera_origin: Point3, integrator: I) -> Self {
        FrameRenderer {
            viewport,
            camera_origin,
            integrator,
        }
    }

    pub fn camera_ray(&self, x: i32, y: i32) -> Ray {
        Ray::new(self.camera_origin, self.viewport.canvas_to_viewport(x, y))
    }

    pub fn render_pixel(&self, x: i32, y: i32, profile: &mut Profile) -> Rgb {
        self.integrator.color(self.camera_ray(x, y), profile)
    }

    /// Traces every pixel of `buffer` in parallel, one rayon task per row.
    ///
    /// Rows are disjoint slices of the buffer so no texel is shared between
    /// tasks, and every texel has been written once this returns.
    pub fn render_frame(&self, buffer: &mut PixelBuffer) -> Result<Profile, FrameError> {
        self.viewport.check_buffer(buffer)?;
        let row_bytes = self.viewport.width * BYTES_PER_TEXEL;
        buffer
            .as_bytes_mut()
            .par_chunks_exact_mut(row_bytes)
            .enumerate()
            .map(|(row, texels)| -> Result<Profile, FrameError> {
                let mut profile = Profile::default();
                for (column, texel) in texels.chunks_exact_mut(BYTES_PER_TEXEL).enumerate() {
                    let (x, y) = self.viewport.to_canvas(column, row)?;
                    let color = self.render_pixel(x, y, &mut profile);
                    texel.copy_from_slice(&color.to_rgba());
                }
                Ok(profile)
            })
            .try_reduce(Profile::default, |a, b| Ok(a.combine(b)))
    }
}
