use super::{check_size, Surface, SurfaceError, SurfaceEvent};
use crate::renderer::PixelBuffer;

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{info, warn};

/// Writes every presented frame to the same image file, format picked from the
/// extension, and requests close once `frame_limit` frames were presented.
pub struct ImageSurface {
    width: usize,
    height: usize,
    path: PathBuf,
    frame_limit: usize,
    presented: usize,
    image: RgbaImage,
}

impl ImageSurface {
    pub fn create(
        width: usize,
        height: usize,
        path: impl AsRef<Path>,
        frame_limit: usize,
    ) -> Result<Self, SurfaceError> {
        let allocation_error = |reason: &str| SurfaceError::Allocation {
            width,
            height,
            reason: reason.to_owned(),
        };
        if width == 0 || height == 0 {
            return Err(allocation_error("dimensions must be non-zero"));
        }
        let image_width =
            u32::try_from(width).map_err(|_| allocation_error("width does not fit in u32"))?;
        let image_height =
            u32::try_from(height).map_err(|_| allocation_error("height does not fit in u32"))?;

        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        if frame_limit == 0 {
            warn!("frame limit is 0, nothing will be written to {}", path.display());
        }

        Ok(ImageSurface {
            width,
            height,
            path,
            frame_limit,
            presented: 0,
            image: RgbaImage::new(image_width, image_height),
        })
    }

    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl Surface for ImageSurface {
    fn upload(&mut self, pixels: &PixelBuffer) -> Result<(), SurfaceError> {
        check_size((self.width, self.height), pixels)?;
        self.image.copy_from_slice(pixels.as_bytes());
        Ok(())
    }

    fn poll_event(&mut self) -> Option<SurfaceEvent> {
        (self.presented >= self.frame_limit).then_some(SurfaceEvent::CloseRequested)
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.image
            .save(&self.path)
            .map_err(|source| SurfaceError::Encode {
                path: self.path.clone(),
                source,
            })?;
        self.presented += 1;
        info!("frame {} written to {}", self.presented, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Rgb;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("sphere_tracer_surface_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_zero_sized_surface_fails() {
        assert!(matches!(
            ImageSurface::create(0, 10, scratch_path("zero.png"), 1),
            Err(SurfaceError::Allocation { .. })
        ));
    }

    #[test]
    fn test_close_after_frame_limit() {
        let path = scratch_path("limit.png");
        let mut surface = ImageSurface::create(2, 2, &path, 2).unwrap();
        let buffer = PixelBuffer::filled(2, 2, Rgb::new(9, 8, 7));
        for _ in 0..2 {
            assert_eq!(surface.poll_event(), None);
            surface.upload(&buffer).unwrap();
            surface.present().unwrap();
        }
        assert_eq!(surface.poll_event(), Some(SurfaceEvent::CloseRequested));
        assert_eq!(surface.presented(), 2);

        let written = image::open(&path).unwrap().to_rgba8();
        assert_eq!(written.as_raw().as_slice(), buffer.as_bytes());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_upload_rejects_wrong_size() {
        let mut surface = ImageSurface::create(4, 4, scratch_path("size.png"), 1).unwrap();
        assert!(matches!(
            surface.upload(&PixelBuffer::new(4, 3)),
            Err(SurfaceError::SizeMismatch {
                expected: (4, 4),
                actual: (4, 3)
            })
        ));
    }
}
