//! The presentation side of rendering: whatever finally shows a finished
//! [`PixelBuffer`]. Renderers only upload, present and poll for events; the
//! window or file behind it stays an implementation detail.

mod headless;
#[cfg(feature = "preview")]
mod window;

pub use headless::ImageSurface;
#[cfg(feature = "preview")]
pub use window::WindowSurface;

use crate::renderer::PixelBuffer;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Other(u32),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    CloseRequested,
    Key(KeyCode),
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("could not allocate a {width}x{height} surface: {reason}")]
    Allocation {
        width: usize,
        height: usize,
        reason: String,
    },
    #[error("uploaded buffer is {actual:?} but the surface is {expected:?}")]
    SizeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    #[error("failed to write {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to present frame: {0}")]
    Present(String),
}

pub trait Surface {
    /// Replaces the image that the next [`Surface::present`] shows.
    fn upload(&mut self, pixels: &PixelBuffer) -> Result<(), SurfaceError>;
    /// Next pending event, `None` once the queue is drained.
    fn poll_event(&mut self) -> Option<SurfaceEvent>;
    fn present(&mut self) -> Result<(), SurfaceError>;
}

fn check_size(expected: (usize, usize), pixels: &PixelBuffer) -> Result<(), SurfaceError> {
    let actual = (pixels.width, pixels.height);
    if expected != actual {
        return Err(SurfaceError::SizeMismatch { expected, actual });
    }
    Ok(())
}
