use super::viewport::Viewport;
use super::FrameError;
use crate::math::Rgb;

/// Shown until the first frame completes.
pub const CLEAR_COLOR: Rgb = Rgb::new(100, 100, 100);

pub const BYTES_PER_TEXEL: usize = 4;

/// Row major RGBA8 texels, top row first, alpha always opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: usize,
    pub height: usize,
    texels: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer::filled(width, height, CLEAR_COLOR)
    }

    pub fn filled(width: usize, height: usize, color: Rgb) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            texels: color.to_rgba().repeat(width * height),
        }
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.texels
    }

    pub(super) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.texels
    }

    pub fn at(&self, column: usize, row: usize) -> [u8; 4] {
        let start = (row * self.width + column) * BYTES_PER_TEXEL;
        let mut texel = [0u8; 4];
        texel.copy_from_slice(&self.texels[start..start + BYTES_PER_TEXEL]);
        texel
    }

    pub fn write_at(&mut self, column: usize, row: usize, color: Rgb) {
        let start = (row * self.width + column) * BYTES_PER_TEXEL;
        self.texels[start..start + BYTES_PER_TEXEL].copy_from_slice(&color.to_rgba());
    }

    /// Writes the texel for a centered canvas coordinate, rejecting anything
    /// that does not map into this buffer.
    pub fn put_pixel(
        &mut self,
        viewport: &Viewport,
        x: i32,
        y: i32,
        color: Rgb,
    ) -> Result<(), FrameError> {
        viewport.check_buffer(self)?;
        let (column, row) = viewport.to_buffer_position(x, y)?;
        self.write_at(column, row, color);
        Ok(())
    }
}

impl Viewport {
    pub fn check_buffer(&self, buffer: &PixelBuffer) -> Result<(), FrameError> {
        if (buffer.width, buffer.height) != (self.width, self.height) {
            return Err(FrameError::BufferSize {
                expected: (self.width, self.height),
                actual: (buffer.width, buffer.height),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_buffer_is_clear_and_opaque() {
        let buffer = PixelBuffer::new(3, 2);
        assert_eq!(buffer.as_bytes().len(), 3 * 2 * 4);
        for chunk in buffer.as_bytes().chunks_exact(4) {
            assert_eq!(chunk, &[100, 100, 100, 255]);
        }
    }

    #[test]
    fn test_put_pixel_maps_centered_coordinates() {
        let viewport = Viewport::new(4, 4, 1.0, 1.0, 1.0).unwrap();
        let mut buffer = PixelBuffer::filled(4, 4, Rgb::BLACK);
        buffer
            .put_pixel(&viewport, -2, 1, Rgb::new(1, 2, 3))
            .unwrap();
        buffer
            .put_pixel(&viewport, 1, -2, Rgb::new(4, 5, 6))
            .unwrap();
        assert_eq!(buffer.at(0, 0), [1, 2, 3, 255]);
        assert_eq!(buffer.at(3, 3), [4, 5, 6, 255]);
    }

    #[test]
    fn test_put_pixel_out_of_bounds_leaves_buffer_untouched() {
        let viewport = Viewport::new(4, 4, 1.0, 1.0, 1.0).unwrap();
        let mut buffer = PixelBuffer::filled(4, 4, Rgb::BLACK);
        let before = buffer.clone();
        assert!(matches!(
            buffer.put_pixel(&viewport, 2, 0, Rgb::new(255, 255, 255)),
            Err(FrameError::OutOfBounds { .. })
        ));
        assert!(buffer.put_pixel(&viewport, 0, -3, Rgb::new(255, 255, 255)).is_err());
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_put_pixel_rejects_mismatched_buffer() {
        let viewport = Viewport::new(4, 4, 1.0, 1.0, 1.0).unwrap();
        let mut buffer = PixelBuffer::new(2, 2);
        assert_eq!(
            buffer.put_pixel(&viewport, 0, 0, Rgb::BLACK),
            Err(FrameError::BufferSize {
                expected: (4, 4),
                actual: (2, 2)
            })
        );
    }
}
