use super::FrameError;
use crate::math::Vec3;

use std::ops::Range;

/// Maps the integer canvas onto the camera space image plane.
///
/// Canvas coordinates are centered: `x` grows to the right starting at
/// `-width / 2`, `y` grows upward starting at `-height / 2`. The pixel buffer
/// on the other hand is addressed by `(column, row)` with row 0 at the top.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub plane_distance: f32,
}

impl Viewport {
    pub fn new(
        width: usize,
        height: usize,
        viewport_width: f32,
        viewport_height: f32,
        plane_distance: f32,
    ) -> Result<Self, FrameError> {
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(FrameError::InvalidViewport(format!(
                "canvas must be non-empty, got {}x{}",
                width, height
            )));
        }
        if !(viewport_width > 0.0 && viewport_height > 0.0 && plane_distance > 0.0) {
            return Err(FrameError::InvalidViewport(format!(
                "viewport {}x{} at distance {} must be positive",
                viewport_width, viewport_height, plane_distance
            )));
        }
        Ok(Viewport {
            width,
            height,
            viewport_width,
            viewport_height,
            plane_distance,
        })
    }

    pub fn x_range(&self) -> Range<i32> {
        -((self.width / 2) as i32)..((self.width + 1) / 2) as i32
    }

    pub fn y_range(&self) -> Range<i32> {
        -((self.height / 2) as i32)..((self.height + 1) / 2) as i32
    }

    /// Centered coordinate of grid pixel `(px, py)`. Note that `py` counts
    /// upward from the bottom of the image, like `y`.
    pub fn pixel_to_canvas(&self, px: usize, py: usize) -> (i32, i32) {
        (
            px as i32 - (self.width / 2) as i32,
            py as i32 - (self.height / 2) as i32,
        )
    }

    /// Camera space direction through the canvas point, not normalized.
    pub fn canvas_to_viewport(&self, x: i32, y: i32) -> Vec3 {
        Vec3::new(
            x as f32 * self.viewport_width / self.width as f32,
            y as f32 * self.viewport_height / self.height as f32,
            self.plane_distance,
        )
    }

    /// `(column, row)` in the top-row-first pixel buffer.
    pub fn to_buffer_position(&self, x: i32, y: i32) -> Result<(usize, usize), FrameError> {
        if !self.x_range().contains(&x) || !self.y_range().contains(&y) {
            return Err(FrameError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let column = (self.width / 2) as i32 + x;
        let row = ((self.height + 1) / 2) as i32 - (y + 1);
        Ok((column as usize, row as usize))
    }

    /// Inverse of [`Viewport::to_buffer_position`].
    pub fn to_canvas(&self, column: usize, row: usize) -> Result<(i32, i32), FrameError> {
        if column >= self.width || row >= self.height {
            return Err(FrameError::OutOfBuffer {
                column,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok((
            column as i32 - (self.width / 2) as i32,
            ((self.height + 1) / 2) as i32 - 1 - row as i32,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn viewport(width: usize, height: usize) -> Viewport {
        Viewport::new(width, height, 1.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_rejects_degenerate_viewports() {
        assert!(Viewport::new(0, 10, 1.0, 1.0, 1.0).is_err());
        assert!(Viewport::new(10, 10, 0.0, 1.0, 1.0).is_err());
        assert!(Viewport::new(10, 10, 1.0, 1.0, f32::NAN).is_err());
    }

    #[test]
    fn test_ranges() {
        let even = viewport(500, 4);
        assert_eq!(even.x_range(), -250..250);
        assert_eq!(even.y_range(), -2..2);
        let odd = viewport(5, 7);
        assert_eq!(odd.x_range(), -2..3);
        assert_eq!(odd.y_range(), -3..4);
    }

    #[test]
    fn test_round_trip_every_coordinate() {
        for (width, height) in [(500, 500), (5, 7), (8, 3), (1, 1), (2, 9)] {
            let vp = viewport(width, height);
            let mut seen = vec![false; width * height];
            for x in vp.x_range() {
                for y in vp.y_range() {
                    let (column, row) = vp.to_buffer_position(x, y).unwrap();
                    assert!(column < width && row < height);
                    assert_eq!(vp.to_canvas(column, row).unwrap(), (x, y));
                    assert!(!seen[row * width + column], "({}, {}) written twice", x, y);
                    seen[row * width + column] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_vertical_axis_is_flipped() {
        let vp = viewport(500, 500);
        assert_eq!(vp.to_buffer_position(-250, 249).unwrap(), (0, 0));
        assert_eq!(vp.to_buffer_position(249, -250).unwrap(), (499, 499));
        assert_eq!(vp.to_buffer_position(0, 0).unwrap(), (250, 249));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let vp = viewport(500, 500);
        for (x, y) in [(250, 0), (-251, 0), (0, 250), (0, -251)] {
            assert_eq!(
                vp.to_buffer_position(x, y),
                Err(FrameError::OutOfBounds {
                    x,
                    y,
                    width: 500,
                    height: 500
                })
            );
        }
    }

    #[test]
    fn test_texel_outside_buffer_is_rejected() {
        let vp = viewport(5, 7);
        assert_eq!(vp.to_canvas(4, 6), Ok((2, -3)));
        for (column, row) in [(5, 0), (0, 7), (usize::MAX, 3)] {
            assert_eq!(
                vp.to_canvas(column, row),
                Err(FrameError::OutOfBuffer {
                    column,
                    row,
                    width: 5,
                    height: 7
                })
            );
        }
    }

    #[test]
    fn test_pixel_grid_to_canvas() {
        let vp = viewport(500, 500);
        assert_eq!(vp.pixel_to_canvas(0, 0), (-250, -250));
        assert_eq!(vp.pixel_to_canvas(250, 250), (0, 0));
        assert_eq!(vp.pixel_to_canvas(499, 499), (249, 249));
    }

    #[test]
    fn test_canvas_to_viewport() {
        let vp = Viewport::new(500, 250, 2.0, 1.0, 1.5).unwrap();
        assert_eq!(vp.canvas_to_viewport(0, 0), Vec3::new(0.0, 0.0, 1.5));
        assert_eq!(vp.canvas_to_viewport(-250, 125), Vec3::new(-1.0, 0.5, 1.5));
    }
}
