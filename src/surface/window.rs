use super::{check_size, KeyCode, Surface, SurfaceError, SurfaceEvent};
use crate::renderer::PixelBuffer;
use crate::rgb_to_u32;

use std::collections::VecDeque;

use minifb::{Key, KeyRepeat, Scale, Window, WindowOptions};

pub struct WindowSurface {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
    pending: VecDeque<SurfaceEvent>,
}

impl WindowSurface {
    pub fn create(width: usize, height: usize, title: &str) -> Result<Self, SurfaceError> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                scale: Scale::X1,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| SurfaceError::Allocation {
            width,
            height,
            reason: e.to_string(),
        })?;
        // Limit to max ~60 fps update rate
        window.set_target_fps(60);
        Ok(WindowSurface {
            window,
            buffer: vec![0u32; width * height],
            width,
            height,
            pending: VecDeque::new(),
        })
    }
}

impl Surface for WindowSurface {
    fn upload(&mut self, pixels: &PixelBuffer) -> Result<(), SurfaceError> {
        check_size((self.width, self.height), pixels)?;
        for (packed, texel) in self.buffer.iter_mut().zip(pixels.as_bytes().chunks_exact(4)) {
            *packed = rgb_to_u32(texel[0], texel[1], texel[2]);
        }
        Ok(())
    }

    fn poll_event(&mut self) -> Option<SurfaceEvent> {
        if !self.window.is_open() {
            return Some(SurfaceEvent::CloseRequested);
        }
        self.pending.pop_front()
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| SurfaceError::Present(e.to_string()))?;
        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            let code = match key {
                Key::Escape => KeyCode::Escape,
                other => KeyCode::Other(other as u32),
            };
            self.pending.push_back(SurfaceEvent::Key(code));
        }
        Ok(())
    }
}
