pub use crate::parsing::config::{Config, Resolution};
pub use crate::world::Scene;

pub use super::{construct_frame_renderer, render_loop, PixelBuffer, RenderError, Renderer};

pub use std::sync::Arc;
