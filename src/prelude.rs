pub use rayon::prelude::*;

pub use crate::integrator::{trace, Integrator, WhittedIntegrator, DEFAULT_MAX_DEPTH};
pub use crate::math::{reflect, Point3, Ray, Rgb, Vec3, INFINITY};
pub use crate::profile::Profile;
pub use crate::renderer::{FrameRenderer, PixelBuffer, Renderer, Viewport};
pub use crate::surface::{Surface, SurfaceEvent};
pub use crate::world::{Light, Scene, Sphere};
