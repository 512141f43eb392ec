mod shading;
mod whitted;

pub use shading::{lighting, SECONDARY_RAY_OFFSET};
pub use whitted::{trace, WhittedIntegrator};

use crate::math::*;
use crate::profile::Profile;

pub const DEFAULT_MAX_DEPTH: u16 = 3;

pub trait Integrator: Sync + Send {
    /// Final color seen along a ray leaving the camera.
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> Rgb;
}
