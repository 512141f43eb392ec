use super::shading::{lighting, SECONDARY_RAY_OFFSET};
use super::Integrator;

use crate::math::*;
use crate::profile::Profile;
use crate::world::Scene;

use std::sync::Arc;

/// Local shading plus mirror reflections followed up to `depth` more bounces.
///
/// Non-finite intermediate values (zero length directions, NaN positions) are
/// not rejected; they quantize to a black or saturated pixel.
pub fn trace(
    scene: &Scene,
    r: Ray,
    t_min: f32,
    t_max: f32,
    depth: u16,
    profile: &mut Profile,
) -> Rgb {
    let Some(hit) = scene.closest_hit(r, t_min, t_max) else {
        return scene.background;
    };
    let sphere = hit.sphere;

    let point = r.point_at_parameter(hit.time);
    let normal = sphere.normal_at(point);
    let view = -r.direction;
    let intensity = lighting(scene, point, normal, view, sphere.specular, profile);
    let local_color = sphere.color.scale(intensity);

    if depth == 0 || sphere.reflectivity <= 0.0 {
        return local_color;
    }

    profile.reflection_rays += 1;
    let reflected_color = trace(
        scene,
        Ray::new(point, reflect(view, normal)),
        SECONDARY_RAY_OFFSET,
        INFINITY,
        depth - 1,
        profile,
    );
    local_color.blend(reflected_color, sphere.reflectivity)
}

pub struct WhittedIntegrator {
    pub max_depth: u16,
    pub world: Arc<Scene>,
    pub t_min: f32,
}

impl WhittedIntegrator {
    // camera rays start at the image plane distance, nothing closer is visible
    pub const CAMERA_T_MIN: f32 = 1.0;

    pub fn new(world: Arc<Scene>, max_depth: u16) -> Self {
        WhittedIntegrator {
            max_depth,
            world,
            t_min: WhittedIntegrator::CAMERA_T_MIN,
        }
    }
}

impl Integrator for WhittedIntegrator {
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> Rgb {
        profile.camera_rays += 1;
        trace(
            &self.world,
            camera_ray,
            self.t_min,
            INFINITY,
            self.max_depth,
            profile,
        )
    }
}
