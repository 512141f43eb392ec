mod light;
pub mod scenes;

pub use light::Light;

pub use crate::geometry::*;
use crate::math::*;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),
    #[error("reflectivity must lie in [0, 1], got {0}")]
    InvalidReflectivity(f32),
    #[error("specular exponent must not be negative, got {0}")]
    InvalidSpecular(i32),
    #[error("light intensity must not be negative, got {0}")]
    InvalidIntensity(f32),
    #[error("unknown scene {0:?}")]
    UnknownScene(String),
}

/// Closest intersection found along a ray.
#[derive(Copy, Clone, Debug)]
pub struct Hit<'a> {
    pub sphere: &'a Sphere,
    pub index: usize,
    pub time: f32,
}

/// Spheres and lights, read only once built.
///
/// Each sphere caches its offset from `camera_origin`. That cache is only valid
/// for a fixed camera; moving the camera requires [`Scene::with_camera_origin`].
#[derive(Clone, Debug)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    pub background: Rgb,
    camera_origin: Point3,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Scene {
            spheres,
            lights,
            background: Rgb::BLACK,
            camera_origin: Point3::origin(),
        }
        .with_camera_origin(Point3::origin())
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    pub fn with_camera_origin(mut self, camera_origin: Point3) -> Self {
        self.camera_origin = camera_origin;
        for sphere in self.spheres.iter_mut() {
            sphere.set_camera_origin(camera_origin);
        }
        self
    }

    pub fn camera_origin(&self) -> Point3 {
        self.camera_origin
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Nearest sphere with a root strictly inside `(t_min, t_max)`.
    /// On an exact tie the sphere listed first wins.
    pub fn closest_hit(&self, r: Ray, t_min: f32, t_max: f32) -> Option<Hit<'_>> {
        let mut closest_so_far = t_max;
        let mut hit = None;
        for (index, sphere) in self.spheres.iter().enumerate() {
            let (t1, t2) = intersect(r.origin, r.direction, sphere);
            for time in [t1, t2] {
                if time > t_min && time < closest_so_far {
                    closest_so_far = time;
                    hit = Some(Hit {
                        sphere,
                        index,
                        time,
                    });
                }
            }
        }
        hit
    }

    /// Shadow ray query, stops at the first root inside `(t_min, t_max)`.
    pub fn occluded(&self, r: Ray, t_min: f32, t_max: f32) -> bool {
        self.spheres.iter().any(|sphere| {
            let (t1, t2) = intersect(r.origin, r.direction, sphere);
            (t1 > t_min && t1 < t_max) || (t2 > t_min && t2 < t_max)
        })
    }
}
