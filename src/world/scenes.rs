//! Scenes compiled into the binary, selected by name from the config.

use crate::math::*;
use crate::world::{Light, Scene, SceneError, Sphere};

pub const SCENE_NAMES: [&str; 2] = ["default", "single_sphere"];

pub fn by_name(name: &str) -> Result<Scene, SceneError> {
    match name {
        "default" => default_scene(),
        "single_sphere" => single_sphere(),
        _ => Err(SceneError::UnknownScene(name.to_owned())),
    }
}

/// Three colored spheres resting on a large yellow floor sphere.
pub fn default_scene() -> Result<Scene, SceneError> {
    let spheres = vec![
        Sphere::new(
            Point3::new(0.0, -1.0, 3.0),
            1.0,
            Rgb::new(255, 0, 0),
            Some(500),
            0.2,
        )?,
        Sphere::new(
            Point3::new(2.0, 0.0, 4.0),
            1.0,
            Rgb::new(0, 0, 255),
            Some(500),
            0.3,
        )?,
        Sphere::new(
            Point3::new(-2.0, 0.0, 4.0),
            1.0,
            Rgb::new(0, 255, 0),
            Some(10),
            0.4,
        )?,
        Sphere::new(
            Point3::new(0.0, -5001.0, 0.0),
            5000.0,
            Rgb::new(255, 255, 0),
            Some(1000),
            0.5,
        )?,
    ];
    let lights = vec![
        Light::ambient(0.2)?,
        Light::point(0.6, Point3::new(2.0, 1.0, 0.0))?,
        Light::directional(0.2, Vec3::new(1.0, 4.0, 4.0))?,
    ];
    Ok(Scene::new(spheres, lights))
}

/// One matte blue sphere under ambient light only.
pub fn single_sphere() -> Result<Scene, SceneError> {
    let spheres = vec![Sphere::new(
        Point3::new(0.0, -1.0, 3.0),
        1.0,
        Rgb::new(0, 0, 255),
        None,
        0.0,
    )?];
    Ok(Scene::new(spheres, vec![Light::ambient(1.0)?]))
}
