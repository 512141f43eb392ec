use crate::math::*;
use crate::world::SceneError;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Light {
    Ambient { intensity: f32 },
    Point { intensity: f32, position: Point3 },
    Directional { intensity: f32, direction: Vec3 },
}

impl Light {
    fn check(intensity: f32) -> Result<f32, SceneError> {
        if intensity >= 0.0 {
            Ok(intensity)
        } else {
            Err(SceneError::InvalidIntensity(intensity))
        }
    }

    pub fn ambient(intensity: f32) -> Result<Light, SceneError> {
        Ok(Light::Ambient {
            intensity: Light::check(intensity)?,
        })
    }

    pub fn point(intensity: f32, position: Point3) -> Result<Light, SceneError> {
        Ok(Light::Point {
            intensity: Light::check(intensity)?,
            position,
        })
    }

    pub fn directional(intensity: f32, direction: Vec3) -> Result<Light, SceneError> {
        Ok(Light::Directional {
            intensity: Light::check(intensity)?,
            direction,
        })
    }

    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }
}
