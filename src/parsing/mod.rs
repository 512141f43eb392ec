pub mod config;

use config::{Config, TOMLConfig};

use crate::math::Point3;
use crate::world::{scenes, Scene, SceneError};

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::info;

pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<TOMLConfig> {
    let filepath = filepath.as_ref();
    info!("loading config file at {}", filepath.display());
    let input = fs::read_to_string(filepath)
        .with_context(|| format!("couldn't read {}", filepath.display()))?;
    let settings: TOMLConfig = toml::from_str(&input)
        .with_context(|| format!("couldn't parse {}", filepath.display()))?;
    Ok(settings)
}

/// Builds the configured built-in scene, with its camera cache set to the configured origin.
pub fn construct_world(config: &Config) -> Result<Scene, SceneError> {
    let [x, y, z] = config.camera.origin;
    let scene = scenes::by_name(&config.scene)?.with_camera_origin(Point3::new(x, y, z));
    info!(
        "constructed scene {:?} with {} spheres and {} lights",
        config.scene,
        scene.spheres().len(),
        scene.lights().len()
    );
    Ok(scene)
}
