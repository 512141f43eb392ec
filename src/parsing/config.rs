use crate::integrator::DEFAULT_MAX_DEPTH;
use crate::renderer::{FrameError, Viewport};

use serde::Deserialize;

pub const DEFAULT_TITLE: &str = "Test";
pub const DEFAULT_OUTPUT: &str = "output/render.png";

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: 500,
            height: 500,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum RendererType {
    Naive {
        frames: Option<usize>,
        output: Option<String>,
    },
    Preview,
}

impl Default for RendererType {
    fn default() -> Self {
        RendererType::Naive {
            frames: None,
            output: None,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct TOMLWindowSettings {
    pub title: Option<String>,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct TOMLCameraSettings {
    pub origin: Option<[f32; 3]>,
    pub viewport_width: Option<f32>,
    pub viewport_height: Option<f32>,
    pub plane_distance: Option<f32>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct TOMLRenderSettings {
    pub max_depth: Option<u16>,
    pub threads: Option<usize>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct TOMLConfig {
    pub scene: Option<String>,
    pub renderer: Option<RendererType>,
    pub window: Option<TOMLWindowSettings>,
    pub camera: Option<TOMLCameraSettings>,
    pub render: Option<TOMLRenderSettings>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub resolution: Resolution,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraSettings {
    pub origin: [f32; 3],
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub plane_distance: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub max_depth: u16,
    pub threads: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub scene: String,
    pub renderer: RendererType,
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub render_settings: RenderSettings,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        let window = data.window.unwrap_or_default();
        let camera = data.camera.unwrap_or_default();
        let render = data.render.unwrap_or_default();
        let default_resolution = Resolution::default();
        Config {
            scene: data.scene.unwrap_or_else(|| String::from("default")),
            renderer: data.renderer.unwrap_or_default(),
            window: WindowSettings {
                title: window.title.unwrap_or_else(|| String::from(DEFAULT_TITLE)),
                resolution: Resolution {
                    width: window.width.unwrap_or(default_resolution.width),
                    height: window.height.unwrap_or(default_resolution.height),
                },
            },
            camera: CameraSettings {
                origin: camera.origin.unwrap_or([0.0; 3]),
                viewport_width: camera.viewport_width.unwrap_or(1.0),
                viewport_height: camera.viewport_height.unwrap_or(1.0),
                plane_distance: camera.plane_distance.unwrap_or(1.0),
            },
            render_settings: RenderSettings {
                max_depth: render.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
                threads: render.threads.unwrap_or_else(num_cpus::get).max(1),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from(TOMLConfig::default())
    }
}

impl Config {
    pub fn viewport(&self) -> Result<Viewport, FrameError> {
        let Resolution { width, height } = self.window.resolution;
        Viewport::new(
            width,
            height,
            self.camera.viewport_width,
            self.camera.viewport_height,
            self.camera.plane_distance,
        )
    }
}
