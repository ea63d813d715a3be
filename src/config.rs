//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`AXIAL_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use axial_math::Vector3;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Viewport configuration
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`AXIAL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // User overrides (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // AXIAL_CAMERA__FOV=60 -> camera.fov = 60.0
        figment = figment.merge(Env::prefixed("AXIAL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye position [x, y, z]
    pub eye: [f32; 3],
    /// Point the camera looks at [x, y, z]
    pub target: [f32; 3],
    /// Up direction [x, y, z]
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Negate the projection's Y scale (clip space with Y down)
    pub flip_y: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 2.0, 5.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            flip_y: false,
        }
    }
}

impl CameraConfig {
    pub fn eye(&self) -> Vector3 {
        to_vector3(self.eye)
    }

    pub fn target(&self) -> Vector3 {
        to_vector3(self.target)
    }

    pub fn up(&self) -> Vector3 {
        to_vector3(self.up)
    }
}

/// Viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Near plane of the orthographic projection
    pub ortho_near: f32,
    /// Far plane of the orthographic projection
    pub ortho_far: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            ortho_near: -1.0,
            ortho_far: 1.0,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Points to project, in model space
    pub points: Vec<[f32; 3]>,
    /// Axis the model spins about
    pub spin_axis: [f32; 3],
    /// Spin angle in degrees
    pub spin_degrees: f32,
    /// Uniform model scale
    pub scale: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            points: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            spin_axis: [0.0, 1.0, 0.0],
            spin_degrees: 30.0,
            scale: 1.0,
        }
    }
}

impl SceneConfig {
    pub fn spin_axis(&self) -> Vector3 {
        to_vector3(self.spin_axis)
    }

    pub fn points(&self) -> impl Iterator<Item = Vector3> + '_ {
        self.points.iter().copied().map(to_vector3)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

fn to_vector3([x, y, z]: [f32; 3]) -> Vector3 {
    Vector3::new(x, y, z)
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
