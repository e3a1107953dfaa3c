use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

/// Render configuration loaded from a YAML file.
///
/// Every field has a default, so a partial (or missing) file still yields
/// a working configuration. Command-line flags override these values.
#[derive(Debug, Deserialize, Clone)]
pub struct SketchConfig {
    /// Spatial extent of the blur kernel in pixels
    #[serde(default = "default_kernel_size")]
    pub kernel_size: u32,

    /// Gaussian spread; zero derives it from the kernel size
    #[serde(default)]
    pub sigma: f32,

    /// Optional background texture to composite the sketch onto
    #[serde(default)]
    pub canvas: Option<PathBuf>,
}

fn default_kernel_size() -> u32 {
    21
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            kernel_size: default_kernel_size(),
            sigma: 0.0,
            canvas: None,
        }
    }
}

impl SketchConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
