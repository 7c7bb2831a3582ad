// Navigator tuning, persisted as JSON next to the host app's settings

use serde::{Deserialize, Serialize};

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Tunable navigation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Minimum center offset (px) for a move to count along its primary axis
    #[serde(default = "default_deadzone")]
    pub deadzone_px: f32,
    /// Penalty weight on perpendicular offset when scoring candidates
    #[serde(default = "default_cross_axis_weight")]
    pub cross_axis_weight: f32,
    /// Delay before the mount-time auto-focus fires, letting layout settle
    #[serde(default = "default_autofocus_delay")]
    pub autofocus_delay_ms: u64,
}

fn default_deadzone() -> f32 {
    10.0
}

fn default_cross_axis_weight() -> f32 {
    0.5
}

fn default_autofocus_delay() -> u64 {
    100
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            deadzone_px: default_deadzone(),
            cross_axis_weight: default_cross_axis_weight(),
            autofocus_delay_ms: default_autofocus_delay(),
        }
    }
}

/// Load settings from `path`.
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_cfg(path: &Path) -> NavConfig {
    if let Ok(file) = File::open(path) {
        if let Ok(config) = serde_json::from_reader::<_, NavConfig>(BufReader::new(file)) {
            return config;
        }
    }

    NavConfig::default()
}

pub fn save_cfg(path: &Path, config: &NavConfig) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}
