// Settings module
// Grid parameters for the timetable, loadable from a TOML file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

const CONFIG_FILE_NAME: &str = "grid.toml";

/// Latest hour a grid may run to: the end of the next day
pub const MAX_END_HOUR: u32 = 48;

/// Geometry of the timetable grid.
///
/// Every field has a default, so a config file only needs to list the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// First hour shown on the grid
    pub start_hour: u32,
    /// Hour the grid stops at (exclusive); may exceed 24 for overnight grids
    pub end_hour: u32,
    /// Slot granularity in minutes
    pub interval_minutes: u32,
    pub venue_column_width_px: f32,
    pub slot_height_px: f32,
    /// Width of the time-label column on the left
    pub time_column_width_px: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: 24,
            interval_minutes: 15,
            venue_column_width_px: 200.0,
            slot_height_px: 60.0,
            time_column_width_px: 100.0,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.interval_minutes == 0 {
            return Err(LayoutError::InvalidGrid(
                "interval_minutes must be greater than zero".to_string(),
            ));
        }

        if self.end_hour <= self.start_hour {
            return Err(LayoutError::InvalidGrid(format!(
                "end_hour ({}) must be after start_hour ({})",
                self.end_hour, self.start_hour
            )));
        }

        if self.end_hour > MAX_END_HOUR {
            return Err(LayoutError::InvalidGrid(format!(
                "end_hour ({}) must not exceed {}",
                self.end_hour, MAX_END_HOUR
            )));
        }

        let sizes = [
            ("venue_column_width_px", self.venue_column_width_px),
            ("slot_height_px", self.slot_height_px),
            ("time_column_width_px", self.time_column_width_px),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::InvalidGrid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Full table width: the time-label column plus one column per venue
    pub fn total_table_width(&self, venue_count: usize) -> f32 {
        self.time_column_width_px + venue_count as f32 * self.venue_column_width_px
    }

    /// Read a TOML config file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid config {}", path.display()))?;
        let config: GridConfig = toml::from_str(&text)
            .with_context(|| format!("Failed to parse grid config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise from the per-user config file if
    /// one exists, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                log::info!("Loading grid config from {}", path.display());
                Self::load(&path)
            }
            _ => {
                log::debug!("No grid config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Per-user location of `grid.toml`, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "VenueTimetable", "VenueTimetable")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
