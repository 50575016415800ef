use std::path::{Path, PathBuf};

use egui::{Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "PERFSTATS_VIEWER_CONFIG";

/// How sample values are mapped onto the vertical `[0, 1]` plot range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizationMode {
    /// Every series fills `[0, 1]` on its own. Magnitudes are not
    /// comparable across series.
    #[default]
    PerSeries,
    /// Every series is divided by the largest value in the whole file.
    Global,
}

/// Canvas palette. Series colors are fixed; only the chrome around them
/// follows the theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn visuals(self) -> Visuals {
        match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        }
    }

    /// Fill behind the series.
    pub fn canvas_fill(self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(20, 20, 20),
            Theme::Light => Color32::WHITE,
        }
    }

    /// Outline of the normalized plot area.
    pub fn plot_frame_stroke(self) -> Stroke {
        match self {
            Theme::Dark => Stroke::new(1.0, Color32::from_gray(90)),
            Theme::Light => Stroke::new(1.0, Color32::from_gray(170)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

/// Tunables for series building, the camera and the viewer chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub normalization: NormalizationMode,
    /// Width of the plot in world units; the last section lands here.
    pub x_extent: f32,
    pub point_radius: f32,
    pub line_width: f32,
    /// Manhattan distance in pixels below which a press/release is a click.
    pub click_threshold_px: i32,
    pub zoom_in_factor: f32,
    pub zoom_out_factor: f32,
    pub focal_point: [f32; 2],
    pub distance_x: f32,
    pub distance_y: f32,
    pub theme: Theme,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationMode::PerSeries,
            x_extent: 8.0,
            point_radius: 1.5,
            line_width: 1.0,
            click_threshold_px: 8,
            zoom_in_factor: 0.9,
            zoom_out_factor: 1.1,
            focal_point: [0.0, 0.5],
            distance_x: 10.0,
            distance_y: 1.0,
            theme: Theme::Dark,
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_json_str(&json).map_err(|source| LoadError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config named by [`CONFIG_ENV_VAR`], or the defaults.
    ///
    /// An unreadable or invalid file is reported and replaced by defaults.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded viewer config");
                config
            }
            Err(err) => {
                tracing::warn!("{err}; using default config");
                Self::default()
            }
        }
    }
}
