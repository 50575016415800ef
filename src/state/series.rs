use glam::Vec3;

use crate::data::parser::{ParsedTraces, Trace};
use crate::render::primitives::{HandleAllocator, LineStrip, PointBatch, PointSprite};
use crate::state::config::{NormalizationMode, ViewerConfig};

/// Saturation used for every series color (HSL, 0..1).
pub const SERIES_SATURATION: f32 = 1.0;
/// Lightness used for every series color (HSL, 0..1).
pub const SERIES_LIGHTNESS: f32 = 128.0 / 255.0;

/// Convert HSL (hue in degrees, saturation and lightness in 0..1) to RGBA.
pub fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32) -> [f32; 4] {
    let hue = hue.rem_euclid(360.0) / 60.0;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - (hue % 2.0 - 1.0).abs());
    let (r, g, b) = match hue as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    [r + m, g + m, b + m, 1.0]
}

/// Color of the series at `rank` among `count` series.
pub fn color_for_rank(rank: usize, count: usize) -> [f32; 4] {
    let hue = if count == 0 {
        0.0
    } else {
        rank as f32 / count as f32 * 360.0
    };
    hsl_to_rgba(hue, SERIES_SATURATION, SERIES_LIGHTNESS)
}

/// Renderable projection of one trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: [f32; 4],
    /// Sample positions in plot space; z is always 0.
    pub points: Vec<Vec3>,
    /// Original values, parallel to `points`.
    pub raw_values: Vec<u64>,
    pub visible: bool,
    pub point_batch: PointBatch,
    pub line_strip: LineStrip,
}

impl Series {
    pub fn color32(&self) -> egui::Color32 {
        let [r, g, b, a] = self.color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

/// Turns parsed traces into sorted, colored, normalized series.
#[derive(Debug, Clone)]
pub struct SeriesBuilder {
    pub normalization: NormalizationMode,
    pub x_extent: f32,
    pub point_radius: f32,
    pub line_width: f32,
}

impl Default for SeriesBuilder {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}

impl SeriesBuilder {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            normalization: config.normalization,
            x_extent: config.x_extent,
            point_radius: config.point_radius,
            line_width: config.line_width,
        }
    }

    /// Build one series per trace.
    ///
    /// Series are ordered by case-insensitive name; names that compare equal
    /// keep the order in which they first appeared in the file.
    pub fn build(&self, parsed: &ParsedTraces, handles: &mut HandleAllocator) -> Vec<Series> {
        let mut ranked: Vec<(&String, &Trace)> = parsed.traces.iter().collect();
        ranked.sort_by_key(|(name, _)| name.to_lowercase());

        let global_max = parsed.global_max();
        let section_count = parsed.section_count;
        let count = ranked.len();

        ranked
            .into_iter()
            .enumerate()
            .map(|(rank, (name, trace))| {
                let divisor = match self.normalization {
                    NormalizationMode::PerSeries => trace.max_value(),
                    NormalizationMode::Global => global_max,
                };
                self.build_series(
                    name,
                    trace,
                    color_for_rank(rank, count),
                    section_count,
                    divisor,
                    handles,
                )
            })
            .collect()
    }

    fn build_series(
        &self,
        name: &str,
        trace: &Trace,
        color: [f32; 4],
        section_count: usize,
        divisor: u64,
        handles: &mut HandleAllocator,
    ) -> Series {
        let points: Vec<Vec3> = trace
            .samples()
            .iter()
            .map(|sample| {
                let x = if section_count == 0 {
                    0.0
                } else {
                    (sample.section as f64 / section_count as f64 * self.x_extent as f64) as f32
                };
                let y = (sample.value as f64 / divisor as f64) as f32;
                Vec3::new(x, y, 0.0)
            })
            .collect();
        let raw_values = trace.samples().iter().map(|s| s.value).collect();

        let sprites = points
            .iter()
            .map(|p| PointSprite {
                position: p.to_array(),
                color,
                radius: self.point_radius,
            })
            .collect();

        Series {
            name: name.to_string(),
            color,
            point_batch: PointBatch {
                handle: handles.next_handle(),
                sprites,
            },
            line_strip: LineStrip {
                handle: handles.next_handle(),
                vertices: points.clone(),
                color,
                width: self.line_width,
            },
            points,
            raw_values,
            visible: true,
        }
    }
}
