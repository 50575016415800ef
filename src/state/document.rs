use std::path::{Path, PathBuf};

use crate::data::parser::{LineStats, ParsedTraces};
use crate::render::picking::{PickResult, PickingCorrelator, Tooltip};
use crate::render::primitives::HandleAllocator;
use crate::state::series::{Series, SeriesBuilder};

/// Everything derived from one loaded trace file.
///
/// A document is built completely before it replaces the previous one, so
/// the viewer never sees a half-loaded file.
#[derive(Debug, Clone, Default)]
pub struct Document {
    generation: u64,
    source: Option<PathBuf>,
    section_count: usize,
    stats: LineStats,
    /// List order; the first series is drawn in front.
    series: Vec<Series>,
}

impl Document {
    pub fn build(
        parsed: &ParsedTraces,
        builder: &SeriesBuilder,
        generation: u64,
        source: Option<&Path>,
    ) -> Self {
        let mut handles = HandleAllocator::new(generation);
        let series = builder.build(parsed, &mut handles);
        Self {
            generation,
            source: source.map(Path::to_path_buf),
            section_count: parsed.section_count,
            stats: parsed.stats,
            series,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn stats(&self) -> LineStats {
        self.stats
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Series from back to front, skipping hidden ones.
    pub fn draw_order(&self) -> impl Iterator<Item = &Series> {
        self.series.iter().rev().filter(|s| s.visible)
    }

    /// Returns false when `row` does not exist.
    pub fn set_visible(&mut self, row: usize, visible: bool) -> bool {
        match self.series.get_mut(row) {
            Some(series) => {
                series.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Swap `row` with the row above it. Returns whether anything moved.
    pub fn move_up(&mut self, row: usize) -> bool {
        if row == 0 || row >= self.series.len() {
            return false;
        }
        self.series.swap(row - 1, row);
        true
    }

    /// Swap `row` with the row below it. Returns whether anything moved.
    pub fn move_down(&mut self, row: usize) -> bool {
        if row + 1 >= self.series.len() {
            return false;
        }
        self.series.swap(row, row + 1);
        true
    }

    pub fn tooltip(&self, pick: &PickResult) -> Option<Tooltip> {
        PickingCorrelator::new(&self.series).correlate(pick)
    }
}
