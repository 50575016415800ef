use std::fmt;

use crate::render::primitives::PrimitiveHandle;
use crate::state::series::Series;

/// What the renderer found under a screen pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickResult {
    /// A point marker, with its index inside the batch.
    PointHit { group: PrimitiveHandle, index: usize },
    /// Somewhere along a line strip.
    LineHit { group: PrimitiveHandle },
}

/// Text shown next to the pointer for a pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub series_name: String,
    /// Raw sample value; absent for line hits.
    pub value: Option<u64>,
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{value}\n{}", self.series_name),
            None => f.write_str(&self.series_name),
        }
    }
}

/// Maps pick results back to the series they were produced from.
pub struct PickingCorrelator<'a> {
    series: &'a [Series],
}

impl<'a> PickingCorrelator<'a> {
    pub fn new(series: &'a [Series]) -> Self {
        Self { series }
    }

    /// Tooltip for a pick, or `None` when it belongs to no known sample.
    pub fn correlate(&self, pick: &PickResult) -> Option<Tooltip> {
        match *pick {
            PickResult::PointHit { group, index } => {
                let series = self
                    .series
                    .iter()
                    .find(|s| s.point_batch.handle == group)?;
                let value = *series.raw_values.get(index)?;
                Some(Tooltip {
                    series_name: series.name.clone(),
                    value: Some(value),
                })
            }
            PickResult::LineHit { group } => {
                let series = self
                    .series
                    .iter()
                    .find(|s| s.line_strip.handle == group)?;
                Some(Tooltip {
                    series_name: series.name.clone(),
                    value: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::parse;
    use crate::render::primitives::HandleAllocator;
    use crate::state::series::SeriesBuilder;

    fn series() -> Vec<Series> {
        let parsed = parse(["cpu ---> 3", "cpu ---> 9", "mem ---> 4"]);
        SeriesBuilder::default().build(&parsed, &mut HandleAllocator::new(7))
    }

    #[test]
    fn point_hit_reports_raw_value() {
        let series = series();
        let pick = PickResult::PointHit {
            group: series[0].point_batch.handle,
            index: 1,
        };
        let tooltip = PickingCorrelator::new(&series).correlate(&pick).unwrap();
        assert_eq!(tooltip.series_name, "cpu");
        assert_eq!(tooltip.value, Some(9));
        assert_eq!(tooltip.to_string(), "9\ncpu");
    }

    #[test]
    fn line_hit_reports_name_only() {
        let series = series();
        let pick = PickResult::LineHit {
            group: series[1].line_strip.handle,
        };
        let tooltip = PickingCorrelator::new(&series).correlate(&pick).unwrap();
        assert_eq!(tooltip.to_string(), "mem");
    }

    #[test]
    fn out_of_range_and_unknown_picks_are_ignored() {
        let series = series();
        let correlator = PickingCorrelator::new(&series);
        let out_of_range = PickResult::PointHit {
            group: series[1].point_batch.handle,
            index: 1,
        };
        assert_eq!(correlator.correlate(&out_of_range), None);

        let stale = PickResult::LineHit {
            group: HandleAllocator::new(6).next_handle(),
        };
        assert_eq!(correlator.correlate(&stale), None);

        let wrong_kind = PickResult::PointHit {
            group: series[0].line_strip.handle,
            index: 0,
        };
        assert_eq!(correlator.correlate(&wrong_kind), None);
    }
}
