use indexmap::IndexMap;

use crate::error::ParseError;

/// A line made of exactly this text starts a new section.
pub const SECTION_SEPARATOR: &str = "==================";

/// Separates the trace name from its value on a sample line.
pub const FIELD_DELIMITER: &str = " ---> ";

/// One observation of a trace: the section it was seen in and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub section: usize,
    pub value: u64,
}

/// Every sample seen for one trace name, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    samples: Vec<Sample>,
    max_value: u64,
}

impl Default for Trace {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
            max_value: 1,
        }
    }
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.max_value = self.max_value.max(sample.value);
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Largest value pushed so far, never below 1.
    pub fn max_value(&self) -> u64 {
        self.max_value
    }
}

/// Classification of a single well-formed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    Separator,
    Sample { name: &'a str, value: u64 },
}

/// Line counters gathered during one parse pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub total: usize,
    pub separators: usize,
    pub samples: usize,
    pub skipped: usize,
}

/// Output of one parse pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTraces {
    /// Traces keyed by name, in order of first appearance.
    pub traces: IndexMap<String, Trace>,
    /// Number of separator lines seen; the x-axis divisor.
    pub section_count: usize,
    pub stats: LineStats,
}

impl ParsedTraces {
    /// Largest value over every trace, never below 1.
    pub fn global_max(&self) -> u64 {
        self.traces
            .values()
            .map(Trace::max_value)
            .max()
            .unwrap_or(1)
    }
}

/// Classify one line of a trace file.
pub fn parse_line(line: &str) -> Result<ParsedLine<'_>, ParseError> {
    if line == SECTION_SEPARATOR {
        return Ok(ParsedLine::Separator);
    }

    let mut fields = line
        .split(FIELD_DELIMITER)
        .map(str::trim)
        .filter(|field| !field.is_empty());

    let (name, raw_value) = match (fields.next(), fields.next(), fields.next()) {
        (Some(name), Some(value), None) => (name, value),
        (first, second, third) => {
            let found = [first, second, third].iter().flatten().count() + fields.count();
            return Err(ParseError::FieldCount { found });
        }
    };

    let value = raw_value
        .parse::<u64>()
        .map_err(|source| ParseError::InvalidValue {
            value: raw_value.to_string(),
            source,
        })?;

    Ok(ParsedLine::Sample { name, value })
}

/// Parse a whole trace file, one line at a time.
///
/// Lines that do not parse are counted and skipped; they never abort the pass.
pub fn parse<I, S>(lines: I) -> ParsedTraces
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedTraces::default();

    for (line_no, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        parsed.stats.total += 1;

        match parse_line(line) {
            Ok(ParsedLine::Separator) => {
                parsed.section_count += 1;
                parsed.stats.separators += 1;
            }
            Ok(ParsedLine::Sample { name, value }) => {
                let sample = Sample {
                    section: parsed.section_count,
                    value,
                };
                match parsed.traces.get_mut(name) {
                    Some(trace) => trace.push(sample),
                    None => {
                        let mut trace = Trace::new();
                        trace.push(sample);
                        parsed.traces.insert(name.to_string(), trace);
                    }
                }
                parsed.stats.samples += 1;
            }
            Err(err) => {
                tracing::trace!(line = line_no + 1, %err, "skipping trace line");
                parsed.stats.skipped += 1;
            }
        }
    }

    parsed
}
