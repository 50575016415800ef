use std::path::Path;

use crate::data::parser::{self, ParsedTraces};
use crate::error::{LoadError, LoadResult};

/// Decode file bytes as UTF-8, falling back to latin-1 when they are not.
pub fn decode_text(content: Vec<u8>) -> String {
    String::from_utf8(content).unwrap_or_else(|err| {
        // Each byte maps to the same Unicode code point.
        err.into_bytes().iter().map(|&b| b as char).collect()
    })
}

/// Read a trace file from disk and parse every line of it.
///
/// The whole file is read before parsing starts; the caller receives either
/// the complete result or an I/O error, never a partial parse.
pub fn load_trace_file(path: &Path) -> LoadResult<ParsedTraces> {
    let content = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = decode_text(content);
    let parsed = parser::parse(text.lines());

    tracing::info!(
        path = %path.display(),
        lines = parsed.stats.total,
        sections = parsed.stats.separators,
        samples = parsed.stats.samples,
        skipped = parsed.stats.skipped,
        traces = parsed.traces.len(),
        "loaded trace file"
    );

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_bytes_still_decode() {
        let text = decode_text(vec![b'c', 0xE9, b' ']);
        assert_eq!(text, "c\u{e9} ");
    }

    #[test]
    fn crlf_line_endings_keep_separators() {
        let text = decode_text(b"==================\r\ncpu ---> 3\r\n".to_vec());
        let parsed = parser::parse(text.lines());
        assert_eq!(parsed.section_count, 1);
        assert_eq!(parsed.traces["cpu"].samples()[0].value, 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_trace_file(Path::new("/definitely/not/here.stats")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
