use crate::cache::CachedSource;
use crate::csv_table::CsvTableSource;
use crate::extractor::CommandExtractor;
use crate::traits::TelemetrySource;
use crate::{Error, Result};
use std::path::Path;

/// Pick the source for a recording path.
///
/// `.csv` inputs are read directly. Anything else goes through the configured
/// extractor, wrapped in the persistent cache.
pub fn source_for(
    recording: &Path,
    extractor: Option<CommandExtractor>,
    persist: bool,
) -> Result<Box<dyn TelemetrySource>> {
    let is_csv = recording
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        return Ok(Box::new(CsvTableSource));
    }

    match extractor {
        Some(extractor) => Ok(Box::new(CachedSource::new(extractor, persist))),
        None => Err(Error::Provider(format!(
            "'{}' is not a telemetry CSV and no extractor is configured",
            recording.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_input_is_read_directly() {
        let source = source_for(Path::new("match.CSV"), None, true).unwrap();
        assert_eq!(source.id(), "csv");
    }

    #[test]
    fn test_recording_uses_cached_extractor() {
        let extractor = CommandExtractor::new("demo2csv", vec![]);
        let source = source_for(Path::new("match.dem"), Some(extractor), true).unwrap();
        assert_eq!(source.id(), "cache");
    }

    #[test]
    fn test_recording_without_extractor_fails() {
        let err = source_for(Path::new("match.dem"), None, true).err().unwrap();
        assert!(matches!(err, Error::Provider(_)));
    }
}
