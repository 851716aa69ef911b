use crate::csv_table::{read_table_from_path, write_table_to_path};
use crate::traits::TelemetrySource;
use crate::Result;
use demolyzer_types::TelemetryTable;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Cache file for a recording: same directory and stem, `.csv` extension
pub fn cache_path(recording: &Path) -> PathBuf {
    recording.with_extension("csv")
}

/// Persists the inner source's table next to the recording.
///
/// With `persist` on, an existing cache file is read instead of calling the
/// inner source, and a fresh load is written back. With `persist` off the inner
/// source is always used and nothing is written.
#[derive(Debug, Clone)]
pub struct CachedSource<S> {
    inner: S,
    persist: bool,
}

impl<S: TelemetrySource> CachedSource<S> {
    pub fn new(inner: S, persist: bool) -> Self {
        Self { inner, persist }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: TelemetrySource> TelemetrySource for CachedSource<S> {
    fn id(&self) -> &'static str {
        "cache"
    }

    fn load(&self, recording: &Path) -> Result<TelemetryTable> {
        let cache = cache_path(recording);

        if self.persist && cache != recording && cache.exists() {
            debug!(cache = %cache.display(), "telemetry cache hit");
            return read_table_from_path(&cache);
        }

        let table = self.inner.load(recording)?;

        if self.persist && cache != recording {
            write_table_to_path(&cache, &table)?;
            info!(cache = %cache.display(), rows = table.len(), source = self.inner.id(), "persisted telemetry table");
        }

        Ok(table)
    }
}
