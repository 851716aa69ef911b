use crate::Result;
use demolyzer_types::TelemetryTable;
use std::path::Path;

/// Something that turns a recording path into a telemetry table
///
/// Responsibilities:
/// - Produce a fully materialized table for the recording
/// - Validate the table shape before returning it
pub trait TelemetrySource: Send + Sync {
    /// Short source name for logs (e.g., "csv", "command", "cache")
    fn id(&self) -> &'static str;

    /// Load the table for `recording`
    fn load(&self, recording: &Path) -> Result<TelemetryTable>;
}
