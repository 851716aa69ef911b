//! Table sources for demolyzer.
//!
//! Raw recordings are never parsed here. A recording becomes a telemetry table
//! either by reading an already extracted CSV, or by running an external
//! converter; [`CachedSource`] keeps the converter's output next to the
//! recording so it only runs once.

pub mod cache;
pub mod csv_table;
pub mod error;
pub mod export;
pub mod extractor;
pub mod registry;
pub mod traits;

pub use cache::{CachedSource, cache_path};
pub use csv_table::{CsvTableSource, read_table, read_table_from_path, write_table, write_table_to_path};
pub use error::{Error, Result};
pub use export::write_deltas;
pub use extractor::{CommandExtractor, INPUT_PLACEHOLDER};
pub use registry::source_for;
pub use traits::TelemetrySource;
