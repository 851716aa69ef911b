//! Testing infrastructure for demolyzer tests.
//!
//! - `fixtures`: fluent builders for in-memory telemetry tables and CSV text
//! - `assertions`: float comparisons that understand NaN

pub mod assertions;
pub mod fixtures;

pub use assertions::assert_close;
pub use fixtures::TableBuilder;
