// demolyzer CLI
//
// Input is a recording path. `.csv` paths are read as already extracted
// telemetry tables; any other path is handed to the configured extractor and
// the result cached next to the recording (see demolyzer-providers).
//
// All analysis lives in demolyzer-engine. This crate only resolves settings,
// loads the table, and renders engine output as plain text or JSON.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod types;
mod views;

pub use args::{Cli, Commands};
pub use commands::run;
