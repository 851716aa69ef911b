use crate::csv_table::read_table;
use crate::traits::TelemetrySource;
use crate::{Error, Result};
use demolyzer_types::TelemetryTable;
use std::path::Path;
use std::process::Command;
use tracing::info;

/// Argument placeholder replaced by the recording path
pub const INPUT_PLACEHOLDER: &str = "{input}";

/// Runs an external converter that prints the recording's telemetry table as
/// CSV on stdout.
///
/// With no arguments configured the recording path is passed as the only
/// argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandExtractor {
    program: String,
    args: Vec<String>,
}

impl CommandExtractor {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn args_for(&self, recording: &Path) -> Vec<String> {
        let input = recording.to_string_lossy();
        if self.args.is_empty() {
            return vec![input.into_owned()];
        }
        self.args
            .iter()
            .map(|arg| arg.replace(INPUT_PLACEHOLDER, &input))
            .collect()
    }
}

impl TelemetrySource for CommandExtractor {
    fn id(&self) -> &'static str {
        "command"
    }

    fn load(&self, recording: &Path) -> Result<TelemetryTable> {
        let args = self.args_for(recording);
        info!(program = %self.program, recording = %recording.display(), "extracting telemetry");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| Error::Extraction(format!("failed to run '{}': {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Extraction(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        read_table(output.stdout.as_slice())
    }
}
