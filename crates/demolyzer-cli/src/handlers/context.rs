use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;
use std::fmt;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub styled: bool,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            styled: std::io::stdout().is_terminal(),
        }
    }

    /// Print `data` as JSON, or `view` as plain text
    pub fn render<T, V>(&self, data: &T, view: V) -> Result<()>
    where
        T: Serialize + ?Sized,
        V: fmt::Display,
    {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
            OutputFormat::Plain => print!("{}", view),
        }
        Ok(())
    }
}
