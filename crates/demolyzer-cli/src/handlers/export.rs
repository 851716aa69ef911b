use crate::handlers::HandlerContext;
use anyhow::{Context, Result};
use demolyzer_engine::Analyzer;
use demolyzer_providers::write_deltas;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

#[derive(Serialize)]
struct ExportResult<'a> {
    exported: usize,
    output: &'a Path,
}

pub fn handle(analyzer: &Analyzer, output: &Path, ctx: &HandlerContext) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let exported = write_deltas(BufWriter::new(file), &analyzer.angle_deltas())?;
    info!(exported, output = %output.display(), "exported angle deltas");

    let result = ExportResult { exported, output };
    ctx.render(
        &result,
        format!("Exported {} deltas to {}\n", exported, output.display()),
    )
}
