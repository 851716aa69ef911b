use crate::handlers::HandlerContext;
use anyhow::Result;
use demolyzer_engine::Analyzer;

pub fn handle(analyzer: &Analyzer, ctx: &HandlerContext) -> Result<()> {
    let summary = analyzer.summary();
    ctx.render(&summary, format!("{}\n", summary))
}
