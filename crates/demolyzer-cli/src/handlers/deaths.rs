use crate::handlers::HandlerContext;
use crate::views::DeathStatsView;
use anyhow::Result;
use demolyzer_engine::Analyzer;

pub fn handle(analyzer: &Analyzer, ctx: &HandlerContext) -> Result<()> {
    let stats = analyzer.death_stats();
    ctx.render(&stats, DeathStatsView::new(&stats, ctx.styled))
}
