use crate::handlers::HandlerContext;
use crate::views::StatesView;
use anyhow::Result;
use demolyzer_engine::Analyzer;

pub fn handle(analyzer: &Analyzer, ctx: &HandlerContext) -> Result<()> {
    let breakdown = analyzer.state_breakdown();
    ctx.render(&breakdown, StatesView::new(&breakdown, ctx.styled))
}
