use crate::handlers::HandlerContext;
use crate::views::PlayersView;
use anyhow::Result;
use demolyzer_engine::Analyzer;

pub fn handle(analyzer: &Analyzer, ctx: &HandlerContext) -> Result<()> {
    let players = analyzer.players();
    ctx.render(&players, PlayersView::new(&players, ctx.styled))
}
