use crate::handlers::HandlerContext;
use crate::types::SeriesView;
use crate::views::{DeltasView, SeriesPointsView};
use anyhow::{Result, bail};
use demolyzer_engine::{Analyzer, PlayerMap};

pub fn handle(
    analyzer: &Analyzer,
    player: Option<&str>,
    view: SeriesView,
    ctx: &HandlerContext,
) -> Result<()> {
    if let Some(player) = player
        && !analyzer.players().contains(player)
    {
        bail!("Player '{}' not found in {}", player, analyzer.summary().source);
    }

    match view {
        SeriesView::Full => {
            let deltas = only(player, analyzer.angle_deltas());
            ctx.render(&deltas, DeltasView::new(&deltas, ctx.styled))
        }
        SeriesView::Aim => {
            let points = only(player, analyzer.aim_change_series());
            ctx.render(&points, SeriesPointsView::new(&points, "aim change", ctx.styled))
        }
        SeriesView::View => {
            let points = only(player, analyzer.view_delta_series());
            ctx.render(&points, SeriesPointsView::new(&points, "view delta", ctx.styled))
        }
    }
}

fn only<V>(player: Option<&str>, map: PlayerMap<V>) -> PlayerMap<V> {
    match player {
        Some(player) => map.retain_player(player),
        None => map,
    }
}
