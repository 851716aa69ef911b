use crate::Result;
use demolyzer_engine::{AngleDelta, PlayerMap};
use serde::Serialize;
use std::io;

#[derive(Serialize)]
struct DeltaRow<'a> {
    player_id: &'a str,
    tick: i64,
    delta_pitch: f64,
    delta_view: f64,
    delta_view_normalized: f64,
    movement_heading: f64,
    aim_change: f64,
}

/// Write per-player delta sequences as one long-format CSV, players in map order.
pub fn write_deltas<W: io::Write>(writer: W, deltas: &PlayerMap<Vec<AngleDelta>>) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut written = 0;

    for (player_id, sequence) in deltas.iter() {
        for delta in sequence {
            wtr.serialize(DeltaRow {
                player_id: player_id.as_str(),
                tick: delta.tick,
                delta_pitch: delta.delta_pitch,
                delta_view: delta.delta_view,
                delta_view_normalized: delta.delta_view_normalized,
                movement_heading: delta.movement_heading,
                aim_change: delta.aim_change(),
            })?;
            written += 1;
        }
    }

    wtr.flush()?;
    Ok(written)
}
