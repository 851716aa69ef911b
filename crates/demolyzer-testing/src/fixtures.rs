//! Fixtures for telemetry table construction.
//!
//! Provides utilities to:
//! - Build tables row by row without spelling out every field
//! - Render the same rows as canonical CSV for source/CLI tests

use demolyzer_types::{Column, LifecycleState, PlayerId, Position, TelemetryTable, TickRecord};

/// Fluent builder for telemetry tables.
#[derive(Debug, Default, Clone)]
pub struct TableBuilder {
    rows: Vec<TickRecord>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a full observation for `player_id`, named after the id.
    #[allow(clippy::too_many_arguments)]
    pub fn row(
        self,
        tick: i64,
        player_id: &str,
        state: &str,
        pitch: f64,
        view: f64,
        x: f64,
        y: f64,
    ) -> Self {
        self.named_row(tick, player_id, player_id, state, pitch, view, x, y)
    }

    /// Append a full observation with an explicit display name.
    #[allow(clippy::too_many_arguments)]
    pub fn named_row(
        mut self,
        tick: i64,
        player_id: &str,
        player_name: &str,
        state: &str,
        pitch: f64,
        view: f64,
        x: f64,
        y: f64,
    ) -> Self {
        self.rows.push(TickRecord {
            tick,
            player_id: Some(PlayerId::from(player_id)),
            player_name: Some(player_name.to_string()),
            state: LifecycleState::from(state),
            pitch,
            view,
            position: Position::new(x, y),
        });
        self
    }

    /// Append a row for `player_id` carrying only a state (angles and position zero).
    pub fn state(self, tick: i64, player_id: &str, state: &str) -> Self {
        self.row(tick, player_id, state, 0.0, 0.0, 0.0, 0.0)
    }

    /// Append a row without a player id (world/spectator rows).
    pub fn anonymous(mut self, tick: i64, state: &str) -> Self {
        self.rows.push(TickRecord {
            tick,
            player_id: None,
            player_name: None,
            state: LifecycleState::from(state),
            pitch: 0.0,
            view: 0.0,
            position: Position::default(),
        });
        self
    }

    /// Append a prebuilt record.
    pub fn record(mut self, record: TickRecord) -> Self {
        self.rows.push(record);
        self
    }

    pub fn build(self) -> TelemetryTable {
        TelemetryTable::new(self.rows)
    }

    /// Render rows as CSV with canonical headers.
    pub fn to_csv(&self) -> String {
        let header: Vec<&str> = Column::ALL.iter().map(|c| c.name()).collect();
        let mut out = header.join(",");
        out.push('\n');

        for r in &self.rows {
            let line = [
                r.tick.to_string(),
                r.player_id.as_ref().map(|p| p.to_string()).unwrap_or_default(),
                r.player_name.clone().unwrap_or_default(),
                r.state.to_string(),
                float_cell(r.pitch),
                float_cell(r.view),
                float_cell(r.position.x),
                float_cell(r.position.y),
            ];
            out.push_str(&line.join(","));
            out.push('\n');
        }
        out
    }
}

fn float_cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}
