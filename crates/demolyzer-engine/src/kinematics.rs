//! Per-player angular deltas and movement heading between consecutive ticks.
//!
//! All values are degrees. Non-finite inputs (missing angles or positions) yield
//! non-finite outputs for the affected tick only; the rest of the player's
//! sequence is still produced.

use crate::partition::PlayerPartition;
use crate::player_map::PlayerMap;
use demolyzer_types::{TelemetryTable, TickRecord};
use serde::Serialize;

/// Change between a player's row and the row before it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleDelta {
    /// Tick of the later row
    pub tick: i64,
    pub delta_pitch: f64,
    /// Raw view difference, not wrapped
    pub delta_view: f64,
    /// View difference wrapped into [-180, 180)
    pub delta_view_normalized: f64,
    /// Direction of planar displacement, (-180, 180]
    pub movement_heading: f64,
}

impl AngleDelta {
    pub fn between(previous: &TickRecord, current: &TickRecord) -> Self {
        let delta_view = current.view - previous.view;
        Self {
            tick: current.tick,
            delta_pitch: current.pitch - previous.pitch,
            delta_view,
            delta_view_normalized: normalize_angle(delta_view),
            movement_heading: movement_heading(
                current.position.x - previous.position.x,
                current.position.y - previous.position.y,
            ),
        }
    }

    /// Coarse aim-change magnitude: pitch delta plus the raw (unwrapped) view delta.
    pub fn aim_change(&self) -> f64 {
        self.delta_pitch + self.delta_view
    }
}

/// Wrap an angular difference into [-180, 180).
///
/// Uses a Euclidean remainder so negative inputs wrap the same way positive ones do.
pub fn normalize_angle(delta: f64) -> f64 {
    let wrapped = (delta + 180.0).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    let wrapped = if wrapped >= 360.0 { 0.0 } else { wrapped };
    wrapped - 180.0
}

/// Heading of the displacement (dx, dy) in degrees, in (-180, 180].
///
/// A stationary tick (dx = dy = 0) has heading 0.
pub fn movement_heading(dx: f64, dy: f64) -> f64 {
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    let heading = dy.atan2(dx).to_degrees();
    if heading <= -180.0 { heading + 360.0 } else { heading }
}

/// Deltas for one player's rows, given in table order.
///
/// The first row has no predecessor and produces no entry.
pub fn player_deltas(table: &TelemetryTable, rows: &[usize]) -> Vec<AngleDelta> {
    let records: Vec<&TickRecord> = rows.iter().filter_map(|&i| table.rows().get(i)).collect();
    records
        .windows(2)
        .map(|pair| AngleDelta::between(pair[0], pair[1]))
        .collect()
}

pub fn angle_deltas(table: &TelemetryTable, partition: &PlayerPartition) -> PlayerMap<Vec<AngleDelta>> {
    partition
        .players()
        .map_values(|player| player_deltas(table, player.rows()))
}

/// Narrow per-tick views derived from [`AngleDelta`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// `delta_pitch + delta_view`, unnormalized
    AimChange,
    /// `delta_view_normalized`
    ViewDelta,
}

impl SeriesKind {
    pub fn value(self, delta: &AngleDelta) -> f64 {
        match self {
            SeriesKind::AimChange => delta.aim_change(),
            SeriesKind::ViewDelta => delta.delta_view_normalized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub tick: i64,
    pub value: f64,
}

pub fn series(deltas: &PlayerMap<Vec<AngleDelta>>, kind: SeriesKind) -> PlayerMap<Vec<SeriesPoint>> {
    deltas.map_values(|sequence| {
        sequence
            .iter()
            .map(|delta| SeriesPoint {
                tick: delta.tick,
                value: kind.value(delta),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use demolyzer_testing::{TableBuilder, assert_close};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_normalize_wraps_across_zero() {
        assert_close(normalize_angle(-340.0), 20.0, EPS);
        assert_close(normalize_angle(340.0), -20.0, EPS);
        assert_close(normalize_angle(0.0), 0.0, EPS);
    }

    #[test]
    fn test_normalize_half_open_bounds() {
        assert_close(normalize_angle(180.0), -180.0, EPS);
        assert_close(normalize_angle(-180.0), -180.0, EPS);
        assert_close(normalize_angle(179.5), 179.5, EPS);
        assert_close(normalize_angle(-1e-20), 0.0, EPS);
    }

    #[test]
    fn test_normalize_range_and_periodicity() {
        let mut a = -1000.0;
        while a <= 1000.0 {
            let n = normalize_angle(a);
            assert!((-180.0..180.0).contains(&n), "normalize({}) = {}", a, n);
            for k in [-3.0, -1.0, 1.0, 4.0] {
                assert_close(normalize_angle(a + 360.0 * k), n, 1e-6);
            }
            a += 7.25;
        }
    }

    #[test]
    fn test_normalize_propagates_non_finite() {
        assert!(normalize_angle(f64::NAN).is_nan());
        assert!(normalize_angle(f64::INFINITY).is_nan());
    }

    #[test]
    fn test_movement_heading() {
        assert_close(movement_heading(3.0, 4.0), 53.130102354155978, 1e-9);
        assert_close(movement_heading(0.0, 1.0), 90.0, EPS);
        assert_close(movement_heading(-1.0, 0.0), 180.0, EPS);
        assert_close(movement_heading(-1.0, -0.0), 180.0, EPS);
        assert_close(movement_heading(0.0, -2.0), -90.0, EPS);
    }

    #[test]
    fn test_movement_heading_stationary() {
        assert_eq!(movement_heading(0.0, 0.0), 0.0);
        assert_eq!(movement_heading(-0.0, -0.0), 0.0);
    }

    #[test]
    fn test_player_deltas_reference_pair() {
        let table = TableBuilder::new()
            .row(1, "P", "Alive", 10.0, 350.0, 0.0, 0.0)
            .row(2, "P", "Alive", 15.0, 10.0, 3.0, 4.0)
            .build();

        let deltas = player_deltas(&table, &[0, 1]);

        assert_eq!(deltas.len(), 1);
        let d = deltas[0];
        assert_eq!(d.tick, 2);
        assert_close(d.delta_pitch, 5.0, EPS);
        assert_close(d.delta_view, -340.0, EPS);
        assert_close(d.delta_view_normalized, 20.0, EPS);
        assert_close(d.movement_heading, 53.13010235415598, 1e-9);
        assert_close(d.aim_change(), -335.0, EPS);
    }

    #[test]
    fn test_single_row_has_no_deltas() {
        let table = TableBuilder::new().row(1, "P", "Alive", 1.0, 2.0, 3.0, 4.0).build();
        assert!(player_deltas(&table, &[0]).is_empty());
    }

    #[test]
    fn test_missing_value_only_affects_its_ticks() {
        let table = TableBuilder::new()
            .row(1, "P", "Alive", 0.0, 0.0, 0.0, 0.0)
            .row(2, "P", "Alive", f64::NAN, 10.0, 1.0, 0.0)
            .row(3, "P", "Alive", 4.0, 20.0, 1.0, 1.0)
            .row(4, "P", "Alive", 6.0, 25.0, 1.0, 1.0)
            .build();

        let deltas = player_deltas(&table, &[0, 1, 2, 3]);

        assert_eq!(deltas.len(), 3);
        assert!(deltas[0].delta_pitch.is_nan());
        assert!(deltas[1].delta_pitch.is_nan());
        assert_close(deltas[0].delta_view_normalized, 10.0, EPS);
        assert_close(deltas[2].delta_pitch, 2.0, EPS);
        assert_close(deltas[2].movement_heading, 0.0, EPS);
    }

    #[test]
    fn test_missing_position_only_affects_adjacent_headings() {
        let table = TableBuilder::new()
            .row(1, "P", "Alive", 0.0, 0.0, 0.0, 0.0)
            .row(2, "P", "Alive", 0.0, 0.0, f64::NAN, 1.0)
            .row(3, "P", "Alive", 0.0, 0.0, 1.0, 1.0)
            .row(4, "P", "Alive", 0.0, 0.0, 1.0, 2.0)
            .build();

        let deltas = player_deltas(&table, &[0, 1, 2, 3]);

        assert_eq!(deltas.len(), 3);
        assert!(deltas[0].movement_heading.is_nan());
        assert!(deltas[1].movement_heading.is_nan());
        assert!(deltas[2].movement_heading.is_finite());
        assert_close(deltas[2].movement_heading, 90.0, EPS);
        assert_close(deltas[1].delta_view_normalized, 0.0, EPS);
    }

    #[test]
    fn test_series_views() {
        let table = TableBuilder::new()
            .row(1, "P", "Alive", 10.0, 350.0, 0.0, 0.0)
            .row(2, "P", "Alive", 15.0, 10.0, 3.0, 4.0)
            .build();
        let deltas = angle_deltas(&table, &PlayerPartition::build(&table));

        let aim = series(&deltas, SeriesKind::AimChange);
        let view = series(&deltas, SeriesKind::ViewDelta);

        assert_eq!(aim.get("P").unwrap()[0], SeriesPoint { tick: 2, value: -335.0 });
        assert_eq!(view.get("P").unwrap()[0], SeriesPoint { tick: 2, value: 20.0 });
    }
}
