//! Fixed record shape of a telemetry table.
//!
//! Column lookup by name happens once, when a header row is resolved into a
//! [`ColumnLayout`]. Rows are then parsed positionally, so a missing column is
//! reported before any aggregate runs.

use crate::error::{Error, Result};
use crate::record::{LifecycleState, PlayerId, Position, TickRecord};

/// Columns every telemetry table must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Tick,
    PlayerId,
    PlayerName,
    State,
    Pitch,
    View,
    X,
    Y,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Tick,
        Column::PlayerId,
        Column::PlayerName,
        Column::State,
        Column::Pitch,
        Column::View,
        Column::X,
        Column::Y,
    ];

    /// Canonical header name, used when writing tables
    pub fn name(self) -> &'static str {
        match self {
            Column::Tick => "tick",
            Column::PlayerId => "player_id",
            Column::PlayerName => "player_name",
            Column::State => "state",
            Column::Pitch => "pitch",
            Column::View => "view",
            Column::X => "x",
            Column::Y => "y",
        }
    }

    /// Other header spellings accepted on read (dataframe exports of recordings)
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Column::Tick => &["ticks"],
            Column::PlayerId => &["playerId", "players_info.steamId"],
            Column::PlayerName => &["playerName", "players_info.name"],
            Column::State => &["players_state", "playerState"],
            Column::Pitch => &["pitchAngle", "players_pitchAngle"],
            Column::View => &["viewAngle", "players_viewAngle"],
            Column::X => &["position.x", "players_position.x"],
            Column::Y => &["position.y", "players_position.y"],
        }
    }

    fn matches(self, header: &str) -> bool {
        let header = header.trim();
        header == self.name() || self.aliases().contains(&header)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Positions of the required columns within a header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    positions: [usize; 8],
}

impl ColumnLayout {
    /// Layout of a table written with canonical headers in [`Column::ALL`] order
    pub fn canonical() -> Self {
        Self {
            positions: [0, 1, 2, 3, 4, 5, 6, 7],
        }
    }

    /// Resolve required columns against a header row.
    ///
    /// Extra columns are ignored. The first missing column aborts resolution.
    pub fn resolve<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers: Vec<S> = headers.into_iter().collect();
        let mut positions = [0usize; 8];

        for column in Column::ALL {
            let position = headers
                .iter()
                .position(|h| column.matches(h.as_ref()))
                .ok_or(Error::MissingColumn {
                    column: column.name(),
                })?;
            positions[column.index()] = position;
        }

        Ok(Self { positions })
    }

    pub fn position(&self, column: Column) -> usize {
        self.positions[column.index()]
    }

    /// Parse one data row. `row` is the 1-based data row number used in errors.
    ///
    /// Empty or non-numeric angle and position cells become NaN. Only the tick
    /// is structural and fails the row.
    pub fn parse_row<'a, F>(&self, row: usize, field: F) -> Result<TickRecord>
    where
        F: Fn(usize) -> Option<&'a str>,
    {
        let get = |column: Column| field(self.position(column)).map(str::trim).unwrap_or("");

        let raw_tick = get(Column::Tick);
        let tick = parse_tick(raw_tick).ok_or_else(|| Error::InvalidField {
            row,
            column: Column::Tick.name(),
            value: raw_tick.to_string(),
        })?;

        Ok(TickRecord {
            tick,
            player_id: parse_player_id(get(Column::PlayerId)),
            player_name: non_empty(get(Column::PlayerName)).map(str::to_string),
            state: LifecycleState::new(get(Column::State)),
            pitch: parse_float(get(Column::Pitch)),
            view: parse_float(get(Column::View)),
            position: Position::new(parse_float(get(Column::X)), parse_float(get(Column::Y))),
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

// Dataframe exports write a missing id as NaN. Names are kept verbatim, so a
// player called "NaN" keeps that name.
fn parse_player_id(value: &str) -> Option<PlayerId> {
    match value {
        "nan" | "NaN" => None,
        v => non_empty(v).map(PlayerId::from),
    }
}

// Dataframe exports write integer columns as floats once a NaN appears.
fn parse_tick(value: &str) -> Option<i64> {
    if let Ok(tick) = value.parse::<i64>() {
        return Some(tick);
    }
    let float = value.parse::<f64>().ok()?;
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.is_finite() && float.fract() == 0.0 && in_range).then_some(float as i64)
}

fn parse_float(value: &str) -> f64 {
    value.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: [&str; 8] = ["tick", "player_id", "player_name", "state", "pitch", "view", "x", "y"];

    #[test]
    fn test_resolve_canonical_headers() {
        let layout = ColumnLayout::resolve(HEADERS).unwrap();
        assert_eq!(layout, ColumnLayout::canonical());
    }

    #[test]
    fn test_resolve_aliases_in_any_order() {
        let headers = [
            "players_state",
            "players_info.steamId",
            "ignored",
            "tick",
            "players_info.name",
            "viewAngle",
            "pitchAngle",
            "position.y",
            "position.x",
        ];
        let layout = ColumnLayout::resolve(headers).unwrap();
        assert_eq!(layout.position(Column::State), 0);
        assert_eq!(layout.position(Column::PlayerId), 1);
        assert_eq!(layout.position(Column::Tick), 3);
        assert_eq!(layout.position(Column::X), 8);
    }

    #[test]
    fn test_resolve_reports_missing_column() {
        let headers = ["tick", "player_id", "player_name", "pitch", "view", "x", "y"];
        let err = ColumnLayout::resolve(headers).unwrap_err();
        assert_eq!(err, Error::MissingColumn { column: "state" });
    }

    #[test]
    fn test_parse_row_degrades_numeric_fields() {
        let layout = ColumnLayout::canonical();
        let cells = ["7", "", "", "Alive", "abc", "", "1.5", "2"];
        let record = layout.parse_row(1, |i| cells.get(i).copied()).unwrap();

        assert_eq!(record.tick, 7);
        assert_eq!(record.player_id, None);
        assert_eq!(record.player_name, None);
        assert!(record.pitch.is_nan());
        assert!(record.view.is_nan());
        assert_eq!(record.position, Position::new(1.5, 2.0));
    }

    #[test]
    fn test_parse_row_accepts_float_ticks() {
        let layout = ColumnLayout::canonical();
        let cells = ["12.0", "P", "alice", "Death", "0", "0", "0", "0"];
        let record = layout.parse_row(1, |i| cells.get(i).copied()).unwrap();
        assert_eq!(record.tick, 12);
        assert!(record.state.is_death());
    }

    #[test]
    fn test_parse_row_nan_marker_only_nulls_the_id() {
        let layout = ColumnLayout::canonical();
        let cells = ["3", "NaN", "NaN", "Alive", "0", "0", "0", "0"];
        let record = layout.parse_row(1, |i| cells.get(i).copied()).unwrap();

        assert_eq!(record.player_id, None);
        assert_eq!(record.player_name.as_deref(), Some("NaN"));
    }

    #[test]
    fn test_parse_row_rejects_out_of_range_tick() {
        let layout = ColumnLayout::canonical();
        for raw in ["1e30", "-1e30", "9223372036854775808"] {
            let cells = [raw, "P", "alice", "Alive", "0", "0", "0", "0"];
            let err = layout.parse_row(2, |i| cells.get(i).copied()).unwrap_err();
            assert_eq!(
                err,
                Error::InvalidField {
                    row: 2,
                    column: "tick",
                    value: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn test_parse_row_rejects_bad_tick() {
        let layout = ColumnLayout::canonical();
        let cells = ["12.5", "P", "alice", "Alive", "0", "0", "0", "0"];
        let err = layout.parse_row(4, |i| cells.get(i).copied()).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidField {
                row: 4,
                column: "tick",
                value: "12.5".to_string()
            }
        );
    }
}
