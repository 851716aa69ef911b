use crate::kinematics::{self, AngleDelta, SeriesKind, SeriesPoint};
use crate::lifecycle::{self, DeathStats, StateCounts};
use crate::partition::PlayerPartition;
use crate::player_map::PlayerMap;
use crate::players;
use crate::summary::{MatchDuration, MatchSummary};
use demolyzer_types::{PlayerRecord, TelemetryTable};
use std::fmt;

/// Entry point for one recording's telemetry.
///
/// Holds an immutable table snapshot and the player partition built from it.
/// Every query is a pure function of that snapshot and may be called any number
/// of times in any order.
#[derive(Debug, Clone)]
pub struct Analyzer {
    table: TelemetryTable,
    partition: PlayerPartition,
    source: String,
    tick_rate: Option<f64>,
}

impl Analyzer {
    pub fn new(table: TelemetryTable) -> Self {
        let partition = PlayerPartition::build(&table);
        Self {
            table,
            partition,
            source: "<memory>".to_string(),
            tick_rate: None,
        }
    }

    /// Label used in the summary line (usually the recording path)
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Ticks per second of the recording, used to derive the match duration
    pub fn with_tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = Some(tick_rate);
        self
    }

    pub fn table(&self) -> &TelemetryTable {
        &self.table
    }

    pub fn partition(&self) -> &PlayerPartition {
        &self.partition
    }

    pub fn players(&self) -> PlayerMap<String> {
        players::player_names(&self.partition)
    }

    pub fn player_records(&self) -> Vec<PlayerRecord> {
        self.partition.records()
    }

    pub fn player_count(&self) -> usize {
        self.partition.len()
    }

    pub fn death_stats(&self) -> PlayerMap<DeathStats> {
        lifecycle::death_stats(&self.table, &self.partition)
    }

    pub fn state_breakdown(&self) -> PlayerMap<StateCounts> {
        lifecycle::state_breakdown(&self.table, &self.partition)
    }

    pub fn angle_deltas(&self) -> PlayerMap<Vec<AngleDelta>> {
        kinematics::angle_deltas(&self.table, &self.partition)
    }

    /// Deltas for a single player, `None` if the id never appears
    pub fn player_deltas(&self, player_id: &str) -> Option<Vec<AngleDelta>> {
        self.partition
            .rows_of(player_id)
            .map(|rows| kinematics::player_deltas(&self.table, rows))
    }

    pub fn aim_change_series(&self) -> PlayerMap<Vec<SeriesPoint>> {
        kinematics::series(&self.angle_deltas(), SeriesKind::AimChange)
    }

    pub fn view_delta_series(&self) -> PlayerMap<Vec<SeriesPoint>> {
        kinematics::series(&self.angle_deltas(), SeriesKind::ViewDelta)
    }

    pub fn duration(&self) -> MatchDuration {
        MatchDuration::from_ticks(self.table.max_tick(), self.tick_rate)
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            source: self.source.clone(),
            player_count: self.player_count(),
            duration: self.duration(),
        }
    }
}

impl fmt::Display for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
