// Engine module - per-player analysis of a telemetry table
// Sits between the table model (types) and table sources / CLI presentation

pub mod analyzer;
pub mod kinematics;
pub mod lifecycle;
pub mod partition;
pub mod player_map;
mod players;
pub mod summary;

pub use analyzer::Analyzer;
pub use kinematics::{
    AngleDelta, SeriesKind, SeriesPoint, movement_heading, normalize_angle, series,
};
pub use lifecycle::{DeathStats, StateCounts};
pub use partition::{PlayerPartition, PlayerRows};
pub use player_map::PlayerMap;
pub use summary::{MatchDuration, MatchSummary};

use demolyzer_types::TelemetryTable;

// Façade API - one-shot queries over a table
// Callers issuing several queries should build an `Analyzer` once instead

/// Player id to display name, in first-appearance order
pub fn players(table: &TelemetryTable) -> PlayerMap<String> {
    players::player_names(&PlayerPartition::build(table))
}

/// Number of distinct non-null player ids
pub fn player_count(table: &TelemetryTable) -> usize {
    PlayerPartition::build(table).len()
}

/// Alive/death tick counts per player
pub fn death_stats(table: &TelemetryTable) -> PlayerMap<DeathStats> {
    lifecycle::death_stats(table, &PlayerPartition::build(table))
}

/// Consecutive-tick angle and heading deltas per player
pub fn angle_deltas(table: &TelemetryTable) -> PlayerMap<Vec<AngleDelta>> {
    kinematics::angle_deltas(table, &PlayerPartition::build(table))
}
